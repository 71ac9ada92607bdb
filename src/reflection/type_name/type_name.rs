use std::borrow::Borrow;
use std::fmt::{self, Display, Formatter};
use std::ops::Deref;

use crate::reflection::{AssemblyFormat, EmptyRenderedNameError, TypeDescriptor, TypeNameError, TypeNameRenderer};

/// A rendered, canonical name of a type.
///
/// Only [`TypeNameRenderer`] creates these, see [`TypeName::short`] and [`TypeName::full`] for the
/// usual entry points.
///
/// # Invariants
/// - The value is never empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeName {
    value: String,
}

impl TypeName {
    pub(crate) fn new(value: String) -> Result<TypeName, EmptyRenderedNameError> {
        if value.is_empty() {
            return Err(EmptyRenderedNameError);
        }

        Ok(TypeName {
            value,
        })
    }

    /// Renders the short name of `ty`, e.g. `` List`1[[Int32]] ``.
    ///
    /// # Errors
    /// See [`TypeNameRenderer::render`].
    pub fn short<T: TypeDescriptor + ?Sized>(
        ty: &T,
        assembly: AssemblyFormat,
    ) -> Result<TypeName, TypeNameError> {
        TypeNameRenderer::short().with_assembly(assembly).render(ty)
    }

    /// Renders the full name of `ty`, e.g. `` System.Collections.Generic.List`1[[System.Int32]] ``.
    ///
    /// # Errors
    /// See [`TypeNameRenderer::render`].
    pub fn full<T: TypeDescriptor + ?Sized>(
        ty: &T,
        assembly: AssemblyFormat,
    ) -> Result<TypeName, TypeNameError> {
        TypeNameRenderer::full().with_assembly(assembly).render(ty)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl Deref for TypeName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl AsRef<str> for TypeName {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl Borrow<str> for TypeName {
    fn borrow(&self) -> &str {
        &self.value
    }
}

impl Display for TypeName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<TypeName> for String {
    fn from(value: TypeName) -> Self {
        value.value
    }
}
