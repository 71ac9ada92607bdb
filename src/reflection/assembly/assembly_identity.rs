use std::fmt::{self, Display, Formatter};

use tracing::debug;

use crate::reflection::{AssemblyHandle, AssemblyNameError, InvalidAssemblyNameError, MissingAssemblyHandleError, NameFormat};

/// A validated textual identity of an assembly, as appended to assembly-qualified type names.
///
/// # Invariants
/// - `value` is never empty.
/// - `value` follows the grammar named by `format`: a simple name for [`NameFormat::Short`], a
///   display name (`Name, Version=.., Culture=.., PublicKeyToken=..`) for [`NameFormat::Full`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssemblyIdentity {
    value: String,
    format: NameFormat,
}

impl AssemblyIdentity {
    /// Resolves the identity of `assembly` in the requested format.
    ///
    /// # Errors
    /// - [`MissingAssemblyHandle`](AssemblyNameError::MissingAssemblyHandle) if `assembly` is
    ///   `None`.
    /// - [`InvalidAssemblyName`](AssemblyNameError::InvalidAssemblyName) if the resolved name is
    ///   absent or empty.
    pub fn new<A: AssemblyHandle + ?Sized>(
        assembly: Option<&A>,
        format: NameFormat,
    ) -> Result<AssemblyIdentity, AssemblyNameError> {
        let assembly = assembly.ok_or(MissingAssemblyHandleError)?;

        Ok(match format {
            NameFormat::Short => AssemblyIdentity::short(assembly)?,
            NameFormat::Full => AssemblyIdentity::full(assembly)?,
        })
    }

    /// Creates an identity from the simple name of `assembly`.
    ///
    /// # Errors
    /// Fails if the assembly reports no name or an empty one.
    pub fn short<A: AssemblyHandle + ?Sized>(
        assembly: &A,
    ) -> Result<AssemblyIdentity, InvalidAssemblyNameError> {
        AssemblyIdentity::validated(assembly.name().map(Into::into), NameFormat::Short)
    }

    /// Creates an identity from the full display name of `assembly`.
    ///
    /// # Errors
    /// Fails if the assembly reports no full name or an empty one.
    pub fn full<A: AssemblyHandle + ?Sized>(
        assembly: &A,
    ) -> Result<AssemblyIdentity, InvalidAssemblyNameError> {
        AssemblyIdentity::validated(assembly.full_name().map(Into::into), NameFormat::Full)
    }

    fn validated(
        value: Option<String>,
        format: NameFormat,
    ) -> Result<AssemblyIdentity, InvalidAssemblyNameError> {
        match value {
            Some(value) if !value.is_empty() => Ok(AssemblyIdentity {
                value,
                format,
            }),
            _ => {
                debug!(?format, "assembly reported an empty name");
                Err(InvalidAssemblyNameError)
            },
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub const fn format(&self) -> NameFormat {
        self.format
    }

    pub fn is_short_format(&self) -> bool {
        self.format.is_short()
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl AsRef<str> for AssemblyIdentity {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl Display for AssemblyIdentity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
