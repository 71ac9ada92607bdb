//! The read-only view of a reflection facility consumed by the renderer.
//!
//! Nothing here discovers or loads types. A host (a metadata reader, a plugin manifest, a test)
//! implements these traits over whatever representation it already has and hands references to
//! [`TypeNameRenderer`](super::TypeNameRenderer).

use std::borrow::Cow;

use derive_more::IsVariant;

/// The shape of a type, which decides the rendering rule applied to it.
///
/// A constructed generic type is never itself a parameter, so a single variant is enough to
/// classify any type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum TypeKind {
    /// A generic type definition (`` List`1 ``) or a construction of one (`` List`1[[Int32]] ``).
    Generic,
    /// An unresolved type variable inside a generic definition, such as `T`.
    GenericParameter,
    /// Anything else.
    Plain,
}

/// Metadata of the assembly that defines a type.
pub trait AssemblyHandle {
    /// The simple name of the assembly, e.g. `System.Private.CoreLib`.
    fn name(&self) -> Option<Cow<'_, str>>;

    /// The display name of the assembly, including version, culture and public key token.
    fn full_name(&self) -> Option<Cow<'_, str>>;
}

/// Metadata of a single type.
pub trait TypeDescriptor {
    type Assembly: AssemblyHandle + ?Sized;

    /// The bare name of the type, without namespace. Generic types carry their arity, as in
    /// `` Dictionary`2 ``.
    fn name(&self) -> &str;

    fn namespace(&self) -> Option<&str>;

    /// The namespace-qualified name used for full rendering of non-generic types. Providers
    /// return `None` when the type has no such name.
    fn full_name(&self) -> Option<&str>;

    fn kind(&self) -> TypeKind;

    /// Generic arguments in positional order. Empty unless the type is generic. A `None` slot is
    /// an argument the provider failed to resolve.
    fn generic_arguments(&self) -> impl Iterator<Item = Option<&Self>>;

    /// The defining assembly, if the provider can resolve it.
    fn assembly(&self) -> Option<&Self::Assembly>;

    /// The name prefixed with the namespace. Unlike [`full_name`](TypeDescriptor::full_name) this
    /// never includes generic arguments, and it is always available.
    fn name_with_namespace(&self) -> Cow<'_, str> {
        match self.namespace() {
            Some(namespace) if !namespace.trim().is_empty() => {
                Cow::Owned(format!("{}.{}", namespace, self.name()))
            },
            _ => Cow::Borrowed(self.name()),
        }
    }

    fn is_generic(&self) -> bool {
        self.kind().is_generic()
    }

    fn is_generic_parameter(&self) -> bool {
        self.kind().is_generic_parameter()
    }
}
