use std::sync::Arc;

use crate::reflection::{AssemblyInfo, TypeDescriptor, TypeKind};

/// An owned, in-memory type descriptor.
///
/// Build one per type a host knows about and share assemblies between them via [`Arc`]. Generic
/// arguments are owned by their parent, so a constructed type is a small tree:
///
/// ```
/// # use std::sync::Arc;
/// # use qualified_names::reflection::{AssemblyInfo, TypeInfo, TypeName, AssemblyFormat};
/// let core = Arc::new(AssemblyInfo::new("CoreLib"));
/// let int = TypeInfo::plain("System", "Int32").in_assembly(core.clone());
/// let list = TypeInfo::generic("System.Collections.Generic", "List`1", [int]).in_assembly(core);
///
/// assert_eq!(
///     TypeName::short(&list, AssemblyFormat::Short)?.value(),
///     "List`1[[Int32, CoreLib]], CoreLib",
/// );
/// # Ok::<(), qualified_names::reflection::TypeNameError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    name: String,
    namespace: Option<String>,
    full_name: Option<String>,
    kind: TypeKind,
    arguments: Vec<Option<TypeInfo>>,
    assembly: Option<Arc<AssemblyInfo>>,
}

impl TypeInfo {
    /// A non-generic type. Its full name is the namespace-qualified name.
    pub fn plain(namespace: impl Into<String>, name: impl Into<String>) -> TypeInfo {
        let mut ty = TypeInfo::new(namespace.into(), name.into(), TypeKind::Plain);
        ty.full_name = Some(ty.name_with_namespace().into_owned());
        ty
    }

    /// A generic type constructed from `arguments`. The name is expected to carry the arity
    /// suffix (`` List`1 ``). A definition is described by passing its parameters as arguments.
    pub fn generic(
        namespace: impl Into<String>,
        name: impl Into<String>,
        arguments: impl IntoIterator<Item = TypeInfo>,
    ) -> TypeInfo {
        let mut ty = TypeInfo::new(namespace.into(), name.into(), TypeKind::Generic);
        ty.arguments = arguments.into_iter().map(Some).collect();
        ty
    }

    /// An unresolved type variable, such as `T`.
    pub fn parameter(name: impl Into<String>) -> TypeInfo {
        TypeInfo {
            name: name.into(),
            namespace: None,
            full_name: None,
            kind: TypeKind::GenericParameter,
            arguments: Vec::new(),
            assembly: None,
        }
    }

    fn new(namespace: String, name: String, kind: TypeKind) -> TypeInfo {
        TypeInfo {
            name,
            namespace: Some(namespace).filter(|ns| !ns.is_empty()),
            full_name: None,
            kind,
            arguments: Vec::new(),
            assembly: None,
        }
    }

    pub fn in_assembly(mut self, assembly: Arc<AssemblyInfo>) -> TypeInfo {
        self.assembly = Some(assembly);
        self
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> TypeInfo {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn without_full_name(mut self) -> TypeInfo {
        self.full_name = None;
        self
    }

    /// Appends an argument slot the provider couldn't resolve.
    pub fn with_unresolved_argument(mut self) -> TypeInfo {
        self.arguments.push(None);
        self
    }
}

impl TypeDescriptor for TypeInfo {
    type Assembly = AssemblyInfo;

    fn name(&self) -> &str {
        &self.name
    }

    fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    fn kind(&self) -> TypeKind {
        self.kind
    }

    fn generic_arguments(&self) -> impl Iterator<Item = Option<&Self>> {
        self.arguments.iter().map(Option::as_ref)
    }

    fn assembly(&self) -> Option<&Self::Assembly> {
        self.assembly.as_deref()
    }
}
