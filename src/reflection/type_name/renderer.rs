use tracing::{debug, trace};

use crate::reflection::{AssemblyFormat, AssemblyIdentity, MissingFullTypeNameError, MissingTypeDescriptorError, NameFormat, TypeDescriptor, TypeKind, TypeName, TypeNameError};

/// Renders [`TypeName`]s following the assembly-qualified name grammar:
///
/// ```text
/// Name           ::= Base [ GenericArgs ] [ AssemblySuffix ]
/// GenericArgs    ::= '[' ArgGroup (',' ArgGroup)* ']'
/// ArgGroup       ::= '[' Name ']'
/// AssemblySuffix ::= ', ' AssemblyIdentity
/// ```
///
/// `Base` is the simple name in [`NameFormat::Short`] and the namespace-qualified name in
/// [`NameFormat::Full`]. Every generic argument is wrapped in its own brackets, so commas inside
/// a nested argument never collide with the outer separator.
///
/// When qualification is requested, each node gets the identity of *its own* assembly. Only the
/// format is passed down to generic arguments, never the parent's identity.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeNameRenderer {
    format: NameFormat,
    assembly: AssemblyFormat,
}

impl TypeNameRenderer {
    pub const fn new(format: NameFormat, assembly: AssemblyFormat) -> TypeNameRenderer {
        TypeNameRenderer {
            format,
            assembly,
        }
    }

    pub const fn short() -> TypeNameRenderer {
        TypeNameRenderer::new(NameFormat::Short, AssemblyFormat::None)
    }

    pub const fn full() -> TypeNameRenderer {
        TypeNameRenderer::new(NameFormat::Full, AssemblyFormat::None)
    }

    pub const fn with_assembly(self, assembly: AssemblyFormat) -> TypeNameRenderer {
        TypeNameRenderer {
            assembly,
            ..self
        }
    }

    pub const fn format(&self) -> NameFormat {
        self.format
    }

    pub const fn assembly_format(&self) -> AssemblyFormat {
        self.assembly
    }

    /// Renders the name of `ty`, qualifying it (and every generic argument) with its own assembly
    /// if an [`AssemblyFormat`] other than `None` was configured.
    ///
    /// # Errors
    /// - [`MissingTypeDescriptor`](TypeNameError::MissingTypeDescriptor) if a generic argument
    ///   could not be resolved by the provider.
    /// - [`MissingAssemblyHandle`](TypeNameError::MissingAssemblyHandle) or
    ///   [`InvalidAssemblyName`](TypeNameError::InvalidAssemblyName) if qualification is on and
    ///   some node's assembly can't be named.
    /// - [`MissingFullTypeName`](TypeNameError::MissingFullTypeName) if full mode reaches a plain
    ///   type without a full name.
    pub fn render<T: TypeDescriptor + ?Sized>(&self, ty: &T) -> Result<TypeName, TypeNameError> {
        trace!(
            type_name = ty.name(),
            format = ?self.format,
            assembly = ?self.assembly,
            "rendering type name"
        );

        let identity = match self.assembly.name_format() {
            Some(format) => Some(identity_of(ty, format)?),
            None => None,
        };

        self.render_with(ty, identity.as_ref())
    }

    /// Renders the name of `ty` qualified with `assembly` at the root. Generic arguments are still
    /// qualified with their own assemblies, in the format of `assembly`. The configured
    /// [`AssemblyFormat`] is ignored.
    ///
    /// # Errors
    /// As [`render`](TypeNameRenderer::render).
    pub fn render_qualified<T: TypeDescriptor + ?Sized>(
        &self,
        ty: &T,
        assembly: &AssemblyIdentity,
    ) -> Result<TypeName, TypeNameError> {
        trace!(
            type_name = ty.name(),
            format = ?self.format,
            assembly = assembly.value(),
            "rendering qualified type name"
        );

        self.render_with(ty, Some(assembly))
    }

    fn render_with<T: TypeDescriptor + ?Sized>(
        &self,
        ty: &T,
        identity: Option<&AssemblyIdentity>,
    ) -> Result<TypeName, TypeNameError> {
        let mut out = String::new();
        self.write_type(ty, identity, &mut out)?;
        Ok(TypeName::new(out)?)
    }

    fn write_type<T: TypeDescriptor + ?Sized>(
        &self,
        ty: &T,
        identity: Option<&AssemblyIdentity>,
        out: &mut String,
    ) -> Result<(), TypeNameError> {
        match (ty.kind(), self.format) {
            (TypeKind::Generic, _) => {
                self.write_generic(ty, identity.map(AssemblyIdentity::format), out)?;
            },
            // Generic parameters always take the short rule, even in full mode.
            (TypeKind::GenericParameter, _) | (TypeKind::Plain, NameFormat::Short) => {
                out.push_str(ty.name());
            },
            (TypeKind::Plain, NameFormat::Full) => match ty.full_name() {
                Some(full_name) if !full_name.is_empty() => out.push_str(full_name),
                _ => {
                    debug!(type_name = ty.name(), "type has no full name");
                    return Err(MissingFullTypeNameError {
                        type_name: ty.name().to_owned(),
                    }.into());
                },
            },
        }

        if let Some(identity) = identity {
            out.push_str(", ");
            out.push_str(identity.value());
        }

        Ok(())
    }

    fn write_generic<T: TypeDescriptor + ?Sized>(
        &self,
        ty: &T,
        argument_format: Option<NameFormat>,
        out: &mut String,
    ) -> Result<(), TypeNameError> {
        match self.format {
            NameFormat::Short => out.push_str(ty.name()),
            NameFormat::Full => out.push_str(&ty.name_with_namespace()),
        }

        out.push('[');

        for (position, argument) in ty.generic_arguments().enumerate() {
            let argument = argument.ok_or_else(|| {
                debug!(type_name = ty.name(), position, "generic argument is unresolved");
                MissingTypeDescriptorError
            })?;

            let identity = argument_format
                .map(|format| identity_of(argument, format))
                .transpose()?;

            if position > 0 {
                out.push(',');
            }

            out.push('[');
            self.write_type(argument, identity.as_ref(), out)?;
            out.push(']');
        }

        out.push(']');
        Ok(())
    }
}

fn identity_of<T: TypeDescriptor + ?Sized>(
    ty: &T,
    format: NameFormat,
) -> Result<AssemblyIdentity, TypeNameError> {
    AssemblyIdentity::new(ty.assembly(), format).map_err(|err| {
        debug!(type_name = ty.name(), ?format, %err, "failed to resolve assembly identity");
        err.into()
    })
}
