use derive_more::IsVariant;

/// One of the two naming grammars, used both for rendering types and for identifying assemblies.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum NameFormat {
    /// Simple names only: `` List`1 ``, `System.Private.CoreLib`.
    #[default]
    Short,
    /// Namespace-qualified type names and version-qualified assembly names.
    Full,
}

/// Whether rendered names get an assembly suffix, and in which format.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum AssemblyFormat {
    #[default]
    None,
    Short,
    Full,
}

impl AssemblyFormat {
    pub const fn name_format(self) -> Option<NameFormat> {
        match self {
            AssemblyFormat::None => None,
            AssemblyFormat::Short => Some(NameFormat::Short),
            AssemblyFormat::Full => Some(NameFormat::Full),
        }
    }
}

impl From<NameFormat> for AssemblyFormat {
    fn from(value: NameFormat) -> Self {
        match value {
            NameFormat::Short => AssemblyFormat::Short,
            NameFormat::Full => AssemblyFormat::Full,
        }
    }
}

impl From<Option<NameFormat>> for AssemblyFormat {
    fn from(value: Option<NameFormat>) -> Self {
        value.map_or(AssemblyFormat::None, AssemblyFormat::from)
    }
}
