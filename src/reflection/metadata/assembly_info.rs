use std::borrow::Cow;
use std::fmt::{self, Formatter, Write};

use derive_more::{Display, IsVariant};

use crate::reflection::AssemblyHandle;

/// A four-part assembly version, displayed as `major.minor.build.revision`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("{major}.{minor}.{build}.{revision}")]
pub struct Version {
    pub major: u16,
    pub minor: u16,
    pub build: u16,
    pub revision: u16,
}

impl Version {
    pub const fn new(major: u16, minor: u16, build: u16, revision: u16) -> Version {
        Version {
            major,
            minor,
            build,
            revision,
        }
    }
}

/// The public key token of a strong-named assembly, or an explicit `null` for assemblies
/// without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum PublicKeyToken {
    Null,
    Token([u8; 8]),
}

impl fmt::Display for PublicKeyToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PublicKeyToken::Null => write!(f, "null"),
            PublicKeyToken::Token(bytes) => bytes.iter().try_for_each(|b| write!(f, "{:02x}", b)),
        }
    }
}

/// Owned assembly metadata.
///
/// The full name is assembled like a runtime display name, only including the parts that are
/// present:
///
/// ```text
/// System.Private.CoreLib, Version=8.0.0.0, Culture=neutral, PublicKeyToken=7cec85d7bea7798e
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssemblyInfo {
    name: String,
    version: Option<Version>,
    culture: Option<String>,
    public_key_token: Option<PublicKeyToken>,
}

impl AssemblyInfo {
    pub fn new(name: impl Into<String>) -> AssemblyInfo {
        AssemblyInfo {
            name: name.into(),
            version: None,
            culture: None,
            public_key_token: None,
        }
    }

    pub const fn with_version(mut self, version: Version) -> AssemblyInfo {
        self.version = Some(version);
        self
    }

    /// Sets the culture. An empty culture is the invariant one and displays as `neutral`.
    pub fn with_culture(mut self, culture: impl Into<String>) -> AssemblyInfo {
        self.culture = Some(culture.into());
        self
    }

    pub const fn with_public_key_token(mut self, token: PublicKeyToken) -> AssemblyInfo {
        self.public_key_token = Some(token);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn version(&self) -> Option<Version> {
        self.version
    }

    pub fn culture(&self) -> Option<&str> {
        self.culture.as_deref()
    }

    pub const fn public_key_token(&self) -> Option<PublicKeyToken> {
        self.public_key_token
    }

    pub fn display_name(&self) -> String {
        let mut out = self.name.clone();

        // Writing into a String can't fail.
        if let Some(version) = self.version {
            let _ = write!(out, ", Version={}", version);
        }

        if let Some(culture) = &self.culture {
            let culture = if culture.is_empty() { "neutral" } else { culture };
            let _ = write!(out, ", Culture={}", culture);
        }

        if let Some(token) = self.public_key_token {
            let _ = write!(out, ", PublicKeyToken={}", token);
        }

        out
    }
}

impl AssemblyHandle for AssemblyInfo {
    fn name(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(&self.name))
    }

    fn full_name(&self) -> Option<Cow<'_, str>> {
        if self.name.is_empty() {
            return None;
        }

        Some(Cow::Owned(self.display_name()))
    }
}
