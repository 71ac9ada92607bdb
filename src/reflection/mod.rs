//! Canonical, assembly-qualified type names.
//!
//! A host describes its types through [`TypeDescriptor`] and [`AssemblyHandle`], and
//! [`TypeNameRenderer`] turns them into [`TypeName`]s such as
//!
//! ```text
//! System.Collections.Generic.List`1[[System.Int32, CoreLib]], CoreLib
//! ```
//!
//! With the `metadata` feature, [`TypeInfo`] and [`AssemblyInfo`] are a ready-made, owned provider
//! for hosts that don't have a type system of their own to wrap.

mod assembly;
mod descriptor;
mod error;
mod format;
#[cfg(feature = "metadata")]
mod metadata;
mod type_name;

pub use assembly::*;
pub use descriptor::*;
pub use error::*;
pub use format::*;
#[cfg(feature = "metadata")]
pub use metadata::*;
pub use type_name::*;
