//! This crate renders canonical, assembly-qualified type names, in the grammar managed runtimes use
//! to identify types across process and version boundaries.
//!
//! # Purpose
//! Serialization headers, plugin manifests and diagnostic logs produced by those runtimes all refer
//! to types by strings like ``System.Collections.Generic.List`1[[System.Int32, CoreLib]], CoreLib``.
//! I needed to produce these names from tooling that reads metadata without a runtime behind it,
//! so the rendering half lives here on its own.
//!
//! # Method
//! The reflection side is abstracted behind two small traits,
//! [`TypeDescriptor`](reflection::TypeDescriptor) and [`AssemblyHandle`](reflection::AssemblyHandle).
//! Anything that can answer "what is this type called, what shape is it and where does it come
//! from" can be rendered. [`TypeNameRenderer`](reflection::TypeNameRenderer) walks generic
//! arguments recursively into a single string buffer per call, and resolves a fresh assembly
//! identity for every node when qualification is asked for.
//!
//! Rendering is one-way. Nothing here parses names back into descriptors.
//!
//! # Error Handling
//! Every failure comes from an incomplete descriptor (a missing full name, an unresolved argument,
//! an unnamed assembly), so rendering returns a [`Result`] and never panics. The errors are
//! strongly typed: small structs that implement [`Error`](std::error::Error), gathered into
//! [`TypeNameError`](reflection::TypeNameError) for static dispatch.
//!
//! # Dependencies
//! `derive_more` removes the repetitive `Display`/`Error`/`From` implementations, and `tracing`
//! reports failures at `debug` level for hosts that install a subscriber.
//!
//! The `metadata` feature (on by default) adds [`TypeInfo`](reflection::TypeInfo) and
//! [`AssemblyInfo`](reflection::AssemblyInfo), an owned provider for hosts without a type system
//! of their own.
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod reflection;

#[cfg(test)]
pub(crate) mod util;
