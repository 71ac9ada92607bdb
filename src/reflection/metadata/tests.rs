#![cfg(test)]

use std::borrow::Cow;

use super::*;
use crate::reflection::{AssemblyHandle, TypeDescriptor, TypeKind};
use crate::util::fixtures::{self, CORE_LIB_FULL};

#[test]
fn test_display_name() {
    assert_eq!(fixtures::core_lib().display_name(), CORE_LIB_FULL);

    assert_eq!(
        AssemblyInfo::new("Plugin").display_name(),
        "Plugin",
        "Absent parts should be left out entirely."
    );
    assert_eq!(
        AssemblyInfo::new("Plugin")
            .with_version(Version::new(1, 2, 3, 4))
            .with_culture("en-US")
            .with_public_key_token(PublicKeyToken::Null)
            .display_name(),
        "Plugin, Version=1.2.3.4, Culture=en-US, PublicKeyToken=null"
    );
}

#[test]
fn test_public_key_token() {
    let token = PublicKeyToken::Token([0x00, 0x01, 0x0a, 0xff, 0x10, 0x20, 0xab, 0xcd]);

    assert_eq!(token.to_string(), "00010aff1020abcd", "Tokens should be lowercase, zero-padded hex.");
    assert!(PublicKeyToken::Null.is_null());
}

#[test]
fn test_assembly_handle() {
    let plugin = AssemblyInfo::new("Plugin").with_version(Version::new(2, 0, 0, 0));

    assert_eq!(AssemblyHandle::name(&plugin), Some(Cow::Borrowed("Plugin")));
    assert_eq!(plugin.full_name().as_deref(), Some("Plugin, Version=2.0.0.0"));
    assert_eq!(
        AssemblyInfo::new("").full_name(),
        None,
        "An unnamed assembly has no display name."
    );
}

#[test]
fn test_type_info_shapes() {
    let int = fixtures::int32();
    assert_eq!(int.kind(), TypeKind::Plain);
    assert_eq!(int.full_name(), Some("System.Int32"));
    assert_eq!(int.generic_arguments().count(), 0);
    assert!(int.assembly().is_some());

    let param = TypeInfo::parameter("T");
    assert!(param.is_generic_parameter());
    assert!(!param.is_generic());
    assert_eq!(param.full_name(), None, "Type variables have no full name.");
    assert!(param.assembly().is_none());

    let list = fixtures::list(fixtures::int32()).with_unresolved_argument();
    assert!(list.is_generic());
    assert_eq!(
        list.generic_arguments().map(|arg| arg.map(TypeDescriptor::name)).collect::<Vec<_>>(),
        [Some("Int32"), None]
    );
}

#[test]
fn test_name_with_namespace() {
    assert_eq!(fixtures::int32().name_with_namespace(), "System.Int32");
    assert_eq!(TypeInfo::plain("", "Program").name_with_namespace(), "Program");
    assert_eq!(
        TypeInfo::plain("   ", "Program").name_with_namespace(),
        "Program",
        "A blank namespace should be treated as absent."
    );
    assert_eq!(
        TypeInfo::plain("   ", "Program").full_name(),
        Some("Program")
    );
}
