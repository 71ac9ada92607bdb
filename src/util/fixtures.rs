use std::sync::Arc;

use crate::reflection::{AssemblyInfo, PublicKeyToken, TypeInfo, Version};

pub const CORE_LIB_FULL: &str =
    "System.Private.CoreLib, Version=8.0.0.0, Culture=neutral, PublicKeyToken=7cec85d7bea7798e";

pub const COLLECTIONS_FULL: &str =
    "System.Collections, Version=8.0.0.0, Culture=neutral, PublicKeyToken=b03f5f7f11d50a3a";

pub fn core_lib() -> Arc<AssemblyInfo> {
    Arc::new(
        AssemblyInfo::new("System.Private.CoreLib")
            .with_version(Version::new(8, 0, 0, 0))
            .with_culture("")
            .with_public_key_token(PublicKeyToken::Token([0x7c, 0xec, 0x85, 0xd7, 0xbe, 0xa7, 0x79, 0x8e])),
    )
}

pub fn collections() -> Arc<AssemblyInfo> {
    Arc::new(
        AssemblyInfo::new("System.Collections")
            .with_version(Version::new(8, 0, 0, 0))
            .with_culture("")
            .with_public_key_token(PublicKeyToken::Token([0xb0, 0x3f, 0x5f, 0x7f, 0x11, 0xd5, 0x0a, 0x3a])),
    )
}

pub fn int32() -> TypeInfo {
    TypeInfo::plain("System", "Int32").in_assembly(core_lib())
}

pub fn string() -> TypeInfo {
    TypeInfo::plain("System", "String").in_assembly(core_lib())
}

pub fn parameter(name: &str) -> TypeInfo {
    TypeInfo::parameter(name).in_assembly(core_lib())
}

pub fn list(item: TypeInfo) -> TypeInfo {
    TypeInfo::generic("System.Collections.Generic", "List`1", [item]).in_assembly(core_lib())
}

pub fn dictionary(key: TypeInfo, value: TypeInfo) -> TypeInfo {
    TypeInfo::generic("System.Collections.Generic", "Dictionary`2", [key, value])
        .in_assembly(core_lib())
}

pub fn hash_set(item: TypeInfo) -> TypeInfo {
    TypeInfo::generic("System.Collections.Generic", "HashSet`1", [item]).in_assembly(collections())
}
