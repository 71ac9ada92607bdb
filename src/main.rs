use std::sync::Arc;

use qualified_names::reflection::{AssemblyFormat, AssemblyInfo, NameFormat, PublicKeyToken, TypeInfo, TypeNameRenderer, Version};

fn main() {
    let core = Arc::new(
        AssemblyInfo::new("System.Private.CoreLib")
            .with_version(Version::new(8, 0, 0, 0))
            .with_culture("")
            .with_public_key_token(PublicKeyToken::Token([0x7c, 0xec, 0x85, 0xd7, 0xbe, 0xa7, 0x79, 0x8e])),
    );

    let int = TypeInfo::plain("System", "Int32").in_assembly(core.clone());
    let string = TypeInfo::plain("System", "String").in_assembly(core.clone());
    let list = TypeInfo::generic("System.Collections.Generic", "List`1", [int])
        .in_assembly(core.clone());
    let map = TypeInfo::generic("System.Collections.Generic", "Dictionary`2", [string, list])
        .in_assembly(core.clone());
    let open = TypeInfo::generic(
        "System.Collections.Generic",
        "List`1",
        [TypeInfo::parameter("T").in_assembly(core.clone())],
    ).in_assembly(core);

    for format in [NameFormat::Short, NameFormat::Full] {
        for assembly in [AssemblyFormat::None, AssemblyFormat::Short, AssemblyFormat::Full] {
            let renderer = TypeNameRenderer::new(format, assembly);
            println!("\n[{:?} / {:?}]\n", format, assembly);

            for ty in [&map, &open] {
                match renderer.render(ty) {
                    Ok(name) => println!("{}", name),
                    Err(err) => println!("error: {}", err),
                }
            }
        }
    }
}
