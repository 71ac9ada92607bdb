mod assembly_identity;

pub use assembly_identity::*;
