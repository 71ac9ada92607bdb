mod assembly_info;
mod tests;
mod type_info;

pub use assembly_info::*;
pub use type_info::*;
