mod renderer;
mod type_name;

pub use renderer::*;
pub use type_name::*;
