pub mod errors;
pub mod escape;
pub mod explorer;
pub mod formatter;
pub mod grid;
pub mod input;
pub mod model;
pub mod palette;
pub mod render;
#[cfg(feature = "window")]
pub mod window;
