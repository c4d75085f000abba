pub mod click;
pub mod pointer;

pub use click::wire_celebrate_click;
pub use pointer::wire_parallax_handlers;
