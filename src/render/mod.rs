pub mod background;
pub mod captions;
pub mod effects;
pub mod elements;
pub mod frame;
pub mod glyphs;
pub mod painter;
pub mod renderer;
