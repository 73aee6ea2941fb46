pub mod colormap;
pub mod font;
pub mod frame;
pub mod plot;
pub mod video;
