pub mod interval;
pub mod sample;
pub mod summary;
pub mod window;
pub mod zone;
