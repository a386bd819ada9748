#[macro_use]
pub mod macros;

pub mod percent;
pub mod price;
mod zero;

pub use self::zero::Zero;
