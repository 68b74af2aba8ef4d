pub mod color;
pub mod constants;
pub mod drag;
pub mod effect;
pub mod item;
pub mod surface;
pub mod tone;

pub use color::*;
pub use constants::*;
pub use drag::*;
pub use effect::*;
pub use item::*;
pub use surface::*;
pub use tone::*;
