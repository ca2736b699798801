mod vector2;
mod bounds;

pub use self::vector2::*;
pub use self::bounds::*;
