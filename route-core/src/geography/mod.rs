pub mod distance;
pub mod port;

pub use distance::*;
pub use port::*;
