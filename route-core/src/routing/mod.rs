pub mod cost;
pub mod select;
pub mod variants;

pub use cost::*;
pub use select::*;
pub use variants::*;
