pub mod milestone;
pub mod ticket;

pub use milestone::*;
pub use ticket::*;
