pub mod decode;
pub mod encode;
pub mod force;

pub use decode::*;
pub use encode::*;
pub use force::*;
