pub mod browse;
pub mod reset;

pub use browse::*;
pub use reset::*;
