pub mod answer;
pub mod commands;
pub mod payload;
pub mod units;

pub use answer::*;
pub use commands::*;
pub use payload::*;
pub use units::*;
