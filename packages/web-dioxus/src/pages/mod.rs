//! Page components

mod dashboard;
mod generator;
mod library;

pub use dashboard::*;
pub use generator::*;
pub use library::*;
