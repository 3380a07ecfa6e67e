//! Domain models for the Crop Advisor client

mod crop;
mod soil;
mod weather;

pub use crop::*;
pub use soil::*;
pub use weather::*;
