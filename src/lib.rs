#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod connect;
pub mod constants;
pub mod decode;
mod driver;
mod error;
pub mod registers;
mod transport;
mod variant;

pub use config::{Channel, Config, DifferentialPair, Gain};
pub use connect::Connect;
pub use driver::ADS1x15;
pub use error::Error;
pub use variant::Variant;
