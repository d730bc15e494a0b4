mod config;
pub use config::*;
mod error;
pub use error::*;
pub mod genetic;
pub mod trials;
pub mod two_opt;
mod runner;
pub use runner::*;
