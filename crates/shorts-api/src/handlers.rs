//! Request handlers.

pub mod generate;
pub mod health;
pub mod upload;

pub use generate::*;
pub use health::*;
pub use upload::*;
