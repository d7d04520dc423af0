pub mod bin;
pub mod config;
pub mod error;
pub mod transaction;
pub mod user;

pub use bin::*;
pub use config::Config;
pub use error::*;
pub use transaction::*;
pub use user::*;
