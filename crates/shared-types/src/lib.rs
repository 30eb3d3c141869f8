pub mod assignment;
pub mod config;
pub mod error;
pub mod models;
pub mod requests;
pub mod routing;

pub use assignment::*;
pub use config::*;
pub use error::*;
pub use models::*;
pub use requests::*;
