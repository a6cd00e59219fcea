// Re-export all models organized by domain
pub mod api;
pub mod domain;
pub mod errors;
pub mod user;

pub use api::*;
pub use domain::*;
pub use errors::*;
pub use user::*;
