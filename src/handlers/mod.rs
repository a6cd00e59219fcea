pub mod accounts;
pub mod auth;
pub mod report;
pub mod sessions;
pub mod users;

// Re-export all handler functions for easy importing
pub use accounts::*;
pub use auth::*;
pub use report::*;
pub use sessions::*;
pub use users::*;
