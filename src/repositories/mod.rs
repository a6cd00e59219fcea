pub mod account_repository;
pub mod session_repository;
pub mod user_repository;

pub use account_repository::*;
pub use session_repository::*;
pub use user_repository::*;
