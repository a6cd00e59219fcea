pub mod account_service;
pub mod report_service;
pub mod session_service;
pub mod user_service;

pub use account_service::*;
pub use report_service::*;
pub use session_service::*;
pub use user_service::*;
