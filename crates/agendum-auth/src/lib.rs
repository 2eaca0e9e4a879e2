pub mod claims;
pub mod error;
pub mod password;
pub mod token_service;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use password::PasswordHasher;
pub use token_service::TokenService;
