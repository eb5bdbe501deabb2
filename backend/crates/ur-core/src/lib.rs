pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::new_user::{MISSING_NAME_OR_EMAIL, NewUser};
pub use models::user::User;

#[cfg(test)]
mod tests;
