pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod page;
pub mod routes;
pub mod state;


pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    users::{
        submit_user_request::SubmitUserRequest,
        users::{list_users, submit_user},
    },
};
pub use error::{Result as ServerErrorResult, ServerError};
pub use state::AppState;

pub use crate::routes::build_router;
