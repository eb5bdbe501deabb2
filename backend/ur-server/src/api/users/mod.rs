pub mod submit_user_request;
#[allow(clippy::module_inception)]
pub mod users;
