mod new_user;
mod user;
