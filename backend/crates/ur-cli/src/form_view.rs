//! Terminal form view for submitting and listing users.
//!
//! Holds the same state a browser form would: the two inputs, the fetched
//! list, a submitting flag, and one error or success message at a time.

use crate::Client;

use ur_core::User;

use std::fmt::Write;

use log::{debug, warn};

pub const REQUIRED_FIELDS: &str = "Name and email are required.";
pub const SUCCESS: &str = "User successfully added!";
pub const GENERIC_ERROR: &str = "Something went wrong.";

#[derive(Debug, Default)]
pub struct FormView {
    pub name: String,
    pub email: String,
    pub(crate) users: Vec<User>,
    pub(crate) is_submitting: bool,
    pub(crate) error_message: Option<String>,
    pub(crate) success_message: Option<String>,
}

impl FormView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    /// Load the user list once. A failed fetch keeps whatever is shown.
    pub async fn mount(&mut self, client: &Client) {
        self.refresh(client).await;
    }

    /// Submit the current inputs.
    pub async fn submit(&mut self, client: &Client) {
        if self.is_submitting {
            debug!("Submit ignored: already submitting");
            return;
        }

        self.error_message = None;
        self.success_message = None;

        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            self.error_message = Some(REQUIRED_FIELDS.to_string());
            return;
        }

        self.is_submitting = true;

        match client.submit_user(&self.name, &self.email).await {
            Ok(user) => {
                debug!("Submitted user id {}", user.id);
                self.name.clear();
                self.email.clear();
                self.success_message = Some(SUCCESS.to_string());
                self.refresh(client).await;
            }
            Err(e) => {
                warn!("Failed to submit user: {}", e);
                let message = e
                    .server_message()
                    .filter(|m| !m.is_empty())
                    .unwrap_or(GENERIC_ERROR);
                self.error_message = Some(message.to_string());
            }
        }

        self.is_submitting = false;
    }

    async fn refresh(&mut self, client: &Client) {
        match client.list_users().await {
            Ok(users) => self.users = users,
            Err(e) => warn!("Failed to fetch users: {}", e),
        }
    }

    /// Plain-text rendering of the form, its messages and the user list.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let button = if self.is_submitting {
            "Submitting..."
        } else {
            "Submit"
        };

        // Writing to a String cannot fail
        let _ = writeln!(out, "Submit a New User");
        let _ = writeln!(out, "Name: {}", self.name);
        let _ = writeln!(out, "Email: {}", self.email);
        let _ = writeln!(out, "[{button}]");

        if let Some(error) = &self.error_message {
            let _ = writeln!(out, "Error: {error}");
        }
        if let Some(success) = &self.success_message {
            let _ = writeln!(out, "{success}");
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Users");
        for user in &self.users {
            let _ = writeln!(out, "{} ({})", user.name, user.email);
        }

        out
    }
}
