use crate::{CliClientResult, ClientError};

use ur_core::User;

use reqwest::{Client as ReqwestClient, Method};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

/// HTTP client for the ur-server REST API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Execute request and decode the success body as `T`
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> CliClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Error bodies are `{"error": "..."}`; anything else carries no message
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(Value::as_str).map(String::from));
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// POST /api/submit
    pub async fn submit_user(&self, name: &str, email: &str) -> CliClientResult<User> {
        #[derive(Serialize)]
        struct SubmitRequest<'a> {
            name: &'a str,
            email: &'a str,
        }

        let body = SubmitRequest { name, email };
        let req = self.request(Method::POST, "/api/submit").json(&body);
        self.execute(req).await
    }

    /// GET /api/users
    pub async fn list_users(&self) -> CliClientResult<Vec<User>> {
        let req = self.request(Method::GET, "/api/users");
        self.execute(req).await
    }
}
