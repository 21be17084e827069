//! Typed access to the users API.
//!
//! ```text
//! GET    /users        -> [User]
//! GET    /users/{id}   -> User
//! POST   /users        {name, email}     -> created user
//! PUT    /users/{id}   {id, name, email} -> updated user
//! DELETE /users/{id}   -> deletion result
//! ```
//!
//! Non-success responses are expected to carry a JSON body with a `message`
//! field; it becomes the text of [`ApiError::Http`].

use crate::{
    config::ApiConfig,
    error::ApiError,
    model::{MutationReceipt, NewUser, User, UserId},
};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument};

/// Default request timeout applied by native clients.
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);
/// Maximum number of error body characters surfaced to the operator.
const MAX_ERROR_CHARS: usize = 200;

/// The five calls the views make against the users API.
#[allow(async_fn_in_trait)]
pub trait UsersApi {
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;

    async fn get_user(&self, id: UserId) -> Result<User, ApiError>;

    async fn create_user(&self, user: &NewUser) -> Result<MutationReceipt, ApiError>;

    async fn update_user(&self, user: &User) -> Result<MutationReceipt, ApiError>;

    async fn delete_user(&self, id: UserId) -> Result<MutationReceipt, ApiError>;
}

/// `reqwest`-backed [`UsersApi`]; uses `fetch` when compiled to `wasm32`.
#[derive(Clone, Debug)]
pub struct HttpUsersApi {
    client: Client,
    config: ApiConfig,
}

impl HttpUsersApi {
    /// Builds a client for the configured base address.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the base address is not an absolute http(s) URL
    /// or the underlying client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        config.validate()?;

        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder
            .user_agent(crate::APP_USER_AGENT)
            .timeout(DEFAULT_TIMEOUT);

        let client = builder
            .build()
            .map_err(|err| ApiError::Config(format!("failed to build HTTP client: {err}")))?;

        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn user_url(&self, id: UserId) -> String {
        self.config.endpoint(&format!("/users/{id}"))
    }
}

impl UsersApi for HttpUsersApi {
    #[instrument(skip(self))]
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let response = self.client.get(self.config.endpoint("/users")).send().await?;
        // An empty table comes back as `null`.
        let users: Option<Vec<User>> = read_json(response).await?;
        Ok(users.unwrap_or_default())
    }

    #[instrument(skip(self))]
    async fn get_user(&self, id: UserId) -> Result<User, ApiError> {
        let response = self.client.get(self.user_url(id)).send().await?;
        read_json(response).await
    }

    #[instrument(skip(self, user))]
    async fn create_user(&self, user: &NewUser) -> Result<MutationReceipt, ApiError> {
        let response = self
            .client
            .post(self.config.endpoint("/users"))
            .json(user)
            .send()
            .await?;
        read_receipt(response).await
    }

    #[instrument(skip(self, user), fields(id = user.id))]
    async fn update_user(&self, user: &User) -> Result<MutationReceipt, ApiError> {
        let response = self
            .client
            .put(self.user_url(user.id))
            .json(user)
            .send()
            .await?;
        read_receipt(response).await
    }

    #[instrument(skip(self))]
    async fn delete_user(&self, id: UserId) -> Result<MutationReceipt, ApiError> {
        let response = self.client.delete(self.user_url(id)).send().await?;
        read_receipt(response).await
    }
}

/// Parses JSON responses and surfaces HTTP errors with the server message.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = check_status(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Parse(err.to_string()))
}

/// Reads a mutation result; success bodies are decoded leniently.
async fn read_receipt(response: Response) -> Result<MutationReceipt, ApiError> {
    let response = check_status(response).await?;
    let body = response.text().await.unwrap_or_default();
    Ok(MutationReceipt::from_body(&body))
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    debug!(status = status.as_u16(), "users API returned an error");

    Err(ApiError::Http {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

/// Extracts `message` (or `error`) from a JSON error body, falling back to the
/// trimmed and truncated raw text.
pub(crate) fn error_message(body: &str) -> String {
    let trimmed = body.trim();

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        let field = ["message", "error"].into_iter().find_map(|key| {
            value
                .get(key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|text| !text.is_empty())
        });
        if let Some(text) = field {
            return truncate(text);
        }
    }

    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        truncate(trimmed)
    }
}

fn truncate(text: &str) -> String {
    text.chars().take(MAX_ERROR_CHARS).collect()
}
