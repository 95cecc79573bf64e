//! HTTP client for the backend JSON API

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::{
    ApiAck, ValidationError,
    entry::{ProductionSave, SaleSave},
    models::{MasterCreate, MasterTable, UserCreate},
};

/// HTTP client for making network requests to the backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the session token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        tracing::debug!(%url, "POST");
        let mut request = self.client.post(&url).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::BadRequest(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        response.json().await.map_err(Into::into)
    }

    /// Convert an application-level rejection into an error, so `Ok` always
    /// means the server accepted the mutation.
    fn accepted(ack: ApiAck) -> ClientResult<ApiAck> {
        if ack.success {
            Ok(ack)
        } else {
            Err(ClientError::Rejected(ack.message))
        }
    }

    // ========== Entry API ==========

    /// Save a production run batch
    pub async fn save_production(&self, save: &ProductionSave) -> ClientResult<ApiAck> {
        let ack = self.post("api/save_production", save).await?;
        Self::accepted(ack)
    }

    /// Save a sale order batch
    pub async fn save_sale(&self, save: &SaleSave) -> ClientResult<ApiAck> {
        let ack = self.post("api/save_sale", save).await?;
        Self::accepted(ack)
    }

    // ========== Master API ==========

    /// Add a master-data record. The record name is required and checked
    /// before any request is sent.
    pub async fn add_master(&self, payload: &MasterCreate) -> ClientResult<ApiAck> {
        if payload.name().trim().is_empty() {
            return Err(ValidationError::NameRequired(payload.table()).into());
        }

        #[derive(serde::Serialize)]
        struct AddMasterRequest<'a> {
            table: MasterTable,
            data: &'a MasterCreate,
        }

        let request = AddMasterRequest {
            table: payload.table(),
            data: payload,
        };

        let ack = self.post("api/add_master", &request).await?;
        Self::accepted(ack)
    }

    /// Delete a master-data record by ID
    pub async fn delete_master(&self, table: MasterTable, id: i64) -> ClientResult<ApiAck> {
        #[derive(serde::Serialize)]
        struct DeleteMasterRequest {
            table: MasterTable,
            id: i64,
        }

        let ack = self
            .post("api/delete_master", &DeleteMasterRequest { table, id })
            .await?;
        Self::accepted(ack)
    }

    // ========== User API (admin only) ==========

    /// Add a user. Username and password are required and checked before
    /// any request is sent.
    pub async fn add_user(&self, user: &UserCreate) -> ClientResult<ApiAck> {
        if user.username.is_empty() || user.password.is_empty() {
            return Err(ValidationError::CredentialsRequired.into());
        }

        let ack = self.post("api/add_user", user).await?;
        Self::accepted(ack)
    }

    /// Delete a user by ID
    pub async fn delete_user(&self, id: i64) -> ClientResult<ApiAck> {
        #[derive(serde::Serialize)]
        struct DeleteUserRequest {
            id: i64,
        }

        let ack = self.post("api/delete_user", &DeleteUserRequest { id }).await?;
        Self::accepted(ack)
    }
}
