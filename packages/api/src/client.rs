//! The [`AuthApi`] trait and its HTTP implementation.
//!
//! [`AuthApi`] exists so the session flow can run against a recording mock
//! under test; [`HttpAuthApi`] is the real thing, a thin [`reqwest`] JSON
//! client over the configured base URL.

use serde::de::DeserializeOwned;
use store::Identity;

use crate::error::ApiError;
use crate::types::{
    SendOtpRequest, SendOtpResponse, SessionCheckResponse, VerifyOtpRequest, VerifyOtpResponse,
};

/// Base URL of the production backend.
pub const DEFAULT_API_BASE: &str = "https://notemaker-backend-v3fg.onrender.com/api";

/// The remote auth service, as the client consumes it.
pub trait AuthApi {
    /// Ask whether a live session exists. A locally persisted token, when
    /// available, is presented as a bearer credential.
    fn check_session(
        &self,
        token: Option<&str>,
    ) -> impl std::future::Future<Output = Result<Option<Identity>, ApiError>>;

    fn send_otp(
        &self,
        request: &SendOtpRequest,
    ) -> impl std::future::Future<Output = Result<SendOtpResponse, ApiError>>;

    fn verify_otp(
        &self,
        request: &VerifyOtpRequest,
    ) -> impl std::future::Future<Output = Result<VerifyOtpResponse, ApiError>>;

    fn logout(&self) -> impl std::future::Future<Output = Result<(), ApiError>>;
}

/// HTTP client for the auth service.
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    base_url: String,
    http: reqwest::Client,
}

impl Default for HttpAuthApi {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl HttpAuthApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl AuthApi for HttpAuthApi {
    async fn check_session(&self, token: Option<&str>) -> Result<Option<Identity>, ApiError> {
        let mut request = self.http.get(self.url("/auth/check"));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        let checked: SessionCheckResponse = decode(request.send().await?).await?;
        Ok(checked.logged_in.then_some(checked.user).flatten())
    }

    async fn send_otp(&self, request: &SendOtpRequest) -> Result<SendOtpResponse, ApiError> {
        let response = self
            .http
            .post(self.url("/auth/send-otp"))
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    async fn verify_otp(&self, request: &VerifyOtpRequest) -> Result<VerifyOtpResponse, ApiError> {
        let response = self
            .http
            .post(self.url("/auth/verify-otp"))
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let response = self.http.post(self.url("/auth/logout")).send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(rejection(response).await)
        }
    }
}

/// Shape of the backend's error payloads.
#[derive(serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    if response.status().is_success() {
        Ok(response.json().await?)
    } else {
        Err(rejection(response).await)
    }
}

async fn rejection(response: reqwest::Response) -> ApiError {
    let status = response.status();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| format!("Request failed ({status})"));
    ApiError::Rejected { message }
}
