//! Serde payload types for the auth endpoints.

use serde::{Deserialize, Serialize};
use store::Identity;

/// Why an OTP is being requested. Serialized as `"signup"` / `"signin"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OtpPurpose {
    SignUp,
    SignIn,
}

/// Body of `POST /auth/send-otp`.
///
/// `name` and `dob` are only meaningful for the sign-up purpose; sign-in
/// sends them empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SendOtpRequest {
    pub name: String,
    pub dob: String,
    pub email: String,
    pub purpose: OtpPurpose,
}

/// Response of `POST /auth/send-otp`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SendOtpResponse {
    /// Human-readable confirmation, surfaced to the user as-is.
    pub message: String,
    /// The account already exists.
    #[serde(default)]
    pub exists: bool,
    /// The existing account has completed verification before.
    #[serde(default)]
    pub verified: bool,
}

/// Body of `POST /auth/verify-otp`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

/// Response of `POST /auth/verify-otp`: the session credential pair.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct VerifyOtpResponse {
    pub token: String,
    pub user: Identity,
}

/// Response of `GET /auth/check`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SessionCheckResponse {
    #[serde(rename = "loggedIn")]
    pub logged_in: bool,
    #[serde(default)]
    pub user: Option<Identity>,
}
