//! # API crate — the remote auth service contract
//!
//! Every remote call the client makes goes through this crate. The backend
//! itself is external; this crate owns only the request/response shapes and
//! an HTTP client for them.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | The [`AuthApi`] trait and its [`HttpAuthApi`] implementation |
//! | [`error`] | [`ApiError`] — rejected-by-server vs. transport failures |
//! | [`types`] | Serde payload types for each endpoint |
//!
//! ## Endpoints
//!
//! | Call | Route | Returns |
//! |------|-------|---------|
//! | `check_session` | `GET /auth/check` | whether a live session exists, and its [`Identity`] |
//! | `send_otp` | `POST /auth/send-otp` | a human-readable message, plus `exists`/`verified` flags |
//! | `verify_otp` | `POST /auth/verify-otp` | `{ token, user }` |
//! | `logout` | `POST /auth/logout` | — |
//!
//! All calls are async and single-shot; nothing here retries. Failures are
//! converted to user-facing text via [`ApiError::user_message`].

pub mod client;
pub mod error;
pub mod types;

pub use client::{AuthApi, HttpAuthApi, DEFAULT_API_BASE};
pub use error::ApiError;
pub use types::{
    OtpPurpose, SendOtpRequest, SendOtpResponse, SessionCheckResponse, VerifyOtpRequest,
    VerifyOtpResponse,
};

pub use store::Identity;
