//! # Auth crate — the client-side session lifecycle
//!
//! Owns the path from "no known identity" to "authenticated identity with a
//! usable session", and the reverse path on sign-out. The UI layers drive
//! these types; nothing in here touches the DOM, so the whole lifecycle runs
//! as ordinary native tests.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`otp`] | [`OtpExchange`] — expiry and resend-cooldown timing for a pending code |
//! | [`validate`] | Field validation and the field-keyed error map |
//! | [`flow`] | [`OtpFlow`] — the request/verify state machine around the async calls |
//! | [`session`] | Session resolution, credential persistence choice, sign-out |
//! | [`clock`] | Platform wall clock (`js_sys::Date` on wasm) |
//!
//! All timing logic takes `now: u64` (seconds since the epoch) so tests can
//! drive the clock; the UI passes [`clock::now_secs`].

pub mod clock;
pub mod flow;
pub mod otp;
pub mod session;
pub mod validate;

pub use clock::now_secs;
pub use flow::{FlowError, OtpFlow, SendOutcome};
pub use otp::{OtpExchange, OTP_TTL_SECS, RESEND_COOLDOWN_SECS};
pub use session::{remember, resolve_session, sign_out};
pub use validate::{FieldErrors, SignUpDetails};
