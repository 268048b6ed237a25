//! The OTP request/verify state machine.
//!
//! [`OtpFlow`] sits between a form and the [`api::AuthApi`] calls it
//! triggers. Its methods are synchronous and split around the network:
//! `begin_*` validates and gates, returning either the request payload to
//! put on the wire or a [`FlowError`]. In the error case **no network call
//! happens**, because no request was ever produced. The matching completion
//! method (`sent`, `signed_in`) applies the response to state afterwards,
//! and discards completions that no longer match the pending exchange.
//!
//! The owning view performs the actual async call between the two halves, so
//! no state borrow is ever held across an await point.

use api::{OtpPurpose, SendOtpRequest, SendOtpResponse, VerifyOtpRequest, VerifyOtpResponse};
use store::CredentialRecord;

use crate::otp::OtpExchange;
use crate::validate::{self, FieldErrors, SignUpDetails};

/// Local rejection of a flow action. Nothing was sent.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    /// One or more fields failed validation.
    #[error("Please correct the highlighted fields.")]
    Invalid(FieldErrors),
    /// A resend was attempted while the cooldown window is still open.
    #[error("You can resend in {wait_secs}s.")]
    CooldownActive { wait_secs: u64 },
    /// The code's TTL has elapsed; a fresh one must be requested.
    #[error("This code has expired. Please request a new one.")]
    OtpExpired,
    /// The OTP field was empty.
    #[error("OTP is required.")]
    MissingOtp,
    /// Verification was attempted with no code pending at all.
    #[error("Request a code first.")]
    NotRequested,
}

/// Result of applying a successful send response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// The code went out; deadlines are armed. Carries the server's message.
    CodeSent { message: String },
    /// Sign-up for an account that already exists and is verified; the
    /// caller should route to sign-in instead of opening the OTP field.
    AlreadyRegistered,
}

/// State machine for one sign-up or sign-in attempt.
pub struct OtpFlow {
    purpose: OtpPurpose,
    exchange: Option<OtpExchange>,
}

impl OtpFlow {
    pub fn new(purpose: OtpPurpose) -> Self {
        Self {
            purpose,
            exchange: None,
        }
    }

    /// The pending code's timing state, once one has been requested.
    pub fn exchange(&self) -> Option<&OtpExchange> {
        self.exchange.as_ref()
    }

    /// Validate and gate a send (or resend). `Err` means no call is made.
    pub fn begin_send(
        &self,
        details: &SignUpDetails,
        now: u64,
    ) -> Result<SendOtpRequest, FlowError> {
        let errors = match self.purpose {
            OtpPurpose::SignUp => validate::sign_up(details),
            OtpPurpose::SignIn => validate::sign_in(&details.email),
        };
        if !errors.is_empty() {
            return Err(FlowError::Invalid(errors));
        }
        if let Some(exchange) = &self.exchange {
            if !exchange.can_resend(now) {
                return Err(FlowError::CooldownActive {
                    wait_secs: exchange.resend_wait(now),
                });
            }
        }
        Ok(SendOtpRequest {
            name: details.name.trim().to_string(),
            dob: details.dob.clone(),
            email: details.email.trim().to_string(),
            purpose: self.purpose,
        })
    }

    /// Apply a successful send response for `email`, re-arming the deadlines.
    pub fn sent(&mut self, email: &str, response: SendOtpResponse, now: u64) -> SendOutcome {
        if self.purpose == OtpPurpose::SignUp && response.exists && response.verified {
            return SendOutcome::AlreadyRegistered;
        }
        self.exchange = Some(OtpExchange::new(email, now));
        SendOutcome::CodeSent {
            message: response.message,
        }
    }

    /// Validate and gate a verification. `Err` means no call is made;
    /// in particular, an expired code is rejected here, locally.
    pub fn begin_verify(&self, otp: &str, now: u64) -> Result<VerifyOtpRequest, FlowError> {
        let Some(exchange) = &self.exchange else {
            return Err(FlowError::NotRequested);
        };
        if otp.trim().is_empty() {
            return Err(FlowError::MissingOtp);
        }
        if exchange.is_expired(now) {
            return Err(FlowError::OtpExpired);
        }
        Ok(VerifyOtpRequest {
            email: exchange.email().to_string(),
            otp: otp.trim().to_string(),
        })
    }

    /// Apply a successful verification for `email`.
    ///
    /// Returns the credential record to persist, or `None` when the response
    /// is stale (a newer send changed the pending email) and the completion
    /// must be discarded rather than applied.
    pub fn signed_in(
        &mut self,
        email: &str,
        response: VerifyOtpResponse,
    ) -> Option<CredentialRecord> {
        match &self.exchange {
            Some(exchange) if exchange.email() == email => {
                self.exchange = None;
                Some(CredentialRecord {
                    token: response.token,
                    identity: response.user,
                })
            }
            _ => None,
        }
    }

    /// Drop any pending exchange (expiry reset, navigation away).
    pub fn reset(&mut self) {
        self.exchange = None;
    }
}
