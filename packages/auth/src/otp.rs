//! Timing state for a pending one-time code.
//!
//! A code is usable from the moment it is sent until [`OTP_TTL_SECS`] later;
//! another send to the same address is locked for [`RESEND_COOLDOWN_SECS`]
//! after each send. Both windows are absolute deadlines stamped at send time,
//! so a delayed UI tick can never stretch them.

/// How long a one-time code stays valid after it is sent.
pub const OTP_TTL_SECS: u64 = 300;

/// How long the resend control stays locked after each send.
pub const RESEND_COOLDOWN_SECS: u64 = 60;

/// A pending code: which email it went to, and its two deadlines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OtpExchange {
    email: String,
    requested_at: u64,
    expires_at: u64,
    resend_available_at: u64,
}

impl OtpExchange {
    /// Arm the deadlines for a code sent to `email` at `now`.
    pub fn new(email: impl Into<String>, now: u64) -> Self {
        Self {
            email: email.into(),
            requested_at: now,
            expires_at: now + OTP_TTL_SECS,
            resend_available_at: now + RESEND_COOLDOWN_SECS,
        }
    }

    /// The address the pending code was sent to.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// True at and after the expiry deadline; the code must not be submitted.
    pub fn is_expired(&self, now: u64) -> bool {
        now >= self.expires_at
    }

    /// True at and after the cooldown deadline; a resend may go out.
    pub fn can_resend(&self, now: u64) -> bool {
        now >= self.resend_available_at
    }

    /// Seconds of validity left, saturating at zero.
    pub fn expires_in(&self, now: u64) -> u64 {
        self.expires_at.saturating_sub(now)
    }

    /// Seconds until resend unlocks, saturating at zero.
    pub fn resend_wait(&self, now: u64) -> u64 {
        self.resend_available_at.saturating_sub(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: u64 = 1_700_000_000;

    #[test]
    fn test_resend_locked_until_cooldown_deadline() {
        let exchange = OtpExchange::new("a@b.com", T0);

        assert!(!exchange.can_resend(T0));
        assert!(!exchange.can_resend(T0 + RESEND_COOLDOWN_SECS - 1));
        assert_eq!(exchange.resend_wait(T0 + 30), 30);

        // Permitted at the deadline itself, and after.
        assert!(exchange.can_resend(T0 + RESEND_COOLDOWN_SECS));
        assert!(exchange.can_resend(T0 + 61));
        assert_eq!(exchange.resend_wait(T0 + RESEND_COOLDOWN_SECS), 0);
    }

    #[test]
    fn test_code_expires_at_ttl_deadline() {
        let exchange = OtpExchange::new("a@b.com", T0);

        assert!(!exchange.is_expired(T0));
        assert!(!exchange.is_expired(T0 + OTP_TTL_SECS - 1));
        assert_eq!(exchange.expires_in(T0), OTP_TTL_SECS);

        // Rejected at the deadline itself, and after.
        assert!(exchange.is_expired(T0 + OTP_TTL_SECS));
        assert!(exchange.is_expired(T0 + 301));
        assert_eq!(exchange.expires_in(T0 + OTP_TTL_SECS + 50), 0);
    }

    #[test]
    fn test_countdowns_saturate_at_zero() {
        let exchange = OtpExchange::new("a@b.com", T0);
        assert_eq!(exchange.expires_in(T0 + 10_000), 0);
        assert_eq!(exchange.resend_wait(T0 + 10_000), 0);
    }
}
