//! Form field validation.
//!
//! Validation runs entirely locally; a form with errors never reaches the
//! network. Error strings are keyed per field so the views can render them
//! under the inputs they belong to.

/// Per-field error messages for the auth forms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub dob: Option<String>,
    pub email: Option<String>,
    pub otp: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.dob.is_none() && self.email.is_none() && self.otp.is_none()
    }
}

/// What the user fills in before requesting a code.
///
/// Sign-in only uses `email`; the other fields stay empty there.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpDetails {
    pub name: String,
    pub dob: String,
    pub email: String,
}

/// Basic `local@domain.tld` shape check.
pub fn email_is_valid(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Validate the sign-up form: name, date of birth, and email are required.
pub fn sign_up(details: &SignUpDetails) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if details.name.trim().is_empty() {
        errors.name = Some("Name is required.".to_string());
    }
    if details.dob.is_empty() {
        errors.dob = Some("Date of birth is required.".to_string());
    }
    errors.email = email_error(&details.email);
    errors
}

/// Validate the sign-in form: only the email matters.
pub fn sign_in(email: &str) -> FieldErrors {
    FieldErrors {
        email: email_error(email),
        ..FieldErrors::default()
    }
}

fn email_error(email: &str) -> Option<String> {
    if email.is_empty() {
        Some("Email is required.".to_string())
    } else if !email_is_valid(email.trim()) {
        Some("Enter a valid email.".to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(email_is_valid("jonas_kahnwald@gmail.com"));
        assert!(email_is_valid("a@b.co"));
        assert!(email_is_valid("first.last@sub.domain.org"));

        assert!(!email_is_valid(""));
        assert!(!email_is_valid("no-at-sign.com"));
        assert!(!email_is_valid("@missing-local.com"));
        assert!(!email_is_valid("no-tld@domain"));
        assert!(!email_is_valid("dot-at-end@domain."));
        assert!(!email_is_valid(".starts-with-dot@.com"));
        assert!(!email_is_valid("two@@signs.com"));
        assert!(!email_is_valid("space in@local.com"));
    }

    #[test]
    fn test_sign_up_requires_every_field() {
        let errors = sign_up(&SignUpDetails::default());
        assert_eq!(errors.name.as_deref(), Some("Name is required."));
        assert_eq!(errors.dob.as_deref(), Some("Date of birth is required."));
        assert_eq!(errors.email.as_deref(), Some("Email is required."));
        assert!(errors.otp.is_none());
    }

    #[test]
    fn test_sign_up_flags_malformed_email_only() {
        let details = SignUpDetails {
            name: "Jonas".to_string(),
            dob: "1987-06-21".to_string(),
            email: "not-an-email".to_string(),
        };
        let errors = sign_up(&details);
        assert!(errors.name.is_none());
        assert!(errors.dob.is_none());
        assert_eq!(errors.email.as_deref(), Some("Enter a valid email."));
    }

    #[test]
    fn test_whitespace_only_name_is_missing() {
        let details = SignUpDetails {
            name: "   ".to_string(),
            dob: "1987-06-21".to_string(),
            email: "a@b.com".to_string(),
        };
        assert!(sign_up(&details).name.is_some());
    }

    #[test]
    fn test_sign_in_checks_email_alone() {
        assert!(sign_in("a@b.com").is_empty());
        assert_eq!(sign_in("").email.as_deref(), Some("Email is required."));
        assert_eq!(sign_in("nope").email.as_deref(), Some("Enter a valid email."));
    }
}
