//! # Domain models for identities and notes
//!
//! Defines the data structures persisted by [`crate::Notebook`] and
//! [`crate::CredentialVault`]. These types are `Serialize + Deserialize` so
//! they can round-trip through browser storage and cross the remote API
//! boundary unchanged.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Identity`] | The authenticated user: their `name` and the `email` that partitions their notes. |
//! | [`Note`] | A single note with a `title` and free-form `content`. Notes have positional identity only: their index within the owner's collection. |

use serde::{Deserialize, Serialize};

/// The authenticated user's name and email.
///
/// The email doubles as the partition key for the user's note collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

impl Identity {
    /// Display name, falling back to the email address when the name is empty.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// A single note in a user's collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    pub content: String,
}
