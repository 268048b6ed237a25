pub mod credentials;
pub mod models;
pub mod notebook;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web::{LocalStore, SessionStore};

pub use credentials::{CredentialRecord, CredentialVault, StorageTier};
pub use models::{Identity, Note};
pub use notebook::{partition_key, KeyValueStore, NoteError, Notebook};
