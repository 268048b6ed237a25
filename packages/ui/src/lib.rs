//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod platform;
pub use platform::{make_notebook, make_vault};

mod session;
pub use session::{use_session, SessionProvider, SessionState, SignOutButton};

mod tick;
pub use tick::use_second_tick;

mod otp_input;
pub use otp_input::OtpInput;

mod note_form;
pub use note_form::NoteForm;

mod note_list;
pub use note_list::NoteList;
