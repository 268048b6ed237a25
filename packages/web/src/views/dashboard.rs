//! Dashboard view: the signed-in user's note collection.

use dioxus::prelude::*;
use store::Note;
use ui::{use_session, NoteForm, NoteList, SignOutButton};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let nav = use_navigator();

    let mut notes = use_signal(Vec::<Note>::new);
    let mut creating = use_signal(|| false);
    let mut editing_index = use_signal(|| Option::<usize>::None);
    let mut note_error = use_signal(|| Option::<String>::None);

    // Bounce unauthenticated visits once the session check has settled.
    use_effect(move || {
        if !session().loading && session().user.is_none() {
            nav.replace(Route::SignIn {});
        }
    });

    // Attach on identity, detach on logout. A change of identity reloads
    // the collection wholesale; nothing is merged across partitions.
    use_effect(move || match session().user {
        Some(user) => notes.set(ui::make_notebook(&user.email).notes().to_vec()),
        None => notes.set(Vec::new()),
    });

    let handle_save = move |(title, content): (String, String)| {
        let Some(user) = session().user else {
            return;
        };
        let mut notebook = ui::make_notebook(&user.email);
        match notebook.save(&title, &content, editing_index()) {
            Ok(()) => {
                notes.set(notebook.notes().to_vec());
                creating.set(false);
                editing_index.set(None);
                note_error.set(None);
            }
            Err(error) => note_error.set(Some(error.to_string())),
        }
    };

    let handle_delete = move |index: usize| {
        let Some(user) = session().user else {
            return;
        };
        let mut notebook = ui::make_notebook(&user.email);
        if notebook.delete(index).is_ok() {
            notes.set(notebook.notes().to_vec());
            if editing_index() == Some(index) {
                editing_index.set(None);
                creating.set(false);
            }
        }
    };

    let handle_edit = move |index: usize| {
        editing_index.set(Some(index));
        creating.set(true);
        note_error.set(None);
    };

    let handle_cancel = move |_| {
        creating.set(false);
        editing_index.set(None);
        note_error.set(None);
    };

    // The session check gates the whole page: render nothing until it
    // settles, and nothing for a missing identity (the bounce is in flight).
    if session().loading {
        return rsx! {};
    }
    let Some(user) = session().user else {
        return rsx! {};
    };

    let display_name = user.display_name().to_string();
    let editing_note = editing_index().and_then(|i| notes().get(i).cloned());
    let form_key = editing_index()
        .map(|i| i.to_string())
        .unwrap_or_else(|| "new".to_string());

    rsx! {
        div {
            class: "dashboard",

            header {
                class: "dashboard-header",
                div {
                    class: "dashboard-brand",
                    span { class: "dashboard-logo", "HD" }
                    span { class: "dashboard-title", "Dashboard" }
                }
                SignOutButton { class: "link-button", label: "Sign Out" }
            }

            section {
                class: "welcome-box",
                h2 { "Welcome, {display_name}" }
                p { "Email: {user.email}" }
            }

            section {
                class: "note-entry",
                if creating() {
                    if let Some(message) = note_error() {
                        div { class: "error-banner", "{message}" }
                    }
                    // Keyed so switching the edited note remounts the form
                    // with that note's fields.
                    NoteForm {
                        key: "{form_key}",
                        initial: editing_note,
                        on_save: handle_save,
                        on_cancel: handle_cancel,
                    }
                } else {
                    button {
                        class: "primary wide",
                        onclick: move |_| {
                            creating.set(true);
                            editing_index.set(None);
                            note_error.set(None);
                        },
                        "Create Note"
                    }
                }
            }

            section {
                class: "notes-section",
                h3 { "Your Notes" }
                NoteList {
                    notes: notes(),
                    on_edit: handle_edit,
                    on_delete: handle_delete,
                }
            }
        }
    }
}
