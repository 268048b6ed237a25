use dioxus::prelude::*;
use store::Note;

/// The whole note collection as cards with per-note actions.
///
/// Notes are addressed by position; the handlers receive the index within
/// the collection as rendered.
#[component]
pub fn NoteList(
    notes: Vec<Note>,
    on_edit: EventHandler<usize>,
    on_delete: EventHandler<usize>,
) -> Element {
    rsx! {
        if notes.is_empty() {
            p { class: "notes-empty", "No notes yet." }
        } else {
            div {
                class: "notes-grid",
                for (index, note) in notes.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "note-card",
                        div {
                            class: "note-card-body",
                            h4 { "{note.title}" }
                            // whitespace-preserving so multi-line content survives display
                            p { class: "note-content", "{note.content}" }
                        }
                        div {
                            class: "note-card-actions",
                            button {
                                class: "link-button",
                                onclick: move |_| on_edit.call(index),
                                "Edit"
                            }
                            button {
                                class: "link-button danger",
                                onclick: move |_| on_delete.call(index),
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }
}
