use dioxus::prelude::*;
use store::Note;

/// Inline form for creating or editing a note.
///
/// Submits only when both fields are non-blank after trimming; the notebook
/// enforces the same rule again when it commits.
#[component]
pub fn NoteForm(
    initial: Option<Note>,
    on_save: EventHandler<(String, String)>,
    on_cancel: EventHandler<()>,
) -> Element {
    let editing = initial.is_some();
    let mut title = use_signal({
        let initial = initial.as_ref().map(|n| n.title.clone()).unwrap_or_default();
        move || initial
    });
    let mut content = use_signal({
        let initial = initial.as_ref().map(|n| n.content.clone()).unwrap_or_default();
        move || initial
    });

    let handle_save = move |_| {
        if title().trim().is_empty() || content().trim().is_empty() {
            return;
        }
        on_save.call((title(), content()));
    };

    rsx! {
        div {
            class: "note-form",
            input {
                r#type: "text",
                placeholder: "Note Title",
                value: title(),
                oninput: move |evt| title.set(evt.value()),
            }
            textarea {
                placeholder: "Note Content",
                rows: 4,
                value: content(),
                oninput: move |evt| content.set(evt.value()),
            }
            div {
                class: "note-form-actions",
                button {
                    class: "primary",
                    onclick: handle_save,
                    if editing { "Update" } else { "Save" }
                }
                button {
                    class: "secondary",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
