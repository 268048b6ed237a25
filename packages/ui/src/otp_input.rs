use dioxus::prelude::*;

use crate::icons::{FaEye, FaEyeSlash};
use crate::Icon;

/// OTP entry: a password-type input with a visibility toggle.
#[component]
pub fn OtpInput(
    value: String,
    oninput: EventHandler<FormEvent>,
    #[props(default = "Enter OTP".to_string())] placeholder: String,
) -> Element {
    let mut visible = use_signal(|| false);
    let input_type = if visible() { "text" } else { "password" };

    rsx! {
        div {
            class: "otp-input",
            input {
                r#type: "{input_type}",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| oninput.call(evt),
            }
            button {
                r#type: "button",
                class: "otp-toggle",
                onclick: move |_| visible.toggle(),
                if visible() {
                    Icon { icon: FaEyeSlash, width: 16, height: 16 }
                } else {
                    Icon { icon: FaEye, width: 16, height: 16 }
                }
            }
        }
    }
}
