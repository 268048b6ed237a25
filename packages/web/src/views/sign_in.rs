//! Sign-in view: email, then OTP verification with a "keep me logged in"
//! choice deciding which storage tier holds the credentials.

use api::{AuthApi, HttpAuthApi, OtpPurpose};
use auth::{FieldErrors, FlowError, OtpFlow, SendOutcome, SignUpDetails};
use dioxus::prelude::*;
use ui::{use_second_tick, use_session, OtpInput, SessionState};

use crate::Route;

#[component]
pub fn SignIn() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let now = use_second_tick();

    let mut email = use_signal(String::new);
    let mut otp = use_signal(String::new);
    let mut keep_logged_in = use_signal(|| false);
    let mut errors = use_signal(FieldErrors::default);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut failure = use_signal(|| Option::<String>::None);
    let mut sending = use_signal(|| false);
    let mut verifying = use_signal(|| false);
    let mut flow = use_signal(|| OtpFlow::new(OtpPurpose::SignIn));

    // Already signed in → straight to the notes.
    use_effect(move || {
        if !session().loading && session().user.is_some() {
            nav.replace(Route::Dashboard {});
        }
    });

    let handle_send = move |_| {
        spawn(async move {
            failure.set(None);
            let details = SignUpDetails {
                email: email(),
                ..SignUpDetails::default()
            };
            let request = match flow.read().begin_send(&details, auth::now_secs()) {
                Ok(request) => request,
                Err(FlowError::Invalid(field_errors)) => {
                    errors.set(field_errors);
                    return;
                }
                Err(_) => return,
            };
            errors.set(FieldErrors::default());
            sending.set(true);
            let result = HttpAuthApi::default().send_otp(&request).await;
            sending.set(false);
            match result {
                Ok(response) => {
                    let outcome = flow.write().sent(&request.email, response, auth::now_secs());
                    if let SendOutcome::CodeSent { message } = outcome {
                        notice.set(Some(message));
                    }
                }
                Err(error) => failure.set(Some(error.user_message())),
            }
        });
    };

    let handle_sign_in = move |_| {
        spawn(async move {
            failure.set(None);
            let request = match flow.read().begin_verify(&otp(), auth::now_secs()) {
                Ok(request) => request,
                Err(FlowError::MissingOtp) => {
                    errors.with_mut(|e| e.otp = Some(FlowError::MissingOtp.to_string()));
                    return;
                }
                Err(error) => {
                    failure.set(Some(error.to_string()));
                    return;
                }
            };
            verifying.set(true);
            let result = HttpAuthApi::default().verify_otp(&request).await;
            verifying.set(false);
            match result {
                Ok(response) => {
                    let record = flow.write().signed_in(&request.email, response);
                    if let Some(record) = record {
                        auth::remember(&ui::make_vault(), &record, keep_logged_in());
                        session.set(SessionState {
                            user: Some(record.identity),
                            loading: false,
                        });
                        nav.push(Route::Dashboard {});
                    }
                }
                // The flow stays in its phase; the field keeps its value for
                // correction and resend stays gated by its own cooldown.
                Err(error) => failure.set(Some(error.user_message())),
            }
        });
    };

    // The session check strictly precedes the form: render nothing until it
    // settles, and nothing while the authenticated redirect is in flight.
    if session().loading || session().user.is_some() {
        return rsx! {};
    }

    let exchange = flow.read().exchange().cloned();
    let code_pending = exchange.is_some();
    let resend_wait = exchange.as_ref().map(|e| e.resend_wait(now())).unwrap_or(0);
    let expires_in = exchange.as_ref().map(|e| e.expires_in(now())).unwrap_or(0);
    let expired = exchange.as_ref().is_some_and(|e| e.is_expired(now()));

    rsx! {
        div {
            class: "auth-layout",

            div {
                class: "auth-panel",
                div { class: "auth-logo", "HD" }

                div {
                    class: "auth-form",
                    h2 { "Sign in" }
                    p { class: "auth-subtitle", "Welcome back to HD" }

                    if let Some(message) = failure() {
                        div { class: "error-banner", "{message}" }
                    } else if let Some(message) = notice() {
                        div { class: "notice-banner", "{message}" }
                    }

                    fieldset {
                        legend { "Email" }
                        input {
                            r#type: "email",
                            placeholder: "jonas_kahnwald@gmail.com",
                            value: email(),
                            oninput: move |evt| {
                                email.set(evt.value());
                                errors.with_mut(|e| e.email = None);
                            },
                        }
                    }
                    if let Some(error) = errors().email {
                        p { class: "field-error", "{error}" }
                    }

                    if code_pending {
                        fieldset {
                            class: "otp-fieldset",
                            legend { "OTP" }
                            OtpInput {
                                value: otp(),
                                oninput: move |evt: FormEvent| {
                                    otp.set(evt.value());
                                    errors.with_mut(|e| e.otp = None);
                                },
                            }
                        }
                        if let Some(error) = errors().otp {
                            p { class: "field-error", "{error}" }
                        }
                        if expired {
                            p { class: "field-error", "This code has expired. Please request a new one." }
                        } else {
                            p { class: "otp-hint", "Code expires in {expires_in}s" }
                        }

                        button {
                            class: "link-button resend",
                            disabled: resend_wait > 0 || sending(),
                            onclick: handle_send,
                            if resend_wait > 0 {
                                "Resend OTP ({resend_wait}s)"
                            } else {
                                "Resend OTP"
                            }
                        }

                        label {
                            class: "keep-logged-in",
                            input {
                                r#type: "checkbox",
                                checked: keep_logged_in(),
                                onchange: move |evt| keep_logged_in.set(evt.checked()),
                            }
                            "Keep me logged in"
                        }

                        button {
                            class: "primary wide",
                            disabled: verifying(),
                            onclick: handle_sign_in,
                            if verifying() { "Signing in..." } else { "Sign in" }
                        }
                    } else {
                        button {
                            class: "primary wide",
                            disabled: sending(),
                            onclick: handle_send,
                            if sending() { "Sending OTP..." } else { "Send OTP" }
                        }
                    }

                    p {
                        class: "auth-footer",
                        "Need an account? "
                        Link { to: Route::SignUp {}, class: "text-link", "Create one" }
                    }
                }
            }

            div { class: "auth-aside" }
        }
    }
}
