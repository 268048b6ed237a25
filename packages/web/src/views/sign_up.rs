//! Sign-up view: name, date of birth and email, then OTP verification.

use api::{AuthApi, HttpAuthApi, OtpPurpose};
use auth::{FieldErrors, FlowError, OtpFlow, SendOutcome, SignUpDetails};
use dioxus::prelude::*;
use ui::icons::FaCalendarDays;
use ui::{use_second_tick, use_session, Icon, OtpInput, SessionState};

use crate::Route;

#[component]
pub fn SignUp() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let now = use_second_tick();

    let mut name = use_signal(String::new);
    let mut dob = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut otp = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::default);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut failure = use_signal(|| Option::<String>::None);
    let mut sending = use_signal(|| false);
    let mut verifying = use_signal(|| false);
    let mut flow = use_signal(|| OtpFlow::new(OtpPurpose::SignUp));

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
                name: name(),
                dob: dob(),
                email: email(),
            };
            let request = match flow.read().begin_send(&details, auth::now_secs()) {
                Ok(request) => request,
                Err(FlowError::Invalid(field_errors)) => {
                    errors.set(field_errors);
                    return;
                }
                // The resend control is disabled through its cooldown, so a
                // gated attempt landing here is a no-op.
                Err(_) => return,
            };
            errors.set(FieldErrors::default());
            sending.set(true);
            let result = HttpAuthApi::default().send_otp(&request).await;
            sending.set(false);
            match result {
                Ok(response) => {
                    let outcome = flow.write().sent(&request.email, response, auth::now_secs());
                    match outcome {
                        SendOutcome::CodeSent { message } => notice.set(Some(message)),
                        // Account exists and is verified: go sign in instead.
                        SendOutcome::AlreadyRegistered => {
                            nav.push(Route::SignIn {});
                        }
                    }
                }
                Err(error) => failure.set(Some(error.user_message())),
            }
        });
    };

    let handle_sign_up = move |_| {
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
                        // No "keep me logged in" on sign-up: tab-scoped tier.
                        auth::remember(&ui::make_vault(), &record, false);
                        session.set(SessionState {
                            user: Some(record.identity),
                            loading: false,
                        });
                        nav.push(Route::Dashboard {});
                    }
                }
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
                    h2 { "Sign up" }
                    p { class: "auth-subtitle", "Sign up to enjoy the features of HD" }

                    if let Some(message) = failure() {
                        div { class: "error-banner", "{message}" }
                    } else if let Some(message) = notice() {
                        div { class: "notice-banner", "{message}" }
                    }

                    fieldset {
                        legend { "Your Name" }
                        input {
                            r#type: "text",
                            placeholder: "Jonas Kahnwald",
                            value: name(),
                            oninput: move |evt| {
                                name.set(evt.value());
                                errors.with_mut(|e| e.name = None);
                            },
                        }
                    }
                    if let Some(error) = errors().name {
                        p { class: "field-error", "{error}" }
                    }

                    fieldset {
                        legend { "Date of Birth" }
                        div {
                            class: "input-with-icon",
                            input {
                                r#type: "date",
                                value: dob(),
                                oninput: move |evt| {
                                    dob.set(evt.value());
                                    errors.with_mut(|e| e.dob = None);
                                },
                            }
                            Icon { icon: FaCalendarDays, width: 14, height: 14 }
                        }
                    }
                    if let Some(error) = errors().dob {
                        p { class: "field-error", "{error}" }
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

                        button {
                            class: "primary wide",
                            disabled: verifying(),
                            onclick: handle_sign_up,
                            if verifying() { "Signing up..." } else { "Sign up" }
                        }
                    } else {
                        button {
                            class: "primary wide",
                            disabled: sending(),
                            onclick: handle_send,
                            if sending() { "Sending OTP..." } else { "Get OTP" }
                        }
                    }

                    p {
                        class: "auth-footer",
                        "Already have an account? "
                        Link { to: Route::SignIn {}, class: "text-link", "Sign in" }
                    }
                }
            }

            div { class: "auth-aside" }
        }
    }
}
