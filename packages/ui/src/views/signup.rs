//! Account creation screen.

use dioxus::prelude::*;

use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::icons::{FaEnvelope, FaEye, FaEyeSlash, FaLock, FaUser};
use crate::{sign_up, use_session, Icon};

const HERO_IMAGE: &str = "https://images.pexels.com/photos/3184465/pexels-photo-3184465.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";
const MISSING_FIELDS: &str = "Please fill in all fields";
const SIGNUP_ERROR: &str = "Failed to create account";

#[component]
pub fn SignupView(on_sign_in: EventHandler<()>) -> Element {
    let mut session = use_session();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut error = use_signal(|| Option::<&'static str>::None);

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let (n, e, p) = (name(), email(), password());
        if n.is_empty() || e.is_empty() || p.is_empty() {
            error.set(Some(MISSING_FIELDS));
            return;
        }
        if let Err(err) = sign_up(&mut session, &n, &e, &p) {
            tracing::debug!("Sign-up rejected: {}", err);
            error.set(Some(SIGNUP_ERROR));
        }
    };

    rsx! {
        div {
            class: "auth",
            img { class: "auth-hero", src: HERO_IMAGE, alt: "" }

            h1 { class: "screen-title", "Create Account" }
            p { class: "subtitle", style: "margin-bottom: 24px;", "Join our community of freelancers and clients" }

            if let Some(err) = error() {
                div { class: "error-box", "{err}" }
            }

            form {
                onsubmit: handle_signup,

                div {
                    class: "field",
                    Icon { icon: FaUser, width: 18, height: 18 }
                    input {
                        r#type: "text",
                        placeholder: "Full Name",
                        value: "{name}",
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                }

                div {
                    class: "field",
                    Icon { icon: FaEnvelope, width: 18, height: 18 }
                    input {
                        r#type: "email",
                        placeholder: "Email",
                        value: "{email}",
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }

                div {
                    class: "field",
                    Icon { icon: FaLock, width: 18, height: 18 }
                    input {
                        r#type: if show_password() { "text" } else { "password" },
                        placeholder: "Password",
                        value: "{password}",
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                    button {
                        class: "icon-btn",
                        r#type: "button",
                        onclick: move |_| show_password.set(!show_password()),
                        if show_password() {
                            Icon { icon: FaEyeSlash, width: 18, height: 18 }
                        } else {
                            Icon { icon: FaEye, width: 18, height: 18 }
                        }
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Lg,
                    r#type: "submit",
                    "Create Account"
                }
            }

            p {
                class: "muted",
                style: "text-align: center; margin-top: 24px;",
                "Already have an account? "
                button {
                    class: "link",
                    onclick: move |_| on_sign_in.call(()),
                    "Sign In"
                }
            }
        }
    }
}
