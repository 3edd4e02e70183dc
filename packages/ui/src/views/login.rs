//! Sign-in screen with email/password form.

use dioxus::prelude::*;

use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::icons::{FaEnvelope, FaEye, FaEyeSlash, FaLock};
use crate::{sign_in, use_session, Icon};

const HERO_IMAGE: &str = "https://images.pexels.com/photos/3183150/pexels-photo-3183150.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";
const LOGIN_ERROR: &str = "Invalid email or password";

/// Shared login view. Platform packages handle navigation after sign-in by
/// watching the session.
#[component]
pub fn LoginView(on_sign_up: EventHandler<()>) -> Element {
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut error = use_signal(|| Option::<&'static str>::None);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);
        if sign_in(&mut session, &email(), &password()).is_err() {
            error.set(Some(LOGIN_ERROR));
        }
    };

    rsx! {
        div {
            class: "auth",
            img { class: "auth-hero", src: HERO_IMAGE, alt: "" }

            h1 { class: "screen-title", "Welcome Back" }
            p { class: "subtitle", style: "margin-bottom: 24px;", "Sign in to continue building amazing projects" }

            if let Some(err) = error() {
                div { class: "error-box", "{err}" }
            }

            form {
                onsubmit: handle_login,

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
                    "Sign In"
                }
            }

            p {
                class: "muted",
                style: "text-align: center; margin-top: 24px;",
                "Don't have an account? "
                button {
                    class: "link",
                    onclick: move |_| on_sign_up.call(()),
                    "Sign Up"
                }
            }
        }
    }
}
