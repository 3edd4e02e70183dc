use dioxus::prelude::*;
use ui::views::{LoginView, SignupView};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    rsx! {
        LoginView {
            on_sign_up: move |_| {
                nav.push(Route::Signup {});
            },
        }
    }
}

#[component]
pub fn Signup() -> Element {
    let nav = use_navigator();
    rsx! {
        SignupView {
            on_sign_in: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}
