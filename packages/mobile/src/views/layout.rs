//! Layouts that gate routes on the session.

use dioxus::prelude::*;
use ui::icons::{FaCirclePlus, FaCircleUser, FaComments, FaHouse, FaMagnifyingGlass};
use ui::{use_session, Icon};

use crate::Route;

/// Wraps the sign-in/sign-up screens; signed-in users go straight to the feed.
#[component]
pub fn AuthLayout() -> Element {
    let session = use_session();
    let navigator = use_navigator();

    use_effect(move || {
        let state = session.read();
        if !state.loading && state.store.is_authenticated() {
            navigator.replace(Route::Discover {});
        }
    });

    if session.read().loading {
        return rsx! { Loading {} };
    }

    rsx! {
        Outlet::<Route> {}
    }
}

/// Wraps the tabbed screens; anonymous users are sent to sign in.
#[component]
pub fn TabLayout() -> Element {
    let session = use_session();
    let navigator = use_navigator();

    use_effect(move || {
        let state = session.read();
        if !state.loading && !state.store.is_authenticated() {
            navigator.replace(Route::Login {});
        }
    });

    let ready = {
        let state = session.read();
        !state.loading && state.store.is_authenticated()
    };
    if !ready {
        return rsx! { Loading {} };
    }

    rsx! {
        Outlet::<Route> {}
        nav {
            class: "tab-bar",
            Link {
                to: Route::Discover {},
                active_class: "active",
                Icon { icon: FaHouse, width: 20, height: 20 }
                span { "Discover" }
            }
            Link {
                to: Route::Search {},
                active_class: "active",
                Icon { icon: FaMagnifyingGlass, width: 20, height: 20 }
                span { "Search" }
            }
            Link {
                to: Route::Create {},
                active_class: "active",
                Icon { icon: FaCirclePlus, width: 20, height: 20 }
                span { "Create" }
            }
            Link {
                to: Route::Messages {},
                active_class: "active",
                Icon { icon: FaComments, width: 20, height: 20 }
                span { "Messages" }
            }
            Link {
                to: Route::Profile {},
                active_class: "active",
                Icon { icon: FaCircleUser, width: 20, height: 20 }
                span { "Profile" }
            }
        }
    }
}

#[component]
fn Loading() -> Element {
    rsx! {
        div { class: "loading", "Loading..." }
    }
}
