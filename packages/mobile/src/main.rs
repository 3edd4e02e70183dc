use dioxus::prelude::*;
use views::{AuthLayout, Create, Discover, Login, Messages, Profile, Search, Signup, TabLayout};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AuthLayout)]
        #[route("/login")]
        Login {},
        #[route("/signup")]
        Signup {},
    #[end_layout]
    #[layout(TabLayout)]
        #[route("/")]
        Discover {},
        #[route("/search")]
        Search {},
        #[route("/create")]
        Create {},
        #[route("/messages")]
        Messages {},
        #[route("/profile")]
        Profile {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(ui::load_config);
    let css = ui::stylesheet();

    rsx! {
        style { "{css}" }
        ui::SessionProvider {
            Router::<Route> {}
        }
    }
}
