use dioxus::prelude::*;
use tracing::Level;

use views::{Blog, BlogPost, Home, Navbar, PageNotFound};

mod blog;
mod components;
#[cfg(test)]
mod testing;
mod views;

/// The Route enum is used to define the structure of internal routes in our app. All route enums need to derive
/// the [`Routable`] trait, which provides the necessary methods for the router to work.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    // Every route below is wrapped in the Navbar layout, which renders the nav links, the error boundary and an
    // [`Outlet`] for the page itself.
    #[layout(Navbar)]
        #[route("/")]
        Home {},
        #[route("/blog")]
        Blog {},
        #[route("/blog/:slug")]
        BlogPost { slug: String },
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "JT" }
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
