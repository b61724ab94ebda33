use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        section {
            h1 { class: "mb-8 text-2xl font-semibold tracking-tighter", "404 - Page Not Found" }
            p { class: "mb-4", "Nothing lives at /{path}." }
            Link { class: "hover:underline", to: Route::Home {}, "Back home" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::render;

    #[derive(Debug, Clone, PartialEq, Routable)]
    enum MissingRoute {
        #[route("/")]
        Missing {},
    }

    #[component]
    fn Missing() -> Element {
        rsx! {
            PageNotFound { segments: vec!["projects".to_string(), "huebot".to_string()] }
        }
    }

    fn missing_app() -> Element {
        rsx! {
            Router::<MissingRoute> {}
        }
    }

    #[test]
    fn names_the_missing_path_and_links_home() {
        let html = render(missing_app);

        assert!(html.contains("404 - Page Not Found"));
        assert!(html.contains("Nothing lives at /projects/huebot."));
        assert!(html.contains("href=\"/\""));
    }
}
