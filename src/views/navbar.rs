use crate::Route;
use dioxus::prelude::*;

/// The Navbar component that will be rendered on all pages of our app since every page is under the layout.
///
///
/// This layout component wraps the UI of [Route::Home] and the blog routes in a common navbar. The contents of the
/// routes will be rendered under the outlet inside this component. Errors thrown by a page, like a post that failed to
/// load, end up in the error boundary here.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        main {
            class: "max-w-xl mx-4 mt-8 lg:mx-auto",
            nav { id: "navbar", class: "flex flex-row space-x-4 mb-12 tracking-tight",
                Link { class: "nav-link", to: Route::Home {}, "home" }
                Link { class: "nav-link", to: Route::Blog {}, "blog" }
            }

            ErrorBoundary {
                handle_error: page_error,
                // The `Outlet` component is used to render the next component inside the layout. Pages that are still
                // loading their data suspend into the fallback below.
                SuspenseBoundary {
                    fallback: move |_| rsx! {
                        div {
                            width: "100%",
                            height: "100%",
                            display: "flex",
                            align_items: "center",
                            justify_content: "center",
                            "Loading..."
                        }
                    },
                    Outlet::<Route> {}
                }
            }
        }
    }
}

/// Shown in place of a page whose component returned an error.
pub fn page_error(_: ErrorContext) -> Element {
    rsx! {
        div {
            class: "rounded border border-red-400 p-4 text-red-600",
            h2 { class: "font-semibold mb-2", "Something went wrong" }
            p { class: "text-sm", "This page could not be loaded. Please try again later." }
        }
    }
}
