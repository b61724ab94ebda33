use crate::blog::{format_date_relative, Post};
use crate::components::BlogPosts;
use crate::Route;
use chrono::Local;
use dioxus::prelude::*;

#[server]
pub async fn get_post(slug: String) -> Result<Post, ServerFnError> {
    let store = crate::blog::get_store().clone();

    crate::blog::load_post(store, slug)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// The Blog page component that will be rendered when the current route is `[Route::Blog]`
#[component]
pub fn Blog() -> Element {
    rsx! {
        section {
            h1 { class: "font-semibold text-2xl mb-8 tracking-tighter", "My Blog" }
            BlogPosts {}
        }
    }
}

/// A single post, rendered when the current route is `[Route::BlogPost]`
#[component]
pub fn BlogPost(slug: String) -> Element {
    let post = use_loader(move || get_post(slug.clone()))?;
    let post = post.read();
    let published = format_date_relative(post.metadata.published_at, Local::now().date_naive());

    rsx! {
        document::Title { "{post.metadata.title}" }
        document::Meta { name: "description", content: "{post.metadata.summary}" }
        section {
            Link {
                to: Route::Blog {},
                class: "text-sm text-neutral-600 dark:text-neutral-400 hover:underline",
                "← All posts"
            }
            h1 { class: "title font-semibold text-2xl tracking-tighter mt-4", "{post.metadata.title}" }
            div {
                class: "flex justify-between items-center mt-2 mb-8 text-sm",
                p { class: "text-sm text-neutral-600 dark:text-neutral-400", "{published}" }
            }
            article {
                class: "prose",
                dangerous_inner_html: "{post.html_body}",
            }
        }
    }
}
