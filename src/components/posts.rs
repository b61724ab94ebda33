use crate::blog::{format_date, PostSummary};
use crate::Route;
use dioxus::prelude::*;

#[server]
pub async fn list_posts() -> Result<Vec<PostSummary>, ServerFnError> {
    let store = crate::blog::get_store().clone();

    crate::blog::load_index(store)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Every post, newest first. Load failures are propagated to the nearest error boundary.
#[component]
pub fn BlogPosts() -> Element {
    let posts = use_loader(list_posts)?;

    rsx! {
        PostList { posts: posts.read().clone() }
    }
}

#[component]
pub fn PostList(posts: Vec<PostSummary>) -> Element {
    rsx! {
        div {
            for post in posts {
                Link {
                    key: "{post.slug}",
                    class: "flex flex-col space-y-1 mb-4",
                    to: Route::BlogPost { slug: post.slug.clone() },
                    div {
                        class: "w-full flex flex-col md:flex-row space-x-0 md:space-x-2",
                        p {
                            class: "text-neutral-600 dark:text-neutral-400 w-[100px] tabular-nums",
                            {format_date(post.metadata.published_at)}
                        }
                        p {
                            class: "text-neutral-900 dark:text-neutral-100 tracking-tight",
                            "{post.metadata.title}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blog::Metadata;
    use crate::testing::{position, render};
    use chrono::NaiveDate;

    #[derive(Debug, Clone, PartialEq, Routable)]
    enum ListingRoute {
        #[route("/")]
        Listing {},
    }

    fn summary(slug: &str, title: &str, published_at: NaiveDate) -> PostSummary {
        PostSummary {
            slug: slug.to_string(),
            metadata: Metadata {
                title: title.to_string(),
                published_at,
                summary: String::new(),
                image: None,
            },
        }
    }

    #[component]
    fn Listing() -> Element {
        let posts = vec![
            summary("static-typing", "Static Typing", NaiveDate::from_ymd_opt(2024, 4, 9).unwrap()),
            summary("spaces-vs-tabs", "Spaces vs. Tabs", NaiveDate::from_ymd_opt(2023, 12, 25).unwrap()),
        ];
        rsx! {
            PostList { posts }
        }
    }

    fn listing_app() -> Element {
        rsx! {
            Router::<ListingRoute> {}
        }
    }

    #[test]
    fn links_every_post_in_the_given_order() {
        let html = render(listing_app);

        assert_eq!(html.matches("href=\"/blog/").count(), 2);
        let first = position(&html, "href=\"/blog/static-typing\"");
        let second = position(&html, "href=\"/blog/spaces-vs-tabs\"");
        assert!(first < second);

        assert!(first < position(&html, "April 9, 2024"));
        assert!(position(&html, "April 9, 2024") < position(&html, "Static Typing"));
        assert!(second < position(&html, "December 25, 2023"));
        assert!(position(&html, "December 25, 2023") < position(&html, "Spaces vs. Tabs"));
    }
}
