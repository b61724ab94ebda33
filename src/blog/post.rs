use serde::{Deserialize, Serialize};

use crate::blog::Metadata;

/// Index entry for one post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    pub slug: String,
    pub metadata: Metadata,
}

/// A post with its body already rendered to HTML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub slug: String,
    pub metadata: Metadata,
    pub html_body: String,
}

#[cfg(feature = "server")]
pub fn render_markdown(markdown: &str) -> String {
    use pulldown_cmark::{html, Options, Parser};

    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let mut html_body = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut html_body, Parser::new_ext(markdown, options));
    html_body
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;

    #[test]
    fn renders_common_markdown() {
        let html = render_markdown("## Setup\n\nRun `cargo run`, then ~~pray~~ wait.\n");
        assert!(html.contains("<h2>Setup</h2>"));
        assert!(html.contains("<code>cargo run</code>"));
        assert!(html.contains("<del>pray</del>"));
    }

    #[test]
    fn renders_tables() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>2</td>"));
    }
}
