//! Blog posts stored as markdown files with a YAML front matter block.
//!
//! Each `<slug>.md` or `<slug>.mdx` file in the posts directory is one post. Everything that touches
//! the filesystem only exists on the server; the data types are shared with the client so they can
//! cross server functions.

mod dates;
#[cfg(feature = "server")]
mod errors;
mod front_matter;
mod post;

pub use dates::{format_date, format_date_relative};
#[cfg(feature = "server")]
pub use errors::{Error, Result};
#[cfg(feature = "server")]
pub use front_matter::split_front_matter;
pub use front_matter::Metadata;
pub use post::{Post, PostSummary};

#[cfg(feature = "server")]
use std::collections::HashMap;
#[cfg(feature = "server")]
use std::path::{Path, PathBuf};
#[cfg(feature = "server")]
use std::sync::LazyLock;

#[cfg(feature = "server")]
pub const DEFAULT_POSTS_DIR: &str = "posts";

#[cfg(feature = "server")]
const EXTENSIONS: [&str; 2] = ["mdx", "md"];

#[cfg(feature = "server")]
static STORE: LazyLock<Store> = LazyLock::new(|| {
    let path = std::env::var("POSTS_DIR").unwrap_or_else(|_| DEFAULT_POSTS_DIR.to_string());
    tracing::info!("Serving blog posts from {path}");
    Store::new(path)
});

#[cfg(feature = "server")]
pub fn get_store() -> &'static Store {
    &STORE
}

#[cfg(feature = "server")]
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

#[cfg(feature = "server")]
impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Every post in the directory, newest first.
    pub fn index(&self) -> Result<Vec<PostSummary>> {
        let directory = self
            .path
            .read_dir()
            .map_err(|error| Error::io(&self.path, error))?;

        let mut index = Vec::new();
        let mut seen: HashMap<String, PathBuf> = HashMap::new();
        for entry in directory {
            let entry = entry.map_err(|error| Error::io(&self.path, error))?;
            let path = entry.path();
            let file_type = entry
                .file_type()
                .map_err(|error| Error::io(&path, error))?;

            if !file_type.is_file() || !has_post_extension(&path) {
                tracing::debug!("Skipping {} in the posts directory", path.display());
                continue;
            }
            let Some(slug) = path.file_stem().and_then(|stem| stem.to_str()) else {
                tracing::warn!("Skipping post with a non utf-8 name: {}", path.display());
                continue;
            };

            if let Some(first) = seen.get(slug) {
                return Err(Error::front_matter(
                    &path,
                    format!("slug `{slug}` is also used by `{}`", first.display()),
                ));
            }
            seen.insert(slug.to_string(), path.clone());

            let (metadata, _) = read_post(&path)?;
            index.push(PostSummary {
                slug: slug.to_string(),
                metadata,
            });
        }

        sort_newest_first(&mut index);
        tracing::info!("Loaded {} posts from {}", index.len(), self.path.display());
        Ok(index)
    }

    /// The post called `slug`, with its body rendered to HTML.
    pub fn post(&self, slug: &str) -> Result<Post> {
        let not_found = || Error::NotFound {
            slug: slug.to_string(),
        };

        if !is_valid_slug(slug) {
            return Err(not_found());
        }

        let path = EXTENSIONS
            .iter()
            .map(|extension| self.path.join(format!("{slug}.{extension}")))
            .find(|path| path.is_file())
            .ok_or_else(not_found)?;
        tracing::debug!("slug \"{}\" points to file \"{}\"", slug, path.display());

        let (metadata, body) = read_post(&path)?;
        Ok(Post {
            slug: slug.to_string(),
            metadata,
            html_body: post::render_markdown(&body),
        })
    }
}

/// Runs [`Store::index`] off the async executor.
#[cfg(feature = "server")]
pub async fn load_index(store: Store) -> Result<Vec<PostSummary>> {
    tokio::task::spawn_blocking(move || store.index())
        .await
        .map_err(|e| Error::Task(e.to_string()))?
}

/// Runs [`Store::post`] off the async executor.
#[cfg(feature = "server")]
pub async fn load_post(store: Store, slug: String) -> Result<Post> {
    tokio::task::spawn_blocking(move || store.post(&slug))
        .await
        .map_err(|e| Error::Task(e.to_string()))?
}

#[cfg(feature = "server")]
fn read_post(path: &Path) -> Result<(Metadata, String)> {
    let text = std::fs::read_to_string(path).map_err(|error| Error::io(path, error))?;
    let (yaml, body) = split_front_matter(&text)
        .ok_or_else(|| Error::front_matter(path, "front matter is missing"))?;
    let metadata = Metadata::parse(yaml).map_err(|error| Error::front_matter(path, error.to_string()))?;
    Ok((metadata, body.to_string()))
}

#[cfg(feature = "server")]
fn has_post_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| EXTENSIONS.contains(&extension))
}

#[cfg(feature = "server")]
fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('.')
        && !slug.contains(['/', '\\'])
        && !slug.contains("..")
}

#[cfg(feature = "server")]
fn sort_newest_first(index: &mut [PostSummary]) {
    index.sort_by(|lhs, rhs| {
        rhs.metadata
            .published_at
            .cmp(&lhs.metadata.published_at)
            .then_with(|| lhs.slug.cmp(&rhs.slug))
    });
}
