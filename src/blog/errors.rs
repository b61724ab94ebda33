use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("could not read `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid front matter in `{path}`: {reason}")]
    FrontMatter { path: PathBuf, reason: String },

    #[error("no post with slug `{slug}`")]
    NotFound { slug: String },

    #[error("blog store task failed: {0}")]
    Task(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn front_matter(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::FrontMatter {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
