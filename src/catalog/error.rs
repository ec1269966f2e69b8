//! catalog errors
use thiserror::Error;

/// an error building or querying the catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// no record with the identifier exists
    #[error("no theme with slug `{0}`")]
    NotFound(String),

    /// two records share an identifier
    #[error("duplicate theme slug `{0}`")]
    DuplicateSlug(String),

    /// a record failed validation
    #[error("invalid theme `{slug}`: {reason}")]
    InvalidRecord {
        /// the offending slug
        slug: String,
        /// what's wrong with it
        reason: String,
    },

    /// the catalog document couldn't be parsed
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    /// the catalog file couldn't be read
    #[error("failed to read catalog {path}: {source}")]
    Read {
        /// the catalog path
        path: String,
        /// the error itself
        #[source]
        source: std::io::Error,
    },
}
