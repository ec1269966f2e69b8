//! error handling stuff
use {crate::catalog::error::CatalogError, thiserror::Error};

#[derive(Debug, Error)]
/// An error
pub enum SpectrumError {
    /// an IO error
    #[error("i/o error: {0}")]
    IO(#[from] std::io::Error),

    /// a catalog error
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// a json error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// a toml serialization error
    #[error("toml serialization error: {0}")]
    TOMLSer(#[from] toml::ser::Error),

    /// a config error
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),

    /// a rocket error
    #[error("rocket error: {0}")]
    Rocket(#[from] Box<rocket::Error>),

    /// a report from color_eyre
    #[error("{0}")]
    EyreReport(#[from] color_eyre::Report),

    /// a report from miette
    #[error("{0}")]
    MietteReport(miette::Report),

    /// a miette hook install error
    #[error("error installing miette hook: {0}")]
    MietteInstall(#[from] miette::InstallError),

    /// an addr parse error
    #[error("error parsing address: {0}")]
    ParseAddr(#[from] std::net::AddrParseError),

    /// a custom error
    #[error("error: {0}")]
    Other(String),
}

impl From<String> for SpectrumError {
    fn from(value: String) -> Self {
        Self::Other(value)
    }
}

impl From<miette::Report> for SpectrumError {
    fn from(value: miette::Report) -> Self {
        Self::MietteReport(value)
    }
}

impl From<rocket::Error> for SpectrumError {
    fn from(value: rocket::Error) -> Self {
        Self::Rocket(Box::new(value))
    }
}

/// A result using [`SpectrumError`] as the `Err` variant
pub type Result<T, U = SpectrumError> = miette::Result<T, U>;

/// bail
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::error::SpectrumError::from(String::from($msg)))
    };

    ($err:expr $(,)?) => {
        return Err($crate::error::SpectrumError::from($err))
    };

    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::SpectrumError::from(format!($fmt, $($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fails(slug: &str) -> Result<()> {
        bail!("no theme with slug `{}`", slug)
    }

    #[test]
    fn test_bail_formats() {
        let err = fails("nope").unwrap_err();
        assert_eq!(err.to_string(), "error: no theme with slug `nope`");
    }

    #[test]
    fn test_catalog_error_converts() {
        let err: SpectrumError = CatalogError::NotFound("x".to_string()).into();
        assert!(matches!(err, SpectrumError::Catalog(CatalogError::NotFound(_))));
        assert_eq!(err.to_string(), "catalog error: no theme with slug `x`");
    }
}
