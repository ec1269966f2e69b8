//! every available configuration option and its type is listed in this file
use {
    crate::config::validate::{Validate, format_validation_errors},
    color_eyre::{
        Section, SectionExt,
        eyre::{Context, OptionExt, Result, eyre},
    },
    config::{Config, ConfigBuilder},
    schemars::JsonSchema,
    serde::{Deserialize, Serialize},
    smart_default::SmartDefault,
    std::path::{Path, PathBuf},
    tracing::info,
};

/// the name of the config file, both global and local
pub const CONFIG_FILE_NAME: &str = "spectrum.toml";

/// Settings for the storefront HTTP server
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct ServerCfg {
    /// The address to bind to
    #[default(Some("127.0.0.1".to_string()))]
    pub address: Option<String>,

    /// The port to listen on
    #[default(Some(23795))]
    pub port: Option<u16>,

    /// The number of worker threads rocket should use
    #[default(Some(4))]
    pub workers: Option<usize>,
}

/// Settings for the theme catalog
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct CatalogCfg {
    /// Path to a TOML catalog file that replaces the built-in catalog
    ///
    /// Leave empty to use the catalog shipped with the binary.
    #[default(Some(String::new()))]
    pub path: Option<String>,
}

/// Settings for how the storefront presents the catalog
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct StorefrontCfg {
    /// How many themes to feature in the hero section
    #[default(Some(3))]
    pub featured_count: Option<usize>,

    /// How many related themes to show on a detail page
    #[default(Some(3))]
    pub related_limit: Option<usize>,

    /// How many tags to show on a catalog card
    #[default(Some(4))]
    pub card_tag_limit: Option<usize>,

    /// How many "did you mean" suggestions to offer for unknown slugs
    #[default(Some(3))]
    pub suggestion_limit: Option<usize>,

    /// The similarity threshold for "did you mean" suggestions (0.0 - 1.0)
    #[default(Some(0.6))]
    pub suggestion_threshold: Option<f64>,

    /// The address shown on "request a custom theme" links
    #[default(Some("hello@spectrumthemes.dev".to_string()))]
    pub contact_email: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, JsonSchema, SmartDefault)]
/// The format to log in
pub enum LoggingFormat {
    /// Use the compact output format
    Compact,

    /// Use an excessively pretty output format
    #[default]
    Pretty,
}

/// Settings for logging
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct LoggingConfig {
    /// Enable logging
    #[default(Some(true))]
    pub enable: Option<bool>,

    /// The max level to log at
    #[default(Some("info".to_string()))]
    pub level: Option<String>,

    /// The output format
    #[default(Some(LoggingFormat::Compact))]
    pub format: Option<LoggingFormat>,

    /// Enable ANSI escape codes for colors and stuff
    #[default(Some(true))]
    pub ansi: Option<bool>,

    /// Display event targets in log messages
    #[default(Some(false))]
    pub event_targets: Option<bool>,

    /// Display line numbers in log messages
    #[default(Some(false))]
    pub line_numbers: Option<bool>,
}

/// spectrum configuration options
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct Spectrum {
    /// Configuration file version (do not modify manually)
    #[default(Some(1))]
    pub version: Option<u32>,

    /// Server settings
    #[default(Some(ServerCfg::default()))]
    pub server: Option<ServerCfg>,

    /// Catalog settings
    #[default(Some(CatalogCfg::default()))]
    pub catalog: Option<CatalogCfg>,

    /// Storefront settings
    #[default(Some(StorefrontCfg::default()))]
    pub storefront: Option<StorefrontCfg>,

    /// Logging settings
    #[default(Some(LoggingConfig::default()))]
    pub logging: Option<LoggingConfig>,
}

impl Spectrum {
    /// load config from default locations
    ///
    /// load prio: env > local > global > defaults
    pub fn load() -> Result<Self> {
        let global_config_path = Self::global_config_path()?;
        let defaults = Self::load_defaults()?;
        let mut builder = Self::create_builder(&defaults)?;

        builder = builder.add_source(config::File::from(global_config_path.as_path()).required(false));

        if let Some(local_config) = Self::find_local_config()? {
            builder = builder.add_source(config::File::from(local_config.as_path()).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("SPECTRUM")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder.build().wrap_err("Failed to build configuration")?;
        let cfg: Spectrum = settings
            .try_deserialize::<Spectrum>()
            .wrap_err("Failed to deserialize configuration")?;

        cfg.run_validation()?;
        info!("Configuration validation successful");

        if !global_config_path.exists() {
            Self::create_default_config(&global_config_path, &defaults)?;
        }

        Ok(cfg)
    }

    /// get the global config file path
    pub fn global_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_eyre("Unable to determine system config directory")
            .suggestion("Ensure XDG_CONFIG_HOME or HOME environment variables are set")
            .suggestion("On Windows, APPDATA should be set")?;

        Ok(config_dir.join(CONFIG_FILE_NAME))
    }

    /// load default config from the embedded default config file
    pub fn load_defaults() -> Result<Self> {
        toml::from_str(include_str!("../../resources/spectrum.default.toml"))
            .wrap_err("Failed to parse embedded default configuration")
            .note("This is a bug - the embedded defaults are malformed")
    }

    /// create a config builder with defaults
    fn create_builder(defaults: &Spectrum) -> Result<ConfigBuilder<config::builder::DefaultState>> {
        let config_source = Config::try_from(defaults)
            .wrap_err("Failed to convert default config to a config source")?;

        Ok(Config::builder().add_source(config_source))
    }

    /// run validation and return a pretty error if it fails
    pub fn run_validation(&self) -> Result<()> {
        self.validate()
            .map_err(|errors| eyre!(format_validation_errors(&errors)))
            .wrap_err("config validation failed")
            .suggestion("Check your spectrum.toml for invalid values")
            .suggestion("Run `spectrum --gen-default` to see valid options")
    }

    /// find the nearest local config file, walking up from the working directory
    fn find_local_config() -> Result<Option<PathBuf>> {
        let curr_dir = std::env::current_dir()
            .wrap_err("Failed to get current working directory")
            .suggestion("Ensure the current directory exists and is accessible")?;

        Ok(Self::find_config_from(&curr_dir))
    }

    /// find a config file in `dir` or any of its ancestors
    pub fn find_config_from(dir: &Path) -> Option<PathBuf> {
        dir.ancestors()
            .map(|ancestor| ancestor.join(CONFIG_FILE_NAME))
            .find(|path| path.exists())
    }

    /// create the default config file
    fn create_default_config(path: &Path, defaults: &Spectrum) -> Result<()> {
        let config_dir = path
            .parent()
            .ok_or_eyre("Unable to determine parent directory of config path")?;

        std::fs::create_dir_all(config_dir)
            .wrap_err("Failed to create config directory")
            .with_section(|| format!("{}", config_dir.display()).header("Directory:"))?;

        defaults
            .save_to_file(path)
            .wrap_err("Failed to write default configuration file")?;

        info!("Wrote default configuration to {}", path.display());
        Ok(())
    }

    /// save config to a file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let toml_str =
            toml::to_string_pretty(self).wrap_err("Failed to serialize config to TOML")?;

        std::fs::write(path, &toml_str)
            .wrap_err_with(|| format!("Failed to write config file: {}", path.display()))
            .with_section(|| path.display().to_string().header("File path"))
            .with_section(|| format!("{} bytes", toml_str.len()).header("Content size:"))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_defaults_match() {
        let embedded = Spectrum::load_defaults().unwrap();
        let defaults = Spectrum::default();

        assert_eq!(
            toml::to_string_pretty(&embedded).unwrap(),
            toml::to_string_pretty(&defaults).unwrap()
        );
    }

    #[test]
    fn test_defaults_validate() {
        assert!(Spectrum::default().run_validation().is_ok());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        let mut cfg = Spectrum::default();
        cfg.server = Some(ServerCfg {
            port: Some(8080),
            ..ServerCfg::default()
        });
        cfg.save_to_file(&path).unwrap();

        let loaded: Spectrum = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.server.and_then(|s| s.port), Some(8080));
    }

    #[test]
    fn test_find_config_from_ancestors() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "").unwrap();

        assert_eq!(
            Spectrum::find_config_from(&nested),
            Some(dir.path().join(CONFIG_FILE_NAME))
        );
    }
}
