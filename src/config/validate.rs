//! configuration validation stuff
use crate::{config::options::*, validator};

/// trait for validating config structs
pub trait Validate {
    /// validate the config
    fn validate(&self) -> Result<(), Vec<String>>;

    /// check if the config is valid
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

validator! { ServerCfg,
    address => |v: &String| v.parse::<std::net::IpAddr>().is_ok(),
        "must be a valid IP address";
    port => |v: &u16| *v > 0,
        "must be a valid port (1-65535)";
    workers => |v: &usize| *v > 0,
        "must be greater than 0";
}

validator! { CatalogCfg,
    path => |v: &String| v.trim().is_empty() || v.ends_with(".toml"),
        "must be empty or point at a .toml file";
}

validator! { StorefrontCfg,
    featured_count => |v: &usize| *v <= 12,
        "must be between 0 and 12";
    related_limit => |v: &usize| *v <= 12,
        "must be between 0 and 12";
    card_tag_limit => |v: &usize| *v > 0,
        "must be greater than 0";
    suggestion_threshold => |v: &f64| (0.0..=1.0).contains(v),
        "must be between 0.0 and 1.0";
    contact_email => |v: &String| v.contains('@'),
        "must be an email address";
}

/// valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

validator! { LoggingConfig,
    level => |v: &String| VALID_LOG_LEVELS.contains(&v.to_lowercase().as_str()),
        "must be one of: trace, debug, info, warn, error, off";
}

impl Validate for Spectrum {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors: Vec<String> = Vec::new();

        macro_rules! validate_nested {
            ($($field:ident),* $(,)?) => {
                $(
                    if let Some(ref nested) = self.$field
                        && let Err(nested_errors) = nested.validate()
                    {
                        for err in nested_errors {
                            errors.push(format!("{}.{}", stringify!($field), err));
                        }
                    }
                )*
            };
        }

        validate_nested!(server, catalog, storefront, logging);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// format validation errors for display
pub fn format_validation_errors(errors: &[String]) -> String {
    let mut output = String::from("Configuration validation failed:\n");
    for (i, err) in errors.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, err));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Spectrum::default().is_valid());
    }

    #[test]
    fn test_bad_port_and_level() {
        let mut cfg = Spectrum::default();
        cfg.server = Some(ServerCfg {
            port: Some(0),
            ..ServerCfg::default()
        });
        cfg.logging = Some(LoggingConfig {
            level: Some("loud".to_string()),
            ..LoggingConfig::default()
        });

        let errors = cfg.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("server.port"));
        assert!(errors[1].starts_with("logging.level"));
    }

    #[test]
    fn test_missing_values_are_skipped() {
        let cfg = StorefrontCfg {
            featured_count: None,
            related_limit: None,
            card_tag_limit: None,
            suggestion_limit: None,
            suggestion_threshold: None,
            contact_email: None,
        };

        assert!(cfg.is_valid());
    }

    #[test]
    fn test_format_errors() {
        let formatted = format_validation_errors(&["a: bad".to_string(), "b: worse".to_string()]);
        assert_eq!(
            formatted,
            "Configuration validation failed:\n  1. a: bad\n  2. b: worse\n"
        );
    }
}
