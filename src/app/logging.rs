//! logging stuff
use {
    crate::{config::options::LoggingFormat, getopt, utils::string_to_log_level},
    color_eyre::Result,
    tracing::{Level, info, subscriber},
    tracing_subscriber::FmtSubscriber,
};

/// the resolved `logging` config section
#[derive(Debug, Clone)]
pub struct LogSettings {
    /// whether logging is on at all
    pub enable: bool,
    /// the configured level name
    pub level: String,
    /// the output format
    pub format: LoggingFormat,
    /// emit ANSI colors
    pub ansi: bool,
    /// show event targets
    pub event_targets: bool,
    /// show line numbers
    pub line_numbers: bool,
}

impl LogSettings {
    /// read the settings from the global config
    pub fn from_config() -> Self {
        Self {
            enable: getopt!(logging.enable),
            level: getopt!(logging.level),
            format: getopt!(logging.format),
            ansi: getopt!(logging.ansi),
            event_targets: getopt!(logging.event_targets),
            line_numbers: getopt!(logging.line_numbers),
        }
    }

    /// the max level to log at, `None` when nothing should be logged
    pub fn max_level(&self) -> Option<Level> {
        if !self.enable || self.level.eq_ignore_ascii_case("off") {
            return None;
        }

        Some(string_to_log_level(&self.level))
    }
}

/// setup logging from the global config
pub fn setup() -> Result<()> {
    install(&LogSettings::from_config())
}

/// install a global subscriber for the given settings
pub fn install(settings: &LogSettings) -> Result<()> {
    let Some(max_level) = settings.max_level() else {
        return Ok(());
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(max_level)
        .with_ansi(settings.ansi)
        .with_line_number(settings.line_numbers)
        .with_target(settings.event_targets);

    match settings.format {
        LoggingFormat::Pretty => subscriber::set_global_default(builder.pretty().finish())?,
        LoggingFormat::Compact => subscriber::set_global_default(builder.compact().finish())?,
    }

    info!("Logging at {} ({:?})", max_level, settings.format);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(enable: bool, level: &str) -> LogSettings {
        LogSettings {
            enable,
            level: level.to_string(),
            format: LoggingFormat::Compact,
            ansi: false,
            event_targets: false,
            line_numbers: false,
        }
    }

    #[test]
    fn test_max_level() {
        assert_eq!(settings(true, "debug").max_level(), Some(Level::DEBUG));
        assert_eq!(settings(true, "WARN").max_level(), Some(Level::WARN));
    }

    #[test]
    fn test_off_and_disabled_log_nothing() {
        assert_eq!(settings(true, "off").max_level(), None);
        assert_eq!(settings(false, "info").max_level(), None);
        assert!(install(&settings(false, "trace")).is_ok());
    }
}
