//! macros used by spectrum

/// implement [`Validate`](crate::config::validate::Validate) for a config struct
///
/// every listed field is an `Option`; `None` values are skipped
#[macro_export]
macro_rules! validator {
    ($struct_name:ty, $( $field:ident => $requirement:expr, $err_msg:expr );* $(;)? ) => {
        impl Validate for $struct_name {
            fn validate(&self) -> Result<(), Vec<String>> {
                let mut errors: Vec<String> = Vec::new();

                $(
                    if let Some(ref value) = self.$field {
                        if !($requirement)(value) {
                            errors.push(format!("{}: {}", stringify!($field), $err_msg));
                        }
                    }
                )*

                if errors.is_empty() {
                    Ok(())
                } else {
                    Err(errors)
                }
            }
        }
    };
}

/// get the current value of a given setting
///
/// falls back to the built-in default when the setting is missing
///
/// # Examples
///
/// ```no_run
/// use spectrum::getopt;
///
/// let port: u16 = getopt!(server.port);
/// ```
#[macro_export]
macro_rules! getopt {
    ($field:ident) => {{
        $crate::config::instance::get_or_default(
            |c| c.$field.clone(),
            $crate::config::options::Spectrum::default()
                .$field
                .expect(concat!("Default value missing for: ", stringify!($field))),
        )
    }};

    ($lvl1:ident . $field:ident) => {{
        $crate::config::instance::get_or_default(
            |c| c.$lvl1.as_ref().and_then(|sub| sub.$field.clone()),
            $crate::config::options::Spectrum::default()
                .$lvl1
                .and_then(|sub| sub.$field)
                .expect(concat!(
                    "Default value missing for: ",
                    stringify!($lvl1),
                    ".",
                    stringify!($field)
                )),
        )
    }};
}

#[cfg(test)]
mod tests {
    use crate::config::validate::Validate;

    /// a config struct for exercising the validator
    struct Sample {
        /// must be even
        even: Option<u32>,
        /// must not be blank
        name: Option<String>,
    }

    validator! { Sample,
        even => |v: &u32| v % 2 == 0,
            "must be even";
        name => |v: &String| !v.trim().is_empty(),
            "must not be empty";
    }

    #[test]
    fn test_validator_collects_every_error() {
        let sample = Sample {
            even: Some(3),
            name: Some("  ".to_string()),
        };

        assert_eq!(
            sample.validate().unwrap_err(),
            vec!["even: must be even", "name: must not be empty"]
        );
    }

    #[test]
    fn test_validator_skips_none() {
        let sample = Sample {
            even: None,
            name: None,
        };

        assert!(sample.is_valid());
    }

    #[test]
    fn test_validator_passes() {
        let sample = Sample {
            even: Some(4),
            name: Some("spectrum".to_string()),
        };

        assert!(sample.validate().is_ok());
    }
}
