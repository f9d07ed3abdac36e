//! Pure conversion functions: TOML config structs and CLI overrides -> picker config.

use anyhow::{Context, Result};

use kalends_calendar::DateBound;
use kalends_picker::{PickerConfig, YearSpan};

use crate::cli::PickerArgs;
use crate::config::{DisplayToml, KalendsConfig, PickerToml};

/// Parses an ISO `YYYY-MM-DD` date from the config file.
pub fn parse_date(s: &str, key: &str) -> Result<DateBound> {
    s.parse::<DateBound>()
        .with_context(|| format!("invalid date for [picker].{key}"))
}

/// Builds a [`PickerConfig`] from the TOML sections.
pub fn build_picker_config(picker: &PickerToml, display: &DisplayToml) -> Result<PickerConfig> {
    let mut cfg = PickerConfig::new()
        .with_month_menu(picker.month_menu)
        .with_heading_len(display.heading_len);
    if let Some(ref min) = picker.min {
        cfg = cfg.with_min(parse_date(min, "min")?);
    }
    if let Some(ref max) = picker.max {
        cfg = cfg.with_max(parse_date(max, "max")?);
    }
    if let Some(ref span) = picker.year_menu {
        cfg = cfg.with_year_menu(YearSpan {
            from: span.from,
            to: span.to,
        });
    }
    Ok(cfg)
}

/// Builds the effective [`PickerConfig`]: file values first, then CLI flags.
pub fn resolve_picker_config(config: &KalendsConfig, args: &PickerArgs) -> Result<PickerConfig> {
    let mut cfg = build_picker_config(&config.picker, &config.display)?;
    if let Some(min) = args.min {
        cfg = cfg.with_min(min);
    }
    if let Some(max) = args.max {
        cfg = cfg.with_max(max);
    }
    cfg.validate().context("invalid picker configuration")?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::YearMenuToml;

    #[test]
    fn dates_are_converted() {
        let picker = PickerToml {
            min: Some("2014-05-02".to_string()),
            max: Some("2014-06-03".to_string()),
            ..PickerToml::default()
        };
        let cfg = build_picker_config(&picker, &DisplayToml::default()).unwrap();
        assert_eq!(cfg.min(), Some(DateBound::from_triple(2014, 4, 2)));
        assert_eq!(cfg.max(), Some(DateBound::from_triple(2014, 5, 3)));
    }

    #[test]
    fn bad_date_names_key() {
        let picker = PickerToml {
            max: Some("2014-02-30".to_string()),
            ..PickerToml::default()
        };
        let err = build_picker_config(&picker, &DisplayToml::default()).unwrap_err();
        assert!(err.to_string().contains("[picker].max"));
    }

    #[test]
    fn year_menu_span_is_forwarded() {
        let picker = PickerToml {
            year_menu: Some(YearMenuToml {
                from: None,
                to: Some(2030),
            }),
            ..PickerToml::default()
        };
        let cfg = build_picker_config(&picker, &DisplayToml::default()).unwrap();
        assert_eq!(
            cfg.year_menu(),
            Some(YearSpan {
                from: None,
                to: Some(2030)
            })
        );
    }

    #[test]
    fn cli_overrides_file_bounds() {
        let config = KalendsConfig {
            picker: PickerToml {
                min: Some("2014-05-02".to_string()),
                ..PickerToml::default()
            },
            ..KalendsConfig::default()
        };
        let args = PickerArgs {
            min: Some(DateBound::from_triple(2014, 0, 1)),
            ..PickerArgs::default()
        };
        let cfg = resolve_picker_config(&config, &args).unwrap();
        assert_eq!(cfg.min(), Some(DateBound::from_triple(2014, 0, 1)));
    }

    #[test]
    fn oversized_year_menu_in_file_is_reported() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[picker]\nyear_menu = { from = -2000000000, to = 2000000000 }\n")
            .unwrap();
        let config = KalendsConfig::load(file.path()).unwrap();
        let err = resolve_picker_config(&config, &PickerArgs::default()).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("invalid picker configuration"));
        assert!(message.contains("too wide"));
    }

    #[test]
    fn invalid_heading_len_is_reported() {
        let config = KalendsConfig {
            display: DisplayToml {
                heading_len: 0,
                json: false,
            },
            ..KalendsConfig::default()
        };
        let err = resolve_picker_config(&config, &PickerArgs::default()).unwrap_err();
        assert!(format!("{err:#}").contains("heading length"));
    }
}
