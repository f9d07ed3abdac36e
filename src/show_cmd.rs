//! Show command: render one month.

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use kalends_calendar::DateBound;
use kalends_picker::Calendar;

use crate::cli::{PickerArgs, ShowArgs};
use crate::config::KalendsConfig;
use crate::convert;
use crate::render;

/// A configured picker plus the output format it should be rendered in.
pub struct Session {
    pub calendar: Calendar,
    pub json: bool,
}

impl Session {
    /// Loads config, applies CLI overrides and builds the picker.
    pub fn open(args: &PickerArgs) -> Result<Self> {
        let config = match args.config {
            Some(ref path) => {
                info!(path = %path.display(), "loading config");
                KalendsConfig::load(path)?
            }
            None => KalendsConfig::default(),
        };
        let picker_cfg = convert::resolve_picker_config(&config, args)?;

        let date = args.date.unwrap_or_else(DateBound::today);
        let mut calendar =
            Calendar::with_config(date, &picker_cfg).context("failed to build picker")?;
        if let Some(selected) = args.select {
            if !calendar.select(selected) {
                warn!(%selected, "initial selection outside valid range, ignored");
            }
        }

        Ok(Self {
            calendar,
            json: args.json || config.display.json,
        })
    }

    /// Renders the picker in the session's output format.
    pub fn render(&self) -> Result<String> {
        render::render(&self.calendar, self.json)
    }
}

/// Run the show command.
pub fn run(args: ShowArgs) -> Result<()> {
    let _cmd = info_span!("show").entered();
    let session = Session::open(&args.picker)?;
    print!("{}", session.render()?);
    Ok(())
}
