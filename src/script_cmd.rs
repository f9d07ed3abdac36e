//! Script command: drive the picker with a sequence of actions.

use std::str::FromStr;

use anyhow::{Context, Result, bail};
use tracing::{debug, info_span, warn};

use kalends_calendar::DateBound;
use kalends_picker::{Calendar, Interaction, Topic};

use crate::cli::ScriptArgs;
use crate::show_cmd::Session;

/// One scripted picker action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Prev,
    Next,
    Show(DateBound),
    Select(DateBound),
    Clamp(DateBound),
    Year(i32),
    /// Zero-based; written one-based on the command line.
    Month(u32),
}

impl FromStr for Action {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (name, value) = match s.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (s, None),
        };
        let action = match (name, value) {
            ("prev", None) => Self::Prev,
            ("next", None) => Self::Next,
            ("show", Some(v)) => Self::Show(v.parse()?),
            ("select", Some(v)) => Self::Select(v.parse()?),
            ("clamp", Some(v)) => Self::Clamp(v.parse()?),
            ("year", Some(v)) => Self::Year(v.parse().context("year must be an integer")?),
            ("month", Some(v)) => {
                let month: u32 = v.parse().context("month must be an integer")?;
                if !(1..=12).contains(&month) {
                    bail!("month must be 1..=12, got {month}");
                }
                Self::Month(month - 1)
            }
            ("prev" | "next", Some(_)) => bail!("{name} takes no value"),
            ("show" | "select" | "clamp" | "year" | "month", None) => {
                bail!("{name} needs a value, e.g. {name}=...")
            }
            _ => bail!("unknown action: {name:?}"),
        };
        Ok(action)
    }
}

/// Applies `action` to `calendar`.
pub fn apply(calendar: &mut Calendar, action: Action) {
    debug!(?action, "applying action");
    match action {
        Action::Prev => calendar.handle(Interaction::PrevClicked),
        Action::Next => calendar.handle(Interaction::NextClicked),
        Action::Show(date) => calendar.show(date),
        Action::Select(date) => {
            if !calendar.select(date) {
                warn!(%date, "date outside valid range, selection unchanged");
            }
        }
        Action::Clamp(date) => {
            calendar.select_clamped(date);
        }
        Action::Year(year) => {
            if !calendar.choose_year(year) {
                warn!(year, "year menu not enabled, action ignored");
            }
        }
        Action::Month(month) => {
            if !calendar.choose_month(month) {
                warn!(month = month + 1, "month menu not enabled, action ignored");
            }
        }
    }
}

/// Run the script command.
pub fn run(args: ScriptArgs) -> Result<()> {
    let _cmd = info_span!("script").entered();
    let actions = args
        .actions
        .iter()
        .map(|raw| raw.parse::<Action>().with_context(|| format!("bad action {raw:?}")))
        .collect::<Result<Vec<_>>>()?;

    let mut session = Session::open(&args.picker)?;
    if args.trace_events {
        for topic in [Topic::Change, Topic::ViewChange, Topic::Prev, Topic::Next] {
            session.calendar.on(topic, |event| {
                eprintln!("event: {event:?}");
                Ok(())
            });
        }
    }
    for action in actions {
        apply(&mut session.calendar, action);
    }
    print!("{}", session.render()?);
    Ok(())
}
