//! One-shot pickers for scripts
//!
//! Each command shows a single panel, prints the value confirmed with Enter
//! and fails when the picker is closed without confirming.

use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use serde_json::json;

use pickwheel_core::{AppConfig, Clock, Date, SystemClock, Time, Time12, Time24};
use pickwheel_tui::{App, Panel, PanelValue};

use super::run::run_app;
use super::theme_for;

/// Most values a `number` wheel will hold; every value becomes a label
const MAX_RANGE_LEN: u64 = 100_000;

pub fn date(config: Arc<AppConfig>, at: Option<Date>, json: bool) -> Result<()> {
    let initial = at.unwrap_or_else(|| SystemClock.today());
    let panel = Panel::date("Date", initial, &config);
    pick(config, panel, json)
}

pub fn time(config: Arc<AppConfig>, twenty_four: bool, at: Option<&str>, json: bool) -> Result<()> {
    let initial = match at {
        Some(text) => parse_time(text, twenty_four)?,
        None if twenty_four => Time::TwentyFour(SystemClock.now_24h()),
        None => Time::Twelve(SystemClock.now_12h()),
    };
    let title = if twenty_four { "Time (24h)" } else { "Time" };
    let panel = Panel::time(title, initial, &config);
    pick(config, panel, json)
}

pub fn items(config: Arc<AppConfig>, items: Vec<String>, index: usize, json: bool) -> Result<()> {
    let panel = Panel::items("Pick", items, index, &config);
    pick(config, panel, json)
}

pub fn number(config: Arc<AppConfig>, from: i64, to: i64, initial: Option<i64>, json: bool) -> Result<()> {
    check_range(from, to)?;
    let panel = Panel::range("Number", from..=to, initial.unwrap_or(from), &config);
    pick(config, panel, json)
}

fn check_range(from: i64, to: i64) -> Result<()> {
    if to < from {
        bail!("Empty range: --from {} is greater than --to {}", from, to);
    }
    // Length minus one, without overflow
    if to.abs_diff(from) >= MAX_RANGE_LEN {
        bail!(
            "Range {}..={} is too large: at most {} values are supported",
            from,
            to,
            MAX_RANGE_LEN
        );
    }
    Ok(())
}

fn pick(config: Arc<AppConfig>, panel: Panel, json: bool) -> Result<()> {
    let theme = theme_for(&config);
    let app = run_app(App::one_shot(config, theme, panel))?;

    if !app.confirmed {
        bail!("Cancelled");
    }
    let value = app.panel().map(Panel::value).ok_or_else(|| anyhow!("No picker"))?;
    println!("{}", render_value(&value, json)?);
    Ok(())
}

/// Parse `HH:MM` (either dial) or `hh:mm AM` (12-hour only)
fn parse_time(text: &str, twenty_four: bool) -> Result<Time> {
    let time = match (text.parse::<Time24>(), twenty_four) {
        (Ok(t), true) => Time::TwentyFour(t),
        (Ok(t), false) => Time::Twelve(t.to_12h()),
        (Err(_), false) => Time::Twelve(
            text.parse::<Time12>()
                .with_context(|| format!("Invalid time '{}'", text))?,
        ),
        (Err(e), true) => return Err(e).with_context(|| format!("Invalid time '{}'", text)),
    };
    Ok(time)
}

fn render_value(value: &PanelValue, json: bool) -> Result<String> {
    if !json {
        return Ok(value.to_string());
    }
    let doc = match value {
        PanelValue::Item { index, label } => json!({ "index": index, "value": label }),
        PanelValue::Date(date) => json!({ "value": date.to_string(), "date": date }),
        PanelValue::Time(time) => json!({ "value": time.to_string(), "time": time }),
    };
    Ok(serde_json::to_string(&doc)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pickwheel_core::Meridiem;

    #[test]
    fn test_parse_time_dials() {
        assert_eq!(
            parse_time("19:05", true).unwrap(),
            Time::TwentyFour(Time24::clamped(19, 5))
        );
        assert_eq!(
            parse_time("19:05", false).unwrap(),
            Time::Twelve(Time12::clamped(7, 5, Meridiem::Pm))
        );
        assert_eq!(
            parse_time("07:05 am", false).unwrap(),
            Time::Twelve(Time12::clamped(7, 5, Meridiem::Am))
        );
        assert!(parse_time("07:05 am", true).is_err());
        assert!(parse_time("later", false).is_err());
    }

    #[test]
    fn test_number_range_limits() {
        assert!(check_range(0, 100).is_ok());
        assert!(check_range(-5, -5).is_ok());
        assert!(check_range(0, MAX_RANGE_LEN as i64 - 1).is_ok());
        assert!(check_range(0, MAX_RANGE_LEN as i64).is_err());
        assert!(check_range(i64::MIN, i64::MAX).is_err());
        assert!(check_range(0, 1_000_000_000).is_err());
        assert!(check_range(10, 9).is_err());
    }

    #[test]
    fn test_render_plain_and_json() {
        let date = PanelValue::Date(Date::clamped(2024, 4, 30));
        assert_eq!(render_value(&date, false).unwrap(), "2024-04-30");

        let doc: serde_json::Value = serde_json::from_str(&render_value(&date, true).unwrap()).unwrap();
        assert_eq!(doc["value"], "2024-04-30");
        assert_eq!(doc["date"]["month"], 4);

        let item = PanelValue::Item {
            index: Some(2),
            label: Some("c".to_string()),
        };
        let doc: serde_json::Value = serde_json::from_str(&render_value(&item, true).unwrap()).unwrap();
        assert_eq!(doc, json!({ "index": 2, "value": "c" }));
    }
}
