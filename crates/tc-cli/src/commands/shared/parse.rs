use std::fmt::Display;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::de::DeserializeOwned;
use tc_core::entities::{DraftId, OpportunityId};

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse a queue control whose text form is not a plain serde name
/// (`unread`, `-time`, `true`).
pub fn parse_control<T>(raw: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse::<T>().map_err(|error| anyhow::anyhow!("{error}"))
}

pub fn parse_date(raw: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|error| anyhow::anyhow!("invalid date '{raw}' (expected YYYY-MM-DD): {error}"))
}

pub fn parse_time(raw: &str) -> anyhow::Result<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .map_err(|error| anyhow::anyhow!("invalid time '{raw}' (expected HH:MM): {error}"))
}

/// Draft choice for one item in a bulk approval.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pick {
    Draft(DraftId),
    Skip,
}

/// Parse `ID=DRAFT` or `ID=skip`.
pub fn parse_pick(raw: &str) -> anyhow::Result<(OpportunityId, Pick)> {
    let Some((id, choice)) = raw.split_once('=') else {
        anyhow::bail!("invalid pick '{raw}': expected ID=DRAFT");
    };
    let id = id.trim();
    if id.is_empty() {
        anyhow::bail!("invalid pick '{raw}': missing opportunity id");
    }
    let choice = choice.trim();
    let pick = if choice.eq_ignore_ascii_case("skip") {
        Pick::Skip
    } else {
        Pick::Draft(
            choice
                .parse::<DraftId>()
                .map_err(|error| anyhow::anyhow!("invalid pick '{raw}': {error}"))?,
        )
    };
    Ok((id.to_string(), pick))
}
