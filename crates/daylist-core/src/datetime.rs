use anyhow::Context;
use chrono::{
  Local,
  NaiveDate,
  Utc
};

/// Default date for newly created
/// records: the local calendar day.
#[must_use]
pub fn today() -> NaiveDate {
  Local::now().date_naive()
}

/// Millisecond timestamp used as the
/// base for fresh record ids.
#[must_use]
pub fn now_millis() -> u64 {
  u64::try_from(
    Utc::now().timestamp_millis()
  )
  .unwrap_or(0)
}

/// Human-readable label for sidebar
/// entries and per-item date chips,
/// e.g. "May 1, Wednesday".
#[must_use]
pub fn format_human(
  date: NaiveDate
) -> String {
  date
    .format("%B %-d, %A")
    .to_string()
}

pub fn parse_date(
  raw: &str
) -> anyhow::Result<NaiveDate> {
  raw
    .trim()
    .parse::<NaiveDate>()
    .with_context(|| {
      format!(
        "invalid calendar date: \
         {raw:?}"
      )
    })
}
