//! Date label formatting
//!
//! Date labels are plain strings like "13 июня" (day plus Russian genitive
//! month name), matching the data files this tool has always written. The
//! store treats labels as opaque keys; this is the only place that knows how
//! they are produced.

use chrono::{Datelike, Local, NaiveDate};

/// Genitive month names, indexed by month number - 1
const MONTHS: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Format a date as its grouping label, e.g. "13 июня"
pub fn date_label(date: NaiveDate) -> String {
    format!("{} {}", date.day(), MONTHS[date.month0() as usize])
}

/// Grouping label for the current local day
pub fn today_label() -> String {
    date_label(Local::now().date_naive())
}
