//! Gallery selection: sort, date-range filter, and the nine-entry cap
//!
//! All comparisons ride on the canonical `YYYY-MM-DD` string form, where
//! lexicographic order is calendar order. Entries with malformed dates
//! still sort deterministically and simply fall outside any real range.

use crate::date;
use crate::types::ApodEntry;
use chrono::NaiveDate;

/// Most entries a gallery ever shows.
pub const GALLERY_LIMIT: usize = 9;

/// Inclusive date window in canonical form. `None` on a side means that
/// side is unbounded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl DateRange {
    /// Builds a range from raw input-field text. Each bound is trimmed
    /// and parsed; anything unparsable leaves that side unbounded.
    pub fn from_inputs(start: &str, end: &str) -> Self {
        Self {
            start: normalize(start),
            end: normalize(end),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Applies the default window when the user supplied no bounds at
    /// all: the nine days ending at `today`, inclusive. A range with
    /// either bound set passes through untouched.
    pub fn or_default(self, today: NaiveDate) -> Self {
        if self.is_unbounded() {
            Self {
                start: Some(date::to_canonical(date::default_range_start(today))),
                end: Some(date::to_canonical(today)),
            }
        } else {
            self
        }
    }

    /// Inclusive membership test on the canonical string form.
    pub fn contains(&self, date: &str) -> bool {
        self.start.as_deref().map_or(true, |start| date >= start)
            && self.end.as_deref().map_or(true, |end| date <= end)
    }
}

fn normalize(value: &str) -> Option<String> {
    date::parse_canonical(value.trim()).map(date::to_canonical)
}

/// Selects the entries a gallery shows for `range`: ascending by date,
/// filtered to the window, capped to the last [`GALLERY_LIMIT`] matches
/// (the most recent ones).
pub fn select_gallery(mut entries: Vec<ApodEntry>, range: &DateRange) -> Vec<ApodEntry> {
    entries.sort_by(|a, b| a.date.cmp(&b.date));

    let matched: Vec<ApodEntry> = entries
        .into_iter()
        .filter(|entry| range.contains(&entry.date))
        .collect();

    let overflow = matched.len().saturating_sub(GALLERY_LIMIT);
    matched.into_iter().skip(overflow).collect()
}
