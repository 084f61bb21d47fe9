use chrono::{Datelike, NaiveDate, Weekday};

/// One calendar day of an absence, used only for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDay {
    pub date: NaiveDate,
}

impl CalendarDay {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// `YYYY-MM-DD`, suitable as a row key or as a form value.
    pub fn iso(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Short es-EC rendering (`d/m/yyyy`, no zero padding).
    pub fn display(&self) -> String {
        format!(
            "{}/{}/{}",
            self.date.day(),
            self.date.month(),
            self.date.year()
        )
    }

    pub fn weekday_name(&self) -> &'static str {
        weekday_name_es(self.date.weekday())
    }
}

fn weekday_name_es(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "lunes",
        Weekday::Tue => "martes",
        Weekday::Wed => "miércoles",
        Weekday::Thu => "jueves",
        Weekday::Fri => "viernes",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

/// Inclusive span of calendar days covered by an absence request.
///
/// The range is a value: iterating it never consumes it, so the same range
/// can be walked any number of times and always yields the same days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    bounds: Option<(NaiveDate, NaiveDate)>,
}

impl DateRange {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the range `[start, end]`.
    ///
    /// A missing `end` means a single-day request. A missing `start`, or an
    /// `end` earlier than `start`, produces an empty range instead of an
    /// error so the calendar simply shows no preview.
    pub fn materialize(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        let Some(start) = start else {
            return Self::empty();
        };
        let end = end.unwrap_or(start);
        if end < start {
            return Self::empty();
        }
        Self {
            bounds: Some((start, end)),
        }
    }

    /// Same as [`DateRange::materialize`] for raw form or wire values.
    /// A blank or malformed end is treated as absent.
    pub fn from_iso(start: &str, end: &str) -> Self {
        Self::materialize(parse_iso_date(start), parse_iso_date(end))
    }

    pub fn len(&self) -> usize {
        match self.bounds {
            Some((start, end)) => (end - start).num_days() as usize + 1,
            None => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    pub fn iter(&self) -> Days {
        Days {
            remaining: self.bounds,
        }
    }
}

impl IntoIterator for DateRange {
    type Item = CalendarDay;
    type IntoIter = Days;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &DateRange {
    type Item = CalendarDay;
    type IntoIter = Days;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the days of a [`DateRange`], computed one at a time.
#[derive(Debug, Clone)]
pub struct Days {
    remaining: Option<(NaiveDate, NaiveDate)>,
}

impl Iterator for Days {
    type Item = CalendarDay;

    fn next(&mut self) -> Option<Self::Item> {
        let (current, end) = self.remaining?;
        self.remaining = if current < end {
            current.succ_opt().map(|next| (next, end))
        } else {
            None
        };
        Some(CalendarDay::new(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = match self.remaining {
            Some((current, end)) => (end - current).num_days() as usize + 1,
            None => 0,
        };
        (len, Some(len))
    }
}

impl ExactSizeIterator for Days {}

impl std::iter::FusedIterator for Days {}

/// Client-side estimate of requested days shown before submission.
///
/// Counts every calendar day, weekends included. The server's
/// `dias_habiles` remains the authoritative figure.
pub fn day_count_preview(start: Option<NaiveDate>, end: Option<NaiveDate>) -> u32 {
    let Some(start) = start else {
        return 0;
    };
    let end = end.unwrap_or(start);
    let diff = (end - start).num_days();
    if diff >= 0 {
        diff as u32 + 1
    } else {
        0
    }
}

pub fn parse_iso_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}
