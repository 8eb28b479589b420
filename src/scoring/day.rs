use time::{macros::format_description, Date, OffsetDateTime, UtcOffset};

time::serde::format_description!(pub iso_day, Date, "[year]-[month]-[day]");

/// Half-open `[start, end)` interval covering one local calendar day.
/// Both ends are kept in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub start: OffsetDateTime,
    pub end: OffsetDateTime,
}

impl DayWindow {
    /// `None` when either midnight falls outside the representable range.
    pub fn new(day: Date, offset: UtcOffset) -> Option<Self> {
        let start = local_midnight(day, offset)?;
        let end = local_midnight(day.next_day()?, offset)?;
        Some(Self { start, end })
    }

    pub fn contains(&self, instant: OffsetDateTime) -> bool {
        self.start <= instant && instant < self.end
    }
}

fn local_midnight(day: Date, offset: UtcOffset) -> Option<OffsetDateTime> {
    day.midnight()
        .assume_offset(offset)
        .checked_to_offset(UtcOffset::UTC)
}

/// Local calendar day an instant falls on. The only place a day is derived
/// from a timestamp.
pub fn day_of(instant: OffsetDateTime, offset: UtcOffset) -> Option<Date> {
    instant.checked_to_offset(offset).map(OffsetDateTime::date)
}

pub fn parse_day(raw: &str) -> Result<Date, time::error::Parse> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]"))
}
