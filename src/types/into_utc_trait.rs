use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Conversion into the UTC instants used for the query window.
pub trait IntoUtcDateTime {
    fn into_utc(self) -> DateTime<Utc>;
}

/// A bare date means the start of that day, UTC.
impl IntoUtcDateTime for NaiveDate {
    fn into_utc(self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.and_time(chrono::NaiveTime::MIN))
    }
}

impl IntoUtcDateTime for NaiveDateTime {
    fn into_utc(self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self)
    }
}

impl IntoUtcDateTime for DateTime<Local> {
    fn into_utc(self) -> DateTime<Utc> {
        self.with_timezone(&Utc)
    }
}

impl IntoUtcDateTime for DateTime<Utc> {
    fn into_utc(self) -> DateTime<Utc> {
        self
    }
}

impl IntoUtcDateTime for DateTime<FixedOffset> {
    fn into_utc(self) -> DateTime<Utc> {
        self.with_timezone(&Utc)
    }
}
