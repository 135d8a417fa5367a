use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A tracked event: something that happened on a date.
///
/// The persisted schema is exactly these two fields. There is no id; an
/// event is identified by its position in the stored collection.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub name: String,
    /// Calendar date as "YYYY-MM-DD", no time component.
    pub date: String,
}

impl Event {
    pub fn new(name: &str, date: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            date: date.to_string(),
        }
    }

    /// Stored date rearranged as "DD/MM/YYYY" for display.
    ///
    /// Token reassembly only, no re-parsing: anything that is not three
    /// dash-separated parts comes back unchanged.
    pub fn display_date(&self) -> String {
        let mut parts = self.date.splitn(3, '-');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(y), Some(m), Some(d)) => format!("{}/{}/{}", d, m, y),
            _ => self.date.clone(),
        }
    }

    /// The start date, if the stored string is a real calendar date.
    pub fn start_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}
