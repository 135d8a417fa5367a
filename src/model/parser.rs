// Handles smart text input parsing
use crate::model::item::Event;
use chrono::NaiveDate;

impl Event {
    /// Parse one input line of the form `Name words @YYYY-MM-DD`.
    ///
    /// The `@date` token may sit anywhere; when several appear the last one
    /// wins. An `@word` that does not parse as a date stays part of the
    /// name. Returns None when either the name or the date is missing,
    /// which is what makes an empty submission a silent no-op.
    pub fn from_smart_input(input: &str) -> Option<Self> {
        let mut name_words = Vec::new();
        let mut date = None;

        for word in input.split_whitespace() {
            if let Some(val) = word.strip_prefix('@')
                && NaiveDate::parse_from_str(val, "%Y-%m-%d").is_ok()
            {
                date = Some(val.to_string());
                continue;
            }
            name_words.push(word);
        }

        let name = name_words.join(" ");
        if name.is_empty() {
            return None;
        }
        Some(Self { name, date: date? })
    }

    /// Inverse of `from_smart_input`, used to pre-fill the edit line.
    pub fn to_smart_string(&self) -> String {
        format!("{} @{}", self.name, self.date)
    }
}
