// Calendar distance between a start date and today.
use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

/// Whole years, months and days between two dates.
///
/// Components may be negative: a start date in the future comes out
/// negative, and an end-of-month start can leave `days` below zero after
/// the single month borrow (2020-01-31 to 2021-03-01 is 1y 1m -2d). Both
/// are reported as-is rather than normalized further.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}y {}m {}d", self.years, self.months, self.days)
    }
}

pub fn elapsed_between(start: NaiveDate, today: NaiveDate) -> Elapsed {
    let mut years = today.year() - start.year();
    let mut months = today.month() as i32 - start.month() as i32;
    let mut days = today.day() as i32 - start.day() as i32;

    if days < 0 {
        months -= 1;
        // Borrow from the month immediately before today; January rolls
        // back to December of the previous year.
        let (y, m) = if today.month() == 1 {
            (today.year() - 1, 12)
        } else {
            (today.year(), today.month() - 1)
        };
        days += days_in_month(y, m) as i32;
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }

    Elapsed { years, months, days }
}

/// Elapsed time from `start` up to the local calendar date.
pub fn elapsed_since(start: NaiveDate) -> Elapsed {
    elapsed_between(start, Local::now().date_naive())
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
