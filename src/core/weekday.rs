use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate, Weekday};

/// Day of the week, displayed with its full English name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DayOfWeek(pub Weekday);

impl DayOfWeek {
    /// Canonical week order.
    pub const WEEK: [Self; 7] = [
        Self(Weekday::Mon),
        Self(Weekday::Tue),
        Self(Weekday::Wed),
        Self(Weekday::Thu),
        Self(Weekday::Fri),
        Self(Weekday::Sat),
        Self(Weekday::Sun),
    ];

    pub fn of(date: NaiveDate) -> Self {
        Self(date.weekday())
    }

    pub const fn name(self) -> &'static str {
        match self.0 {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }

    /// Position in [`Self::WEEK`].
    pub fn index(self) -> usize {
        self.0.num_days_from_monday() as usize
    }
}

impl Display for DayOfWeek {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of() {
        let day = DayOfWeek::of(NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
        assert_eq!(day.to_string(), "Monday");
        assert_eq!(day.index(), 0);
    }

    #[test]
    fn test_week_order() {
        for (index, day) in DayOfWeek::WEEK.into_iter().enumerate() {
            assert_eq!(day.index(), index);
        }
    }
}
