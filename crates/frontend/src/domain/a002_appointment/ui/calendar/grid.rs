//! Month grid for the agenda: weeks start on Monday, cells outside the
//! month are empty.

use chrono::{Datelike, NaiveDate};

pub const WEEKDAY_LABELS: [&str; 7] = ["Lun", "Mar", "Mié", "Jue", "Vie", "Sáb", "Dom"];

const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    /// 1-12
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    pub fn days_in_month(&self) -> u32 {
        match (self.first_day(), self.next().first_day()) {
            (Some(first), Some(next)) => (next - first).num_days() as u32,
            _ => 0,
        }
    }

    pub fn label(&self) -> String {
        let name = MONTH_NAMES
            .get(self.month.saturating_sub(1) as usize)
            .copied()
            .unwrap_or("?");
        format!("{} {}", name, self.year)
    }

    /// `YYYY-MM-DD` of a day in this month
    pub fn iso_day(&self, day: u32) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, day)
    }
}

pub type Week = [Option<u32>; 7];

/// Weeks of the month, each cell the day number or `None` for padding
pub fn month_grid(month: YearMonth) -> Vec<Week> {
    let Some(first) = month.first_day() else {
        return Vec::new();
    };
    let offset = first.weekday().num_days_from_monday() as usize;
    let days = month.days_in_month() as usize;

    let cells = (offset + days).div_ceil(7) * 7;
    let mut weeks = Vec::with_capacity(cells / 7);
    let mut week: Week = [None; 7];
    for cell in 0..cells {
        week[cell % 7] = (cell >= offset && cell < offset + days).then(|| (cell - offset + 1) as u32);
        if cell % 7 == 6 {
            weeks.push(week);
            week = [None; 7];
        }
    }
    weeks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth { year, month }
    }

    #[test]
    fn test_grid_starts_on_monday() {
        // 1 June 2024 was a Saturday
        let weeks = month_grid(ym(2024, 6));
        assert_eq!(weeks[0], [None, None, None, None, None, Some(1), Some(2)]);
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[4], [Some(24), Some(25), Some(26), Some(27), Some(28), Some(29), Some(30)]);
    }

    #[test]
    fn test_every_day_exactly_once() {
        for (year, month) in [(2024, 2), (2023, 2), (2024, 12), (2021, 2), (2025, 9)] {
            let m = ym(year, month);
            let days: Vec<u32> = month_grid(m).iter().flatten().flatten().copied().collect();
            let expected: Vec<u32> = (1..=m.days_in_month()).collect();
            assert_eq!(days, expected, "{}", m.label());
        }
    }

    #[test]
    fn test_february_2021_fits_four_weeks() {
        // starts on a Monday and has 28 days
        assert_eq!(month_grid(ym(2021, 2)).len(), 4);
    }

    #[test]
    fn test_month_navigation() {
        assert_eq!(ym(2024, 12).next(), ym(2025, 1));
        assert_eq!(ym(2024, 1).prev(), ym(2023, 12));
        assert_eq!(ym(2024, 2).days_in_month(), 29);
        assert_eq!(ym(2024, 3).label(), "Marzo 2024");
        assert_eq!(ym(2024, 3).iso_day(7), "2024-03-07");
    }
}
