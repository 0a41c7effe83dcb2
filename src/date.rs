//! Date formatting helper.
//!
//! Takes the raw day/month/year integers a caller already has and produces
//! either a [`DateParts`] bundle of every rendering of the date, or one of
//! nine fixed layout strings. Out-of-range fields render as `"N/A"` and `-1`
//! rather than failing.

const DAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Ordinal suffix for a day-of-month or 1-based weekday/month number.
fn ordinal(n: i32) -> &'static str {
    match n {
        1 | 21 | 31 => "st",
        2 | 22 => "nd",
        3 | 23 => "rd",
        _ => "th",
    }
}

/// Layout codes for [`DateParts::format`].
///
/// The three letters pick the rendering of day, month, and year in turn:
/// `n` numeric, `s` shorthand text, `l` full text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    Nns,
    Nnl,
    Sss,
    Ssl,
    Lll,
    Nss,
    Nsl,
    Nls,
    Nll,
}

/// Day renderings of a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayParts {
    /// Shorthand weekday name, e.g. `"Sun"`.
    pub short: String,
    /// Full weekday name, e.g. `"Sunday"`.
    pub long: String,
    /// Ordinal suffix of the day of the month, e.g. `"st"`.
    pub ordinal_month: String,
    /// Ordinal suffix of the 1-based weekday number.
    pub ordinal_week: String,
    /// 1-based weekday number (1–7), or -1.
    pub week_number: i32,
    /// Day of the month (1–31), or -1.
    pub month_number: i32,
}

/// Month renderings of a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthParts {
    /// Shorthand month name, e.g. `"Jan"`.
    pub short: String,
    /// Full month name, e.g. `"January"`.
    pub long: String,
    /// Ordinal suffix of the 1-based month number.
    pub ordinal: String,
    /// 1-based month number (1–12), or -1.
    pub number: i32,
}

/// Year renderings of a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearParts {
    /// Two-digit year (digits 3–4 of the full year), or -1.
    pub short: i32,
    /// The full year as given.
    pub long: i32,
}

/// Every rendering of a date, ready for a DB or a frontend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParts {
    pub day: DayParts,
    pub month: MonthParts,
    pub year: YearParts,
}

/// Break a date into all of its renderings.
///
/// * `month_day` — day of the month, 1–31
/// * `week_day` — day of the week, 0–6 starting Sunday
/// * `month` — month, 0–11 starting January
/// * `year` — full year
///
/// Fields outside their range come back as `"N/A"` / `-1`; the call itself
/// never fails.
pub fn parse_date(month_day: i32, week_day: i32, month: i32, year: i32) -> DateParts {
    let week_valid = (0..=6).contains(&week_day);
    let month_day_valid = (1..=31).contains(&month_day);
    let month_valid = (0..=11).contains(&month);

    let day_name = if week_valid { DAYS[week_day as usize] } else { "N/A" };
    let month_name = if month_valid { MONTHS[month as usize] } else { "N/A" };

    let na = || "N/A".to_string();

    let year_str = year.to_string();
    let short_year = year_str
        .get(2..4)
        .or_else(|| year_str.get(2..))
        .and_then(|s| s.parse().ok())
        .unwrap_or(-1);

    DateParts {
        day: DayParts {
            short: if week_valid { day_name[..3].to_string() } else { na() },
            long: day_name.to_string(),
            ordinal_month: if month_day_valid { ordinal(month_day).to_string() } else { na() },
            ordinal_week: if week_valid { ordinal(week_day + 1).to_string() } else { na() },
            week_number: if week_valid { week_day + 1 } else { -1 },
            month_number: if month_day_valid { month_day } else { -1 },
        },
        month: MonthParts {
            short: if month_valid { month_name[..3].to_string() } else { na() },
            long: month_name.to_string(),
            ordinal: if month_valid { ordinal(month + 1).to_string() } else { na() },
            number: if month_valid { month + 1 } else { -1 },
        },
        year: YearParts {
            short: short_year,
            long: year,
        },
    }
}

impl DateParts {
    /// Render one of the nine fixed layouts.
    ///
    /// `american` swaps day and month for the numeric-day layouts.
    pub fn format(&self, format: DateFormat, american: bool) -> String {
        let day = &self.day;
        let month = &self.month;
        let year = self.year;
        match format {
            DateFormat::Lll => format!(
                "{} {}{} {}, {}",
                day.long, day.month_number, day.ordinal_month, month.long, year.long
            ),
            DateFormat::Ssl => format!(
                "{} {} {}, {}",
                day.short, day.month_number, month.short, year.long
            ),
            DateFormat::Sss => format!(
                "{} {} {}, {}",
                day.short, day.month_number, month.short, year.short
            ),
            DateFormat::Nll => {
                if american {
                    format!("{} {} {}", month.long, day.month_number, year.long)
                } else {
                    format!("{} {} {}", day.month_number, month.long, year.long)
                }
            }
            DateFormat::Nls => {
                if american {
                    format!("{} {} {}", month.long, day.month_number, year.short)
                } else {
                    format!("{} {} {}", day.month_number, month.long, year.short)
                }
            }
            DateFormat::Nnl => {
                if american {
                    format!("{} {} {}", month.number, day.month_number, year.long)
                } else {
                    format!("{} {} {}", day.month_number, month.number, year.long)
                }
            }
            DateFormat::Nns => {
                if american {
                    format!("{} {} {}", month.number, day.month_number, year.short)
                } else {
                    format!("{} {} {}", day.month_number, month.number, year.short)
                }
            }
            DateFormat::Nsl => {
                if american {
                    format!("{} {} {}", month.short, day.month_number, year.long)
                } else {
                    format!("{} {} {}", day.month_number, month.short, year.long)
                }
            }
            DateFormat::Nss => {
                if american {
                    format!("{} {} {}", month.short, day.month_number, year.short)
                } else {
                    format!("{} {} {}", day.month_number, month.short, year.short)
                }
            }
        }
    }
}
