use chrono::{
  Datelike,
  Duration,
  NaiveDate
};

use crate::row::Day;

/// One header column of the displayed
/// week.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct GridDay {
  pub date:     NaiveDate,
  pub day:      Day,
  pub is_today: bool
}

/// 1-based week number of `date`
/// within its calendar year. Week 1
/// begins on the first Monday on or
/// after January 1; earlier dates
/// report week 52 of the previous
/// scheme, never week 0.
#[must_use]
pub fn week_number(
  date: NaiveDate
) -> i32 {
  let first_monday =
    first_monday_of_year(date.year());
  if date < first_monday {
    return 52;
  }

  let elapsed =
    (date - first_monday).num_days();
  (elapsed / 7) as i32 + 1
}

/// The seven Monday-start dates
/// denoted by `week` relative to
/// `today`'s year: advance from
/// "January 0" by `week * 7` days,
/// then roll back to the Monday on or
/// before that point.
#[must_use]
pub fn days_of_week(
  week: i32,
  today: NaiveDate
) -> Vec<GridDay> {
  let jan_zero =
    NaiveDate::from_ymd_opt(
      today.year() - 1,
      12,
      31
    )
    .expect("Dec 31 is always valid");
  let anchor = jan_zero
    + Duration::days(
      i64::from(week) * 7
    );
  let monday = anchor
    - Duration::days(i64::from(
      anchor
        .weekday()
        .num_days_from_monday()
    ));

  Day::ALL
    .iter()
    .enumerate()
    .map(|(offset, day)| {
      let date = monday
        + Duration::days(
          offset as i64
        );
      GridDay {
        date,
        day: *day,
        is_today: date == today
      }
    })
    .collect()
}

fn first_monday_of_year(
  year: i32
) -> NaiveDate {
  let jan_first =
    NaiveDate::from_ymd_opt(year, 1, 1)
      .expect("Jan 1 is always valid");
  let offset = jan_first
    .weekday()
    .num_days_from_monday();
  if offset == 0 {
    jan_first
  } else {
    jan_first
      + Duration::days(i64::from(
        7 - offset
      ))
  }
}
