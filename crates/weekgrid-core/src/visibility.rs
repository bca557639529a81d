use crate::row::{
  Row,
  RowStatus
};

/// Whether `row` appears for the
/// displayed week. A row is shown on
/// exact membership, or as a
/// carry-forward preview while it is
/// active and every scheduled week is
/// still strictly ahead of the
/// cursor.
#[must_use]
pub fn is_visible(
  row: &Row,
  current_week: i32
) -> bool {
  if row
    .weeks
    .contains(&current_week)
  {
    return true;
  }

  row.status == RowStatus::Active
    && row
      .weeks
      .iter()
      .all(|week| current_week < *week)
}

#[cfg(test)]
mod tests {
  use super::is_visible;
  use crate::row::{
    Row,
    RowStatus
  };

  fn row_with_weeks(
    weeks: Vec<i32>,
    status: RowStatus
  ) -> Row {
    let mut row = Row::new_seeded(
      "row_under_test".to_string(),
      1
    );
    row.weeks = weeks;
    row.status = status;
    row
  }

  #[test]
  fn membership_wins_regardless_of_status(
  ) {
    let active = row_with_weeks(
      vec![5],
      RowStatus::Active
    );
    let done = row_with_weeks(
      vec![5],
      RowStatus::Done
    );

    assert!(is_visible(&active, 5));
    assert!(is_visible(&done, 5));
  }

  #[test]
  fn active_rows_preview_before_their_weeks_start(
  ) {
    let row = row_with_weeks(
      vec![5],
      RowStatus::Active
    );
    assert!(is_visible(&row, 3));
  }

  #[test]
  fn done_rows_hide_outside_their_weeks(
  ) {
    let row = row_with_weeks(
      vec![5],
      RowStatus::Done
    );
    assert!(!is_visible(&row, 3));
    assert!(!is_visible(&row, 7));
  }

  #[test]
  fn past_rows_hide_even_while_active(
  ) {
    let row = row_with_weeks(
      vec![5],
      RowStatus::Active
    );
    assert!(!is_visible(&row, 7));
  }

  #[test]
  fn every_week_must_be_ahead_for_the_preview(
  ) {
    // one elapsed week is enough to
    // end the carry-forward
    let row = row_with_weeks(
      vec![3, 9],
      RowStatus::Active
    );
    assert!(!is_visible(&row, 4));
    assert!(is_visible(&row, 2));
    assert!(is_visible(&row, 9));
  }
}
