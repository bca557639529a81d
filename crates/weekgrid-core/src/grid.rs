use chrono::NaiveDate;
use tracing::debug;

use crate::cell::{
  CellAction,
  apply_cell_action
};
use crate::ident::new_row_id;
use crate::row::{
  Day,
  Row
};
use crate::store::{
  ScheduleStore,
  load_rows
};
use crate::visibility::is_visible;
use crate::week::week_number;

/// Owned state of the schedule grid:
/// the ordered row collection, the
/// displayed week cursor, and the
/// drag-in-progress marker.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleGrid {
  pub rows:         Vec<Row>,
  pub current_week: i32,
  pub dragging:     Option<String>
}

/// Commands dispatched from the
/// interaction handlers into the
/// grid reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum GridAction {
  AddRow,
  EditText {
    row_id: String,
    text:   String
  },
  CellPress {
    row_id: String,
    day:    Day,
    action: CellAction
  },
  StepWeek(i32),
  DragStart {
    row_id: String
  },
  DragEnd,
  DropOn {
    target_id: String
  }
}

impl ScheduleGrid {
  #[must_use]
  pub fn new(
    rows: Vec<Row>,
    current_week: i32
  ) -> Self {
    Self {
      rows,
      current_week,
      dragging: None
    }
  }

  pub fn load(
    store: &dyn ScheduleStore,
    today: NaiveDate
  ) -> Self {
    let current_week =
      week_number(today);
    let rows =
      load_rows(store, current_week);
    Self::new(rows, current_week)
  }

  pub fn apply(
    &mut self,
    action: GridAction
  ) {
    match action {
      | GridAction::AddRow => {
        self.rows.push(
          Row::new_seeded(
            new_row_id(),
            self.current_week
          )
        );
        debug!(
          rows = self.rows.len(),
          week = self.current_week,
          "added row"
        );
      }
      | GridAction::EditText {
        row_id,
        text
      } => {
        if let Some(row) =
          self.row_mut(&row_id)
        {
          row.text = text;
        }
      }
      | GridAction::CellPress {
        row_id,
        day,
        action
      } => {
        let week = self.current_week;
        if let Some(row) =
          self.row_mut(&row_id)
        {
          apply_cell_action(
            row, day, action, week
          );
        }
      }
      | GridAction::StepWeek(
        delta
      ) => {
        // the cursor is an unbounded
        // signed week index; values
        // outside 1..=53 simply match
        // no row
        self.current_week = self
          .current_week
          .saturating_add(delta);
      }
      | GridAction::DragStart {
        row_id
      } => {
        self.dragging = Some(row_id);
      }
      | GridAction::DragEnd => {
        self.dragging = None;
      }
      | GridAction::DropOn {
        target_id
      } => {
        self.drop_on(&target_id);
      }
    }
  }

  /// Rows to render for the current
  /// cursor, in storage order.
  #[must_use]
  pub fn visible_rows(
    &self
  ) -> Vec<&Row> {
    self
      .rows
      .iter()
      .filter(|row| {
        is_visible(
          row,
          self.current_week
        )
      })
      .collect()
  }

  fn row_mut(
    &mut self,
    row_id: &str
  ) -> Option<&mut Row> {
    self
      .rows
      .iter_mut()
      .find(|row| row.id == row_id)
  }

  fn drop_on(
    &mut self,
    target_id: &str
  ) {
    let Some(dragged_id) =
      self.dragging.clone()
    else {
      return;
    };
    if dragged_id == target_id {
      return;
    }

    let from = self
      .rows
      .iter()
      .position(|row| {
        row.id == dragged_id
      });
    let to = self
      .rows
      .iter()
      .position(|row| {
        row.id == target_id
      });
    let (Some(from), Some(to)) =
      (from, to)
    else {
      return;
    };

    // both indexes are taken on the
    // unmodified collection and the
    // reinsert happens at the
    // target's pre-removal index, so
    // a downward drop lands just
    // after the target
    let row = self.rows.remove(from);
    self.rows.insert(to, row);
    debug!(
      from, to, "reordered row"
    );
  }
}
