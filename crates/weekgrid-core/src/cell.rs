use tracing::trace;

use crate::row::{
  CellColor,
  CellFill,
  CellState,
  Day,
  Row,
  RowStatus
};

/// Pointer press kinds a cell reacts
/// to.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum CellAction {
  Primary,
  Secondary
}

impl CellFill {
  #[must_use]
  pub fn next(self) -> Self {
    match self {
      | CellFill::None => {
        CellFill::Selected
      }
      | CellFill::Selected => {
        CellFill::Partial
      }
      | CellFill::Partial => {
        CellFill::Filled
      }
      | CellFill::Filled => {
        CellFill::None
      }
    }
  }
}

impl CellColor {
  #[must_use]
  pub fn next(self) -> Self {
    match self {
      | CellColor::Black => {
        CellColor::Red
      }
      | CellColor::Red => {
        CellColor::Green
      }
      | CellColor::Green => {
        CellColor::Blue
      }
      | CellColor::Blue => {
        CellColor::Black
      }
    }
  }
}

pub fn apply_cell_action(
  row: &mut Row,
  day: Day,
  action: CellAction,
  current_week: i32
) {
  match action {
    | CellAction::Primary => {
      let cell = row
        .cell_states
        .entry(day)
        .or_insert_with(|| {
          CellState::seeded(
            current_week
          )
        });
      cell.state = cell.state.next();
      if cell.state == CellFill::None {
        cell.color = CellColor::Black;
      }
      // row status follows the new
      // state of the clicked cell
      // alone; other cells are not
      // consulted
      row.status = if cell.state
        == CellFill::Filled
      {
        RowStatus::Done
      } else {
        RowStatus::Active
      };
      trace!(
        row = %row.id,
        ?day,
        state = cell.state.as_str(),
        "cycled cell state"
      );
    }
    | CellAction::Secondary => {
      // color cycling never creates
      // an entry
      let Some(cell) = row
        .cell_states
        .get_mut(&day)
      else {
        return;
      };
      if cell.state == CellFill::None {
        return;
      }
      cell.color = cell.color.next();
      trace!(
        row = %row.id,
        ?day,
        color = cell.color.as_str(),
        "cycled cell color"
      );
    }
  }
}
