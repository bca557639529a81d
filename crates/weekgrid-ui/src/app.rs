mod storage;

use std::rc::Rc;

use chrono::Local;
use weekgrid_core::grid::{
  GridAction,
  ScheduleGrid
};
use weekgrid_core::row::Row;
use weekgrid_core::week::days_of_week;
use yew::{
  Callback,
  Html,
  Reducible,
  function_component,
  html,
  use_effect_with,
  use_reducer
};

use crate::components::ScheduleTable;

struct GridState {
  grid: ScheduleGrid
}

impl Reducible for GridState {
  type Action = GridAction;

  fn reduce(
    self: Rc<Self>,
    action: GridAction
  ) -> Rc<Self> {
    let mut grid = self.grid.clone();
    grid.apply(action);
    Rc::new(GridState {
      grid
    })
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let today =
    Local::now().date_naive();
  let state = use_reducer(move || {
    GridState {
      grid: storage::load_grid(today)
    }
  });

  {
    let rows =
      state.grid.rows.clone();
    use_effect_with(
      rows,
      move |rows| {
        storage::persist_rows(rows);
        tracing::debug!(
          rows = rows.len(),
          "persisted grid"
        );
        || ()
      }
    );
  }

  let on_action = {
    let state = state.clone();
    Callback::from(
      move |action: GridAction| {
        state.dispatch(action);
      }
    )
  };

  let days = days_of_week(
    state.grid.current_week,
    today
  );
  let visible: Vec<Row> = state
    .grid
    .visible_rows()
    .into_iter()
    .cloned()
    .collect();

  html! {
      <ScheduleTable
          rows={visible}
          days={days}
          current_week={state.grid.current_week}
          dragging={state.grid.dragging.clone()}
          on_action={on_action}
      />
  }
}
