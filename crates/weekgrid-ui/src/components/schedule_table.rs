use weekgrid_core::grid::GridAction;
use weekgrid_core::row::Row;
use weekgrid_core::week::GridDay;
use web_sys::MouseEvent;
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

use super::{
  ScheduleRow,
  WeekNav
};

#[derive(Properties, PartialEq)]
pub struct ScheduleTableProps {
  pub rows:         Vec<Row>,
  pub days:         Vec<GridDay>,
  pub current_week: i32,
  pub dragging:     Option<String>,
  pub on_action:    Callback<GridAction>
}

#[function_component(ScheduleTable)]
pub fn schedule_table(
  props: &ScheduleTableProps
) -> Html {
  let on_add = {
    let on_action =
      props.on_action.clone();
    Callback::from(
      move |_: MouseEvent| {
        on_action
          .emit(GridAction::AddRow);
      }
    )
  };

  let on_step = {
    let on_action =
      props.on_action.clone();
    Callback::from(
      move |delta: i32| {
        on_action.emit(
          GridAction::StepWeek(delta)
        );
      }
    )
  };

  html! {
      <div class="schedule">
          <WeekNav week={props.current_week} on_step={on_step} />
          <table class="schedule-table">
              <colgroup>
                  <col class="col-grip" />
                  { for props.days.iter().map(|_| html! { <col class="col-day" /> }) }
                  <col class="col-label" />
              </colgroup>
              <thead>
                  <tr>
                      <th></th>
                      <th colspan="7">{ "When" }</th>
                      <th>{ "What" }</th>
                  </tr>
                  <tr>
                      <th></th>
                      {
                          for props.days.iter().map(|grid_day| {
                              html! {
                                  <th class={classes!("day-head", grid_day.is_today.then_some("today"))}>
                                      <span class="day-code">{ grid_day.day.label() }</span>
                                      <span class="day-date">{ grid_day.date.format("%-d").to_string() }</span>
                                  </th>
                              }
                          })
                      }
                      <th>
                          <button class="add-row" onclick={on_add} aria-label="Add new row">{ "+" }</button>
                      </th>
                  </tr>
              </thead>
              <tbody>
                  {
                      for props.rows.iter().map(|row| {
                          let is_dragging = props.dragging.as_deref() == Some(row.id.as_str());
                          html! {
                              <ScheduleRow
                                  key={row.id.clone()}
                                  row={row.clone()}
                                  is_dragging={is_dragging}
                                  on_action={props.on_action.clone()}
                              />
                          }
                      })
                  }
              </tbody>
          </table>
      </div>
  }
}
