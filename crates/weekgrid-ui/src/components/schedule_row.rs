use weekgrid_core::cell::CellAction;
use weekgrid_core::grid::GridAction;
use weekgrid_core::row::{
  Day,
  Row
};
use web_sys::{
  DragEvent,
  HtmlInputElement,
  InputEvent,
  MouseEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  classes,
  function_component,
  html
};

use super::DayCell;

#[derive(Properties, PartialEq)]
pub struct ScheduleRowProps {
  pub row:         Row,
  pub is_dragging: bool,
  pub on_action:   Callback<GridAction>
}

#[function_component(ScheduleRow)]
pub fn schedule_row(
  props: &ScheduleRowProps
) -> Html {
  let row_id = props.row.id.clone();

  let ondragstart = {
    let on_action =
      props.on_action.clone();
    let row_id = row_id.clone();
    Callback::from(
      move |event: DragEvent| {
        if let Some(data_transfer) =
          event.data_transfer()
        {
          let _ = data_transfer
            .set_data(
              "text/plain",
              &row_id
            );
          data_transfer
            .set_drop_effect("move");
        }
        on_action.emit(
          GridAction::DragStart {
            row_id: row_id.clone()
          }
        );
      }
    )
  };

  let ondragend = {
    let on_action =
      props.on_action.clone();
    Callback::from(
      move |_: DragEvent| {
        on_action
          .emit(GridAction::DragEnd);
      }
    )
  };

  let ondragover = Callback::from(
    |event: DragEvent| {
      event.prevent_default();
    }
  );

  let ondrop = {
    let on_action =
      props.on_action.clone();
    let row_id = row_id.clone();
    Callback::from(
      move |event: DragEvent| {
        event.prevent_default();
        on_action.emit(
          GridAction::DropOn {
            target_id:
              row_id.clone()
          }
        );
      }
    )
  };

  let oncontextmenu = Callback::from(
    |event: MouseEvent| {
      event.prevent_default();
    }
  );

  let oninput = {
    let on_action =
      props.on_action.clone();
    let row_id = row_id.clone();
    Callback::from(
      move |event: InputEvent| {
        let input: HtmlInputElement =
          event
            .target_unchecked_into();
        on_action.emit(
          GridAction::EditText {
            row_id: row_id.clone(),
            text:   input.value()
          }
        );
      }
    )
  };

  let on_press = {
    let on_action =
      props.on_action.clone();
    let row_id = row_id.clone();
    Callback::from(
      move |(day, action): (
        Day,
        CellAction
      )| {
        on_action.emit(
          GridAction::CellPress {
            row_id: row_id.clone(),
            day,
            action
          }
        );
      }
    )
  };

  html! {
      <tr
          class={classes!("grid-row", props.is_dragging.then_some("dragging"))}
          draggable="true"
          {ondragstart}
          {ondragend}
          {ondragover}
          {ondrop}
          {oncontextmenu}
      >
          <td class="grip" aria-label="Drag to reorder">{ "⋮⋮" }</td>
          {
              for Day::ALL.iter().map(|day| {
                  html! {
                      <DayCell
                          day={*day}
                          cell={props.row.cell_states.get(day).cloned()}
                          on_press={on_press.clone()}
                      />
                  }
              })
          }
          <td class="label">
              <input
                  type="text"
                  value={props.row.text.clone()}
                  placeholder="Enter text here..."
                  {oninput}
              />
          </td>
      </tr>
  }
}
