use weekgrid_core::cell::CellAction;
use weekgrid_core::row::{
  CellColor,
  CellFill,
  CellState,
  Day
};
use web_sys::MouseEvent;
use yew::{
  Callback,
  Classes,
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct DayCellProps {
  pub day:      Day,
  pub cell:     Option<CellState>,
  pub on_press:
    Callback<(Day, CellAction)>
}

#[function_component(DayCell)]
pub fn day_cell(
  props: &DayCellProps
) -> Html {
  let day = props.day;
  let onmousedown = {
    let on_press =
      props.on_press.clone();
    Callback::from(
      move |event: MouseEvent| {
        event.prevent_default();
        match event.button() {
          | 0 => on_press.emit((
            day,
            CellAction::Primary
          )),
          | 2 => on_press.emit((
            day,
            CellAction::Secondary
          )),
          | _ => {}
        }
      }
    )
  };

  html! {
      <td class={cell_classes(props.cell.as_ref())} {onmousedown}>{ "\u{a0}" }</td>
  }
}

fn cell_classes(
  cell: Option<&CellState>
) -> Classes {
  let Some(cell) = cell else {
    return classes!("cell");
  };

  let fill = match cell.state {
    | CellFill::None => {
      return classes!("cell");
    }
    | CellFill::Selected => {
      "selected"
    }
    | CellFill::Partial => "partial",
    | CellFill::Filled => "filled"
  };
  let ink = match cell.color {
    | CellColor::Black => "ink-black",
    | CellColor::Red => "ink-red",
    | CellColor::Green => "ink-green",
    | CellColor::Blue => "ink-blue"
  };

  classes!("cell", fill, ink)
}
