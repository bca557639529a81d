use web_sys::MouseEvent;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct WeekNavProps {
  pub week:    i32,
  pub on_step: Callback<i32>
}

#[function_component(WeekNav)]
pub fn week_nav(
  props: &WeekNavProps
) -> Html {
  let on_prev = {
    let on_step =
      props.on_step.clone();
    Callback::from(
      move |_: MouseEvent| {
        on_step.emit(-1);
      }
    )
  };
  let on_next = {
    let on_step =
      props.on_step.clone();
    Callback::from(
      move |_: MouseEvent| {
        on_step.emit(1);
      }
    )
  };

  html! {
      <div class="week-nav">
          <button class="btn" onclick={on_prev} aria-label="Previous week">{ "‹" }</button>
          <span class="week-label">{ format!("Week {}", props.week) }</span>
          <button class="btn" onclick={on_next} aria-label="Next week">{ "›" }</button>
      </div>
  }
}
