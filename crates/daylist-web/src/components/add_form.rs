use daylist_core::todo::Tag;
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct AddFormProps {
  pub draft_text:    String,
  pub draft_date:    String,
  pub draft_tags:    Vec<Tag>,
  pub on_text:       Callback<String>,
  pub on_date:       Callback<String>,
  pub on_toggle_tag: Callback<Tag>,
  pub on_submit:
    Callback<web_sys::SubmitEvent>
}

#[function_component(AddForm)]
pub fn add_form(
  props: &AddFormProps
) -> Html {
  let on_date_input = {
    let on_date = props.on_date.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        on_date.emit(input.value());
      }
    )
  };

  let on_text_input = {
    let on_text = props.on_text.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        on_text.emit(input.value());
      }
    )
  };

  html! {
      <form class="add-form" onsubmit={props.on_submit.clone()}>
          <input
              type="date"
              value={props.draft_date.clone()}
              oninput={on_date_input}
          />

          <div class="tag-picker">
              {
                  for Tag::SELECTABLE.into_iter().map(|tag| {
                      let picked = props.draft_tags.contains(&tag);
                      let class = if picked { "tag-chip active" } else { "tag-chip" };
                      let on_toggle_tag = props.on_toggle_tag.clone();
                      html! {
                          <button
                              type="button"
                              class={class}
                              onclick={move |_| on_toggle_tag.emit(tag)}
                          >
                              { tag.label() }
                          </button>
                      }
                  })
              }
          </div>

          <div class="field-inline">
              <input
                  value={props.draft_text.clone()}
                  placeholder="Add a new todo..."
                  oninput={on_text_input}
              />
              <button type="submit" class="btn ok">{ "Add" }</button>
          </div>
      </form>
  }
}
