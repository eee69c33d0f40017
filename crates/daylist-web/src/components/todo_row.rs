use daylist_core::datetime;
use daylist_core::todo::Todo;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TagBadge;

#[derive(Properties, PartialEq)]
pub struct TodoRowProps {
  pub todo:      Todo,
  /// The date chip only carries
  /// information under tag grouping;
  /// date buckets already imply it.
  pub show_date: bool,
  pub on_toggle: Callback<u64>,
  pub on_delete: Callback<u64>
}

#[function_component(TodoRow)]
pub fn todo_row(
  props: &TodoRowProps
) -> Html {
  let id = props.todo.id;
  let on_toggle =
    props.on_toggle.clone();
  let on_delete =
    props.on_delete.clone();

  let text_class =
    if props.todo.completed {
      "todo-text done"
    } else {
      "todo-text"
    };

  html! {
      <li class="row todo-row">
          <input
              type="checkbox"
              checked={props.todo.completed}
              onchange={move |_| on_toggle.emit(id)}
          />
          <div class="todo-body">
              <span class={text_class}>{ &props.todo.text }</span>
              <div class="todo-meta">
                  {
                      if props.show_date {
                          html! {
                              <span class="todo-date">
                                  { datetime::format_human(props.todo.date) }
                              </span>
                          }
                      } else {
                          html! {}
                      }
                  }
                  {
                      for props.todo.tags.iter().map(|tag| html! {
                          <TagBadge tag={*tag} />
                      })
                  }
              </div>
          </div>
          <button class="btn danger" onclick={move |_| on_delete.emit(id)}>
              { "Delete" }
          </button>
      </li>
  }
}
