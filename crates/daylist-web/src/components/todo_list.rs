use daylist_core::todo::Todo;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TodoRow;

#[derive(Properties, PartialEq)]
pub struct TodoListProps {
  pub todos:     Vec<Todo>,
  pub show_date: bool,
  pub on_toggle: Callback<u64>,
  pub on_delete: Callback<u64>
}

#[function_component(TodoList)]
pub fn todo_list(
  props: &TodoListProps
) -> Html {
  if props.todos.is_empty() {
    return html! {
        <p class="empty">{ "Nothing to do here yet." }</p>
    };
  }

  html! {
      <ul class="todo-list">
          {
              for props.todos.iter().cloned().map(|todo| html! {
                  <TodoRow
                      todo={todo}
                      show_date={props.show_date}
                      on_toggle={props.on_toggle.clone()}
                      on_delete={props.on_delete.clone()}
                  />
              })
          }
      </ul>
  }
}
