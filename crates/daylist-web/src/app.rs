use chrono::NaiveDate;
use daylist_core::datetime;
use daylist_core::grouping;
use daylist_core::store::{
  FilterKey,
  GroupMode,
  TodoStore
};
use daylist_core::todo::{
  Tag,
  Todo
};
use gloo::console::log;
use yew::{
  Callback,
  Html,
  function_component,
  html,
  use_state
};

use crate::components::{
  AddForm,
  Sidebar,
  TodoList
};
use crate::storage::LocalStorage;

#[function_component(App)]
pub fn app() -> Html {
  let store = use_state(|| {
    TodoStore::open(LocalStorage)
  });
  let draft_text =
    use_state(String::new);
  let draft_date = use_state(|| {
    datetime::today()
      .format("%Y-%m-%d")
      .to_string()
  });
  let draft_tags =
    use_state(Vec::<Tag>::new);

  let on_select = {
    let store = store.clone();
    Callback::from(
      move |key: FilterKey| {
        let mut next = (*store).clone();
        next.select(key);
        store.set(next);
      }
    )
  };

  let on_toggle = {
    let store = store.clone();
    Callback::from(move |id: u64| {
      let mut next = (*store).clone();
      next.toggle_completed(id);
      store.set(next);
    })
  };

  let on_delete = {
    let store = store.clone();
    Callback::from(move |id: u64| {
      ui_debug(
        "todo deleted",
        &id.to_string()
      );
      let mut next = (*store).clone();
      next.delete(id);
      store.set(next);
    })
  };

  let on_text = {
    let draft_text = draft_text.clone();
    Callback::from(
      move |value: String| {
        draft_text.set(value);
      }
    )
  };

  let on_date = {
    let draft_date = draft_date.clone();
    Callback::from(
      move |value: String| {
        draft_date.set(value);
      }
    )
  };

  let on_toggle_tag = {
    let draft_tags = draft_tags.clone();
    Callback::from(move |tag: Tag| {
      let mut next =
        (*draft_tags).clone();
      match next
        .iter()
        .position(|picked| {
          *picked == tag
        }) {
        | Some(index) => {
          next.remove(index);
        }
        | None => next.push(tag)
      }
      draft_tags.set(next);
    })
  };

  let on_submit = {
    let store = store.clone();
    let draft_text = draft_text.clone();
    let draft_date = draft_date.clone();
    let draft_tags = draft_tags.clone();
    Callback::from(
      move |e: web_sys::SubmitEvent| {
        e.prevent_default();

        let date =
          match datetime::parse_date(
            &draft_date
          ) {
            | Ok(date) => date,
            | Err(error) => {
              tracing::warn!(
                %error,
                "ignored todo with \
                 unusable date"
              );
              return;
            }
          };

        let mut next = (*store).clone();
        let added = next.add(
          &draft_text,
          date,
          (*draft_tags).clone()
        );

        if added.is_some() {
          ui_debug(
            "todo added",
            &draft_text
          );
          draft_text
            .set(String::new());
          draft_tags.set(Vec::new());
          store.set(next);
        }
      }
    )
  };

  let todos = store.todos();
  let tag_groups: Vec<(Tag, usize)> =
    grouping::by_tag(todos)
      .into_iter()
      .map(|(tag, members)| {
        (tag, members.len())
      })
      .collect();
  let date_groups: Vec<(
    NaiveDate,
    usize
  )> = grouping::by_date(todos)
    .into_iter()
    .map(|(date, members)| {
      (date, members.len())
    })
    .collect();

  let selection = store.selection();
  let show_date =
    store.mode() == GroupMode::Tag;
  let visible: Vec<Todo> = store
    .visible()
    .into_iter()
    .cloned()
    .collect();
  let heading =
    selection.map(bucket_heading);

  html! {
      <div class="layout">
          <Sidebar
              tag_groups={tag_groups}
              date_groups={date_groups}
              selection={selection}
              on_select={on_select}
          />

          <div class="main">
              {
                  if let Some(notice) = store.load_notice() {
                      html! { <div class="notice">{ notice }</div> }
                  } else {
                      html! {}
                  }
              }

              <h1>{ "Daylist" }</h1>

              <AddForm
                  draft_text={(*draft_text).clone()}
                  draft_date={(*draft_date).clone()}
                  draft_tags={(*draft_tags).clone()}
                  on_text={on_text}
                  on_date={on_date}
                  on_toggle_tag={on_toggle_tag}
                  on_submit={on_submit}
              />

              {
                  if let Some(heading) = heading {
                      html! { <h2 class="bucket-heading">{ heading }</h2> }
                  } else {
                      html! {}
                  }
              }

              <TodoList
                  todos={visible}
                  show_date={show_date}
                  on_toggle={on_toggle}
                  on_delete={on_delete}
              />
          </div>
      </div>
  }
}

fn bucket_heading(
  key: FilterKey
) -> String {
  match key {
    | FilterKey::Date(date) => {
      datetime::format_human(date)
    }
    | FilterKey::Tag(tag) => {
      format!("{} todos", tag.label())
    }
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
