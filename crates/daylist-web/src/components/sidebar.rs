use chrono::NaiveDate;
use daylist_core::datetime;
use daylist_core::store::FilterKey;
use daylist_core::todo::Tag;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
  pub tag_groups: Vec<(Tag, usize)>,
  pub date_groups:
    Vec<(NaiveDate, usize)>,
  pub selection: Option<FilterKey>,
  pub on_select: Callback<FilterKey>
}

#[function_component(Sidebar)]
pub fn sidebar(
  props: &SidebarProps
) -> Html {
  let make_item = |key: FilterKey,
                   label: String,
                   count: usize| {
    let active =
      props.selection == Some(key);
    let class = if active {
      "item active"
    } else {
      "item"
    };
    let on_select =
      props.on_select.clone();
    html! {
        <div class={class} onclick={move |_| on_select.emit(key)}>
            <span>{ label }</span>
            <span class="badge">{ count }</span>
        </div>
    }
  };

  html! {
      <div class="panel sidebar">
          <div class="header">{ "Tags" }</div>
          {
              for props.tag_groups.iter().map(|(tag, count)| {
                  make_item(FilterKey::Tag(*tag), tag.label().to_string(), *count)
              })
          }

          <div class="header">{ "Dates" }</div>
          {
              for props.date_groups.iter().map(|(date, count)| {
                  make_item(FilterKey::Date(*date), datetime::format_human(*date), *count)
              })
          }
      </div>
  }
}
