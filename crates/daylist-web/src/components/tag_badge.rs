use daylist_core::todo::Tag;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TagBadgeProps {
  pub tag: Tag
}

#[function_component(TagBadge)]
pub fn tag_badge(
  props: &TagBadgeProps
) -> Html {
  html! {
      <span class="badge tag-badge" style={tag_badge_style(props.tag)}>{ props.tag.label() }</span>
  }
}

/// The catch-all label stays on the
/// default badge color.
pub fn tag_badge_style(
  tag: Tag
) -> String {
  let hue = match tag {
    | Tag::Clothing => 282,
    | Tag::Food => 24,
    | Tag::Housing => 150,
    | Tag::Transport => 212,
    | Tag::Other => {
      return String::new();
    }
  };

  format!(
    "--tag-key-color:hsl({hue} 72% \
     54%);"
  )
}

#[cfg(test)]
mod tests {
  use std::collections::BTreeSet;

  use daylist_core::todo::Tag;

  use super::tag_badge_style;

  #[test]
  fn explicit_tags_get_distinct_colors()
  {
    let styles: BTreeSet<String> =
      Tag::SELECTABLE
        .into_iter()
        .map(tag_badge_style)
        .collect();
    assert_eq!(styles.len(), 4);
    assert!(styles.iter().all(|s| {
      s.starts_with("--tag-key-color:")
    }));
  }

  #[test]
  fn catch_all_stays_unstyled() {
    assert!(
      tag_badge_style(Tag::Other)
        .is_empty()
    );
  }
}
