use anyhow::anyhow;
use daylist_core::storage::TodoStorage;
use wasm_bindgen::JsValue;

/// The one origin-scoped slot the
/// whole collection lives under.
pub const TODOS_STORAGE_KEY: &str =
  "daylist.todos";

/// Browser localStorage behind the
/// core's storage contract.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct LocalStorage;

fn local_storage()
-> Option<web_sys::Storage> {
  web_sys::window().and_then(
    |window| {
      window
        .local_storage()
        .ok()
        .flatten()
    }
  )
}

impl TodoStorage for LocalStorage {
  fn load(
    &self
  ) -> anyhow::Result<Option<String>>
  {
    let Some(storage) =
      local_storage()
    else {
      return Err(anyhow!(
        "localStorage is unavailable"
      ));
    };

    storage
      .get_item(TODOS_STORAGE_KEY)
      .map_err(describe_js_error)
  }

  fn save(
    &self,
    payload: &str
  ) -> anyhow::Result<()> {
    let Some(storage) =
      local_storage()
    else {
      return Err(anyhow!(
        "localStorage is unavailable"
      ));
    };

    storage
      .set_item(
        TODOS_STORAGE_KEY,
        payload
      )
      .map_err(describe_js_error)
  }
}

fn describe_js_error(
  value: JsValue
) -> anyhow::Error {
  anyhow!("{value:?}")
}
