//! Legal Action UI
//!
//! Browser entry points for the lawsuit table and the list filters.
//! The hosting page calls the `init*` functions once with the widget's root
//! element; nothing is wired on load implicitly.

mod components;
mod context;
mod dom;
mod error;
mod logging;

use leptos::prelude::*;
use any_spawner::Executor;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::components::lawsuit_table::resolve_config;
use crate::error::UiError;
use legalaction_widgets::WidgetConfig;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logging::init_logging();
    // already initialized when another bundle on the page got there first
    let _ = Executor::init_wasm_bindgen();
}

/// Run `wire` under a root reactive owner that lives as long as the page
fn with_page_owner<T>(wire: impl FnOnce() -> T) -> T {
    let owner = Owner::new();
    let result = owner.with(wire);
    std::mem::forget(owner);
    result
}

/// Wire every `.list-filter__search` box under `root`.
/// Returns the number of list filters wired.
#[wasm_bindgen(js_name = initListFilters)]
pub fn init_list_filters(root: &Element) -> Result<u32, JsValue> {
    with_page_owner(|| components::init_list_filters(root)).map_err(JsValue::from)
}

/// Wire the lawsuit table under `root`.
///
/// `options` is `undefined`, `null` or a configuration object
/// (`{ hiddenClass: "hidden", minSearchLen: 3, ... }`). Without options the
/// root's `data-config` JSON attribute is used, then the defaults.
#[wasm_bindgen(js_name = initLawsuitTable)]
pub fn init_lawsuit_table(root: &Element, options: JsValue) -> Result<(), JsValue> {
    let options = if options.is_undefined() || options.is_null() {
        None
    } else {
        Some(serde_wasm_bindgen::from_value::<WidgetConfig>(options).map_err(UiError::from)?)
    };
    let config = resolve_config(options, root.get_attribute("data-config").as_deref())?;
    with_page_owner(|| components::init_lawsuit_table(root, config))?;
    Ok(())
}
