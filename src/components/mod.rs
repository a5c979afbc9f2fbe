//! Widget Bindings
//!
//! Attach the headless widgets to server-rendered markup.

pub mod lawsuit_table;
mod list_filter;

pub use lawsuit_table::init_lawsuit_table;
pub use list_filter::init_list_filters;
