#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for list controller transitions.
pub const TRACING_TARGET_LIST: &str = "maison_console::list";

mod debounce;
mod list;
mod selection;
mod sort;

pub use debounce::Debouncer;
pub use list::{FetchRequest, ListController, ListEffect, LoadPhase};
pub use selection::Selection;
pub use sort::{SortChain, SortDir, SortEntry};
