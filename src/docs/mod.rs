//! Rule documentation.
//!
//! - [`Category`] - Preset categories rules belong to
//! - [`RulesIndex`] - Generator for the rules index page

pub mod category;
pub mod rules_index;

pub use category::Category;
pub use rules_index::{load_catalog, RuleDocEntry, RulesIndex, UpstreamStatus, UPSTREAM_BASE};
