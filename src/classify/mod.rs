//! Classification of zone files into manifest records.
//!
//! The rule table, the classifier that walks it, and the filters that decide which files are
//! offered to the classifier at all live in separate submodules so each can be tested on its
//! own. The classifier is pure: it only reads the compiled rule table and its arguments.

mod classifier;
mod filters;
mod rules;

pub use classifier::{classify, classify_and_format};
pub use filters::{is_valid_map_file, should_skip_file};
pub use rules::{RULE_TABLE, Rule, RuleDefinition, rules};
