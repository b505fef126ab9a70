//! Small text helpers shared by the lenient parsers, the handlers and the CLI.

mod text;

pub use text::{collapse_whitespace, split_list, strip_control_chars};
