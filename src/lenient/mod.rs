//! Lenient scalar parsers.
//!
//! Every parser here returns `None` for input it cannot make sense of and
//! never panics. Callers leave the field unset and keep going.

mod date;
mod duration;
mod number;

pub use date::parse_date;
pub use duration::parse_duration;
pub use number::{parse_decimal, parse_flag, parse_integer};
