pub mod date;
pub mod format;
pub mod general;
pub mod length;
pub mod number;
pub mod selection;

pub use date::{is_date, max_date, min_date, range_date};
pub use format::{is_alphanumeric, is_digit, is_email, is_number, is_url};
pub use general::{is_blank, is_empty, is_equal, matches_pattern};
pub use length::{max_length, min_length, range_length};
pub use number::{max_number, min_number, range_number};
pub use selection::{max_check, min_check, range_check};
