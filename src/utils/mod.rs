pub mod extractor;
pub mod number;
pub mod parameter_error_handler;

pub use extractor::SafeRecordId;
pub use number::{format_points, parse_decimal};
pub use parameter_error_handler::{form_error_handler, query_error_handler};
