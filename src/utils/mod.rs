pub mod extractor;
pub mod jwt;
pub mod parameter_error_handler;
pub mod validate;

pub use extractor::{SafeAssignmentIdI64, SafeFeedbackIdI64, SafeModuleIdI64, SafeUserIdI64};
pub use parameter_error_handler::json_error_handler;
