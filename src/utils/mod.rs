pub mod extractor;
pub mod id;
pub mod natural_sort;
pub mod parameter_error_handler;
pub mod password;
pub mod validate;

pub use extractor::{
    SafeAssignmentId, SafeClassId, SafeExamId, SafeStudentId, SafeTeacherId, SafeTimetableId,
};
pub use id::generate_id;
pub use natural_sort::compare_rolls;
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
