//! Entity structs for all Registrar domain objects.
//!
//! Each owned entity maps to a table in the libsql database. All structs
//! derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip
//! and schema generation.

mod course;
mod enrollment;
mod student;

pub use course::Course;
pub use enrollment::{Enrollment, EnrollmentView, SelectOption};
pub use student::Student;
