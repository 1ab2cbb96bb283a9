//! Service layer
//!
//! Each service wraps repository calls with the static prefix of the failing
//! step and runs input validation before touching the database.

pub mod education;
pub mod employment;
pub mod photo;
pub mod profile;
pub mod skill;

pub use education::EducationService;
pub use employment::EmploymentService;
pub use photo::PhotoService;
pub use profile::ProfileService;
pub use skill::SkillService;
