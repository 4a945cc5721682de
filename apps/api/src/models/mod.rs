pub mod posting;
pub mod profile;

pub use posting::{JobPosting, ScoredJobPosting};
pub use profile::{ExperienceLevel, StudentProfile};
