//! Domain models
//!
//! Read-only row types fetched by the repositories, plus the resolved
//! request identity. This service never writes any of these back.

pub mod contest;
pub mod identity;
pub mod problem;
pub mod profile;
pub mod rating;
pub mod submission;

pub use contest::{Contest, ContestParticipation, ContestProblem};
pub use identity::{ActingUser, Capability, Identity};
pub use problem::Problem;
pub use profile::Profile;
pub use rating::Rating;
pub use submission::{Submission, SubmissionTestCase};
