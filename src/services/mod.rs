//! Business logic services
//!
//! Each service is a stateless projector: it fetches candidate rows through
//! the repositories, applies the visibility policy, and shapes the response
//! mapping. No service ever writes.

pub mod contest_service;
pub mod identity_service;
pub mod problem_service;
pub mod submission_service;
pub mod user_service;

pub use contest_service::ContestService;
pub use identity_service::IdentityService;
pub use problem_service::ProblemService;
pub use submission_service::SubmissionService;
pub use user_service::UserService;
