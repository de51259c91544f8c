//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&DbPool` as the first argument.

pub mod action_repo;
pub mod project_repo;

pub use action_repo::ActionRepo;
pub use project_repo::ProjectRepo;
