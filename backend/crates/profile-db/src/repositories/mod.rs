pub mod badge_repository;
pub mod learning_goal_repository;
pub mod reference_store;

/// Default page size for list queries.
pub const DEFAULT_LIST_LIMIT: i64 = 100;
