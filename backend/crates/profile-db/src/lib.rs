pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{MIGRATOR, connect, run_migrations};
pub use error::{DbError, Result};
pub use repositories::badge_repository::BadgeRepository;
pub use repositories::learning_goal_repository::LearningGoalRepository;
pub use repositories::reference_store::{ReferenceStore, SqliteReferenceStore};
