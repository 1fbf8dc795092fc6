use crate::{Result as SyncResult, SyncError};

use profile_core::{UserId, UserReference};
use profile_db::{DbError, ReferenceStore};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{debug, info};

/// Guarantees a reference row exists for a user before anything foreign-keys to it.
///
/// Safe under concurrent callers for the same id: the store's uniqueness
/// constraint decides the winner and the loser re-reads the winner's row.
#[derive(Clone)]
pub struct Reconciler {
    store: Arc<dyn ReferenceStore>,
}

impl Reconciler {
    pub fn new(store: Arc<dyn ReferenceStore>) -> Self {
        Self { store }
    }

    pub async fn ensure(&self, user_id: UserId) -> SyncResult<UserReference> {
        if let Some(existing) = self.store.get(user_id).await? {
            metrics::counter!("profile_reconcile_total", "action" => "existing").increment(1);
            return Ok(existing);
        }

        match self.store.create(user_id).await {
            Ok(created) => {
                info!("Created auth user reference for user {}", user_id);
                metrics::counter!("profile_reconcile_total", "action" => "created").increment(1);
                Ok(created)
            }
            Err(DbError::Conflict { .. }) => {
                debug!(
                    "Reference for user {} created concurrently, reading it back",
                    user_id
                );
                metrics::counter!("profile_reconcile_total", "action" => "race_absorbed")
                    .increment(1);
                self.store
                    .get(user_id)
                    .await?
                    .ok_or_else(|| SyncError::ReferenceVanished {
                        user_id,
                        location: ErrorLocation::from(Location::caller()),
                    })
            }
            Err(e) => Err(e.into()),
        }
    }
}
