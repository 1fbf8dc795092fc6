use profile_db::repositories::DEFAULT_LIST_LIMIT;

use serde::Deserialize;

/// Paging parameters for list endpoints
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct ListQuery {
    pub skip: i64,
    pub limit: i64,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl ListQuery {
    /// Negative values are treated as absent; `limit` is capped.
    pub fn bounds(&self) -> (i64, i64) {
        let skip = self.skip.max(0);
        let limit = if self.limit <= 0 {
            DEFAULT_LIST_LIMIT
        } else {
            self.limit.min(DEFAULT_LIST_LIMIT)
        };
        (skip, limit)
    }
}
