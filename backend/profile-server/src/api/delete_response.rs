use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub ok: bool,
    pub deleted_id: i64,
}

impl DeleteResponse {
    pub fn new(deleted_id: i64) -> Self {
        Self {
            ok: true,
            deleted_id,
        }
    }
}
