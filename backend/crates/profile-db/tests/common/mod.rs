#![allow(dead_code)]

mod test_db;

pub use test_db::{count_references, create_test_pool, create_test_reference};
