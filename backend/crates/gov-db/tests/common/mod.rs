#![allow(dead_code)]

pub mod fixtures;
pub mod test_db;

pub use fixtures::new_test_identity;
pub use test_db::create_test_pool;
