pub mod delete;
pub mod find;
pub mod store;
