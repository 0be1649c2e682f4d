pub mod delete;
pub mod find;
pub mod store;

use crate::errors::Error;

pub(crate) fn not_found(id: i64) -> Error {
    Error::not_found(format!("Actor with id {id} not found"))
}
