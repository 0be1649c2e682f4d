pub mod delete;
pub mod find;
pub mod register;

use crate::errors::Error;

pub(crate) fn not_found(id: i64) -> Error {
    Error::not_found(format!("User with id {id} not found"))
}
