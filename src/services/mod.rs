//! Business operations. Each function takes the dependencies it needs
//! explicitly and returns the DTO handed to the controller.

pub mod v1;
