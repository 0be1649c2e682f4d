pub mod filter;
pub mod identity;
pub mod password;
pub mod provider;
pub mod rules;
pub mod session;
pub mod validation;

pub use filter::SecurityFilter;
pub use identity::Identity;
pub use password::PasswordHasher;
pub use provider::{AuthenticationProvider, UserLookup};
pub use session::Sessions;
pub use validation::Validator;
