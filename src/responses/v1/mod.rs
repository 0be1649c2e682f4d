pub mod actor;
pub mod actor_cast;
pub mod auth;
pub mod director;
pub mod feedback;
pub mod movie;
pub mod user;
