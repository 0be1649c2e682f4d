pub mod actor_casts;
pub mod actors;
pub mod directors;
pub mod feedbacks;
pub mod movies;
pub mod tokens;
pub mod users;
