pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_directors;
mod m20240301_000002_create_movies;
mod m20240301_000003_create_actors;
mod m20240301_000004_create_actor_casts;
mod m20240301_000005_create_users;
mod m20240301_000006_create_feedbacks;
mod m20240301_000007_create_tokens;
mod m20240301_000008_admin_seeder;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_directors::Migration),
            Box::new(m20240301_000002_create_movies::Migration),
            Box::new(m20240301_000003_create_actors::Migration),
            Box::new(m20240301_000004_create_actor_casts::Migration),
            Box::new(m20240301_000005_create_users::Migration),
            Box::new(m20240301_000006_create_feedbacks::Migration),
            Box::new(m20240301_000007_create_tokens::Migration),
            Box::new(m20240301_000008_admin_seeder::Migration),
        ]
    }
}
