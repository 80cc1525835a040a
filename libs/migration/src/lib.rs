pub use sea_orm_migration::prelude::*;

mod m20241128_000000_bootstrap;
mod m20241129_000000_create_todos;
mod m20241129_000001_create_users;
mod m20241129_000002_seed_users;

pub use m20241129_000002_seed_users::SEED_PASSWORD;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241128_000000_bootstrap::Migration),
            Box::new(m20241129_000000_create_todos::Migration),
            Box::new(m20241129_000001_create_users::Migration),
            Box::new(m20241129_000002_seed_users::Migration),
        ]
    }
}
