pub use sea_orm_migration::prelude::*;

mod m20251020_090000_create_submissions_sheet;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20251020_090000_create_submissions_sheet::Migration)]
    }
}
