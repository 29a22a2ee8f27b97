pub use sea_orm_migration::prelude::*;

mod m20251101_000001_create_recipe_user_table;
mod m20251101_000002_create_tag_table;
mod m20251101_000003_create_ingredient_table;
mod m20251101_000004_create_recipe_table;
mod m20251101_000005_create_recipe_tag_table;
mod m20251101_000006_create_recipe_ingredient_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_create_recipe_user_table::Migration),
            Box::new(m20251101_000002_create_tag_table::Migration),
            Box::new(m20251101_000003_create_ingredient_table::Migration),
            Box::new(m20251101_000004_create_recipe_table::Migration),
            Box::new(m20251101_000005_create_recipe_tag_table::Migration),
            Box::new(m20251101_000006_create_recipe_ingredient_table::Migration),
        ]
    }
}
