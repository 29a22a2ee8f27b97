use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RecipeUser::Table)
                    .if_not_exists()
                    .col(pk_auto(RecipeUser::Id))
                    .col(string_uniq(RecipeUser::Email))
                    .col(string(RecipeUser::Name))
                    .col(string(RecipeUser::PasswordHash))
                    .col(boolean(RecipeUser::IsActive).default(true))
                    .col(timestamp(RecipeUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RecipeUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum RecipeUser {
    Table,
    Id,
    Email,
    Name,
    PasswordHash,
    IsActive,
    CreatedAt,
}
