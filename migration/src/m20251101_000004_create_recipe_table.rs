use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_create_recipe_user_table::RecipeUser;

static IDX_RECIPE_USER_ID: &str = "idx_recipe_user_id";
static FK_RECIPE_USER_ID: &str = "fk_recipe_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Recipe::Table)
                    .if_not_exists()
                    .col(pk_auto(Recipe::Id))
                    .col(integer(Recipe::UserId))
                    .col(string(Recipe::Title))
                    .col(integer(Recipe::TimeMinutes))
                    .col(big_integer(Recipe::PriceCents))
                    .col(string(Recipe::Link).default(""))
                    .col(timestamp(Recipe::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RECIPE_USER_ID)
                    .table(Recipe::Table)
                    .col(Recipe::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RECIPE_USER_ID)
                    .from_tbl(Recipe::Table)
                    .from_col(Recipe::UserId)
                    .to_tbl(RecipeUser::Table)
                    .to_col(RecipeUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_RECIPE_USER_ID)
                    .table(Recipe::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RECIPE_USER_ID)
                    .table(Recipe::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Recipe::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Recipe {
    Table,
    Id,
    UserId,
    Title,
    TimeMinutes,
    PriceCents,
    Link,
    CreatedAt,
}
