use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000002_create_tag_table::Tag,
    m20251101_000004_create_recipe_table::Recipe,
};

static IDX_RECIPE_TAG_TAG_ID: &str = "idx_recipe_tag_tag_id";
static FK_RECIPE_TAG_RECIPE_ID: &str = "fk_recipe_tag_recipe_id";
static FK_RECIPE_TAG_TAG_ID: &str = "fk_recipe_tag_tag_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RecipeTag::Table)
                    .if_not_exists()
                    .col(integer(RecipeTag::RecipeId))
                    .col(integer(RecipeTag::TagId))
                    .primary_key(
                        Index::create()
                            .col(RecipeTag::RecipeId)
                            .col(RecipeTag::TagId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RECIPE_TAG_TAG_ID)
                    .table(RecipeTag::Table)
                    .col(RecipeTag::TagId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RECIPE_TAG_RECIPE_ID)
                    .from_tbl(RecipeTag::Table)
                    .from_col(RecipeTag::RecipeId)
                    .to_tbl(Recipe::Table)
                    .to_col(Recipe::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RECIPE_TAG_TAG_ID)
                    .from_tbl(RecipeTag::Table)
                    .from_col(RecipeTag::TagId)
                    .to_tbl(Tag::Table)
                    .to_col(Tag::Id)
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
                    .name(FK_RECIPE_TAG_TAG_ID)
                    .table(RecipeTag::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_RECIPE_TAG_RECIPE_ID)
                    .table(RecipeTag::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RECIPE_TAG_TAG_ID)
                    .table(RecipeTag::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RecipeTag::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum RecipeTag {
    Table,
    RecipeId,
    TagId,
}
