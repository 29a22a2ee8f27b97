use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000003_create_ingredient_table::Ingredient,
    m20251101_000004_create_recipe_table::Recipe,
};

static IDX_RECIPE_INGREDIENT_INGREDIENT_ID: &str = "idx_recipe_ingredient_ingredient_id";
static FK_RECIPE_INGREDIENT_RECIPE_ID: &str = "fk_recipe_ingredient_recipe_id";
static FK_RECIPE_INGREDIENT_INGREDIENT_ID: &str = "fk_recipe_ingredient_ingredient_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RecipeIngredient::Table)
                    .if_not_exists()
                    .col(integer(RecipeIngredient::RecipeId))
                    .col(integer(RecipeIngredient::IngredientId))
                    .primary_key(
                        Index::create()
                            .col(RecipeIngredient::RecipeId)
                            .col(RecipeIngredient::IngredientId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RECIPE_INGREDIENT_INGREDIENT_ID)
                    .table(RecipeIngredient::Table)
                    .col(RecipeIngredient::IngredientId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RECIPE_INGREDIENT_RECIPE_ID)
                    .from_tbl(RecipeIngredient::Table)
                    .from_col(RecipeIngredient::RecipeId)
                    .to_tbl(Recipe::Table)
                    .to_col(Recipe::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RECIPE_INGREDIENT_INGREDIENT_ID)
                    .from_tbl(RecipeIngredient::Table)
                    .from_col(RecipeIngredient::IngredientId)
                    .to_tbl(Ingredient::Table)
                    .to_col(Ingredient::Id)
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
                    .name(FK_RECIPE_INGREDIENT_INGREDIENT_ID)
                    .table(RecipeIngredient::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_RECIPE_INGREDIENT_RECIPE_ID)
                    .table(RecipeIngredient::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RECIPE_INGREDIENT_INGREDIENT_ID)
                    .table(RecipeIngredient::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RecipeIngredient::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum RecipeIngredient {
    Table,
    RecipeId,
    IngredientId,
}
