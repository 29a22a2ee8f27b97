use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_create_recipe_user_table::RecipeUser;

static IDX_TAG_USER_ID: &str = "idx_tag_user_id";
static FK_TAG_USER_ID: &str = "fk_tag_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tag::Table)
                    .if_not_exists()
                    .col(pk_auto(Tag::Id))
                    .col(integer(Tag::UserId))
                    .col(string(Tag::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TAG_USER_ID)
                    .table(Tag::Table)
                    .col(Tag::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TAG_USER_ID)
                    .from_tbl(Tag::Table)
                    .from_col(Tag::UserId)
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
                    .name(FK_TAG_USER_ID)
                    .table(Tag::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TAG_USER_ID)
                    .table(Tag::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Tag::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Tag {
    Table,
    Id,
    UserId,
    Name,
}
