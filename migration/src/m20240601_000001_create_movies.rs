use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movies::Table)
                    .if_not_exists()
                    .col(pk_auto(Movies::Id))
                    .col(string(Movies::Title))
                    .col(string_null(Movies::ReleaseDate))
                    .col(double_null(Movies::Length))
                    .col(string_null(Movies::Genre))
                    .col(string(Movies::Poster))
                    .col(string(Movies::Director))
                    .col(string_null(Movies::Rating))
                    .col(boolean(Movies::WatchAgain).default(false))
                    .col(json(Movies::Cast))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Movies::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Movies {
    Table,
    Id,
    Title,
    ReleaseDate,
    Length,
    Genre,
    Poster,
    Director,
    Rating,
    WatchAgain,
    Cast,
}
