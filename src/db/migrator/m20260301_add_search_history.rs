use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SearchHistory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SearchHistory::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SearchHistory::UserId).integer().not_null())
                    .col(ColumnDef::new(SearchHistory::VehicleMake).string().null())
                    .col(ColumnDef::new(SearchHistory::VehicleModel).string().null())
                    .col(ColumnDef::new(SearchHistory::VehicleYear).integer().null())
                    .col(ColumnDef::new(SearchHistory::PartCategory).string().null())
                    .col(ColumnDef::new(SearchHistory::SearchQuery).string().null())
                    .col(
                        ColumnDef::new(SearchHistory::CreatedAt)
                            .string()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_owned()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_search_history_user_created")
                    .table(SearchHistory::Table)
                    .col(SearchHistory::UserId)
                    .col(SearchHistory::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SearchHistory::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum SearchHistory {
    Table,
    Id,
    UserId,
    VehicleMake,
    VehicleModel,
    VehicleYear,
    PartCategory,
    SearchQuery,
    CreatedAt,
}
