use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LogEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LogEntries::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LogEntries::Name).string().not_null())
                    .col(ColumnDef::new(LogEntries::Description).string().not_null())
                    .col(ColumnDef::new(LogEntries::Date).string().not_null())
                    .col(ColumnDef::new(LogEntries::Location).string().not_null())
                    .col(
                        ColumnDef::new(LogEntries::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(LogEntries::CreatedAt).string().not_null())
                    .col(ColumnDef::new(LogEntries::UpdatedAt).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Backs the active-only, newest-first listing
        manager
            .create_index(
                Index::create()
                    .name("idx_log_entries_active_updated_at")
                    .table(LogEntries::Table)
                    .col(LogEntries::Active)
                    .col(LogEntries::UpdatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(LogEntries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum LogEntries {
    Table,
    Id,
    Name,
    Description,
    Date,
    Location,
    Active,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
}
