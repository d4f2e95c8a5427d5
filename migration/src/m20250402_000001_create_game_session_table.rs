use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameSession::Table)
                    .col(
                        ColumnDef::new(GameSession::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(GameSession::PatientId)
                            .uuid()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(GameSession::GameType)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(GameSession::Hits)
                            .integer()
                            .not_null()
                            .default(0)
                    )
                    .col(
                        ColumnDef::new(GameSession::Errors)
                            .integer()
                            .not_null()
                            .default(0)
                    )
                    .col(
                        ColumnDef::new(GameSession::LevelsCompleted)
                            .integer()
                            .not_null()
                            .default(0)
                    )
                    .col(
                        ColumnDef::new(GameSession::DurationSeconds)
                            .integer()
                            .not_null()
                            .default(0)
                    )
                    .col(
                        ColumnDef::new(GameSession::PlayedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .to_owned()
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_game_session_patient")
                    .table(GameSession::Table)
                    .col(GameSession::PatientId)
                    .to_owned()
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(GameSession::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum GameSession {
    Table,
    Id,
    PatientId,
    GameType,
    Hits,
    Errors,
    LevelsCompleted,
    DurationSeconds,
    PlayedAt,
}
