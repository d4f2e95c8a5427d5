use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CaregiverInvite::Table)
                    .col(
                        ColumnDef::new(CaregiverInvite::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(CaregiverInvite::PatientId)
                            .uuid()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(CaregiverInvite::CaregiverEmail)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(CaregiverInvite::CodeHash)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(CaregiverInvite::Used)
                            .boolean()
                            .not_null()
                            .default(false)
                    )
                    .col(
                        ColumnDef::new(CaregiverInvite::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(CaregiverInvite::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .to_owned()
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_caregiver_invite_lookup")
                    .table(CaregiverInvite::Table)
                    .col(CaregiverInvite::PatientId)
                    .col(CaregiverInvite::CodeHash)
                    .to_owned()
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CaregiverLink::Table)
                    .col(
                        ColumnDef::new(CaregiverLink::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(CaregiverLink::CaregiverId)
                            .uuid()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(CaregiverLink::PatientId)
                            .uuid()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(CaregiverLink::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .to_owned()
            )
            .await?;

        // The 1:1 invariant lives here, not in application code. A second
        // concurrent confirmation loses the race on one of these.
        manager
            .create_index(
                Index::create()
                    .name("uq_caregiver_link_patient")
                    .table(CaregiverLink::Table)
                    .col(CaregiverLink::PatientId)
                    .unique()
                    .to_owned()
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_caregiver_link_caregiver")
                    .table(CaregiverLink::Table)
                    .col(CaregiverLink::CaregiverId)
                    .unique()
                    .to_owned()
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(CaregiverLink::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(CaregiverInvite::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum CaregiverInvite {
    Table,
    Id,
    PatientId,
    CaregiverEmail,
    CodeHash,
    Used,
    ExpiresAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum CaregiverLink {
    Table,
    Id,
    CaregiverId,
    PatientId,
    CreatedAt,
}
