use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SafeZone::Table)
                    .col(
                        ColumnDef::new(SafeZone::PatientId)
                            .uuid()
                            .not_null()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(SafeZone::CaregiverId)
                            .uuid()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(SafeZone::CenterLat)
                            .double()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(SafeZone::CenterLng)
                            .double()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(SafeZone::RadiusM)
                            .double()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(SafeZone::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .to_owned()
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PatientLocation::Table)
                    .col(
                        ColumnDef::new(PatientLocation::PatientId)
                            .uuid()
                            .not_null()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(PatientLocation::Lat)
                            .double()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(PatientLocation::Lng)
                            .double()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(PatientLocation::IsInsideSafeZone)
                            .boolean()
                            .not_null()
                            .default(true)
                    )
                    .col(
                        ColumnDef::new(PatientLocation::LastAlertSentAt)
                            .timestamp_with_time_zone()
                    )
                    .col(
                        ColumnDef::new(PatientLocation::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .to_owned()
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GeofenceEvent::Table)
                    .col(
                        ColumnDef::new(GeofenceEvent::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(GeofenceEvent::PatientId)
                            .uuid()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(GeofenceEvent::CaregiverId)
                            .uuid()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(GeofenceEvent::EventType)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(GeofenceEvent::Lat)
                            .double()
                    )
                    .col(
                        ColumnDef::new(GeofenceEvent::Lng)
                            .double()
                    )
                    .col(
                        ColumnDef::new(GeofenceEvent::TriggeredAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .to_owned()
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TrustedContact::Table)
                    .col(
                        ColumnDef::new(TrustedContact::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(TrustedContact::PatientId)
                            .uuid()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(TrustedContact::Email)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(TrustedContact::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .to_owned()
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrustedContact::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GeofenceEvent::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PatientLocation::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SafeZone::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum SafeZone {
    Table,
    PatientId,
    CaregiverId,
    CenterLat,
    CenterLng,
    RadiusM,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum PatientLocation {
    Table,
    PatientId,
    Lat,
    Lng,
    IsInsideSafeZone,
    LastAlertSentAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum GeofenceEvent {
    Table,
    Id,
    PatientId,
    CaregiverId,
    EventType,
    Lat,
    Lng,
    TriggeredAt,
}

#[derive(DeriveIden)]
enum TrustedContact {
    Table,
    Id,
    PatientId,
    Email,
    CreatedAt,
}
