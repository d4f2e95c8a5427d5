pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_profile_table;
mod m20250301_000002_create_caregiver_tables;
mod m20250315_000001_create_geofence_tables;
mod m20250402_000001_create_game_session_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_profile_table::Migration),
            Box::new(m20250301_000002_create_caregiver_tables::Migration),
            Box::new(m20250315_000001_create_geofence_tables::Migration),
            Box::new(m20250402_000001_create_game_session_table::Migration),
        ]
    }
}
