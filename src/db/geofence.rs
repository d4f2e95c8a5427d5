use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::token;
use chrono::{DateTime, Utc};
use entity::geofence_event::{ActiveModel as EventActive, Entity as Event, Model as EventModel};
use entity::patient_location::{
    ActiveModel as LocationActive, Column as LocationColumn, Entity as Location,
    Model as LocationModel,
};
use entity::safe_zone::{
    ActiveModel as ZoneActive, Column as ZoneColumn, Entity as Zone, Model as ZoneModel,
};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

impl PostgresService {
    pub async fn get_safe_zone(&self, patient_id: Uuid) -> Result<Option<ZoneModel>, AppError> {
        Ok(Zone::find_by_id(patient_id)
            .one(&self.database_connection)
            .await?)
    }

    pub async fn upsert_safe_zone(
        &self,
        patient_id: Uuid,
        caregiver_id: Uuid,
        center_lat: f64,
        center_lng: f64,
        radius_m: f64,
    ) -> Result<(), AppError> {
        Zone::insert(ZoneActive {
            patient_id: Set(patient_id),
            caregiver_id: Set(caregiver_id),
            center_lat: Set(center_lat),
            center_lng: Set(center_lng),
            radius_m: Set(radius_m),
            updated_at: Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(ZoneColumn::PatientId)
                .update_columns([
                    ZoneColumn::CaregiverId,
                    ZoneColumn::CenterLat,
                    ZoneColumn::CenterLng,
                    ZoneColumn::RadiusM,
                    ZoneColumn::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec(&self.database_connection)
        .await?;
        Ok(())
    }

    pub async fn get_location(&self, patient_id: Uuid) -> Result<Option<LocationModel>, AppError> {
        Ok(Location::find_by_id(patient_id)
            .one(&self.database_connection)
            .await?)
    }

    /// Position updates keep the geofence state columns untouched; only the
    /// evaluation step moves those.
    pub async fn upsert_location(
        &self,
        patient_id: Uuid,
        lat: f64,
        lng: f64,
    ) -> Result<(), AppError> {
        Location::insert(LocationActive {
            patient_id: Set(patient_id),
            lat: Set(lat),
            lng: Set(lng),
            is_inside_safe_zone: Set(true),
            last_alert_sent_at: Set(None),
            updated_at: Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(LocationColumn::PatientId)
                .update_columns([
                    LocationColumn::Lat,
                    LocationColumn::Lng,
                    LocationColumn::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec(&self.database_connection)
        .await?;
        Ok(())
    }

    pub async fn set_location_state(
        &self,
        patient_id: Uuid,
        is_inside: bool,
        alert_sent_at: Option<DateTime<Utc>>,
    ) -> Result<(), AppError> {
        let location = self
            .get_location(patient_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Location not reported".into()))?;
        let mut am: LocationActive = location.into();
        am.is_inside_safe_zone = Set(is_inside);
        if let Some(at) = alert_sent_at {
            am.last_alert_sent_at = Set(Some(at));
        }
        am.updated_at = Set(Utc::now());
        am.update(&self.database_connection).await?;
        Ok(())
    }

    pub async fn insert_geofence_event(
        &self,
        patient_id: Uuid,
        caregiver_id: Uuid,
        event_type: &str,
        lat: Option<f64>,
        lng: Option<f64>,
    ) -> Result<Uuid, AppError> {
        let id = token::new_id();
        Event::insert(EventActive {
            id: Set(id),
            patient_id: Set(patient_id),
            caregiver_id: Set(caregiver_id),
            event_type: Set(event_type.to_string()),
            lat: Set(lat),
            lng: Set(lng),
            triggered_at: Set(Utc::now()),
        })
        .exec(&self.database_connection)
        .await?;
        Ok(id)
    }

    pub async fn list_events_for_caregiver(
        &self,
        caregiver_id: Uuid,
        limit: u64,
    ) -> Result<Vec<EventModel>, AppError> {
        Ok(Event::find()
            .filter(entity::geofence_event::Column::CaregiverId.eq(caregiver_id))
            .order_by_desc(entity::geofence_event::Column::TriggeredAt)
            .limit(limit)
            .all(&self.database_connection)
            .await?)
    }
}
