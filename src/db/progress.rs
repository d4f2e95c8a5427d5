use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::progress::{GameTypeStats, ProgressSummary, RGameSession};
use crate::utils::token;
use chrono::Utc;
use entity::game_session::{ActiveModel as SessionActive, Column, Entity as Session};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use std::collections::BTreeMap;
use uuid::Uuid;

impl PostgresService {
    pub async fn insert_game_session(
        &self,
        patient_id: Uuid,
        payload: RGameSession,
    ) -> Result<Uuid, AppError> {
        let id = token::new_id();
        Session::insert(SessionActive {
            id: Set(id),
            patient_id: Set(patient_id),
            game_type: Set(payload.game_type),
            hits: Set(payload.hits),
            errors: Set(payload.errors),
            levels_completed: Set(payload.levels_completed),
            duration_seconds: Set(payload.duration_seconds),
            played_at: Set(Utc::now()),
        })
        .exec(&self.database_connection)
        .await?;
        Ok(id)
    }

    pub async fn summarize_progress(&self, patient_id: Uuid) -> Result<ProgressSummary, AppError> {
        let sessions = Session::find()
            .filter(Column::PatientId.eq(patient_id))
            .order_by_asc(Column::PlayedAt)
            .all(&self.database_connection)
            .await?;

        let mut total_levels: i64 = 0;
        let mut total_hits: i64 = 0;
        let mut total_errors: i64 = 0;
        let mut total_seconds: i64 = 0;
        let mut by_game: BTreeMap<String, GameTypeStats> = BTreeMap::new();

        for s in &sessions {
            total_levels += s.levels_completed as i64;
            total_hits += s.hits as i64;
            total_errors += s.errors as i64;
            total_seconds += s.duration_seconds as i64;

            let stats = by_game
                .entry(s.game_type.clone())
                .or_insert_with(|| GameTypeStats {
                    game_type: s.game_type.clone(),
                    sessions: 0,
                    total_hits: 0,
                    total_errors: 0,
                    levels_completed: 0,
                });
            stats.sessions += 1;
            stats.total_hits += s.hits as i64;
            stats.total_errors += s.errors as i64;
            stats.levels_completed += s.levels_completed as i64;
        }

        let avg_session_seconds = if sessions.is_empty() {
            0.0
        } else {
            total_seconds as f64 / sessions.len() as f64
        };

        Ok(ProgressSummary {
            sessions: sessions.len(),
            total_levels,
            total_hits,
            total_errors,
            avg_session_seconds,
            by_game: by_game.into_values().collect(),
        })
    }
}
