//! PostgreSQL implementation of EpisodeRepository.

use crate::conversions::{episode_from_row, episode_to_new_row, episode_to_update_row};
use crate::schema::{episode_analyses, episodes};
use crate::EpisodeRow;

use async_trait::async_trait;
use chronicle_core::Episode;
use chronicle_error::{ChronicleResult, DatabaseError, DatabaseErrorKind};
use chronicle_interface::EpisodeRepository;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, instrument};

/// PostgreSQL implementation of EpisodeRepository using Diesel ORM.
///
/// The connection is wrapped in `Arc<Mutex>` so each logical operation
/// holds the session exclusively for its duration; the handle is not safe
/// for unsynchronized concurrent mutation. For higher concurrency, give
/// each operation its own repository over a pooled connection.
pub struct PostgresEpisodeRepository {
    conn: Arc<Mutex<PgConnection>>,
}

impl PostgresEpisodeRepository {
    /// Create a new PostgreSQL episode repository.
    pub fn new(conn: PgConnection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Create a repository from a shared connection.
    pub fn from_arc(conn: Arc<Mutex<PgConnection>>) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl EpisodeRepository for PostgresEpisodeRepository {
    #[instrument(skip(self, episode), fields(title = %episode.title))]
    async fn create(&self, episode: &Episode) -> ChronicleResult<Episode> {
        if let Some(existing) = self
            .get_by_season_and_number(episode.season, episode.episode_number)
            .await?
        {
            return Err(DatabaseError::new(DatabaseErrorKind::Conflict {
                existing_id: existing.id,
                message: format!(
                    "Episode {} already exists as '{}'",
                    episode.episode_code(),
                    existing.title
                ),
            })
            .into());
        }

        let mut conn = self.conn.lock().await;

        let new_row = episode_to_new_row(episode)?;
        let row: EpisodeRow = diesel::insert_into(episodes::table)
            .values(&new_row)
            .get_result(&mut *conn)
            .map_err(DatabaseError::from)?;

        info!(id = row.id, "Created episode");
        Ok(episode_from_row(row)?)
    }

    async fn get_by_id(&self, id: i32) -> ChronicleResult<Option<Episode>> {
        let mut conn = self.conn.lock().await;

        let row: Option<EpisodeRow> = episodes::table
            .find(id)
            .first(&mut *conn)
            .optional()
            .map_err(DatabaseError::from)?;

        row.map(episode_from_row).transpose().map_err(Into::into)
    }

    async fn get_by_season_and_number(
        &self,
        season: i32,
        episode_number: i32,
    ) -> ChronicleResult<Option<Episode>> {
        let mut conn = self.conn.lock().await;

        let row: Option<EpisodeRow> = episodes::table
            .filter(episodes::season.eq(season))
            .filter(episodes::episode_number.eq(episode_number))
            .first(&mut *conn)
            .optional()
            .map_err(DatabaseError::from)?;

        row.map(episode_from_row).transpose().map_err(Into::into)
    }

    #[instrument(skip(self, episode), fields(id = episode.id))]
    async fn update(&self, episode: &Episode) -> ChronicleResult<Episode> {
        let mut conn = self.conn.lock().await;

        let changes = episode_to_update_row(episode)?;
        let row: EpisodeRow = diesel::update(episodes::table.find(episode.id))
            .set(&changes)
            .get_result(&mut *conn)
            .map_err(DatabaseError::from)?;

        Ok(episode_from_row(row)?)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> ChronicleResult<bool> {
        let mut conn = self.conn.lock().await;

        // Cascade: the analysis row goes with its episode.
        diesel::delete(episode_analyses::table.filter(episode_analyses::episode_id.eq(id)))
            .execute(&mut *conn)
            .map_err(DatabaseError::from)?;

        let deleted = diesel::delete(episodes::table.find(id))
            .execute(&mut *conn)
            .map_err(DatabaseError::from)?;

        if deleted > 0 {
            info!("Deleted episode and its analysis");
        }
        Ok(deleted > 0)
    }

    async fn list_all(&self, season: Option<i32>) -> ChronicleResult<Vec<Episode>> {
        let mut conn = self.conn.lock().await;

        let mut query = episodes::table.into_boxed();
        if let Some(season) = season {
            query = query.filter(episodes::season.eq(season));
        }

        let rows: Vec<EpisodeRow> = query
            .order((episodes::season.asc(), episodes::episode_number.asc()))
            .load(&mut *conn)
            .map_err(DatabaseError::from)?;

        rows.into_iter()
            .map(|row| episode_from_row(row).map_err(Into::into))
            .collect()
    }
}
