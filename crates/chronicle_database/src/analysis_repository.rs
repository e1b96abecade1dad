//! PostgreSQL implementation of AnalysisRepository.

use crate::conversions::{analysis_from_row, analysis_to_new_row, analysis_to_update_row};
use crate::schema::{episode_analyses, episodes};
use crate::EpisodeAnalysisRow;

use async_trait::async_trait;
use chronicle_core::EpisodeAnalysis;
use chronicle_error::{ChronicleResult, DatabaseError, DatabaseErrorKind};
use chronicle_interface::AnalysisRepository;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, instrument};

/// PostgreSQL implementation of AnalysisRepository using Diesel ORM.
///
/// One analysis row per episode, maintained by upsert: an existing-row
/// lookup on `episode_id` followed by a full replacement or an insert.
/// Two concurrent saves for the same episode through *separate*
/// repositories can race lookup-then-write and lose one update; the
/// physically last commit wins. The connection is `Arc<Mutex>`-guarded, so
/// saves through a shared repository instance are serialized.
pub struct PostgresAnalysisRepository {
    conn: Arc<Mutex<PgConnection>>,
}

impl PostgresAnalysisRepository {
    /// Create a new PostgreSQL analysis repository.
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
impl AnalysisRepository for PostgresAnalysisRepository {
    async fn get_by_episode_id(&self, episode_id: i32) -> ChronicleResult<Option<EpisodeAnalysis>> {
        let mut conn = self.conn.lock().await;

        let result: Option<(EpisodeAnalysisRow, String)> = episode_analyses::table
            .inner_join(episodes::table)
            .filter(episode_analyses::episode_id.eq(episode_id))
            .select((EpisodeAnalysisRow::as_select(), episodes::title))
            .first(&mut *conn)
            .optional()
            .map_err(DatabaseError::from)?;

        result
            .map(|(row, title)| analysis_from_row(row, title))
            .transpose()
            .map_err(Into::into)
    }

    #[instrument(skip(self, analysis), fields(episode_id = analysis.episode_id))]
    async fn save(
        &self,
        analysis: &EpisodeAnalysis,
        source: Option<&str>,
        version: Option<&str>,
    ) -> ChronicleResult<EpisodeAnalysis> {
        {
            let mut conn = self.conn.lock().await;

            let existing_id: Option<i32> = episode_analyses::table
                .filter(episode_analyses::episode_id.eq(analysis.episode_id))
                .select(episode_analyses::id)
                .first(&mut *conn)
                .optional()
                .map_err(DatabaseError::from)?;

            match existing_id {
                Some(id) => {
                    info!("Updating existing analysis");
                    let changes = analysis_to_update_row(analysis, source, version)?;
                    diesel::update(episode_analyses::table.find(id))
                        .set(&changes)
                        .execute(&mut *conn)
                        .map_err(DatabaseError::from)?;
                }
                None => {
                    info!("Creating new analysis");
                    let new_row = analysis_to_new_row(analysis, source, version)?;
                    diesel::insert_into(episode_analyses::table)
                        .values(&new_row)
                        .execute(&mut *conn)
                        .map_err(DatabaseError::from)?;
                }
            }
        }

        // Re-read so the returned value reflects exactly what is durable,
        // joined with the owning episode's title.
        self.get_by_episode_id(analysis.episode_id)
            .await?
            .ok_or_else(|| DatabaseError::new(DatabaseErrorKind::NotFound).into())
    }
}
