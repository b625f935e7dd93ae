mod embedded;
#[cfg(test)]
pub mod mem;

use async_trait::async_trait;
use tokio_postgres::{Client, NoTls};

use crate::error::Result;
use crate::models::Note;

use embedded::migrations;

/// The only path between the service layer and the relational store.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Inserts a note. Content is validated non-empty by the caller.
    async fn create_note(&self, content: String) -> Result<Note>;
    /// Replaces content and refreshes `updated_at`. `None` when no row matches.
    async fn update_note(&self, id: i64, content: String) -> Result<Option<Note>>;
    /// Hard delete. `false` when no row matched.
    async fn delete_note(&self, id: i64) -> Result<bool>;
    async fn get_one_note(&self, id: i64) -> Result<Option<Note>>;
    /// All notes, newest `created_at` first.
    async fn get_all_notes(&self) -> Result<Vec<Note>>;
}

pub struct PgRepository {
    client: Client,
}

impl PgRepository {
    pub async fn connect(database_dsn: &str) -> Result<Self> {
        let (client, con) = tokio_postgres::connect(database_dsn, NoTls).await?;

        tokio::spawn(async move {
            if let Err(e) = con.await {
                tracing::error!("connection error: {}", e);
            }
        });

        Ok(Self { client })
    }

    pub async fn migrate(&mut self) -> std::result::Result<(), refinery::Error> {
        let migrations_report = migrations::runner().run_async(&mut self.client).await?;

        for migration in migrations_report.applied_migrations() {
            tracing::info!(
                "Migration Applied -  Name: {}, Version: {}",
                migration.name(),
                migration.version()
            );
        }

        tracing::info!("DB migrations finished!");

        Ok(())
    }
}

#[async_trait]
impl NoteRepository for PgRepository {
    async fn create_note(&self, content: String) -> Result<Note> {
        let row = self.client.query_one(
            "INSERT INTO notes (content) VALUES ($1) RETURNING id, content, created_at, updated_at",
            &[&content],
        ).await?;

        Ok(Note {
            id: row.get("id"),
            content: row.get("content"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }

    async fn update_note(&self, id: i64, content: String) -> Result<Option<Note>> {
        // updated_at is refreshed here; Postgres has no ON UPDATE trigger.
        let row = self.client.query_opt(
            "UPDATE notes SET content = $1, updated_at = now() WHERE id = $2 RETURNING id, content, created_at, updated_at",
            &[&content, &id],
        ).await?;

        Ok(row.map(|row| Note {
            id: row.get("id"),
            content: row.get("content"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }))
    }

    async fn delete_note(&self, id: i64) -> Result<bool> {
        let rows = self
            .client
            .execute("DELETE FROM notes WHERE id = $1", &[&id])
            .await?;

        Ok(rows == 1)
    }

    async fn get_one_note(&self, id: i64) -> Result<Option<Note>> {
        let row = self
            .client
            .query_opt(
                "SELECT id, content, created_at, updated_at FROM notes WHERE id = $1",
                &[&id],
            )
            .await?;

        Ok(row.map(|row| Note {
            id: row.get("id"),
            content: row.get("content"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }))
    }

    async fn get_all_notes(&self) -> Result<Vec<Note>> {
        // id breaks ties between equal timestamps so the order stays stable.
        let rows = self
            .client
            .query(
                "SELECT id, content, created_at, updated_at FROM notes ORDER BY created_at DESC, id DESC",
                &[],
            )
            .await?;

        let mut vec: Vec<Note> = Vec::new();

        for row in rows {
            vec.push(Note {
                id: row.get("id"),
                content: row.get("content"),
                created_at: row.get("created_at"),
                updated_at: row.get("updated_at"),
            });
        }

        Ok(vec)
    }
}
