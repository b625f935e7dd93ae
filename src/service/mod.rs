use crate::{
    dto::{CreateNoteRequest, UpdateNoteRequest},
    error::{Error, Result},
    models::Note,
    repository::NoteRepository,
};

use std::sync::Arc;

#[derive(Clone)]
pub struct NoteService {
    repo: Arc<dyn NoteRepository>,
}

impl NoteService {
    pub fn new(repo: Arc<dyn NoteRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_note(&self, request: CreateNoteRequest) -> Result<Note> {
        let content = normalized(&request.content)?;
        self.repo.create_note(content).await
    }

    pub async fn update_note(&self, id: i64, request: UpdateNoteRequest) -> Result<Note> {
        let content = normalized(&request.content)?;
        self.repo
            .update_note(id, content)
            .await?
            .ok_or(Error::NoteNotFound(id))
    }

    pub async fn delete_note(&self, id: i64) -> Result<()> {
        if self.repo.delete_note(id).await? {
            Ok(())
        } else {
            Err(Error::NoteNotFound(id))
        }
    }

    pub async fn get_one_note(&self, id: i64) -> Result<Note> {
        self.repo
            .get_one_note(id)
            .await?
            .ok_or(Error::NoteNotFound(id))
    }

    pub async fn get_all_notes(&self) -> Result<Vec<Note>> {
        self.repo.get_all_notes().await
    }
}

/// Trims surrounding whitespace; whitespace-only content counts as empty.
fn normalized(content: &str) -> Result<String> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyContent);
    }
    Ok(trimmed.to_string())
}
