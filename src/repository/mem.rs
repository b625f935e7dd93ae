//! In-memory repository used by service and handler tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use crate::error::Result;
use crate::models::Note;

use super::NoteRepository;

pub struct MemRepository {
    notes: Mutex<Vec<Note>>,
    next_id: AtomicI64,
}

impl MemRepository {
    pub fn new() -> Self {
        Self {
            notes: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NoteRepository for MemRepository {
    async fn create_note(&self, content: String) -> Result<Note> {
        let now = Utc::now();
        let note = Note {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            content,
            created_at: now,
            updated_at: now,
        };
        self.notes.lock().unwrap().push(note.clone());
        Ok(note)
    }

    async fn update_note(&self, id: i64, content: String) -> Result<Option<Note>> {
        let mut notes = self.notes.lock().unwrap();
        Ok(notes.iter_mut().find(|note| note.id == id).map(|note| {
            note.content = content;
            note.updated_at = Utc::now();
            note.clone()
        }))
    }

    async fn delete_note(&self, id: i64) -> Result<bool> {
        let mut notes = self.notes.lock().unwrap();
        let before = notes.len();
        notes.retain(|note| note.id != id);
        Ok(notes.len() < before)
    }

    async fn get_one_note(&self, id: i64) -> Result<Option<Note>> {
        let notes = self.notes.lock().unwrap();
        Ok(notes.iter().find(|note| note.id == id).cloned())
    }

    async fn get_all_notes(&self) -> Result<Vec<Note>> {
        let mut notes = self.notes.lock().unwrap().clone();
        notes.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(notes)
    }
}
