//! Note CRUD against `/api/notes/`.

use notes_client_types::{CreateNoteData, Note, UpdateNoteData};
use reqwest::Method;

use crate::client::NotesClient;
use crate::error::Result;

const COLLECTION: &str = "/api/notes/";

fn item_path(id: i64) -> String {
    format!("/api/notes/{}", id)
}

pub struct NotesApi<'a> {
    client: &'a NotesClient,
}

impl<'a> NotesApi<'a> {
    pub(crate) fn new(client: &'a NotesClient) -> Self {
        Self { client }
    }

    /// List every note
    pub async fn get_all(&self) -> Result<Vec<Note>> {
        let request = self.client.request(Method::GET, COLLECTION);
        self.client
            .fetch_json(request, "fetch notes".to_string())
            .await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Note> {
        let request = self.client.request(Method::GET, &item_path(id));
        self.client
            .fetch_json(request, format!("fetch note {}", id))
            .await
    }

    pub async fn create(&self, data: &CreateNoteData) -> Result<Note> {
        let request = self.client.request_json(Method::POST, COLLECTION, data);
        self.client
            .fetch_json(request, "create note".to_string())
            .await
    }

    /// Apply a partial patch. Fields left unset are not sent.
    pub async fn update(&self, id: i64, data: &UpdateNoteData) -> Result<Note> {
        let request = self.client.request_json(Method::PUT, &item_path(id), data);
        self.client
            .fetch_json(request, format!("update note {}", id))
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let request = self.client.request(Method::DELETE, &item_path(id));
        self.client
            .fetch_empty(request, format!("delete note {}", id))
            .await
    }

    /// Pin or unpin a note
    pub async fn set_pinned(&self, id: i64, pinned: bool) -> Result<Note> {
        self.update(id, &UpdateNoteData::default().pinned(pinned))
            .await
    }
}
