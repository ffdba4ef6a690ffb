//! AI helpers against `/api/ai/`.

use notes_client_types::{
    Answer, ContentRequest, Expanded, QuestionRequest, Simplified, SuggestedTags, Summary,
};
use reqwest::Method;

use crate::client::NotesClient;
use crate::error::Result;

pub struct AiApi<'a> {
    client: &'a NotesClient,
}

impl<'a> AiApi<'a> {
    pub(crate) fn new(client: &'a NotesClient) -> Self {
        Self { client }
    }

    /// Summary plus key points for a block of text
    pub async fn summarize(&self, content: &str) -> Result<Summary> {
        let body = ContentRequest {
            content: content.to_string(),
        };
        let request = self
            .client
            .request_json(Method::POST, "/api/ai/summarize", &body);
        self.client
            .fetch_json(request, "summarize".to_string())
            .await
    }

    /// Ask a question over the notes. `note_ids` narrows the notes the
    /// backend looks at; `None` leaves the scope to the backend.
    pub async fn ask_question(&self, question: &str, note_ids: Option<&[i64]>) -> Result<Answer> {
        let body = QuestionRequest {
            question: question.to_string(),
            note_ids: note_ids.map(|ids| ids.to_vec()),
        };
        let request = self
            .client
            .request_json(Method::POST, "/api/ai/question", &body);
        self.client
            .fetch_json(request, "get answer".to_string())
            .await
    }

    /// Suggested tags for a stored note
    pub async fn auto_tag(&self, note_id: i64) -> Result<SuggestedTags> {
        let request = self
            .client
            .request(Method::POST, &format!("/api/ai/auto-tag/{}", note_id));
        self.client
            .fetch_json(request, format!("generate tags for note {}", note_id))
            .await
    }

    pub async fn expand(&self, content: &str) -> Result<Expanded> {
        let body = ContentRequest {
            content: content.to_string(),
        };
        let request = self
            .client
            .request_json(Method::POST, "/api/ai/expand", &body);
        self.client
            .fetch_json(request, "expand text".to_string())
            .await
    }

    pub async fn simplify(&self, content: &str) -> Result<Simplified> {
        let body = ContentRequest {
            content: content.to_string(),
        };
        let request = self
            .client
            .request_json(Method::POST, "/api/ai/simplify", &body);
        self.client
            .fetch_json(request, "simplify text".to_string())
            .await
    }
}
