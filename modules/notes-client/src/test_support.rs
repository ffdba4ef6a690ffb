//! In-process fake of the notes backend for client tests.

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use notes_client_types::*;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

const CREATED_AT: &str = "2025-03-01T10:00:00Z";
const UPDATED_AT: &str = "2025-03-02T10:00:00Z";

#[derive(Default)]
pub struct FakeBackend {
    pub notes: HashMap<i64, Note>,
    next_id: i64,
}

pub type SharedState = Arc<Mutex<FakeBackend>>;

type Failure = (StatusCode, Json<Value>);

fn not_found() -> Failure {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "detail": "Note not found" })),
    )
}

fn sentences(text: &str) -> Vec<String> {
    text.split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Serve `router` on an ephemeral port and return its base URL
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Server error");
    });

    format!("http://{}", addr)
}

/// Start a fresh, empty fake backend
pub async fn spawn_fake_backend() -> (String, SharedState) {
    let state: SharedState = Arc::new(Mutex::new(FakeBackend::default()));

    let app = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/notes/", get(list_notes).post(create_note))
        .route(
            "/api/notes/:id",
            get(get_note).put(update_note).delete(delete_note),
        )
        .route("/api/ai/summarize", post(summarize))
        .route("/api/ai/question", post(question))
        .route("/api/ai/auto-tag/:id", post(auto_tag))
        .route("/api/ai/expand", post(expand))
        .route("/api/ai/simplify", post(simplify))
        .route("/api/search/semantic", post(search))
        .route("/api/search/keyword", post(search))
        .with_state(state.clone());

    (spawn(app).await, state)
}

// GET /
async fn root() -> Json<ApiInfo> {
    Json(ApiInfo {
        message: "AI Note-Taking App API".to_string(),
        version: "1.0.0".to_string(),
        status: "running".to_string(),
    })
}

// GET /health
async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
    })
}

// GET /api/notes/
async fn list_notes(State(state): State<SharedState>) -> Json<Vec<Note>> {
    let backend = state.lock().unwrap();
    let mut notes: Vec<Note> = backend.notes.values().cloned().collect();
    notes.sort_by_key(|n| n.id);
    Json(notes)
}

// POST /api/notes/
async fn create_note(
    State(state): State<SharedState>,
    Json(data): Json<CreateNoteData>,
) -> Result<Json<Note>, Failure> {
    if data.title.trim().is_empty() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "detail": [
                    { "loc": ["body", "title"], "msg": "must not be empty", "type": "value_error" }
                ]
            })),
        ));
    }

    let mut backend = state.lock().unwrap();
    backend.next_id += 1;
    let note = Note {
        id: backend.next_id,
        title: data.title,
        content: data.content,
        summary: None,
        tags: data.tags.unwrap_or_default(),
        folder_id: data.folder_id,
        is_pinned: false,
        created_at: CREATED_AT.to_string(),
        updated_at: None,
    };
    backend.notes.insert(note.id, note.clone());
    Ok(Json(note))
}

// GET /api/notes/{id}
async fn get_note(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<Note>, Failure> {
    let backend = state.lock().unwrap();
    backend.notes.get(&id).cloned().map(Json).ok_or_else(not_found)
}

// PUT /api/notes/{id}
async fn update_note(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(patch): Json<UpdateNoteData>,
) -> Result<Json<Note>, Failure> {
    let mut backend = state.lock().unwrap();
    let note = backend.notes.get_mut(&id).ok_or_else(not_found)?;

    if !patch.is_empty() {
        note.updated_at = Some(UPDATED_AT.to_string());
    }
    if let Some(title) = patch.title {
        note.title = title;
    }
    if let Some(content) = patch.content {
        note.content = content;
    }
    if let Some(tags) = patch.tags {
        note.tags = tags;
    }
    if let Some(folder_id) = patch.folder_id {
        note.folder_id = Some(folder_id);
    }
    if let Some(is_pinned) = patch.is_pinned {
        note.is_pinned = is_pinned;
    }

    Ok(Json(note.clone()))
}

// DELETE /api/notes/{id}
async fn delete_note(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, Failure> {
    let mut backend = state.lock().unwrap();
    backend.notes.remove(&id).ok_or_else(not_found)?;
    Ok(Json(json!({ "message": "Note deleted successfully" })))
}

// POST /api/ai/summarize
async fn summarize(Json(req): Json<ContentRequest>) -> Json<Summary> {
    let key_points = sentences(&req.content);
    let summary = key_points
        .first()
        .map(|s| format!("{}.", s))
        .unwrap_or_default();
    Json(Summary {
        summary,
        key_points,
    })
}

// POST /api/ai/question
async fn question(
    State(state): State<SharedState>,
    Json(req): Json<QuestionRequest>,
) -> Json<Answer> {
    let relevant_notes = match req.note_ids {
        Some(ids) => ids,
        None => {
            let backend = state.lock().unwrap();
            let mut ids: Vec<i64> = backend.notes.keys().copied().collect();
            ids.sort();
            ids
        }
    };
    Json(Answer {
        answer: format!("Answer to: {}", req.question),
        relevant_notes,
    })
}

// POST /api/ai/auto-tag/{id}
async fn auto_tag(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<SuggestedTags>, Failure> {
    let backend = state.lock().unwrap();
    let note = backend.notes.get(&id).ok_or_else(not_found)?;
    let tags = note
        .title
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect();
    Ok(Json(SuggestedTags { tags }))
}

// POST /api/ai/expand
async fn expand(Json(req): Json<ContentRequest>) -> Json<Expanded> {
    Json(Expanded {
        expanded_text: format!("{} (expanded with more detail)", req.content),
    })
}

// POST /api/ai/simplify
async fn simplify(Json(req): Json<ContentRequest>) -> Json<Simplified> {
    let simplified_text = sentences(&req.content)
        .first()
        .map(|s| format!("{}.", s))
        .unwrap_or_default();
    Json(Simplified { simplified_text })
}

// POST /api/search/{semantic,keyword}
async fn search(
    State(state): State<SharedState>,
    Json(req): Json<SearchRequest>,
) -> Json<SearchResponse> {
    let backend = state.lock().unwrap();
    let needle = req.query.to_lowercase();

    let mut matches: Vec<&Note> = backend
        .notes
        .values()
        .filter(|n| {
            n.title.to_lowercase().contains(&needle) || n.content.to_lowercase().contains(&needle)
        })
        .collect();
    matches.sort_by_key(|n| n.id);

    let results = matches
        .iter()
        .take(req.limit as usize)
        .map(|n| SearchHit {
            note_id: n.id,
            title: n.title.clone(),
            content_snippet: n.content.chars().take(80).collect(),
            score: 1.0,
        })
        .collect();

    Json(SearchResponse {
        results,
        total: matches.len() as u64,
    })
}
