//! Command-line arguments and plain-text rendering for the `notes` binary.

use clap::{Parser, Subcommand};
use notes_client::types::{Note, SearchKind, SearchResponse, UpdateNoteData};

#[derive(Parser, Debug)]
#[command(name = "notes", version, about = "Talk to the AI note-taking backend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Backend base URL (overrides NOTES_API_URL)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Print raw JSON responses
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all notes
    List,
    /// Show one note
    Show { id: i64 },
    /// Create a note
    Create {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        content: String,
        #[arg(long = "tag")]
        tags: Vec<String>,
        #[arg(long)]
        folder: Option<i64>,
    },
    /// Patch a note; only the given fields change
    Update {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long = "tag")]
        tags: Vec<String>,
        #[arg(long)]
        folder: Option<i64>,
        #[arg(long, conflicts_with = "unpin")]
        pin: bool,
        #[arg(long)]
        unpin: bool,
    },
    /// Delete a note
    Delete { id: i64 },
    Pin { id: i64 },
    Unpin { id: i64 },
    /// Summarize a piece of text
    Summarize { text: String },
    /// Ask a question about your notes
    Ask {
        question: String,
        /// Limit the question to these notes
        #[arg(long = "note")]
        notes: Vec<i64>,
    },
    /// Suggest tags for a note
    AutoTag { id: i64 },
    /// Expand short text into more detail
    Expand { text: String },
    /// Rewrite text more simply
    Simplify { text: String },
    /// Search notes (semantic unless --keyword)
    Search {
        query: String,
        #[arg(long)]
        keyword: bool,
        #[arg(long, default_value_t = notes_client::types::DEFAULT_SEARCH_LIMIT)]
        limit: u32,
    },
    /// Check backend health
    Health,
}

/// Patch built from `update` flags. Empty `--tag` lists mean "leave tags alone".
pub fn build_patch(
    title: Option<String>,
    content: Option<String>,
    tags: Vec<String>,
    folder: Option<i64>,
    pin: bool,
    unpin: bool,
) -> UpdateNoteData {
    UpdateNoteData {
        title,
        content,
        tags: if tags.is_empty() { None } else { Some(tags) },
        folder_id: folder,
        is_pinned: match (pin, unpin) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        },
    }
}

pub fn search_kind(keyword: bool) -> SearchKind {
    if keyword {
        SearchKind::Keyword
    } else {
        SearchKind::Semantic
    }
}

/// One-line listing entry, pinned notes marked with `*`
pub fn note_line(note: &Note) -> String {
    let pin = if note.is_pinned { "*" } else { " " };
    let mut line = format!("{:>4} {} {}", note.id, pin, note.title);
    if !note.tags.is_empty() {
        let tags: Vec<String> = note.tags.iter().map(|t| format!("#{}", t)).collect();
        line.push_str("  ");
        line.push_str(&tags.join(" "));
    }
    line
}

pub fn note_detail(note: &Note) -> String {
    let mut out = format!("# {}\n", note.title);
    out.push_str(&format!("id: {}", note.id));
    if note.is_pinned {
        out.push_str("  (pinned)");
    }
    out.push('\n');
    if let Some(folder) = note.folder_id {
        out.push_str(&format!("folder: {}\n", folder));
    }
    if !note.tags.is_empty() {
        out.push_str(&format!("tags: {}\n", note.tags.join(", ")));
    }
    out.push_str(&format!("created: {}\n", note.created_at));
    if let Some(updated) = &note.updated_at {
        out.push_str(&format!("updated: {}\n", updated));
    }
    if let Some(summary) = &note.summary {
        out.push_str(&format!("summary: {}\n", summary));
    }
    out.push('\n');
    out.push_str(&note.content);
    out
}

pub fn search_results(found: &SearchResponse) -> String {
    if found.results.is_empty() {
        return "No matches".to_string();
    }
    let mut lines: Vec<String> = found
        .results
        .iter()
        .map(|hit| format!("{:>4}  {:.2}  {}  {}", hit.note_id, hit.score, hit.title, hit.content_snippet))
        .collect();
    lines.push(format!("({} of {} shown)", found.results.len(), found.total));
    lines.join("\n")
}
