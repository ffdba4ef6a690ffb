//! `notes` — command-line front end for the note-taking backend.
//!
//! Reads NOTES_API_URL / NOTES_API_TIMEOUT_SECS (a `.env` file works too).
//! Default backend: http://localhost:8000

mod cli;

use clap::Parser;
use cli::{Cli, Command};
use notes_client::types::CreateNoteData;
use notes_client::{ClientConfig, NotesClient};
use serde::Serialize;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env();
    if let Some(url) = &cli.url {
        config = config.with_base_url(url);
    }

    let client = match NotesClient::new(config) {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to set up client: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&client, cli.command, cli.json).await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(client: &NotesClient, command: Command, json: bool) -> notes_client::Result<()> {
    match command {
        Command::List => {
            let notes = client.notes().get_all().await?;
            if json {
                print_json(&notes);
            } else if notes.is_empty() {
                println!("No notes");
            } else {
                // pinned first, like the sidebar
                let (pinned, rest): (Vec<_>, Vec<_>) = notes.iter().partition(|n| n.is_pinned);
                for note in pinned.into_iter().chain(rest) {
                    println!("{}", cli::note_line(note));
                }
            }
        }
        Command::Show { id } => {
            let note = client.notes().get_by_id(id).await?;
            if json {
                print_json(&note);
            } else {
                println!("{}", cli::note_detail(&note));
            }
        }
        Command::Create {
            title,
            content,
            tags,
            folder,
        } => {
            let mut data = CreateNoteData::new(title, content);
            if !tags.is_empty() {
                data = data.with_tags(tags);
            }
            if let Some(folder) = folder {
                data = data.with_folder(folder);
            }
            let note = client.notes().create(&data).await?;
            if json {
                print_json(&note);
            } else {
                println!("Created note {}", note.id);
            }
        }
        Command::Update {
            id,
            title,
            content,
            tags,
            folder,
            pin,
            unpin,
        } => {
            let patch = cli::build_patch(title, content, tags, folder, pin, unpin);
            if patch.is_empty() {
                log::warn!("Nothing to update for note {}", id);
            }
            let note = client.notes().update(id, &patch).await?;
            if json {
                print_json(&note);
            } else {
                println!("Updated note {}", note.id);
            }
        }
        Command::Delete { id } => {
            client.notes().delete(id).await?;
            if !json {
                println!("Deleted note {}", id);
            }
        }
        Command::Pin { id } => {
            let note = client.notes().set_pinned(id, true).await?;
            if json {
                print_json(&note);
            } else {
                println!("{}", cli::note_line(&note));
            }
        }
        Command::Unpin { id } => {
            let note = client.notes().set_pinned(id, false).await?;
            if json {
                print_json(&note);
            } else {
                println!("{}", cli::note_line(&note));
            }
        }
        Command::Summarize { text } => {
            let summary = client.ai().summarize(&text).await?;
            if json {
                print_json(&summary);
            } else {
                println!("{}", summary.summary);
                for point in &summary.key_points {
                    println!("  - {}", point);
                }
            }
        }
        Command::Ask { question, notes } => {
            let scope = if notes.is_empty() {
                None
            } else {
                Some(notes.as_slice())
            };
            let answer = client.ai().ask_question(&question, scope).await?;
            if json {
                print_json(&answer);
            } else {
                println!("{}", answer.answer);
                if !answer.relevant_notes.is_empty() {
                    let ids: Vec<String> =
                        answer.relevant_notes.iter().map(|id| id.to_string()).collect();
                    println!("(from notes: {})", ids.join(", "));
                }
            }
        }
        Command::AutoTag { id } => {
            let suggested = client.ai().auto_tag(id).await?;
            if json {
                print_json(&suggested);
            } else {
                println!("{}", suggested.tags.join(", "));
            }
        }
        Command::Expand { text } => {
            let expanded = client.ai().expand(&text).await?;
            if json {
                print_json(&expanded);
            } else {
                println!("{}", expanded.expanded_text);
            }
        }
        Command::Simplify { text } => {
            let simplified = client.ai().simplify(&text).await?;
            if json {
                print_json(&simplified);
            } else {
                println!("{}", simplified.simplified_text);
            }
        }
        Command::Search {
            query,
            keyword,
            limit,
        } => {
            let found = client
                .search()
                .search(cli::search_kind(keyword), &query, limit)
                .await?;
            if json {
                print_json(&found);
            } else {
                println!("{}", cli::search_results(&found));
            }
        }
        Command::Health => {
            let health = client.health().await?;
            if json {
                print_json(&health);
            } else {
                println!("{}", health.status);
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => log::error!("Failed to encode response: {}", e),
    }
}
