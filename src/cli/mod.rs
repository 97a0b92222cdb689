//! Command-line interface for docchat.

use std::io::{BufRead, Write as _};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::style;
use uuid::Uuid;

use crate::adapters::chat::GroqChatModel;
use crate::adapters::embeddings::NomicEmbeddingProvider;
use crate::domain::models::{Role, Turn};
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::credentials::Credentials;
use crate::services::RagEngine;

/// Conversational question answering over a single document
#[derive(Debug, Parser)]
#[command(name = "docchat", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load a document and chat with it
    Chat(ChatArgs),
}

#[derive(Debug, clap::Args)]
pub struct ChatArgs {
    /// Path to the document to load (plain text)
    pub document: PathBuf,

    /// Optional config file (defaults to .docchat/config.yaml + env)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Run the chat command: build the pipeline, index the document, then loop
/// reading questions from stdin until EOF or "exit".
pub async fn chat(args: ChatArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    let credentials = Credentials::load()?;

    let embedder = Arc::new(NomicEmbeddingProvider::new(
        config.embedding.clone(),
        credentials.embedding_api_key,
    )?);
    let chat_model = Arc::new(GroqChatModel::new(
        config.chat.clone(),
        config.generation.clone(),
        credentials.chat_api_key,
    )?);

    let mut engine = RagEngine::new(config, embedder, chat_model);

    let text = std::fs::read_to_string(&args.document)
        .with_context(|| format!("Failed to read document {}", args.document.display()))?;

    println!("Indexing {}...", args.document.display());
    let chunk_count = engine.load_document(&text).await?;
    println!(
        "Indexed {} chunk{}. Ask your question here (or 'exit' to quit).",
        chunk_count,
        if chunk_count == 1 { "" } else { "s" }
    );

    // One session id per CLI invocation, stable for its lifetime.
    let session_id = Uuid::new_v4().to_string();

    let stdin = std::io::stdin();
    loop {
        print!("{} ", style(">").green().bold());
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        if question == "exit" || question == "quit" {
            break;
        }

        match engine.handle_turn(&session_id, question).await {
            Ok(_) => {
                // Re-render the transcript tail so both roles show tagged.
                for turn in engine.transcript(&session_id).turns().iter().rev().take(2).rev() {
                    print_turn(turn);
                }
            }
            Err(err) => {
                eprintln!("{} {err}", style("error:").red().bold());
            }
        }
    }

    Ok(())
}

fn print_turn(turn: &Turn) {
    let tag = match turn.role {
        Role::User => style("user").cyan().bold(),
        Role::Assistant => style("assistant").magenta().bold(),
    };
    println!("{tag}: {}", turn.content);
}
