// src/main.rs
//
// Command-line entry point
//
//   diagram-encyclopedia              load the catalog and log a summary
//   diagram-encyclopedia search <q>   print approved matches with APA citations
//   diagram-encyclopedia pending      list diagrams awaiting approval

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use diagram_encyclopedia::application::{DiagramSort, DiagramSummaryDto, ListingQuery};
use diagram_encyclopedia::db::{get_connection, get_database_stats};
use diagram_encyclopedia::{AppConfig, AppState, CitationFormat};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. LOGGING
    // `log` records from the library are forwarded into the subscriber
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 2. CONFIGURATION & STATE
    let config = AppConfig::from_env().context("invalid configuration")?;
    let state = AppState::bootstrap(&config).context("failed to open the catalog")?;

    // 3. COMMAND
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None => summary(&state)?,
        Some("search") => {
            let query = args[1..].join(" ");
            if query.trim().is_empty() {
                bail!("usage: diagram-encyclopedia search <query>");
            }
            search(&state, &query).await?;
        }
        Some("pending") => pending(&state).await?,
        Some(other) => bail!("unknown command '{}' (expected: search, pending)", other),
    }

    Ok(())
}

fn summary(state: &AppState) -> Result<()> {
    let diagrams = state.store.snapshot()?;
    let approved = diagrams.iter().filter(|d| d.approved).count();

    log::info!(
        "Catalog holds {} diagrams ({} approved, {} pending)",
        diagrams.len(),
        approved,
        diagrams.len() - approved
    );

    for category in state.diagram_service.categories() {
        let count = diagrams
            .iter()
            .filter(|d| d.approved && d.category == category.name)
            .count();
        log::info!("  {:<24} {}", category.name.as_str(), count);
    }

    if let Some(pool) = &state.pool {
        let conn = get_connection(pool)?;
        let stats = get_database_stats(&conn)?;
        log::info!(
            "Storage: {} keys, {} bytes of documents, {} bytes on disk",
            stats.key_count,
            stats.stored_bytes,
            stats.size_bytes
        );
    }

    if let Some(user) = state.session.current_user() {
        log::info!("Signed in as {} ({})", user.name, user.role);
    }

    Ok(())
}

async fn search(state: &AppState, query: &str) -> Result<()> {
    let hits = state.diagram_service.search(query).await?;
    let hits = ListingQuery {
        sort: DiagramSort::MostLiked,
        ..ListingQuery::default()
    }
    .apply(hits);

    if hits.is_empty() {
        println!("No approved diagrams match '{}'", query);
        return Ok(());
    }

    for diagram in &hits {
        let summary = DiagramSummaryDto::from(diagram);
        println!(
            "{} [{} | {}] {} likes, {} comments and replies",
            summary.title,
            summary.category,
            summary.complexity,
            summary.likes,
            summary.discussion_count
        );
        println!("    {}", state.diagram_service.citation(diagram, CitationFormat::Apa));
    }

    Ok(())
}

async fn pending(state: &AppState) -> Result<()> {
    let actor = state.session.current_user();
    let queue = state.moderation_service.get_unapproved(actor.as_ref()).await?;

    if queue.is_empty() {
        println!("Nothing awaiting approval");
        return Ok(());
    }

    for diagram in &queue {
        println!("{}  {} (by {})", diagram.id, diagram.title, diagram.uploader_name);
    }

    Ok(())
}
