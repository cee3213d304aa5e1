//! CLI command implementations

use std::path::Path;

use anyhow::Context;
use clap::Subcommand;
use showmatch_core::{ShowQualifiers, ShowmatchConfig};
use showmatch_search::{RecordedProvider, ShowLookup, ShowRecord};
use tracing::debug;

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Find a show from free text such as "the office us"
    Find {
        /// Show name optionally followed by qualifiers
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Find a show by name and explicit qualifiers
    Resolve {
        /// Show name
        name: String,
        /// Premiere year
        #[arg(long)]
        year: Option<u16>,
        /// TV network, such as ABC or NBC
        #[arg(long)]
        network: Option<String>,
        /// Show language
        #[arg(long)]
        language: Option<String>,
        /// Country code, such as us, gb or au
        #[arg(long)]
        country: Option<String>,
        /// Streaming platform, such as Netflix
        #[arg(long)]
        web_channel: Option<String>,
    },
    /// Split free text into show name and qualifiers
    Decompose {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// List search candidates for a query, highest score first
    Candidates {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
}

/// Handle the CLI command
///
/// # Errors
/// - Catalog cannot be read or parsed
/// - Lookup fails, including when no show matches
pub async fn handle_command(command: Commands, catalog: &Path) -> anyhow::Result<()> {
    let provider = RecordedProvider::from_path(catalog)
        .await
        .with_context(|| format!("loading catalog {}", catalog.display()))?;
    debug!(catalog = %catalog.display(), queries = provider.query_count(), "Catalog loaded");
    let lookup = ShowLookup::with_config(Box::new(provider), ShowmatchConfig::from_env());

    match command {
        Commands::Find { text } => find_show(&lookup, &text.join(" ")).await,
        Commands::Resolve {
            name,
            year,
            network,
            language,
            country,
            web_channel,
        } => {
            let qualifiers = ShowQualifiers {
                year,
                network,
                language,
                country,
                web_channel,
            };
            resolve_show(&lookup, &name, &qualifiers).await
        }
        Commands::Decompose { text } => decompose_text(&lookup, &text.join(" ")).await,
        Commands::Candidates { query } => list_candidates(&lookup, &query.join(" ")).await,
    }
}

/// Find a show from free text
///
/// # Errors
/// - `ShowSearchError::ShowNotFound` - No show matched
pub async fn find_show(lookup: &ShowLookup, text: &str) -> anyhow::Result<()> {
    let record = lookup.find_show(text).await?;
    print_show(&record);
    Ok(())
}

/// Find a show by name and structured qualifiers
///
/// # Errors
/// - `ShowSearchError::ShowNotFound` - No show matched
pub async fn resolve_show(
    lookup: &ShowLookup,
    name: &str,
    qualifiers: &ShowQualifiers,
) -> anyhow::Result<()> {
    let record = lookup.find_show_with(name, qualifiers).await?;
    print_show(&record);
    Ok(())
}

/// Print the decomposition of free text
///
/// # Errors
/// - `ShowSearchError::SearchFailed` - A search failed
pub async fn decompose_text(lookup: &ShowLookup, text: &str) -> anyhow::Result<()> {
    let decomposition = lookup.decompose(text).await?;

    println!("Show name:  {}", decomposition.show_name);
    println!("Qualifiers: {}", decomposition.qualifiers);
    match decomposition.matches {
        Some(matches) => println!("Matches:    {}", matches.len()),
        None => println!("Matches:    none"),
    }
    Ok(())
}

/// Print the candidates for a query
///
/// # Errors
/// - `ShowSearchError::SearchFailed` - The search failed
pub async fn list_candidates(lookup: &ShowLookup, query: &str) -> anyhow::Result<()> {
    let mut candidates = lookup.search_candidates(query).await?;
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

    if candidates.is_empty() {
        println!("No candidates for '{query}'.");
        return Ok(());
    }

    println!("{:>8}  Candidate", "Score");
    println!("{:-<60}", "");
    for candidate in &candidates {
        println!("{:>8.2}  {candidate}", candidate.score);
    }
    Ok(())
}

fn print_show(record: &ShowRecord) {
    println!("{record}");
    if let Some(status) = &record.status {
        println!("  Status:   {status}");
    }
    if let Some(language) = &record.language {
        println!("  Language: {language}");
    }
    if !record.genres.is_empty() {
        println!("  Genres:   {}", record.genres.join(", "));
    }
    if let Some(summary) = record.plain_summary() {
        println!("  {summary}");
    }
}
