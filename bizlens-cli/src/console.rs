use crate::config::Config;
use crate::render;
use anyhow::Result;
use bizlens_core::parse_query;
use bizlens_gateway::csv::CsvClient;
use bizlens_gateway::research::{ResearchClient, ResearchOptions};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::{Path, PathBuf};

/// Interactive research chat: each line goes through the query interpreter;
/// unresolved queries prompt the user instead of reaching the backend.
pub async fn run_research_console(config: &Config) -> Result<()> {
    let client = ResearchClient::new(config.research.clone())?;

    let mut rl = DefaultEditor::new()?;

    println!("BizLens Console");
    println!("Research backend: {}", client.base_url());
    println!("Describe a business and a place, e.g. \"pharmacy in Pune\". Ctrl+C to exit.\n");

    loop {
        let readline = rl.readline("You -> ");
        match readline {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }

                rl.add_history_entry(&line)?;

                let parsed = parse_query(&line);
                tracing::debug!(?parsed, "interpreted query");
                if parsed.needs_clarification() {
                    println!(
                        "\nI need both a business type and a location. \
                         Try something like \"coffee shop in Mumbai\".\n"
                    );
                    continue;
                }

                // needs_clarification() was false, so both fields are set.
                let business = parsed.business_type.as_deref().unwrap_or_default();
                let location = parsed.location.as_deref().unwrap_or_default();

                println!("\nResearching {business} in {location}...\n");

                match client
                    .comprehensive_research(business, location, &ResearchOptions::default())
                    .await
                {
                    Ok(report) => render::research_report(&report),
                    Err(e) => eprintln!("Error: {e}\n"),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("Interrupted");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("EOF");
                break;
            }
            Err(err) => {
                eprintln!("Error: {err}");
                break;
            }
        }
    }

    Ok(())
}

/// Interactive CSV chat: upload a file, keep the backend-issued session id,
/// then loop follow-up questions against it.
pub async fn run_csv_console(config: &Config, file: Option<PathBuf>) -> Result<()> {
    let client = CsvClient::new(config.csv.clone())?;

    let mut rl = DefaultEditor::new()?;

    println!("BizLens CSV Console");
    println!("CSV backend: {}", client.base_url());
    println!("Upload a file with /upload <path>, then ask questions about it. Ctrl+C to exit.\n");

    let mut session_id: Option<String> = None;
    if let Some(path) = file {
        if let Some(new_session) = upload(&client, &path).await {
            session_id = Some(new_session);
        }
    }

    loop {
        let readline = rl.readline("You -> ");
        match readline {
            Ok(line) => {
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }

                rl.add_history_entry(&line)?;

                if line == "/upload" {
                    println!("\nUsage: /upload <path-to-csv>\n");
                    continue;
                }
                if let Some(path) = line.strip_prefix("/upload ") {
                    if let Some(new_session) = upload(&client, Path::new(path.trim())).await {
                        session_id = Some(new_session);
                    }
                    continue;
                }

                let Some(session) = session_id.as_deref() else {
                    println!("\nNo CSV uploaded yet. Use /upload <path> first.\n");
                    continue;
                };

                match client.chat(session, &line).await {
                    Ok(reply) => render::csv_reply(&reply),
                    Err(e) => eprintln!("Error: {e}\n"),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("Interrupted");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("EOF");
                break;
            }
            Err(err) => {
                eprintln!("Error: {err}");
                break;
            }
        }
    }

    Ok(())
}

/// Upload a CSV and return the new session id, printing the initial
/// analysis. Failures are reported to the user and leave any existing
/// session untouched.
async fn upload(client: &CsvClient, path: &Path) -> Option<String> {
    let file_name =
        path.file_name().and_then(|n| n.to_str()).unwrap_or("upload.csv").to_string();

    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Error reading {}: {e}\n", path.display());
            return None;
        }
    };

    println!("\nUploading {file_name}...\n");

    match client.upload_csv(&file_name, bytes).await {
        Ok(analysis) => {
            render::csv_analysis(&analysis);
            let session =
                analysis.get("session_id").and_then(|s| s.as_str()).map(str::to_string);
            if session.is_none() {
                eprintln!("Upload response carried no session_id; follow-up chat is unavailable.\n");
            }
            session
        }
        Err(e) => {
            eprintln!("Error: {e}\n");
            None
        }
    }
}
