use crate::prelude::{eprintln, *};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use super::AppState;

pub async fn run_stdio(state: AppState) -> Result<()> {
    if state.global.verbose {
        eprintln!("Starting MCP server with stdio transport...");
        eprintln!();
    }
    log::info!("serving {} APIs over stdio", state.catalog.records().len());

    let stdin = tokio::io::stdin();
    let mut stdout = tokio::io::stdout();
    let mut reader = BufReader::new(stdin);
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;

        if bytes_read == 0 {
            break; // EOF
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if state.global.verbose {
            eprintln!("Received: {trimmed}");
        }

        let Some(response) = super::handle_request(trimmed, &state).await else {
            continue;
        };
        let response_json = serde_json::to_string(&response)?;

        if state.global.verbose {
            eprintln!("Sending: {response_json}");
        }

        stdout.write_all(response_json.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }

    log::info!("stdin closed, shutting down");

    Ok(())
}
