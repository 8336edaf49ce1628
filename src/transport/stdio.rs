//! Newline-delimited JSON-RPC loop over stdin/stdout
//!
//! Reads one request per line, writes one response per line, and exits
//! cleanly when stdin reaches EOF. Frames that fail to parse get a
//! protocol-level parse error with a null id; notifications produce no
//! output at all.

use crate::error::ServerResult;
use crate::protocol::{error_codes, JsonRpcResponse};
use crate::server::McpServer;
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info};

/// Drive the server until stdin closes.
pub async fn run_stdio(server: McpServer) -> ServerResult<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let mut lines = stdin.lines();

    info!("stdio transport ready");

    while let Some(line) = lines.next_line().await? {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Value>(trimmed) {
            Ok(raw) => server.handle_request(raw).await,
            Err(e) => {
                debug!(error = %e, "unparseable frame");
                Some(JsonRpcResponse::error(
                    Value::Null,
                    error_codes::PARSE_ERROR,
                    format!("parse error: {e}"),
                ))
            }
        };

        if let Some(response) = response {
            write_frame(&mut stdout, &response).await?;
        }
    }

    info!("stdin closed, shutting down");
    Ok(())
}

async fn write_frame(
    stdout: &mut tokio::io::Stdout,
    response: &JsonRpcResponse,
) -> ServerResult<()> {
    let mut frame = serde_json::to_vec(response).map_err(std::io::Error::other)?;
    frame.push(b'\n');
    stdout.write_all(&frame).await?;
    stdout.flush().await?;
    Ok(())
}
