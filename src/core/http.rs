//! HTTP transport implementation.
//!
//! Axum server exposing the tool dispatch endpoint, the manifest, a health
//! check, and the dedicated infographic shortcut. All protocol decisions
//! live in the dispatch layer; this module only translates its outcomes to
//! HTTP statuses and JSON bodies.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

use super::config::HttpConfig;
use super::error::Result;
use crate::core::McpServer;
use crate::domains::tools::definitions::GenerateInfographicTool;
use crate::domains::tools::{DispatchError, FieldError, ToolResponse};

/// HTTP transport handler.
pub struct HttpServer {
    config: HttpConfig,
}

impl HttpServer {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the HTTP transport. Blocks until the listener shuts down.
    pub async fn run(self, server: McpServer) -> Result<()> {
        let addr = self.address();
        let app = build_router(server, self.config.enable_cors);

        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!("Ready - listening on http://{}", addr);
        info!("  → Dispatch:     POST /tools/call");
        info!("  → Manifest:     GET  /.well-known/mcp/manifest");
        info!("  → Infographics: POST /infographics");
        info!("  → Health:       GET  /healthz");

        axum::serve(listener, app).await?;
        Ok(())
    }
}

/// Build the axum router. Exposed separately so tests can drive the full
/// HTTP surface without binding a socket.
pub fn build_router(server: McpServer, enable_cors: bool) -> Router {
    let mut app = Router::new()
        .route("/healthz", get(healthz))
        .route("/.well-known/mcp/manifest", get(manifest))
        .route("/", get(index))
        .route("/tools/call", post(tools_call))
        .route("/infographics", post(create_infographic))
        .with_state(server)
        .layer(TraceLayer::new_for_http());

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

/// Health check endpoint.
async fn healthz() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Manifest endpoint: static metadata plus the tool listing.
async fn manifest(State(server): State<McpServer>) -> impl IntoResponse {
    Json(server.manifest())
}

/// Static landing page.
async fn index(State(server): State<McpServer>) -> impl IntoResponse {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="pl">
  <head><meta charset="utf-8" /><title>{name}</title></head>
  <body>
    <h1>{name} v{version}</h1>
    <p>Serwer MCP z narzędziami do plików i danych CSV.</p>
    <ul>
      <li><code>GET /.well-known/mcp/manifest</code> - lista narzędzi</li>
      <li><code>POST /tools/call</code> - wywołanie narzędzia</li>
      <li><code>POST /infographics</code> - generowanie infografiki</li>
      <li><code>GET /healthz</code> - status serwera</li>
    </ul>
  </body>
</html>"#,
        name = server.name(),
        version = server.version(),
    ))
}

/// Uniform dispatch endpoint for all tool calls.
#[instrument(skip_all)]
async fn tools_call(
    State(server): State<McpServer>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(_) => return error_response(DispatchError::Protocol(malformed_body())),
    };

    match server.dispatch(&body) {
        Ok(response) => success_response(StatusCode::OK, response),
        Err(err) => error_response(err),
    }
}

/// Dedicated infographic shortcut: validated against the
/// `generate_infographic` schema directly, bypassing envelope
/// classification, and answering 201 on success.
#[instrument(skip_all)]
async fn create_infographic(
    State(server): State<McpServer>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(_) => return error_response(DispatchError::Protocol(malformed_body())),
    };

    let params = match GenerateInfographicTool::validate(&body) {
        Ok(params) => params,
        Err(details) => return error_response(DispatchError::InvalidInput(details)),
    };

    match GenerateInfographicTool::execute(&params, server.config()) {
        Ok(output) => success_response(
            StatusCode::CREATED,
            ToolResponse::Result {
                tool: GenerateInfographicTool::NAME.to_string(),
                output,
            },
        ),
        Err(err) => error_response(DispatchError::Domain(err)),
    }
}

/// Protocol error reported when the body is not parseable JSON at all, so
/// malformed bodies get the same 400 shape as unclassifiable envelopes.
fn malformed_body() -> Vec<FieldError> {
    vec![FieldError::new("", "request body must be valid JSON")]
}

/// Serialize a successful dispatch outcome.
fn success_response(status: StatusCode, response: ToolResponse) -> Response {
    let body = match response {
        ToolResponse::Result { tool, output } => json!({
            "type": "tool_result",
            "tool": tool,
            "output": output,
        }),
        ToolResponse::Ack { tool } => json!({
            "type": "tool_result_ack",
            "tool": tool,
            "received": true,
        }),
    };
    (status, Json(body)).into_response()
}

/// Map dispatch failures to HTTP statuses.
///
/// Validation and protocol failures are 400 with structured `details`;
/// unknown tools are 404. Handler domain errors are deliberately mapped to
/// client-facing statuses as well: sandbox violations answer 403, all other
/// domain errors (missing file, missing column, write failure) answer 400.
fn error_response(err: DispatchError) -> Response {
    match err {
        DispatchError::Protocol(details) | DispatchError::InvalidInput(details) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Invalid input", "details": details })),
        )
            .into_response(),
        DispatchError::UnknownTool(name) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("Unknown tool: {name}") })),
        )
            .into_response(),
        DispatchError::Domain(err) => {
            let status = if err.is_forbidden() {
                StatusCode::FORBIDDEN
            } else {
                StatusCode::BAD_REQUEST
            };
            (status, Json(json!({ "error": err.to_string() }))).into_response()
        }
    }
}
