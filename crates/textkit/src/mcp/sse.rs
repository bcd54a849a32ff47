use crate::prelude::*;
use crate::prelude::eprintln;
use axum::{
    extract::State,
    http::StatusCode,
    response::{
        sse::{Event, Sse},
        IntoResponse, Response,
    },
    routing::{get, post},
    Json, Router,
};
use futures::stream::{self, Stream};
use std::convert::Infallible;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

const MESSAGE_PATH: &str = "/message";

pub async fn run_sse(options: super::cli::SseOptions, global: crate::Global) -> Result<()> {
    let addr = format!("{}:{}", options.host, options.port);
    log::info!("starting MCP server on http://{addr}");

    if global.verbose {
        eprintln!("Starting MCP server with SSE transport on {addr}...");
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let shared_global = Arc::new(global.clone());

    let app_router = Router::new()
        .route("/sse", get(sse_handler))
        .route(MESSAGE_PATH, post(message_handler))
        .layer(cors)
        .with_state(shared_global);

    if global.verbose {
        eprintln!("MCP server listening on http://{addr}");
        eprintln!("SSE endpoint: http://{addr}/sse");
        eprintln!("Message endpoint: http://{addr}{MESSAGE_PATH}");
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    axum::serve(listener, app_router)
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

/// Tells the client where to POST its JSON-RPC messages.
async fn sse_handler() -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = stream::once(async { Ok(Event::default().event("endpoint").data(MESSAGE_PATH)) });
    Sse::new(stream)
}

/// The body is taken as text so malformed JSON gets a JSON-RPC parse error
/// instead of an HTTP rejection.
async fn message_handler(State(global): State<Arc<crate::Global>>, body: String) -> Response {
    match super::handle_request(&body, &global) {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    fn state() -> State<Arc<crate::Global>> {
        State(Arc::new(crate::Global {
            seed: Some(1),
            verbose: false,
        }))
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_message_runs_tool() {
        let body = r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"text_uppercase","arguments":{"text":"abc"}}}"#;
        let response = message_handler(state(), body.to_string()).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["result"]["content"][0]["text"], "ABC");
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let response = message_handler(state(), "{oops".to_string()).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["error"]["code"], -32700);
    }

    #[tokio::test]
    async fn test_notification_is_accepted() {
        let body = r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#;
        let response = message_handler(state(), body.to_string()).await;
        assert_eq!(response.status(), StatusCode::ACCEPTED);
    }
}
