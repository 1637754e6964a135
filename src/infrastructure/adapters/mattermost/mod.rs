//! Mattermost slash command adapter

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::errors::LendingError;
use crate::application::messaging::{CommandDispatcher, CommandRequest};
use crate::domain::entities::Reply;

/// Form body Mattermost posts for a slash command
#[derive(Debug, Clone, Deserialize)]
pub struct CommandForm {
    pub token: String,
    pub user_name: String,
    pub user_id: String,
    #[serde(default)]
    pub text: String,
    pub team_domain: Option<String>,
    pub channel_name: Option<String>,
    pub command: Option<String>,
}

/// Serves the slash command webhook
pub struct MattermostAdapter {
    dispatcher: Arc<CommandDispatcher>,
    command_path: String,
}

impl MattermostAdapter {
    pub fn new(dispatcher: Arc<CommandDispatcher>, command_path: impl Into<String>) -> Self {
        Self {
            dispatcher,
            command_path: command_path.into(),
        }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/healthz", get(healthz))
            .route(&self.command_path, post(slash_command))
            .with_state(self.dispatcher.clone())
    }

    /// Bind and serve until ctrl-c
    pub async fn serve(&self, addr: SocketAddr) -> Result<(), LendingError> {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| LendingError::Internal(format!("bind {} failed: {}", addr, e)))?;
        self.serve_on(listener).await
    }

    pub async fn serve_on(&self, listener: tokio::net::TcpListener) -> Result<(), LendingError> {
        if let Ok(addr) = listener.local_addr() {
            tracing::info!("Listening on http://{}{}", addr, self.command_path);
        }

        axum::serve(listener, self.router())
            .with_graceful_shutdown(async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::error!("Failed to listen for ctrl-c: {}", e);
                }
            })
            .await
            .map_err(|e| LendingError::Internal(format!("serve failed: {}", e)))
    }
}

async fn healthz() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

async fn slash_command(
    State(dispatcher): State<Arc<CommandDispatcher>>,
    Form(form): Form<CommandForm>,
) -> Result<Json<Reply>, ApiError> {
    let span = tracing::info_span!(
        "slash_command",
        request_id = %Uuid::new_v4(),
        user = %form.user_name,
        user_id = %form.user_id,
        channel = form.channel_name.as_deref().unwrap_or("-"),
        team = form.team_domain.as_deref().unwrap_or("-"),
        command = form.command.as_deref().unwrap_or("-"),
    );

    let request = CommandRequest::new(form.token, form.user_name, form.text);

    // rusqlite is blocking; keep it off the async workers
    let reply = tokio::task::spawn_blocking(move || {
        let _entered = span.enter();
        let result = dispatcher.dispatch(&request);
        if let Ok(reply) = &result {
            tracing::info!(response_type = ?reply.response_type, "Command handled");
        }
        result
    })
    .await
    .map_err(|e| LendingError::Internal(format!("handler task failed: {}", e)))??;

    Ok(Json(reply))
}

/// Maps errors to HTTP responses; business refusals never get here
pub struct ApiError(LendingError);

impl From<LendingError> for ApiError {
    fn from(err: LendingError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            LendingError::Unauthorized(reason) => {
                tracing::warn!("Rejected slash command: {}", reason);
                (StatusCode::FORBIDDEN, Json(json!({"detail": "Forbidden"}))).into_response()
            }
            err => {
                tracing::error!("Slash command failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"detail": "Internal Server Error"})),
                )
                    .into_response()
            }
        }
    }
}
