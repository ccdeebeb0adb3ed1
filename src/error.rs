use std::path::PathBuf;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Body returned for every failed HTTP request.
#[derive(Debug, Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
}

/// Errors surfaced by the HTTP layer. Rejected moves are not errors; they are
/// reported in the normal response body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {detail}")]
    BadRequest { code: &'static str, detail: String },

    #[error("Conflict: {detail}")]
    Conflict { code: &'static str, detail: String },
}

impl AppError {
    pub fn bad_request(code: &'static str, detail: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            detail: detail.into(),
        }
    }

    pub fn conflict(code: &'static str, detail: impl Into<String>) -> Self {
        Self::Conflict {
            code,
            detail: detail.into(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::BadRequest { code, .. } | AppError::Conflict { code, .. } => *code,
        }
    }

    fn detail(&self) -> &str {
        match self {
            AppError::BadRequest { detail, .. } | AppError::Conflict { detail, .. } => detail,
        }
    }

    /// "BOARD_FULL" -> "Board Full"
    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn problem(&self) -> ProblemDetails {
        let code = self.code();
        ProblemDetails {
            type_: format!(
                "https://connect-four.local/errors/{}",
                code.to_ascii_lowercase().replace('_', "-")
            ),
            title: Self::humanize_code(code),
            status: self.status_code().as_u16(),
            detail: self.detail().to_string(),
            code: code.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
        }
    }

    fn error_response(&self) -> HttpResponse {
        tracing::debug!(code = self.code(), detail = self.detail(), "request rejected");
        HttpResponse::build(self.status_code())
            .content_type("application/problem+json")
            .json(self.problem())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("game.connect must be >= 2".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: game.connect must be >= 2"
        );
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            AppError::bad_request("INVALID_COLUMN", "x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::conflict("GAME_OVER", "x").status_code(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_problem_details_shape() {
        let problem = AppError::conflict("BOARD_FULL", "no column accepts a piece").problem();
        assert_eq!(problem.title, "Board Full");
        assert_eq!(problem.status, 409);
        assert_eq!(problem.code, "BOARD_FULL");
        assert_eq!(problem.type_, "https://connect-four.local/errors/board-full");
        assert_eq!(problem.detail, "no column accepts a piece");
    }
}
