use actix_web::{web, Either, HttpResponse};
use serde::{Deserialize, Serialize};

use super::protocol::{GameSnapshot, PlayRequest, PlayResponse, RandomMoveResponse};
use super::state::AppState;
use crate::error::AppError;
use crate::game::{BoardSize, MoveError};

#[derive(Debug, Deserialize)]
struct NewGameQuery {
    size: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GravityQuery {
    inverted: Option<String>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app_version: &'static str,
}

async fn ping() -> HttpResponse {
    HttpResponse::Ok().body("pong")
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        app_version: env!("CARGO_PKG_VERSION"),
    })
}

fn snapshot(data: &AppState) -> GameSnapshot {
    let table = data.lock();
    GameSnapshot::capture(table.state(), table.size())
}

async fn state(data: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(snapshot(&data))
}

async fn play(
    data: web::Data<AppState>,
    body: Either<web::Json<PlayRequest>, web::Form<PlayRequest>>,
) -> HttpResponse {
    let col = match body {
        Either::Left(json) => json.into_inner().col,
        Either::Right(form) => form.into_inner().col,
    };

    let (result, state) = {
        let mut table = data.lock();
        let result = table.play(col);
        (result, GameSnapshot::capture(table.state(), table.size()))
    };

    HttpResponse::Ok().json(PlayResponse {
        accepted: result.is_ok(),
        row: result.ok(),
        reason: result.err().map(|e| e.reason()),
        state,
    })
}

async fn random_move(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let (result, state) = {
        let mut table = data.lock();
        let result = table.random_move();
        (result, GameSnapshot::capture(table.state(), table.size()))
    };

    match result {
        Ok((col, row)) => Ok(HttpResponse::Ok().json(RandomMoveResponse {
            ok: true,
            col,
            row,
            state,
        })),
        Err(MoveError::GameOver) => Err(AppError::conflict("GAME_OVER", "game over")),
        Err(_) => Err(AppError::conflict("BOARD_FULL", "board full")),
    }
}

async fn reset(data: web::Data<AppState>) -> HttpResponse {
    let state = {
        let mut table = data.lock();
        table.restart();
        GameSnapshot::capture(table.state(), table.size())
    };
    HttpResponse::Ok().json(state)
}

async fn new_game(data: web::Data<AppState>, query: web::Query<NewGameQuery>) -> HttpResponse {
    let size = BoardSize::from_query(query.size.as_deref());
    let state = {
        let mut table = data.lock();
        table.new_game(size);
        GameSnapshot::capture(table.state(), table.size())
    };
    HttpResponse::Ok().json(state)
}

async fn gravity(data: web::Data<AppState>, query: web::Query<GravityQuery>) -> HttpResponse {
    let inverted = query.inverted.as_deref() == Some("true");
    let state = {
        let mut table = data.lock();
        table.set_inverted_gravity(inverted);
        GameSnapshot::capture(table.state(), table.size())
    };
    HttpResponse::Ok().json(state)
}

/// Register every route plus extractor configs that turn malformed bodies
/// into problem-details responses.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::bad_request("INVALID_BODY", err.to_string()).into()
    }))
    .app_data(web::FormConfig::default().error_handler(|err, _req| {
        AppError::bad_request("INVALID_BODY", err.to_string()).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::bad_request("INVALID_QUERY", err.to_string()).into()
    }))
    .route("/ping", web::get().to(ping))
    .route("/health", web::get().to(health))
    .service(
        web::scope("/api")
            .route("/state", web::get().to(state))
            .route("/play", web::post().to(play))
            .route("/random_move", web::post().to(random_move))
            .route("/reset", web::get().to(reset))
            .route("/reset", web::post().to(reset))
            .route("/new", web::get().to(new_game))
            .route("/new", web::post().to(new_game))
            .route("/gravity", web::get().to(gravity))
            .route("/gravity", web::post().to(gravity)),
    );
}
