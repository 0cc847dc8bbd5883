//! Exercise catalogue API
//!
//! Serves in-memory exercises and body weights through paged list endpoints.
//! Configuration and tracing are loaded the same way a deployed service
//! loads them.
//!
//! Run with: cargo run --example exercise-api
//!
//! The service listens on 127.0.0.1:8080 (override with FITRACK_ADDR).
//!
//! Test with:
//!   curl 'http://localhost:8080/exercises'
//!   curl 'http://localhost:8080/exercises?sortColumn=name&sortOrder=desc'
//!   curl 'http://localhost:8080/exercises?filterColumn=difficulty&filterQuery=beginner'
//!   curl 'http://localhost:8080/exercises?filterColumn=isCompound&filterQuery=true&pageSize=2'
//!   curl 'http://localhost:8080/body-weights?sortColumn=weight&sortOrder=desc'
//!   curl 'http://localhost:8080/exercises?pageIndex=-1'   # 400

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Router,
};
use chrono::{NaiveDate, Utc};
use fitrack_api::handlers;
use fitrack_api::models::{BodyWeight, Difficulty, Exercise, WeightUnit};
use fitrack_api::prelude::*;

#[derive(Clone)]
struct AppState {
    exercises: Arc<Vec<Exercise>>,
    body_weights: Arc<Vec<BodyWeight>>,
    paging: PagingConfig,
}

async fn list_exercises(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> std::result::Result<ApiResult<Exercise>, ApiError> {
    handlers::list(state.exercises.as_slice(), &query, &state.paging).await
}

async fn list_body_weights(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> std::result::Result<ApiResult<BodyWeight>, ApiError> {
    handlers::list(state.body_weights.as_slice(), &query, &state.paging).await
}

fn seed_exercises() -> Vec<Exercise> {
    let catalogue = [
        ("Plank", Difficulty::Beginner, false),
        ("Pull Up", Difficulty::Intermediate, true),
        ("Push Up", Difficulty::Beginner, true),
        ("Squat", Difficulty::Beginner, true),
        ("Lunge", Difficulty::Beginner, true),
        ("Muscle Up", Difficulty::Advanced, true),
        ("Pistol Squat", Difficulty::Advanced, false),
    ];
    let now = Utc::now();
    catalogue
        .into_iter()
        .zip(1..)
        .map(|((name, difficulty, is_compound), id)| Exercise {
            id,
            name: name.to_string(),
            description: None,
            difficulty,
            is_compound,
            created_at: now,
        })
        .collect()
}

fn seed_body_weights() -> Vec<BodyWeight> {
    [70.0, 69.4, 69.8, 68.9]
        .into_iter()
        .zip(1..)
        .filter_map(|(weight, day)| {
            let recorded_on = NaiveDate::from_ymd_opt(2024, 6, day)?;
            Some(BodyWeight::new(
                i64::from(day),
                "usr_demo",
                weight,
                WeightUnit::Kilograms,
                recorded_on,
            ))
        })
        .collect()
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load_for_service("exercise-api")?;
    init_tracing(&config)?;

    let state = AppState {
        exercises: Arc::new(seed_exercises()),
        body_weights: Arc::new(seed_body_weights()),
        paging: config.paging,
    };

    let app = Router::new()
        .route("/exercises", get(list_exercises))
        .route("/body-weights", get(list_body_weights))
        .with_state(state);

    let addr = std::env::var("FITRACK_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
