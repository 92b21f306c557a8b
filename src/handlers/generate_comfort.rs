// POST /generate_comfort handler

use std::time::Instant;

use tracing::{debug, info, warn};
use uuid::Uuid;
use warp::http::StatusCode;

use crate::error::ComfortError;
use crate::models::{ComfortResponse, MoodRequest};
use crate::routes::AppContext;

pub async fn generate_comfort_handler(
    ctx: AppContext,
    request: MoodRequest,
) -> Result<impl warp::Reply, warp::Rejection> {
    let response = generate_comfort(&ctx, request)
        .await
        .map_err(warp::reject::custom)?;

    Ok(warp::reply::with_status(
        warp::reply::json(&response),
        StatusCode::OK,
    ))
}

/// Validate the request and ask the generator for a message
pub async fn generate_comfort(
    ctx: &AppContext,
    request: MoodRequest,
) -> Result<ComfortResponse, ComfortError> {
    let request_id = Uuid::new_v4();
    let started = Instant::now();
    info!(%request_id, "POST /generate_comfort");

    let mood = request.into_mood(ctx.max_mood_chars).inspect_err(|e| {
        info!(%request_id, error = %e, "rejected mood");
    })?;
    debug!(%request_id, %mood, "resolved mood");

    match ctx.generator.generate(&mood).await {
        Ok(message) => {
            info!(
                %request_id,
                model = ctx.generator.model_name(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "comfort message ready"
            );
            Ok(ComfortResponse { message })
        }
        Err(e) => {
            warn!(
                %request_id,
                model = ctx.generator.model_name(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                error = %e,
                "comfort generation failed"
            );
            Err(e)
        }
    }
}
