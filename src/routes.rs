// Route definitions

use std::convert::Infallible;

use warp::Filter;

use crate::comfort::ComfortGenerator;
use crate::handlers;

/// Largest request body accepted on `POST /generate_comfort`
pub const MAX_BODY_BYTES: u64 = 16 * 1024;

/// State shared by every request
#[derive(Clone)]
pub struct AppContext {
    pub generator: ComfortGenerator,
    pub max_mood_chars: usize,
}

pub fn configure_routes(
    ctx: AppContext,
) -> impl Filter<Extract = impl warp::Reply, Error = Infallible> + Clone {
    // POST /generate_comfort
    let generate_comfort = warp::path("generate_comfort")
        .and(warp::path::end())
        .and(warp::post())
        .and(with_context(ctx))
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and_then(handlers::generate_comfort_handler);

    // GET /health
    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .and_then(handlers::health_handler);

    generate_comfort
        .or(health)
        .recover(handlers::handle_rejection)
}

fn with_context(
    ctx: AppContext,
) -> impl Filter<Extract = (AppContext,), Error = Infallible> + Clone {
    warp::any().map(move || ctx.clone())
}
