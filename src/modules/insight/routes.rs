use axum::{routing::post, Router};

use crate::modules::insight::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/insight", post(controller::insight))
}
