use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::models::Activity;
use crate::services::roster_service;
use crate::store::{ActivityDirectory, RosterError};

#[derive(Debug, Deserialize)]
pub struct RosterQuery {
    pub email: String,
}

pub async fn activities_handler(
    State(directory): State<ActivityDirectory>,
) -> Json<BTreeMap<String, Activity>> {
    Json(roster_service::list_activities(&directory))
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<RosterQuery>,
    State(directory): State<ActivityDirectory>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match roster_service::signup_for_activity(&directory, &activity_name, &query.email) {
        Ok(message) => {
            info!(activity = %activity_name, email = %query.email, "signup_ok");
            Ok(Json(json!({ "message": message })))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %query.email, "Signup rejected: {}", e);
            Err(roster_error_response(e))
        }
    }
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<RosterQuery>,
    State(directory): State<ActivityDirectory>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match roster_service::unregister_from_activity(&directory, &activity_name, &query.email) {
        Ok(message) => {
            info!(activity = %activity_name, email = %query.email, "unregister_ok");
            Ok(Json(json!({ "message": message })))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %query.email, "Unregister rejected: {}", e);
            Err(roster_error_response(e))
        }
    }
}

// Error bodies carry a `detail` string field; the frontend keys off it.
fn roster_error_response(err: RosterError) -> (StatusCode, Json<Value>) {
    let status = match err {
        RosterError::ActivityNotFound => StatusCode::NOT_FOUND,
        RosterError::AlreadySignedUp | RosterError::NotSignedUp => StatusCode::BAD_REQUEST,
    };
    (status, Json(json!({ "detail": err.to_string() })))
}
