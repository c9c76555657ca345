// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions, clippy::significant_drop_tightening)]

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use shift_roster::RosterState;
use shift_roster_api::{
    ApiError, ApiResult, EntryRequest, MoveRequest, MutationResponse, ReplaceScheduleRequest,
    RosterEditRequest, RosterResponse, ScheduleResponse, UnfilledResponse, add_employee, assign,
    ensure_available, get_roster, get_unfilled, get_week, move_employee, remove_employee,
    replace_schedule, reset_week, toggle_status, translate_domain_error,
};
use shift_roster_audit::{Actor, Cause};
use shift_roster_domain::{Schedule, ShiftKind, WeekConfig, WeekView, Weekday};
use shift_roster_persistence::{Persistence, PersistenceError};

/// Shift Roster Server - HTTP server for the weekly shift scheduler
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// Mutating handlers lock the roster state for the whole apply-persist
/// sequence, so transitions are serialized and the in-memory state only
/// advances after persistence has accepted the transition.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for audit events and state snapshots.
    persistence: Arc<Mutex<Persistence>>,
    /// The in-memory roster state the next command applies to.
    state: Arc<Mutex<RosterState>>,
}

/// API request addressing one entry of one slot.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct EntryApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The type of the actor.
    actor_type: String,
    /// The cause ID for this action.
    cause_id: String,
    /// The cause description.
    cause_description: String,
    /// The day of the target slot.
    day: Weekday,
    /// The shift kind of the target slot.
    shift: ShiftKind,
    /// The target employee's name.
    employee: String,
}

/// API request for moving an employee between two slots.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct MoveApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The type of the actor.
    actor_type: String,
    /// The cause ID for this action.
    cause_id: String,
    /// The cause description.
    cause_description: String,
    /// The employee being moved.
    employee: String,
    /// The day of the slot the employee leaves.
    from_day: Weekday,
    /// The shift kind of the slot the employee leaves.
    from_shift: ShiftKind,
    /// The day of the destination slot.
    to_day: Weekday,
    /// The shift kind of the destination slot.
    to_shift: ShiftKind,
}

/// API request for adding or removing a roster employee.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct RosterApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The type of the actor.
    actor_type: String,
    /// The cause ID for this action.
    cause_id: String,
    /// The cause description.
    cause_description: String,
    /// The employee name.
    name: String,
}

/// API request for resetting one week.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ResetApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The type of the actor.
    actor_type: String,
    /// The cause ID for this action.
    cause_id: String,
    /// The cause description.
    cause_description: String,
}

/// API request for replacing one week's schedule wholesale.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ReplaceApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The type of the actor.
    actor_type: String,
    /// The cause ID for this action.
    cause_id: String,
    /// The cause description.
    cause_description: String,
    /// The full replacement schedule.
    schedule: Schedule,
    /// Which producer supplied the schedule.
    origin: String,
}

/// API response for the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Service status indicator.
    status: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::DomainRuleViolation { .. } | ApiError::ShapeRejected { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::ProducerFailed { .. } => Self {
                status: StatusCode::BAD_GATEWAY,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: err.to_string(),
            },
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        error!(error = %err, "Persistence error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Persistence error: {err}"),
        }
    }
}

/// Parses a week path segment into a week selector.
fn parse_week(raw: &str) -> Result<WeekView, HttpError> {
    WeekView::from_str(raw).map_err(|err| HttpError::from(translate_domain_error(err)))
}

/// Handler for GET `/health` endpoint.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Handler for GET `/roster` endpoint.
async fn handle_get_roster(AxumState(app_state): AxumState<AppState>) -> Json<RosterResponse> {
    let state = app_state.state.lock().await;
    let response: RosterResponse = get_roster(&state);
    drop(state);
    Json(response)
}

/// Handler for GET `/schedule/{week}` endpoint.
async fn handle_get_schedule(
    AxumState(app_state): AxumState<AppState>,
    Path(week): Path<String>,
) -> Result<Json<ScheduleResponse>, HttpError> {
    let week: WeekView = parse_week(&week)?;
    let state = app_state.state.lock().await;
    let response: ScheduleResponse = get_week(&state, week);
    drop(state);
    Ok(Json(response))
}

/// Handler for GET `/schedule/{week}/unfilled` endpoint.
async fn handle_get_unfilled(
    AxumState(app_state): AxumState<AppState>,
    Path(week): Path<String>,
) -> Result<Json<UnfilledResponse>, HttpError> {
    let week: WeekView = parse_week(&week)?;
    let state = app_state.state.lock().await;
    let response: UnfilledResponse = get_unfilled(&state, week);
    drop(state);
    Ok(Json(response))
}

/// Handler for POST `/schedule/{week}/toggle` endpoint.
///
/// Cycles the availability of one entry.
async fn handle_toggle(
    AxumState(app_state): AxumState<AppState>,
    Path(week): Path<String>,
    Json(req): Json<EntryApiRequest>,
) -> Result<Json<MutationResponse>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        week = %week,
        employee = %req.employee,
        "Handling toggle request"
    );

    let week: WeekView = parse_week(&week)?;
    let actor: Actor = Actor::new(req.actor_id, req.actor_type);
    let cause: Cause = Cause::new(req.cause_id, req.cause_description);
    let request: EntryRequest = EntryRequest {
        day: req.day,
        shift: req.shift,
        employee: req.employee,
    };

    let mut state = app_state.state.lock().await;
    let mut persistence = app_state.persistence.lock().await;
    let result: ApiResult<MutationResponse> =
        toggle_status(&mut persistence, &state, week, request, actor, cause)?;
    *state = result.new_state;
    drop(persistence);
    drop(state);

    Ok(Json(result.response))
}

/// Handler for POST `/schedule/{week}/assign` endpoint.
///
/// Toggles the assignment of one entry.
async fn handle_assign(
    AxumState(app_state): AxumState<AppState>,
    Path(week): Path<String>,
    Json(req): Json<EntryApiRequest>,
) -> Result<Json<MutationResponse>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        week = %week,
        employee = %req.employee,
        "Handling assign request"
    );

    let week: WeekView = parse_week(&week)?;
    let actor: Actor = Actor::new(req.actor_id, req.actor_type);
    let cause: Cause = Cause::new(req.cause_id, req.cause_description);
    let request: EntryRequest = EntryRequest {
        day: req.day,
        shift: req.shift,
        employee: req.employee,
    };

    let mut state = app_state.state.lock().await;
    let mut persistence = app_state.persistence.lock().await;
    let result: ApiResult<MutationResponse> =
        assign(&mut persistence, &state, week, request, actor, cause)?;
    *state = result.new_state;
    drop(persistence);
    drop(state);

    Ok(Json(result.response))
}

/// Handler for POST `/schedule/{week}/ensure-available` endpoint.
///
/// Forces one entry to available.
async fn handle_ensure_available(
    AxumState(app_state): AxumState<AppState>,
    Path(week): Path<String>,
    Json(req): Json<EntryApiRequest>,
) -> Result<Json<MutationResponse>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        week = %week,
        employee = %req.employee,
        "Handling ensure-available request"
    );

    let week: WeekView = parse_week(&week)?;
    let actor: Actor = Actor::new(req.actor_id, req.actor_type);
    let cause: Cause = Cause::new(req.cause_id, req.cause_description);
    let request: EntryRequest = EntryRequest {
        day: req.day,
        shift: req.shift,
        employee: req.employee,
    };

    let mut state = app_state.state.lock().await;
    let mut persistence = app_state.persistence.lock().await;
    let result: ApiResult<MutationResponse> =
        ensure_available(&mut persistence, &state, week, request, actor, cause)?;
    *state = result.new_state;
    drop(persistence);
    drop(state);

    Ok(Json(result.response))
}

/// Handler for POST `/schedule/{week}/move` endpoint.
///
/// Moves one employee between two slots of the week.
async fn handle_move(
    AxumState(app_state): AxumState<AppState>,
    Path(week): Path<String>,
    Json(req): Json<MoveApiRequest>,
) -> Result<Json<MutationResponse>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        week = %week,
        employee = %req.employee,
        "Handling move request"
    );

    let week: WeekView = parse_week(&week)?;
    let actor: Actor = Actor::new(req.actor_id, req.actor_type);
    let cause: Cause = Cause::new(req.cause_id, req.cause_description);
    let request: MoveRequest = MoveRequest {
        employee: req.employee,
        from_day: req.from_day,
        from_shift: req.from_shift,
        to_day: req.to_day,
        to_shift: req.to_shift,
    };

    let mut state = app_state.state.lock().await;
    let mut persistence = app_state.persistence.lock().await;
    let result: ApiResult<MutationResponse> =
        move_employee(&mut persistence, &state, week, request, actor, cause)?;
    *state = result.new_state;
    drop(persistence);
    drop(state);

    Ok(Json(result.response))
}

/// Handler for POST `/schedule/{week}/reset` endpoint.
///
/// Replaces the week with a freshly built schedule.
async fn handle_reset(
    AxumState(app_state): AxumState<AppState>,
    Path(week): Path<String>,
    Json(req): Json<ResetApiRequest>,
) -> Result<Json<MutationResponse>, HttpError> {
    info!(actor_id = %req.actor_id, week = %week, "Handling reset request");

    let week: WeekView = parse_week(&week)?;
    let actor: Actor = Actor::new(req.actor_id, req.actor_type);
    let cause: Cause = Cause::new(req.cause_id, req.cause_description);

    let mut state = app_state.state.lock().await;
    let mut persistence = app_state.persistence.lock().await;
    let result: ApiResult<MutationResponse> =
        reset_week(&mut persistence, &state, week, actor, cause)?;
    *state = result.new_state;
    drop(persistence);
    drop(state);

    Ok(Json(result.response))
}

/// Handler for POST `/schedule/{week}/replace` endpoint.
///
/// Replaces the week with a producer-supplied schedule after shape
/// validation.
async fn handle_replace(
    AxumState(app_state): AxumState<AppState>,
    Path(week): Path<String>,
    Json(req): Json<ReplaceApiRequest>,
) -> Result<Json<MutationResponse>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        week = %week,
        origin = %req.origin,
        "Handling replace request"
    );

    let week: WeekView = parse_week(&week)?;
    let actor: Actor = Actor::new(req.actor_id, req.actor_type);
    let cause: Cause = Cause::new(req.cause_id, req.cause_description);
    let request: ReplaceScheduleRequest = ReplaceScheduleRequest {
        schedule: req.schedule,
        origin: req.origin,
    };

    let mut state = app_state.state.lock().await;
    let mut persistence = app_state.persistence.lock().await;
    let result: ApiResult<MutationResponse> =
        replace_schedule(&mut persistence, &state, week, request, actor, cause)?;
    *state = result.new_state;
    drop(persistence);
    drop(state);

    Ok(Json(result.response))
}

/// Handler for POST `/roster/add` endpoint.
///
/// Adds an employee to the roster and to every slot of both weeks.
async fn handle_add_employee(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RosterApiRequest>,
) -> Result<Json<MutationResponse>, HttpError> {
    info!(actor_id = %req.actor_id, name = %req.name, "Handling add employee request");

    let actor: Actor = Actor::new(req.actor_id, req.actor_type);
    let cause: Cause = Cause::new(req.cause_id, req.cause_description);
    let request: RosterEditRequest = RosterEditRequest { name: req.name };

    let mut state = app_state.state.lock().await;
    let mut persistence = app_state.persistence.lock().await;
    let result: ApiResult<MutationResponse> =
        add_employee(&mut persistence, &state, request, actor, cause)?;
    *state = result.new_state;
    drop(persistence);
    drop(state);

    Ok(Json(result.response))
}

/// Handler for POST `/roster/remove` endpoint.
///
/// Removes an employee from the roster and from every slot of both
/// weeks.
async fn handle_remove_employee(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RosterApiRequest>,
) -> Result<Json<MutationResponse>, HttpError> {
    info!(actor_id = %req.actor_id, name = %req.name, "Handling remove employee request");

    let actor: Actor = Actor::new(req.actor_id, req.actor_type);
    let cause: Cause = Cause::new(req.cause_id, req.cause_description);
    let request: RosterEditRequest = RosterEditRequest { name: req.name };

    let mut state = app_state.state.lock().await;
    let mut persistence = app_state.persistence.lock().await;
    let result: ApiResult<MutationResponse> =
        remove_employee(&mut persistence, &state, request, actor, cause)?;
    *state = result.new_state;
    drop(persistence);
    drop(state);

    Ok(Json(result.response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/roster", get(handle_get_roster))
        .route("/roster/add", post(handle_add_employee))
        .route("/roster/remove", post(handle_remove_employee))
        .route("/schedule/{week}", get(handle_get_schedule))
        .route("/schedule/{week}/unfilled", get(handle_get_unfilled))
        .route("/schedule/{week}/toggle", post(handle_toggle))
        .route("/schedule/{week}/assign", post(handle_assign))
        .route(
            "/schedule/{week}/ensure-available",
            post(handle_ensure_available),
        )
        .route("/schedule/{week}/move", post(handle_move))
        .route("/schedule/{week}/reset", post(handle_reset))
        .route("/schedule/{week}/replace", post(handle_replace))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Shift Roster Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let mut persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    // Load the persisted state, reconciled against the stored roster
    let state: RosterState = persistence.load_state(WeekConfig::default())?;
    info!(
        employees = state.roster.len(),
        "Loaded roster state"
    );

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        state: Arc::new(Mutex::new(state)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use tower::ServiceExt;

    /// Helper to create test app state with in-memory persistence and a
    /// fresh roster state.
    fn create_test_app_state() -> AppState {
        let mut persistence: Persistence =
            Persistence::new_in_memory().expect("Failed to create in-memory persistence");
        let state: RosterState = persistence
            .load_state(WeekConfig::default())
            .expect("Failed to load fresh state");
        AppState {
            persistence: Arc::new(Mutex::new(persistence)),
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Helper to build a POST request with a JSON body.
    fn post_json<T: Serialize>(uri: &str, body: &T) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(body).unwrap()))
            .unwrap()
    }

    /// Helper to build a GET request.
    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn roster_request(name: &str) -> RosterApiRequest {
        RosterApiRequest {
            actor_id: String::from("manager-1"),
            actor_type: String::from("user"),
            cause_id: String::from("test-cause"),
            cause_description: String::from("Test roster edit"),
            name: name.to_string(),
        }
    }

    fn entry_request(day: Weekday, shift: ShiftKind, employee: &str) -> EntryApiRequest {
        EntryApiRequest {
            actor_id: String::from("manager-1"),
            actor_type: String::from("user"),
            cause_id: String::from("test-cause"),
            cause_description: String::from("Test entry edit"),
            day,
            shift,
            employee: employee.to_string(),
        }
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let app: Router = build_router(create_test_app_state());

        let response = app.oneshot(get_request("/health")).await.unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let health: HealthResponse = body_json(response).await;
        assert_eq!(health.status, "ok");
    }

    #[tokio::test]
    async fn test_add_employee_then_roster_lists_it() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .clone()
            .oneshot(post_json("/roster/add", &roster_request("Avi")))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        let added: MutationResponse = body_json(response).await;
        assert!(added.event_id > 0);

        let response = app.oneshot(get_request("/roster")).await.unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        let roster: RosterResponse = body_json(response).await;
        assert_eq!(roster.employees, vec!["Avi"]);
    }

    #[tokio::test]
    async fn test_add_duplicate_employee_is_unprocessable() {
        let app: Router = build_router(create_test_app_state());

        app.clone()
            .oneshot(post_json("/roster/add", &roster_request("Avi")))
            .await
            .unwrap();
        let response = app
            .oneshot(post_json("/roster/add", &roster_request("Avi")))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
        let body: ErrorResponse = body_json(response).await;
        assert!(body.error);
    }

    #[tokio::test]
    async fn test_remove_unknown_employee_is_not_found() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(post_json("/roster/remove", &roster_request("Ghost")))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_blank_employee_name_is_bad_request() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(post_json("/roster/add", &roster_request("   ")))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_week_is_bad_request() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(get_request("/schedule/someday"))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_toggle_then_schedule_reflects_change() {
        let app: Router = build_router(create_test_app_state());

        app.clone()
            .oneshot(post_json("/roster/add", &roster_request("Avi")))
            .await
            .unwrap();
        let response = app
            .clone()
            .oneshot(post_json(
                "/schedule/current/toggle",
                &entry_request(Weekday::Sunday, ShiftKind::Morning, "Avi"),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let response = app.oneshot(get_request("/schedule/current")).await.unwrap();
        let schedule: ScheduleResponse = body_json(response).await;
        assert_eq!(schedule.week, "current");
        let entry = schedule
            .schedule
            .slot(Weekday::Sunday, ShiftKind::Morning)
            .unwrap()
            .entry(&shift_roster_domain::Employee::new("Avi").unwrap())
            .unwrap()
            .clone();
        assert_eq!(
            entry.status,
            shift_roster_domain::AvailabilityStatus::Available
        );
    }

    #[tokio::test]
    async fn test_assign_reduces_unfilled_count() {
        let app: Router = build_router(create_test_app_state());

        app.clone()
            .oneshot(post_json("/roster/add", &roster_request("Bea")))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(get_request("/schedule/next/unfilled"))
            .await
            .unwrap();
        let before: UnfilledResponse = body_json(response).await;
        assert_eq!(before.unfilled.len(), 11);

        app.clone()
            .oneshot(post_json(
                "/schedule/next/assign",
                &entry_request(Weekday::Monday, ShiftKind::Evening, "Bea"),
            ))
            .await
            .unwrap();

        let response = app
            .oneshot(get_request("/schedule/next/unfilled"))
            .await
            .unwrap();
        let after: UnfilledResponse = body_json(response).await;
        assert_eq!(after.unfilled.len(), 10);
    }

    #[tokio::test]
    async fn test_replace_with_wrong_shape_is_unprocessable() {
        let app: Router = build_router(create_test_app_state());

        let request: ReplaceApiRequest = ReplaceApiRequest {
            actor_id: String::from("manager-1"),
            actor_type: String::from("user"),
            cause_id: String::from("test-cause"),
            cause_description: String::from("Test replacement"),
            schedule: Schedule::from_days(Vec::new()),
            origin: String::from("generator"),
        };

        let response = app
            .oneshot(post_json("/schedule/next/replace", &request))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_move_between_slots_round_trips() {
        let app: Router = build_router(create_test_app_state());

        app.clone()
            .oneshot(post_json("/roster/add", &roster_request("Avi")))
            .await
            .unwrap();

        let request: MoveApiRequest = MoveApiRequest {
            actor_id: String::from("manager-1"),
            actor_type: String::from("user"),
            cause_id: String::from("test-cause"),
            cause_description: String::from("Test move"),
            employee: String::from("Avi"),
            from_day: Weekday::Sunday,
            from_shift: ShiftKind::Morning,
            to_day: Weekday::Tuesday,
            to_shift: ShiftKind::Evening,
        };
        let response = app
            .clone()
            .oneshot(post_json("/schedule/current/move", &request))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let response = app.oneshot(get_request("/schedule/current")).await.unwrap();
        let schedule: ScheduleResponse = body_json(response).await;
        let destination = schedule
            .schedule
            .slot(Weekday::Tuesday, ShiftKind::Evening)
            .unwrap()
            .entry(&shift_roster_domain::Employee::new("Avi").unwrap())
            .unwrap()
            .clone();
        assert_eq!(
            destination.status,
            shift_roster_domain::AvailabilityStatus::Available
        );
    }

    #[tokio::test]
    async fn test_reset_restores_fresh_week() {
        let app: Router = build_router(create_test_app_state());

        app.clone()
            .oneshot(post_json("/roster/add", &roster_request("Avi")))
            .await
            .unwrap();
        app.clone()
            .oneshot(post_json(
                "/schedule/current/assign",
                &entry_request(Weekday::Sunday, ShiftKind::Morning, "Avi"),
            ))
            .await
            .unwrap();

        let reset: ResetApiRequest = ResetApiRequest {
            actor_id: String::from("manager-1"),
            actor_type: String::from("user"),
            cause_id: String::from("test-cause"),
            cause_description: String::from("Test reset"),
        };
        let response = app
            .clone()
            .oneshot(post_json("/schedule/current/reset", &reset))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let response = app
            .oneshot(get_request("/schedule/current/unfilled"))
            .await
            .unwrap();
        let unfilled: UnfilledResponse = body_json(response).await;
        assert_eq!(unfilled.unfilled.len(), 11);
    }
}
