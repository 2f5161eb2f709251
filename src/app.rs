use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, put}, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/test-db", get(handlers::test_db))
        .route(
            "/employees",
            get(handlers::list_employees).post(handlers::create_employee),
        )
        .route(
            "/employees/:id",
            put(handlers::update_employee).delete(handlers::delete_employee),
        )
        .route("/leaves", get(handlers::list_leaves).post(handlers::create_leave))
        .route(
            "/attendance",
            get(handlers::list_attendance).post(handlers::create_attendance),
        )
        .route("/payroll", get(handlers::list_payroll).post(handlers::create_payroll))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
