use crate::errors::AppError;
use crate::models::{
    Attendance, CreatedResponse, DbCheckResponse, Employee, EmployeeChanges, Leave,
    MessageResponse, NewAttendance, NewEmployee, NewLeave, NewPayroll, Payroll,
};
use crate::state::AppState;
use crate::validation::Validate;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use tracing::{error, info};

type ApiResult<T> = Result<Json<T>, AppError>;

pub async fn index() -> &'static str {
    "Dayflow Backend Running"
}

pub async fn test_db(State(state): State<AppState>) -> ApiResult<DbCheckResponse> {
    match state.db.now().await {
        Ok(time) => Ok(Json(DbCheckResponse {
            message: "Database connected!".to_string(),
            time,
        })),
        Err(err) => {
            error!(error = %err, "database health check failed");
            Err(AppError {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Database connection failed".to_string(),
            })
        }
    }
}

pub async fn list_employees(State(state): State<AppState>) -> ApiResult<Vec<Employee>> {
    Ok(Json(state.db.list_employees().await?))
}

pub async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<NewEmployee>, JsonRejection>,
) -> ApiResult<CreatedResponse> {
    let payload = validated(payload)?;
    let id = state.db.create_employee(&payload).await?;
    info!(id, "employee added");
    Ok(Json(CreatedResponse::new("Employee added", id)))
}

/// Answers "Employee updated" even when `id` matched nothing.
pub async fn update_employee(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<EmployeeChanges>, JsonRejection>,
) -> ApiResult<MessageResponse> {
    let Path(id) = id?;
    let payload = validated(payload)?;
    let affected = state.db.update_employee(id, &payload).await?;
    info!(id, affected, "employee updated");
    Ok(Json(MessageResponse::new("Employee updated")))
}

pub async fn delete_employee(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<MessageResponse> {
    let Path(id) = id?;
    let affected = state.db.delete_employee(id).await?;
    info!(id, affected, "employee deleted");
    Ok(Json(MessageResponse::new("Employee deleted")))
}

pub async fn list_leaves(State(state): State<AppState>) -> ApiResult<Vec<Leave>> {
    Ok(Json(state.db.list_leaves().await?))
}

pub async fn create_leave(
    State(state): State<AppState>,
    payload: Result<Json<NewLeave>, JsonRejection>,
) -> ApiResult<CreatedResponse> {
    let payload = validated(payload)?;
    let id = state.db.create_leave(&payload).await?;
    Ok(Json(CreatedResponse::new("Leave added", id)))
}

pub async fn list_attendance(State(state): State<AppState>) -> ApiResult<Vec<Attendance>> {
    Ok(Json(state.db.list_attendance().await?))
}

pub async fn create_attendance(
    State(state): State<AppState>,
    payload: Result<Json<NewAttendance>, JsonRejection>,
) -> ApiResult<CreatedResponse> {
    let payload = validated(payload)?;
    let id = state.db.create_attendance(&payload).await?;
    Ok(Json(CreatedResponse::new("Attendance added", id)))
}

pub async fn list_payroll(State(state): State<AppState>) -> ApiResult<Vec<Payroll>> {
    Ok(Json(state.db.list_payroll().await?))
}

pub async fn create_payroll(
    State(state): State<AppState>,
    payload: Result<Json<NewPayroll>, JsonRejection>,
) -> ApiResult<CreatedResponse> {
    let payload = validated(payload)?;
    let id = state.db.create_payroll(&payload).await?;
    Ok(Json(CreatedResponse::new("Payroll added", id)))
}

fn validated<T: Validate>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;
    Ok(payload)
}
