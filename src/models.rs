use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LEAVE_STATUS: &str = "Pending";
pub const DEFAULT_ATTENDANCE_STATUS: &str = "Present";

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Stored as submitted and never sent back to clients.
    #[serde(skip_serializing, default)]
    pub password: String,
    pub position: String,
    pub department: String,
    pub date_of_joining: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub password: String,
    pub position: String,
    pub department: String,
    pub date_of_joining: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct EmployeeChanges {
    pub name: String,
    pub email: String,
    pub position: String,
    pub department: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Leave {
    pub id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
    #[sqlx(skip)]
    pub business_days: u32,
}

#[derive(Debug, Deserialize)]
pub struct NewLeave {
    pub employee_id: i64,
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub status: Option<String>,
}

impl NewLeave {
    pub fn status(&self) -> &str {
        resolve_status(self.status.as_deref(), DEFAULT_LEAVE_STATUS)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Attendance {
    pub id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub date: NaiveDate,
    pub check_in: NaiveTime,
    pub check_out: Option<NaiveTime>,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct NewAttendance {
    pub employee_id: i64,
    pub date: NaiveDate,
    pub check_in: NaiveTime,
    #[serde(default)]
    pub check_out: Option<NaiveTime>,
    #[serde(default)]
    pub status: Option<String>,
}

impl NewAttendance {
    pub fn status(&self) -> &str {
        resolve_status(self.status.as_deref(), DEFAULT_ATTENDANCE_STATUS)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Payroll {
    pub id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub basic_salary: f64,
    pub deductions: f64,
    pub net_salary: f64,
    pub pay_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct NewPayroll {
    pub employee_id: i64,
    pub basic_salary: f64,
    pub deductions: f64,
    #[serde(default)]
    pub net_salary: Option<f64>,
    pub pay_date: NaiveDate,
}

impl NewPayroll {
    pub fn net_salary(&self) -> f64 {
        self.net_salary.unwrap_or(self.basic_salary - self.deductions)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: i64,
}

impl CreatedResponse {
    pub fn new(message: &str, id: i64) -> Self {
        Self {
            message: message.to_string(),
            id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DbCheckResponse {
    pub message: String,
    pub time: String,
}

fn resolve_status<'a>(supplied: Option<&'a str>, default: &'a str) -> &'a str {
    match supplied {
        Some(status) if !status.trim().is_empty() => status,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leave(status: Option<&str>) -> NewLeave {
        NewLeave {
            employee_id: 1,
            leave_type: "Sick".into(),
            start_date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
            status: status.map(str::to_string),
        }
    }

    #[test]
    fn leave_status_defaults_to_pending() {
        assert_eq!(leave(None).status(), "Pending");
        assert_eq!(leave(Some("  ")).status(), "Pending");
    }

    #[test]
    fn leave_status_is_kept_verbatim() {
        assert_eq!(leave(Some("Approved ")).status(), "Approved ");
    }

    #[test]
    fn payroll_net_salary_falls_back_to_difference() {
        let payroll = NewPayroll {
            employee_id: 1,
            basic_salary: 5000.0,
            deductions: 750.5,
            net_salary: None,
            pay_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
        };
        assert_eq!(payroll.net_salary(), 4249.5);
    }

    #[test]
    fn payroll_net_salary_may_go_negative() {
        let payroll = NewPayroll {
            employee_id: 1,
            basic_salary: 1000.0,
            deductions: 2000.0,
            net_salary: None,
            pay_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
        };
        assert_eq!(payroll.net_salary(), -1000.0);
    }

    #[test]
    fn employee_password_is_not_serialized() {
        let employee = Employee {
            id: 7,
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "secret1".into(),
            position: "Engineer".into(),
            department: "R&D".into(),
            date_of_joining: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        };
        let value = serde_json::to_value(&employee).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["date_of_joining"], "2025-06-01");
    }
}
