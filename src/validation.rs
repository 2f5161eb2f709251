use crate::errors::AppError;
use crate::models::{EmployeeChanges, NewAttendance, NewEmployee, NewLeave, NewPayroll};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Field-level checks run on a request body before it reaches the database.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

impl Validate for NewEmployee {
    fn validate(&self) -> Result<(), AppError> {
        require("name", &self.name)?;
        check_email(&self.email)?;
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::bad_request(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        require("position", &self.position)?;
        require("department", &self.department)
    }
}

impl Validate for EmployeeChanges {
    fn validate(&self) -> Result<(), AppError> {
        require("name", &self.name)?;
        check_email(&self.email)?;
        require("position", &self.position)?;
        require("department", &self.department)
    }
}

impl Validate for NewLeave {
    fn validate(&self) -> Result<(), AppError> {
        check_employee_id(self.employee_id)?;
        require("leave_type", &self.leave_type)?;
        if self.start_date > self.end_date {
            return Err(AppError::bad_request("start_date must not be after end_date"));
        }
        Ok(())
    }
}

impl Validate for NewAttendance {
    fn validate(&self) -> Result<(), AppError> {
        check_employee_id(self.employee_id)?;
        if let Some(check_out) = self.check_out {
            if check_out < self.check_in {
                return Err(AppError::bad_request("check_out must not be before check_in"));
            }
        }
        Ok(())
    }
}

impl Validate for NewPayroll {
    fn validate(&self) -> Result<(), AppError> {
        check_employee_id(self.employee_id)?;
        check_amount("basic_salary", self.basic_salary)?;
        check_amount("deductions", self.deductions)?;
        if let Some(net) = self.net_salary {
            if !net.is_finite() {
                return Err(AppError::bad_request("net_salary must be a finite number"));
            }
        }
        Ok(())
    }
}

fn require(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::bad_request(format!("{field} is required")));
    }
    Ok(())
}

fn check_employee_id(id: i64) -> Result<(), AppError> {
    if id <= 0 {
        return Err(AppError::bad_request("employee_id must be a positive integer"));
    }
    Ok(())
}

fn check_amount(field: &str, value: f64) -> Result<(), AppError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::bad_request(format!(
            "{field} must be a non-negative number"
        )));
    }
    Ok(())
}

fn check_email(email: &str) -> Result<(), AppError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(AppError::bad_request("email is not a valid address"))
    }
}

/// Accepts `local@domain.tld`: no whitespace, exactly one `@`, and a dot inside the domain
/// with at least one character on each side of it.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(idx, ch)| ch == '.' && idx > 0 && idx + 1 < domain.len())
}
