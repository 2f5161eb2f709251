use crate::calendar::business_days;
use crate::models::{
    Attendance, Employee, EmployeeChanges, Leave, NewAttendance, NewEmployee, NewLeave,
    NewPayroll, Payroll,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::info;

/// Data-access handle shared by every handler. Each method runs one statement.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens the pool (creating the file if needed, with foreign keys on) and applies migrations.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("database migrations applied");

        Ok(Self { pool })
    }

    pub async fn now(&self) -> Result<String, sqlx::Error> {
        sqlx::query_scalar("SELECT datetime('now')")
            .fetch_one(&self.pool)
            .await
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, name, email, password, position, department, date_of_joining
             FROM employees
             ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn create_employee(&self, employee: &NewEmployee) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO employees (name, email, password, position, department, date_of_joining)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&employee.name)
        .bind(&employee.email)
        .bind(&employee.password)
        .bind(&employee.position)
        .bind(&employee.department)
        .bind(employee.date_of_joining)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Returns the number of rows touched; zero when `id` does not exist.
    pub async fn update_employee(
        &self,
        id: i64,
        changes: &EmployeeChanges,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE employees SET name = ?, email = ?, position = ?, department = ? WHERE id = ?",
        )
        .bind(&changes.name)
        .bind(&changes.email)
        .bind(&changes.position)
        .bind(&changes.department)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete_employee(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn list_leaves(&self) -> Result<Vec<Leave>, sqlx::Error> {
        let mut leaves: Vec<Leave> = sqlx::query_as(
            "SELECT l.id, l.employee_id, e.name AS employee_name, l.leave_type,
                    l.start_date, l.end_date, l.status
             FROM leaves l
             JOIN employees e ON l.employee_id = e.id
             ORDER BY l.id",
        )
        .fetch_all(&self.pool)
        .await?;

        for leave in &mut leaves {
            leave.business_days = business_days(leave.start_date, leave.end_date);
        }
        Ok(leaves)
    }

    pub async fn create_leave(&self, leave: &NewLeave) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO leaves (employee_id, leave_type, start_date, end_date, status)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(leave.employee_id)
        .bind(&leave.leave_type)
        .bind(leave.start_date)
        .bind(leave.end_date)
        .bind(leave.status())
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn list_attendance(&self) -> Result<Vec<Attendance>, sqlx::Error> {
        sqlx::query_as(
            "SELECT a.id, a.employee_id, e.name AS employee_name, a.date,
                    a.check_in, a.check_out, a.status
             FROM attendance a
             JOIN employees e ON a.employee_id = e.id
             ORDER BY a.id",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn create_attendance(&self, attendance: &NewAttendance) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO attendance (employee_id, date, check_in, check_out, status)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(attendance.employee_id)
        .bind(attendance.date)
        .bind(attendance.check_in)
        .bind(attendance.check_out)
        .bind(attendance.status())
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn list_payroll(&self) -> Result<Vec<Payroll>, sqlx::Error> {
        sqlx::query_as(
            "SELECT p.id, p.employee_id, e.name AS employee_name, p.basic_salary,
                    p.deductions, p.net_salary, p.pay_date
             FROM payroll p
             JOIN employees e ON p.employee_id = e.id
             ORDER BY p.id",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn create_payroll(&self, payroll: &NewPayroll) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO payroll (employee_id, basic_salary, deductions, net_salary, pay_date)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(payroll.employee_id)
        .bind(payroll.basic_salary)
        .bind(payroll.deductions)
        .bind(payroll.net_salary())
        .bind(payroll.pay_date)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }
}
