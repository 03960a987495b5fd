//! Seed helpers shared by the repository tests.
//!
//! Device types, people, positions, employees and assignments have no write
//! port, so tests insert them with raw SQL.

use sqlx::SqlitePool;

use crate::pool::{Config, Database};

const INSERT_PERSON: &str =
    "INSERT INTO persons (first_name, middle_name, last_name) VALUES (?, ?, ?)";

const INSERT_EMPLOYEE: &str =
    "INSERT INTO employees (salary, hire_date, person_id, position_id) VALUES (?, ?, ?, ?)";

const INSERT_ASSIGNMENT: &str =
    "INSERT INTO device_employees (device_id, employee_id, issue_date) VALUES (?, ?, ?)";

pub(crate) async fn memory_db() -> Database {
    Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .unwrap()
}

pub(crate) async fn insert_device_type(pool: &SqlitePool, name: &str) -> i64 {
    sqlx::query("INSERT INTO device_types (name) VALUES (?)")
        .bind(name)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub(crate) async fn insert_position(pool: &SqlitePool, name: &str) -> i64 {
    sqlx::query("INSERT INTO positions (name) VALUES (?)")
        .bind(name)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub(crate) async fn insert_employee(
    pool: &SqlitePool,
    (first, middle, last): (&str, Option<&str>, &str),
    position_id: i64,
    salary: f64,
    hire_date: &str,
) -> i64 {
    let person_id = sqlx::query(INSERT_PERSON)
        .bind(first)
        .bind(middle)
        .bind(last)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid();

    sqlx::query(INSERT_EMPLOYEE)
        .bind(salary)
        .bind(hire_date)
        .bind(person_id)
        .bind(position_id)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub(crate) async fn assign(pool: &SqlitePool, device_id: i64, employee_id: i64, issue_date: &str) {
    sqlx::query(INSERT_ASSIGNMENT)
        .bind(device_id)
        .bind(employee_id)
        .bind(issue_date)
        .execute(pool)
        .await
        .unwrap();
}
