//! `SQLite` implementation of [`EmployeeRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use devicehub_app::ports::EmployeeRepository;
use devicehub_domain::employee::{Employee, EmployeeSummary, Person, Position};
use devicehub_domain::error::DeviceHubError;
use devicehub_domain::id::{EmployeeId, PositionId};
use devicehub_domain::time::Timestamp;

use crate::error::StorageError;

fn person_from_row(row: &SqliteRow) -> Result<Person, sqlx::Error> {
    Ok(Person {
        first_name: row.try_get("first_name")?,
        middle_name: row.try_get("middle_name")?,
        last_name: row.try_get("last_name")?,
    })
}

struct SummaryRow(EmployeeSummary);

impl<'r> FromRow<'r, SqliteRow> for SummaryRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        Ok(Self(EmployeeSummary {
            id: EmployeeId::new(id),
            person: person_from_row(row)?,
        }))
    }
}

/// Wrapper for converting joined employee rows into domain [`Employee`].
struct Wrapper(Employee);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let salary: f64 = row.try_get("salary")?;
        let hire_date: Timestamp = row.try_get("hire_date")?;
        let position_id: i64 = row.try_get("position_id")?;
        let position_name: String = row.try_get("position_name")?;

        Ok(Self(Employee {
            id: EmployeeId::new(id),
            salary,
            hire_date,
            person: person_from_row(row)?,
            position: Position {
                id: PositionId::new(position_id),
                name: position_name,
            },
        }))
    }
}

const SELECT_ALL: &str = r"
    SELECT e.id, p.first_name, p.middle_name, p.last_name
    FROM employees e
    JOIN persons p ON p.id = e.person_id
";
const SELECT_BY_ID: &str = r"
    SELECT e.id, e.salary, e.hire_date,
           p.first_name, p.middle_name, p.last_name,
           pos.id AS position_id, pos.name AS position_name
    FROM employees e
    JOIN persons p ON p.id = e.person_id
    JOIN positions pos ON pos.id = e.position_id
    WHERE e.id = ?
";

/// `SQLite`-backed employee repository.
pub struct SqliteEmployeeRepository {
    pool: SqlitePool,
}

impl SqliteEmployeeRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl EmployeeRepository for SqliteEmployeeRepository {
    fn get_all(&self) -> impl Future<Output = Result<Vec<EmployeeSummary>, DeviceHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<SummaryRow> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|r| r.0).collect())
        }
    }

    fn get_by_id(
        &self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<Option<Employee>, DeviceHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|w| w.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn should_list_employees_with_person_fields() {
        let db = fixtures::memory_db().await;
        let pool = db.pool();
        let position = fixtures::insert_position(pool, "Engineer").await;
        fixtures::insert_employee(
            pool,
            ("Jane", Some(""), "Doe"),
            position,
            5000.0,
            "2020-01-01 00:00:00",
        )
        .await;
        fixtures::insert_employee(
            pool,
            ("John", Some("Ronald"), "Tolkien"),
            position,
            6000.0,
            "2018-02-01 00:00:00",
        )
        .await;
        let repo = SqliteEmployeeRepository::new(pool.clone());

        let all = repo.get_all().await.unwrap();
        let names: Vec<String> = all.iter().map(|e| e.person.full_name()).collect();
        assert_eq!(names, vec!["Jane Doe", "John Ronald Tolkien"]);
    }

    #[tokio::test]
    async fn should_load_employee_with_position() {
        let db = fixtures::memory_db().await;
        let pool = db.pool();
        let position = fixtures::insert_position(pool, "Manager").await;
        let id = fixtures::insert_employee(
            pool,
            ("Ada", None, "Lovelace"),
            position,
            7250.5,
            "2019-04-15 09:30:00",
        )
        .await;
        let repo = SqliteEmployeeRepository::new(pool.clone());

        let employee = repo.get_by_id(EmployeeId::new(id)).await.unwrap().unwrap();
        assert_eq!(employee.person.full_name(), "Ada Lovelace");
        assert!((employee.salary - 7250.5).abs() < f64::EPSILON);
        assert_eq!(
            employee.hire_date.date(),
            NaiveDate::from_ymd_opt(2019, 4, 15).unwrap()
        );
        assert_eq!(employee.position.id, PositionId::new(position));
        assert_eq!(employee.position.name, "Manager");
    }

    #[tokio::test]
    async fn should_return_none_when_employee_missing() {
        let db = fixtures::memory_db().await;
        let repo = SqliteEmployeeRepository::new(db.pool().clone());
        assert!(repo.get_by_id(EmployeeId::new(1)).await.unwrap().is_none());
    }
}
