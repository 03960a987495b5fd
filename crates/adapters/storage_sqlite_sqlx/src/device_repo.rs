//! `SQLite` implementation of [`DeviceRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use devicehub_app::ports::DeviceRepository;
use devicehub_domain::device::{Device, DeviceAssignment, DeviceDetails, DeviceSummary, NewDevice};
use devicehub_domain::employee::Person;
use devicehub_domain::error::DeviceHubError;
use devicehub_domain::id::{DeviceId, DeviceTypeId, EmployeeId};
use devicehub_domain::time::Timestamp;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Device`].
struct Wrapper(Device);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Device> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let device_type_id: i64 = row.try_get("device_type_id")?;
        let is_enabled: bool = row.try_get("is_enabled")?;
        let additional_properties: Option<String> = row.try_get("additional_properties")?;

        Ok(Self(Device {
            id: DeviceId::new(id),
            name,
            device_type_id: DeviceTypeId::new(device_type_id),
            is_enabled,
            additional_properties,
        }))
    }
}

/// Device row joined with its type name.
struct DetailRow {
    device: Device,
    device_type_name: Option<String>,
}

impl<'r> FromRow<'r, SqliteRow> for DetailRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let Wrapper(device) = Wrapper::from_row(row)?;
        let device_type_name: Option<String> = row.try_get("device_type_name")?;
        Ok(Self {
            device,
            device_type_name,
        })
    }
}

struct SummaryRow(DeviceSummary);

impl<'r> FromRow<'r, SqliteRow> for SummaryRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        Ok(Self(DeviceSummary {
            id: DeviceId::new(id),
            name,
        }))
    }
}

struct AssignmentRow(DeviceAssignment);

impl<'r> FromRow<'r, SqliteRow> for AssignmentRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let employee_id: i64 = row.try_get("employee_id")?;
        let issue_date: Timestamp = row.try_get("issue_date")?;
        let first_name: String = row.try_get("first_name")?;
        let middle_name: Option<String> = row.try_get("middle_name")?;
        let last_name: String = row.try_get("last_name")?;

        Ok(Self(DeviceAssignment {
            employee_id: EmployeeId::new(employee_id),
            issue_date,
            person: Person {
                first_name,
                middle_name,
                last_name,
            },
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO devices (name, device_type_id, is_enabled, additional_properties)
    VALUES (?, ?, ?, ?)
";
const SELECT_BY_ID: &str = "SELECT * FROM devices WHERE id = ?";
const SELECT_DETAILS_BY_ID: &str = r"
    SELECT d.*, dt.name AS device_type_name
    FROM devices d
    LEFT JOIN device_types dt ON dt.id = d.device_type_id
    WHERE d.id = ?
";
const SELECT_ASSIGNMENTS_BY_DEVICE: &str = r"
    SELECT de.employee_id, de.issue_date, p.first_name, p.middle_name, p.last_name
    FROM device_employees de
    JOIN employees e ON e.id = de.employee_id
    JOIN persons p ON p.id = e.person_id
    WHERE de.device_id = ?
";
const SELECT_ALL: &str = "SELECT id, name FROM devices";
const UPDATE: &str = r"
    UPDATE devices
    SET name = ?, device_type_id = ?, is_enabled = ?, additional_properties = ?
    WHERE id = ?
";
const DELETE_BY_ID: &str = "DELETE FROM devices WHERE id = ?";

/// `SQLite`-backed device repository.
pub struct SqliteDeviceRepository {
    pool: SqlitePool,
}

impl SqliteDeviceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl DeviceRepository for SqliteDeviceRepository {
    fn create(
        &self,
        device: NewDevice,
    ) -> impl Future<Output = Result<Device, DeviceHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&device.name)
                .bind(device.device_type_id.get())
                .bind(device.is_enabled)
                .bind(&device.additional_properties)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(device.with_id(DeviceId::new(result.last_insert_rowid())))
        }
    }

    fn get_by_id(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, DeviceHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_details(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<DeviceDetails>, DeviceHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut conn = pool.acquire().await.map_err(StorageError::from)?;

            let row: Option<DetailRow> = sqlx::query_as(SELECT_DETAILS_BY_ID)
                .bind(id.get())
                .fetch_optional(&mut *conn)
                .await
                .map_err(StorageError::from)?;
            let Some(row) = row else {
                return Ok(None);
            };

            let assignments: Vec<AssignmentRow> = sqlx::query_as(SELECT_ASSIGNMENTS_BY_DEVICE)
                .bind(id.get())
                .fetch_all(&mut *conn)
                .await
                .map_err(StorageError::from)?;

            Ok(Some(DeviceDetails {
                device: row.device,
                device_type_name: row.device_type_name,
                assignments: assignments.into_iter().map(|a| a.0).collect(),
            }))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<DeviceSummary>, DeviceHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<SummaryRow> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|r| r.0).collect())
        }
    }

    fn update(
        &self,
        device: Device,
    ) -> impl Future<Output = Result<Device, DeviceHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&device.name)
                .bind(device.device_type_id.get())
                .bind(device.is_enabled)
                .bind(&device.additional_properties)
                .bind(device.id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(device)
        }
    }

    fn delete(&self, id: DeviceId) -> impl Future<Output = Result<(), DeviceHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    struct Setup {
        repo: SqliteDeviceRepository,
        pool: SqlitePool,
        laptop: DeviceTypeId,
    }

    impl Setup {
        async fn create(&self, name: &str) -> Device {
            let device = new_device(name, self.laptop);
            self.repo.create(device).await.unwrap()
        }
    }

    async fn setup() -> Setup {
        let db = fixtures::memory_db().await;
        let pool = db.pool().clone();
        let laptop = fixtures::insert_device_type(&pool, "Laptop").await;
        Setup {
            repo: SqliteDeviceRepository::new(pool.clone()),
            pool,
            laptop: DeviceTypeId::new(laptop),
        }
    }

    fn new_device(name: &str, device_type_id: DeviceTypeId) -> NewDevice {
        NewDevice {
            name: name.to_string(),
            device_type_id,
            is_enabled: true,
            additional_properties: Some(r#"{"ram":"16GB"}"#.to_string()),
        }
    }

    #[tokio::test]
    async fn should_create_and_retrieve_device_when_valid() {
        let s = setup().await;

        let created = s.create("ThinkPad").await;

        let fetched = s.repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        let properties = fetched.additional_properties.as_deref();
        assert_eq!(properties, Some(r#"{"ram":"16GB"}"#));
    }

    #[tokio::test]
    async fn should_return_none_when_device_not_found() {
        let s = setup().await;
        let missing = DeviceId::new(42);
        assert!(s.repo.get_by_id(missing).await.unwrap().is_none());
        assert!(s.repo.get_details(missing).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_list_devices_in_insertion_order() {
        let s = setup().await;
        s.create("First").await;
        s.create("Second").await;

        let all = s.repo.get_all().await.unwrap();
        let names: Vec<&str> = all.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn should_load_type_name_and_assignments_in_details() {
        let s = setup().await;
        let device = s.create("ThinkPad").await;
        let position = fixtures::insert_position(&s.pool, "Engineer").await;
        let jane = fixtures::insert_employee(
            &s.pool,
            ("Jane", Some(""), "Doe"),
            position,
            5000.0,
            "2020-01-01 00:00:00",
        )
        .await;
        let john = fixtures::insert_employee(
            &s.pool,
            ("John", None, "Smith"),
            position,
            4000.0,
            "2021-01-01 00:00:00",
        )
        .await;
        fixtures::assign(&s.pool, device.id.get(), jane, "2022-05-01 10:00:00").await;
        fixtures::assign(&s.pool, device.id.get(), john, "2023-05-01 10:00:00").await;

        let details = s.repo.get_details(device.id).await.unwrap().unwrap();
        assert_eq!(details.device_type_name.as_deref(), Some("Laptop"));
        assert_eq!(details.assignments.len(), 2);

        let current = details.current_assignment().unwrap();
        assert_eq!(current.employee_id, EmployeeId::new(john));
        assert_eq!(current.person.first_name, "John");
        assert!(current.person.middle_name.is_none());
    }

    #[tokio::test]
    async fn should_update_device_when_exists() {
        let s = setup().await;
        let tablet = DeviceTypeId::new(fixtures::insert_device_type(&s.pool, "Tablet").await);
        let mut device = s.create("ThinkPad").await;

        device.name = "iPad".to_string();
        device.device_type_id = tablet;
        device.is_enabled = false;
        device.additional_properties = Some("[1,2,3]".to_string());
        s.repo.update(device.clone()).await.unwrap();

        let fetched = s.repo.get_by_id(device.id).await.unwrap().unwrap();
        assert_eq!(fetched, device);
    }

    #[tokio::test]
    async fn should_delete_device_and_its_assignments() {
        let s = setup().await;
        let device = s.create("ThinkPad").await;
        let position = fixtures::insert_position(&s.pool, "Engineer").await;
        let jane = fixtures::insert_employee(
            &s.pool,
            ("Jane", None, "Doe"),
            position,
            5000.0,
            "2020-01-01 00:00:00",
        )
        .await;
        fixtures::assign(&s.pool, device.id.get(), jane, "2022-05-01 10:00:00").await;

        s.repo.delete(device.id).await.unwrap();

        assert!(s.repo.get_by_id(device.id).await.unwrap().is_none());
        let (remaining,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM device_employees")
            .fetch_one(&s.pool)
            .await
            .unwrap();
        assert_eq!(remaining, 0);
    }

    #[tokio::test]
    async fn should_keep_null_properties_as_none() {
        let s = setup().await;
        let mut device = new_device("Bare", s.laptop);
        device.additional_properties = None;
        let created = s.repo.create(device).await.unwrap();

        let fetched = s.repo.get_by_id(created.id).await.unwrap().unwrap();
        assert!(fetched.additional_properties.is_none());
    }
}
