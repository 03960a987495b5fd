//! `SQLite` implementation of [`DeviceTypeRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use devicehub_app::ports::DeviceTypeRepository;
use devicehub_domain::device_type::DeviceType;
use devicehub_domain::error::DeviceHubError;
use devicehub_domain::id::DeviceTypeId;

use crate::error::StorageError;

struct Wrapper(DeviceType);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        Ok(Self(DeviceType {
            id: DeviceTypeId::new(id),
            name,
        }))
    }
}

const SELECT_BY_NAME: &str = "SELECT id, name FROM device_types WHERE name = ? LIMIT 1";

/// `SQLite`-backed device type lookup.
pub struct SqliteDeviceTypeRepository {
    pool: SqlitePool,
}

impl SqliteDeviceTypeRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl DeviceTypeRepository for SqliteDeviceTypeRepository {
    fn find_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<DeviceType>, DeviceHubError>> + Send {
        let pool = self.pool.clone();
        let name = name.to_string();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_NAME)
                .bind(name)
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

    #[tokio::test]
    async fn should_find_device_type_by_exact_name() {
        let db = fixtures::memory_db().await;
        let id = fixtures::insert_device_type(db.pool(), "Smartphone").await;
        let repo = SqliteDeviceTypeRepository::new(db.pool().clone());

        let found = repo.find_by_name("Smartphone").await.unwrap().unwrap();
        assert_eq!(found.id, DeviceTypeId::new(id));
        assert_eq!(found.name, "Smartphone");
    }

    #[tokio::test]
    async fn should_return_none_when_name_differs() {
        let db = fixtures::memory_db().await;
        fixtures::insert_device_type(db.pool(), "Smartphone").await;
        let repo = SqliteDeviceTypeRepository::new(db.pool().clone());

        assert!(repo.find_by_name("Phone").await.unwrap().is_none());
        assert!(repo.find_by_name("smartphone").await.unwrap().is_none());
    }
}
