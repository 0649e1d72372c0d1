//! CRUD operations on the students table.
//!
//! Every write is a single statement, so SQLite's statement-level atomicity
//! guarantees all-or-nothing behavior without explicit transactions; a delete
//! racing a retrieve observes either the full row or no row.

use crate::errors::ServiceResult;
use crate::model::{NewStudent, Student, StudentPayload};

use super::StudentStore;

/// Column list shared by every query that returns full rows
pub(crate) const COLUMNS: &str = "id, name, roll, city, external_id";

impl StudentStore {
    /// Insert a new student and return the persisted row
    pub async fn insert(&self, new: &NewStudent, external_id: &str) -> ServiceResult<Student> {
        let student = sqlx::query_as::<_, Student>(
            "INSERT INTO students (name, roll, city, external_id)
             VALUES (?, ?, ?, ?)
             RETURNING id, name, roll, city, external_id",
        )
        .bind(&new.name)
        .bind(new.roll)
        .bind(&new.city)
        .bind(external_id)
        .fetch_one(self.pool())
        .await?;

        Ok(student)
    }

    /// Fetch every student in store order
    pub async fn fetch_all(&self) -> ServiceResult<Vec<Student>> {
        let students = sqlx::query_as::<_, Student>(
            "SELECT id, name, roll, city, external_id FROM students",
        )
        .fetch_all(self.pool())
        .await?;

        Ok(students)
    }

    /// Fetch a student by id, `None` when absent
    pub async fn fetch_by_id(&self, id: i64) -> ServiceResult<Option<Student>> {
        let student = sqlx::query_as::<_, Student>(
            "SELECT id, name, roll, city, external_id FROM students WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        Ok(student)
    }

    /// Apply supplied fields to an existing row and return the updated row.
    ///
    /// Absent fields keep their stored value via COALESCE; `id` and
    /// `external_id` are not reachable from the payload. Returns `None` when
    /// no row has the given id.
    pub async fn update_fields(
        &self,
        id: i64,
        patch: &StudentPayload,
    ) -> ServiceResult<Option<Student>> {
        let student = sqlx::query_as::<_, Student>(
            "UPDATE students
             SET name = COALESCE(?, name),
                 roll = COALESCE(?, roll),
                 city = COALESCE(?, city)
             WHERE id = ?
             RETURNING id, name, roll, city, external_id",
        )
        .bind(&patch.name)
        .bind(patch.roll)
        .bind(&patch.city)
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        Ok(student)
    }

    /// Delete a student by id and return the pre-deletion snapshot,
    /// `None` when absent
    pub async fn delete_by_id(&self, id: i64) -> ServiceResult<Option<Student>> {
        let student = sqlx::query_as::<_, Student>(
            "DELETE FROM students WHERE id = ?
             RETURNING id, name, roll, city, external_id",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        Ok(student)
    }

    /// Total number of stored students
    pub async fn count(&self) -> ServiceResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students")
            .fetch_one(self.pool())
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_student(name: &str, roll: i64, city: &str) -> NewStudent {
        NewStudent {
            name: name.to_string(),
            roll,
            city: city.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id() {
        let store = StudentStore::in_memory().await.unwrap();
        let student = store
            .insert(&new_student("Ann", 5, "Pune"), "ext-a")
            .await
            .unwrap();

        assert!(student.id > 0);
        assert_eq!(student.roll, 5);
        assert_eq!(student.external_id, "ext-a");
    }

    #[tokio::test]
    async fn test_fetch_by_id_absent() {
        let store = StudentStore::in_memory().await.unwrap();
        assert!(store.fetch_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_fields_coalesces() {
        let store = StudentStore::in_memory().await.unwrap();
        let student = store
            .insert(&new_student("Ann", 5, "Pune"), "ext-a")
            .await
            .unwrap();

        let patch = StudentPayload {
            city: Some("Vizag".to_string()),
            ..Default::default()
        };
        let updated = store.update_fields(student.id, &patch).await.unwrap().unwrap();

        assert_eq!(updated.city, "Vizag");
        assert_eq!(updated.name, "Ann");
        assert_eq!(updated.roll, 5);
        assert_eq!(updated.external_id, "ext-a");
    }

    #[tokio::test]
    async fn test_delete_returns_snapshot() {
        let store = StudentStore::in_memory().await.unwrap();
        let student = store
            .insert(&new_student("Ann", 5, "Pune"), "ext-a")
            .await
            .unwrap();

        let snapshot = store.delete_by_id(student.id).await.unwrap().unwrap();
        assert_eq!(snapshot, student);
        assert_eq!(store.count().await.unwrap(), 0);
        assert!(store.delete_by_id(student.id).await.unwrap().is_none());
    }
}
