//! # Student Service
//!
//! Business-logic façade over the store. Handlers call into this layer only;
//! it validates transport payloads, delegates persistence, and returns typed
//! failures that the HTTP boundary maps to status codes.

pub mod search;

use uuid::Uuid;

use crate::errors::{ServiceError, ServiceResult};
use crate::model::{Student, StudentPayload};
use crate::store::StudentStore;

use search::{SearchCriteria, SearchOptions, SearchResults};

/// Service façade for student operations.
///
/// Constructed once with a store handle and injected into handlers; cloning
/// shares the underlying connection pool.
#[derive(Clone)]
pub struct StudentService {
    store: StudentStore,
}

impl StudentService {
    /// Create a service backed by the given store
    pub fn new(store: StudentStore) -> Self {
        Self { store }
    }

    /// Create a new student from a full payload.
    ///
    /// Validation failures short-circuit before any store interaction. The
    /// store assigns `id`; `external_id` is generated here, never supplied.
    pub async fn create(&self, payload: StudentPayload) -> ServiceResult<Student> {
        let new = payload.into_new_student()?;
        let external_id = Uuid::new_v4().to_string();
        self.store.insert(&new, &external_id).await
    }

    /// List every student, in store order
    pub async fn list_all(&self) -> ServiceResult<Vec<Student>> {
        self.store.fetch_all().await
    }

    /// Retrieve a student by id
    pub async fn retrieve(&self, id: i64) -> ServiceResult<Student> {
        self.store
            .fetch_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(id))
    }

    /// Partially update a student by id.
    ///
    /// Only supplied fields are validated and applied; `id` and `external_id`
    /// are never rewritten.
    pub async fn update(&self, id: i64, payload: StudentPayload) -> ServiceResult<Student> {
        payload.validate_partial()?;
        self.store
            .update_fields(id, &payload)
            .await?
            .ok_or(ServiceError::NotFound(id))
    }

    /// Delete a student by id, returning the pre-deletion snapshot
    pub async fn delete(&self, id: i64) -> ServiceResult<Student> {
        self.store
            .delete_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(id))
    }

    /// Filtered, sorted, paginated search
    pub async fn search(
        &self,
        criteria: SearchCriteria,
        options: SearchOptions,
    ) -> ServiceResult<SearchResults> {
        let criteria = criteria.normalize();
        let (results, total_count) = self.store.search(&criteria, &options).await?;

        Ok(SearchResults {
            total_count,
            page: options.page,
            page_size: options.page_size,
            results,
        })
    }

    /// Store handle, exposed for tests and health checks
    pub fn store(&self) -> &StudentStore {
        &self.store
    }
}
