//! Search query construction.
//!
//! Typed criteria translate into the query builder one field at a time; the
//! sort column comes from the validated [`SortField`] enum, never from raw
//! caller input.

use sqlx::{QueryBuilder, Sqlite};

use crate::errors::ServiceResult;
use crate::model::Student;
use crate::service::search::{SearchCriteria, SearchOptions};

use super::ops::COLUMNS;
use super::StudentStore;

impl StudentStore {
    /// Run a filtered, sorted, paginated search.
    ///
    /// Returns the page of matching students and the total match count
    /// before pagination.
    pub async fn search(
        &self,
        criteria: &SearchCriteria,
        options: &SearchOptions,
    ) -> ServiceResult<(Vec<Student>, i64)> {
        // Both statements run in one read transaction so the count and the
        // page see the same snapshot even with writers in flight
        let mut tx = self.pool().begin().await?;

        let mut count_query = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM students");
        push_filters(&mut count_query, criteria);
        let total_count = count_query
            .build_query_scalar::<i64>()
            .fetch_one(&mut *tx)
            .await?;

        let mut query = QueryBuilder::<Sqlite>::new(format!("SELECT {COLUMNS} FROM students"));
        push_filters(&mut query, criteria);
        query
            .push(" ORDER BY ")
            .push(options.sort_by.column())
            .push(" ")
            .push(options.sort_order.keyword());
        query
            .push(" LIMIT ")
            .push_bind(options.page_size)
            .push(" OFFSET ")
            .push_bind(options.offset());

        let results = query
            .build_query_as::<Student>()
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok((results, total_count))
    }
}

/// Append WHERE clauses for each present filter, AND-combined.
///
/// `instr` gives substring matching without LIKE wildcard interpretation;
/// lowering both sides makes it case-insensitive.
fn push_filters(query: &mut QueryBuilder<'_, Sqlite>, criteria: &SearchCriteria) {
    let mut prefix = " WHERE ";

    if let Some(name) = &criteria.name {
        query
            .push(prefix)
            .push("instr(lower(name), lower(")
            .push_bind(name.clone())
            .push(")) > 0");
        prefix = " AND ";
    }
    if let Some(city) = &criteria.city {
        query
            .push(prefix)
            .push("instr(lower(city), lower(")
            .push_bind(city.clone())
            .push(")) > 0");
        prefix = " AND ";
    }
    if let Some(roll) = criteria.roll {
        query.push(prefix).push("roll = ").push_bind(roll);
    }
}
