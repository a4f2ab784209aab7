//! The fixed benchmark query: male employees whose full name starts with 'F'.

use std::time::{Duration, Instant};

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter};

use entity::{Gender, employee};

use crate::error::HrResult;

/// Outcome of one timed run of the benchmark query.
#[derive(Clone, Copy, Debug)]
pub struct QueryTiming {
    pub count: u64,
    pub elapsed: Duration,
}

impl QueryTiming {
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Count rows matching `gender = 'Male' AND full_name LIKE 'F%'`, timing
/// only the query execution. Results are never cached; every call hits the
/// store again.
pub async fn male_f_surname_count<C: ConnectionTrait>(db: &C) -> HrResult<QueryTiming> {
    let started = Instant::now();
    let count = employee::Entity::find()
        .filter(employee::Column::Gender.eq(Gender::Male))
        .filter(employee::Column::FullName.like("F%"))
        .count(db)
        .await?;
    Ok(QueryTiming {
        count,
        elapsed: started.elapsed(),
    })
}
