//! Batched persistence for generated employee records.

use sea_orm::{ConnectionTrait, EntityTrait, Set};

use entity::employee;

use crate::error::HrResult;
use crate::generator::NewEmployee;

/// Upper bound on rows per physical insert.
pub const MAX_WRITE_BATCH: usize = 1_000;

#[derive(Clone, Copy, Debug)]
pub struct BatchLoader {
    max_batch: usize,
}

impl Default for BatchLoader {
    fn default() -> Self {
        Self {
            max_batch: MAX_WRITE_BATCH,
        }
    }
}

impl BatchLoader {
    pub fn with_max_batch(max_batch: usize) -> Self {
        Self {
            max_batch: max_batch.max(1),
        }
    }

    /// Persist `records`, splitting into sub-batches no larger than the
    /// configured write size. Earlier sub-batches stay committed when a
    /// later write fails; the error is returned as-is.
    pub async fn load<C: ConnectionTrait>(
        &self,
        db: &C,
        records: Vec<NewEmployee>,
    ) -> HrResult<u64> {
        let mut written = 0u64;
        for batch in split_into_batches(records, self.max_batch) {
            let rows = batch.len() as u64;
            let models = batch.into_iter().map(to_active_model);
            employee::Entity::insert_many(models).exec(db).await?;
            written += rows;
        }
        Ok(written)
    }
}

fn to_active_model(record: NewEmployee) -> employee::ActiveModel {
    employee::ActiveModel {
        full_name: Set(record.full_name),
        birth_date: Set(record.birth_date),
        gender: Set(record.gender),
        ..Default::default()
    }
}

/// Split `records` into order-preserving chunks of at most `max_batch`.
pub fn split_into_batches<T>(records: Vec<T>, max_batch: usize) -> Vec<Vec<T>> {
    let max_batch = max_batch.max(1);
    let mut batches = Vec::with_capacity(records.len().div_ceil(max_batch));
    let mut records = records.into_iter().peekable();
    while records.peek().is_some() {
        batches.push(records.by_ref().take(max_batch).collect());
    }
    batches
}
