//! Roster operations: single-record creation, deduplicated listing, and the
//! destructive mass-generation run.

use std::collections::HashSet;

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder, Set};
use tracing::info;

use entity::{Gender, employee};

use crate::error::{HrError, HrResult};
use crate::generator::{EmployeeGenerator, GenerationStats};
use crate::loader::BatchLoader;
use crate::names::NameCorpus;

pub const DEFAULT_TOTAL_RECORDS: u64 = 1_000_000;
pub const DEFAULT_CHUNK_SIZE: usize = 10_000;

/// Size of the male 'F'-surname cohort appended after every mass run.
pub const F_SURNAME_COHORT: usize = 100;

#[derive(Clone, Debug)]
pub struct CreatedEmployee {
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub age: i32,
}

/// Validate and persist a single employee. Nothing is written when any
/// field fails validation.
pub async fn create_employee<C: ConnectionTrait>(
    db: &C,
    full_name: &str,
    birth_date: &str,
    gender: &str,
    today: NaiveDate,
) -> HrResult<CreatedEmployee> {
    let full_name = full_name.trim();
    if full_name.is_empty() {
        return Err(HrError::validation("full name must not be empty"));
    }
    let birth_date = NaiveDate::parse_from_str(birth_date, "%Y-%m-%d").map_err(|_| {
        HrError::validation(format!(
            "birth date '{birth_date}' is not a valid YYYY-MM-DD date"
        ))
    })?;
    if birth_date >= today {
        return Err(HrError::validation("birth date must be before today"));
    }
    let gender: Gender = gender.parse().map_err(HrError::Validation)?;

    let record = employee::ActiveModel {
        full_name: Set(full_name.to_string()),
        birth_date: Set(birth_date),
        gender: Set(gender),
        ..Default::default()
    };
    record.insert(db).await?;

    Ok(CreatedEmployee {
        full_name: full_name.to_string(),
        birth_date,
        gender,
        age: entity::employee::age_between(birth_date, today),
    })
}

/// All employees ordered by full name, de-duplicated by
/// (full_name, birth_date) with the first occurrence retained.
pub async fn list_employees<C: ConnectionTrait>(db: &C) -> HrResult<Vec<employee::Model>> {
    let rows = employee::Entity::find()
        .order_by_asc(employee::Column::FullName)
        .all(db)
        .await?;

    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(rows.len());
    for row in rows {
        if seen.insert((row.full_name.clone(), row.birth_date)) {
            unique.push(row);
        }
    }
    Ok(unique)
}

#[derive(Clone, Debug)]
pub struct GenerationRunConfig {
    pub total_records: u64,
    pub chunk_size: usize,
    pub seed: Option<u64>,
}

impl Default for GenerationRunConfig {
    fn default() -> Self {
        Self {
            total_records: DEFAULT_TOTAL_RECORDS,
            chunk_size: DEFAULT_CHUNK_SIZE,
            seed: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct GenerationReport {
    pub stats: GenerationStats,
    pub total_persisted: u64,
}

/// Clear the table and regenerate the full population plus the fixed male
/// 'F'-surname cohort.
///
/// Destructive: every existing row is deleted first, so an interrupted run
/// is recovered by simply running again. Generation is chunked; each chunk
/// is generated, persisted, and reported before the next one starts, so
/// peak memory stays at one chunk.
pub async fn generate_mass_data<C: ConnectionTrait>(
    db: &C,
    config: &GenerationRunConfig,
    corpus: &NameCorpus,
    today: NaiveDate,
) -> HrResult<GenerationReport> {
    let cleared = employee::Entity::delete_many().exec(db).await?;
    info!(rows = cleared.rows_affected, "cleared existing employees");

    let mut generator = EmployeeGenerator::new(corpus, config.seed, today);
    let loader = BatchLoader::default();
    let chunk_size = config.chunk_size.max(1) as u64;

    let mut persisted = 0u64;
    while persisted < config.total_records {
        let remaining = config.total_records - persisted;
        let batch = generator.generate(remaining.min(chunk_size) as usize);
        persisted += loader.load(db, batch).await?;
        let progress = persisted as f64 / config.total_records as f64 * 100.0;
        info!("progress: {progress:.1}%");
    }

    let cohort = generator.f_surname_males(F_SURNAME_COHORT);
    persisted += loader.load(db, cohort).await?;
    info!(total = persisted, "generation run finished");

    Ok(GenerationReport {
        stats: generator.stats().clone(),
        total_persisted: persisted,
    })
}
