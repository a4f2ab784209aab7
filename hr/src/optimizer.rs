//! One-shot index-tuning diagnostic: benchmark, create candidate indexes,
//! benchmark again, compare.

use sea_orm::ConnectionTrait;
use tracing::{info, warn};

use crate::benchmark::{QueryTiming, male_f_surname_count};
use crate::error::HrResult;

/// Candidate index DDL. `IF NOT EXISTS` keeps reruns idempotent; the
/// expression indexes use Postgres substring syntax and may be rejected by
/// other stores, which is tolerated.
const INDEX_STATEMENTS: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_employees_gender_surname_initial \
     ON employees (gender, (substring(full_name from 1 for 1)))",
    "CREATE INDEX IF NOT EXISTS idx_employees_gender \
     ON employees (gender)",
    "CREATE INDEX IF NOT EXISTS idx_employees_surname_initial \
     ON employees ((substring(full_name from 1 for 1)))",
];

#[derive(Clone, Debug)]
pub struct OptimizationReport {
    pub before: QueryTiming,
    pub after: QueryTiming,
    /// Absent when the before-time was too small to compare against.
    pub improvement_percent: Option<f64>,
    /// Index creation failures, one note per skipped statement.
    pub index_notes: Vec<String>,
}

impl OptimizationReport {
    pub fn verdict(&self) -> Option<&'static str> {
        self.improvement_percent.map(|percent| {
            if percent > 0.0 {
                "successful"
            } else {
                "no significant improvement"
            }
        })
    }
}

/// Run the benchmark around the candidate index creations. Index failures
/// become notes, not errors; the diagnostic always completes unless the
/// benchmark itself fails. Nothing is ever dropped.
pub async fn optimize<C: ConnectionTrait>(db: &C) -> HrResult<OptimizationReport> {
    let before = male_f_surname_count(db).await?;
    info!(
        count = before.count,
        seconds = before.elapsed_seconds(),
        "benchmark before indexes"
    );

    let mut index_notes = Vec::new();
    for statement in INDEX_STATEMENTS {
        if let Err(err) = db.execute_unprepared(statement).await {
            warn!(%err, "index creation skipped");
            index_notes.push(err.to_string());
        }
    }

    let after = male_f_surname_count(db).await?;
    info!(
        count = after.count,
        seconds = after.elapsed_seconds(),
        "benchmark after indexes"
    );

    let improvement_percent = improvement(before.elapsed_seconds(), after.elapsed_seconds());
    Ok(OptimizationReport {
        before,
        after,
        improvement_percent,
        index_notes,
    })
}

fn improvement(before_seconds: f64, after_seconds: f64) -> Option<f64> {
    if before_seconds > 0.0 {
        Some((before_seconds - after_seconds) / before_seconds * 100.0)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn timing(seconds: f64) -> QueryTiming {
        QueryTiming {
            count: 0,
            elapsed: Duration::from_secs_f64(seconds),
        }
    }

    #[test]
    fn improvement_skipped_for_zero_before_time() {
        assert_eq!(improvement(0.0, 0.5), None);
    }

    #[test]
    fn improvement_is_relative_to_the_before_time() {
        assert_eq!(improvement(2.0, 1.0), Some(50.0));
        assert_eq!(improvement(1.0, 2.0), Some(-100.0));
    }

    #[test]
    fn verdict_follows_the_improvement_sign() {
        let report = |improvement_percent| OptimizationReport {
            before: timing(1.0),
            after: timing(1.0),
            improvement_percent,
            index_notes: Vec::new(),
        };
        assert_eq!(report(Some(12.5)).verdict(), Some("successful"));
        assert_eq!(
            report(Some(0.0)).verdict(),
            Some("no significant improvement")
        );
        assert_eq!(
            report(Some(-3.0)).verdict(),
            Some("no significant improvement")
        );
        assert_eq!(report(None).verdict(), None);
    }
}
