//! Synthetic employee population generator.
//!
//! Owns an explicit RNG so a fixed seed reproduces the exact same
//! population, corpus and reference date being equal.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use entity::Gender;

use crate::names::NameCorpus;

const SURNAME_LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const MIN_AGE_YEARS: i32 = 18;
const MAX_AGE_YEARS: i32 = 65;

/// A not-yet-persisted employee row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewEmployee {
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
}

/// Aggregate counters for the main population of a generation run.
///
/// `letter_distribution` tallies the per-record random letter. It is
/// bookkeeping output; callers must not read it as the authoritative
/// distribution of stored surname initials.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub male_count: u64,
    pub female_count: u64,
    pub letter_distribution: BTreeMap<char, u64>,
}

pub struct EmployeeGenerator<'c> {
    rng: StdRng,
    corpus: &'c NameCorpus,
    today: NaiveDate,
    stats: GenerationStats,
}

impl<'c> EmployeeGenerator<'c> {
    /// `seed` pins the random stream; `None` draws entropy from the OS.
    /// `today` anchors the adult birth-date window.
    pub fn new(corpus: &'c NameCorpus, seed: Option<u64>, today: NaiveDate) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            corpus,
            today,
            stats: GenerationStats::default(),
        }
    }

    pub fn stats(&self) -> &GenerationStats {
        &self.stats
    }

    /// Generate `count` records: uniform gender, a random A-Z letter tallied
    /// into the distribution counters and forced onto the surname initial,
    /// and a uniform adult birth date.
    pub fn generate(&mut self, count: usize) -> Vec<NewEmployee> {
        let mut batch = Vec::with_capacity(count);
        for _ in 0..count {
            batch.push(self.next_record());
        }
        batch
    }

    /// Male records whose surname initial is pinned to 'F'. First and middle
    /// names both come from the male pool. Not counted in the stats.
    pub fn f_surname_males(&mut self, count: usize) -> Vec<NewEmployee> {
        let mut batch = Vec::with_capacity(count);
        for _ in 0..count {
            let first = self.corpus.male_first(&mut self.rng);
            let middle = self.corpus.male_first(&mut self.rng);
            let surname = force_initial(self.corpus.surname(&mut self.rng), 'F');
            batch.push(NewEmployee {
                full_name: format!("{surname} {first} {middle}"),
                birth_date: self.birth_date(),
                gender: Gender::Male,
            });
        }
        batch
    }

    fn next_record(&mut self) -> NewEmployee {
        let gender = if self.rng.gen_bool(0.5) {
            Gender::Male
        } else {
            Gender::Female
        };
        match gender {
            Gender::Male => self.stats.male_count += 1,
            Gender::Female => self.stats.female_count += 1,
        }

        let letter = SURNAME_LETTERS[self.rng.gen_range(0..SURNAME_LETTERS.len())] as char;
        *self.stats.letter_distribution.entry(letter).or_insert(0) += 1;

        let first = match gender {
            Gender::Male => self.corpus.male_first(&mut self.rng),
            Gender::Female => self.corpus.female_first(&mut self.rng),
        };
        let middle = self.corpus.any_first(&mut self.rng);
        let surname = force_initial(self.corpus.surname(&mut self.rng), letter);

        NewEmployee {
            full_name: format!("{surname} {first} {middle}"),
            birth_date: self.birth_date(),
            gender,
        }
    }

    /// Uniform date in the inclusive window [today - 65y, today - 18y].
    fn birth_date(&mut self) -> NaiveDate {
        let start = years_before(self.today, MAX_AGE_YEARS);
        let end = years_before(self.today, MIN_AGE_YEARS);
        let span = (end - start).num_days();
        start + Duration::days(self.rng.gen_range(0..=span))
    }
}

fn force_initial(surname: &str, letter: char) -> String {
    let mut out = String::with_capacity(surname.len());
    out.push(letter);
    out.extend(surname.chars().skip(1));
    out
}

// Feb 29 maps to Feb 28 when the target year is not a leap year.
fn years_before(date: NaiveDate, years: i32) -> NaiveDate {
    let year = date.year() - years;
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .unwrap_or(NaiveDate::MIN)
}
