//! Name corpus used by the synthetic data generator. An explicit provider
//! rather than a process-global source, so tests can plug in a tiny
//! deterministic corpus.

use rand::Rng;

use crate::error::{HrError, HrResult};

const MALE_FIRST_NAMES: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph",
    "Thomas", "Charles", "Christopher", "Daniel", "Matthew", "Anthony", "Mark",
    "Donald", "Steven", "Paul", "Andrew", "Joshua", "Kenneth", "Kevin", "Brian",
    "George", "Timothy", "Ronald", "Edward", "Jason", "Jeffrey", "Ryan", "Jacob",
    "Gary", "Nicholas", "Eric", "Jonathan", "Stephen", "Larry", "Justin", "Scott",
    "Brandon", "Benjamin", "Samuel", "Gregory", "Frank", "Alexander", "Raymond",
    "Patrick", "Jack", "Dennis", "Jerry",
];

const FEMALE_FIRST_NAMES: &[&str] = &[
    "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan",
    "Jessica", "Sarah", "Karen", "Lisa", "Nancy", "Betty", "Margaret", "Sandra",
    "Ashley", "Kimberly", "Emily", "Donna", "Michelle", "Carol", "Amanda",
    "Dorothy", "Melissa", "Deborah", "Stephanie", "Rebecca", "Sharon", "Laura",
    "Cynthia", "Kathleen", "Amy", "Angela", "Shirley", "Anna", "Brenda", "Pamela",
    "Emma", "Nicole", "Helen", "Samantha", "Katherine", "Christine", "Debra",
    "Rachel", "Carolyn", "Janet", "Catherine", "Maria", "Heather",
];

const SURNAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller",
    "Davis", "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez",
    "Wilson", "Anderson", "Thomas", "Taylor", "Moore", "Jackson", "Martin",
    "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez", "Clark",
    "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King",
    "Wright", "Scott", "Torres", "Nguyen", "Hill", "Flores", "Green", "Adams",
    "Nelson", "Baker", "Hall", "Rivera", "Campbell", "Mitchell", "Carter",
    "Roberts", "Gomez", "Phillips", "Evans", "Turner", "Diaz", "Parker",
    "Cruz", "Edwards", "Collins", "Reyes", "Stewart", "Morris", "Morales",
    "Murphy",
];

/// Pools of given names and surnames the generator draws from.
#[derive(Clone, Copy, Debug)]
pub struct NameCorpus {
    male_first_names: &'static [&'static str],
    female_first_names: &'static [&'static str],
    surnames: &'static [&'static str],
}

impl NameCorpus {
    /// Corpus with caller-supplied pools. Every pool must be non-empty.
    pub fn new(
        male_first_names: &'static [&'static str],
        female_first_names: &'static [&'static str],
        surnames: &'static [&'static str],
    ) -> HrResult<Self> {
        if male_first_names.is_empty() || female_first_names.is_empty() || surnames.is_empty() {
            return Err(HrError::validation("name corpus pools must not be empty"));
        }
        Ok(Self {
            male_first_names,
            female_first_names,
            surnames,
        })
    }

    /// The built-in corpus.
    pub fn builtin() -> Self {
        Self {
            male_first_names: MALE_FIRST_NAMES,
            female_first_names: FEMALE_FIRST_NAMES,
            surnames: SURNAMES,
        }
    }

    pub fn male_first<R: Rng>(&self, rng: &mut R) -> &'static str {
        self.male_first_names[rng.gen_range(0..self.male_first_names.len())]
    }

    pub fn female_first<R: Rng>(&self, rng: &mut R) -> &'static str {
        self.female_first_names[rng.gen_range(0..self.female_first_names.len())]
    }

    /// A first name from either pool, uniform over the union.
    pub fn any_first<R: Rng>(&self, rng: &mut R) -> &'static str {
        let males = self.male_first_names.len();
        let index = rng.gen_range(0..males + self.female_first_names.len());
        if index < males {
            self.male_first_names[index]
        } else {
            self.female_first_names[index - males]
        }
    }

    pub fn surname<R: Rng>(&self, rng: &mut R) -> &'static str {
        self.surnames[rng.gen_range(0..self.surnames.len())]
    }
}
