use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub full_name: String,
    pub birth_date: Date,
    pub gender: Gender,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("no relations")
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Whole years between the birth date and `today`.
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        age_between(self.birth_date, today)
    }
}

/// Whole years between `birth` and `today`, counting a year only once the
/// birthday has occurred.
pub fn age_between(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveActiveEnum, Eq, PartialEq)]
#[sea_orm(rs_type = "String", db_type = "String(Some(6))")]
pub enum Gender {
    #[sea_orm(string_value = "Male")]
    Male,
    #[sea_orm(string_value = "Female")]
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        })
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            other => Err(format!("gender must be 'Male' or 'Female', got '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn age_counts_completed_years() {
        assert_eq!(age_between(date(2000, 6, 15), date(2018, 6, 15)), 18);
        assert_eq!(age_between(date(2000, 6, 16), date(2018, 6, 15)), 17);
        assert_eq!(age_between(date(2000, 1, 1), date(2026, 8, 6)), 26);
    }

    #[test]
    fn age_handles_leap_day_birthdays() {
        assert_eq!(age_between(date(2000, 2, 29), date(2018, 2, 28)), 17);
        assert_eq!(age_between(date(2000, 2, 29), date(2018, 3, 1)), 18);
    }

    #[test]
    fn gender_parses_exact_labels_only() {
        assert_eq!("Male".parse::<Gender>(), Ok(Gender::Male));
        assert_eq!("Female".parse::<Gender>(), Ok(Gender::Female));
        assert!("Other".parse::<Gender>().is_err());
        assert!("male".parse::<Gender>().is_err());
    }

    #[test]
    fn gender_displays_db_labels() {
        assert_eq!(Gender::Male.to_string(), "Male");
        assert_eq!(Gender::Female.to_string(), "Female");
    }
}
