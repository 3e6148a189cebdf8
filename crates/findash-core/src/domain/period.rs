use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::Date;

use crate::ValidationError;

/// Calendar-month grouping key derived from a record's date.
///
/// Formats as `YYYY-MM`, so lexicographic order equals chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u8,
}

impl YearMonth {
    pub fn from_date(date: Date) -> Self {
        Self {
            year: date.year(),
            month: u8::from(date.month()),
        }
    }

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidYearMonth {
            value: input.to_owned(),
        };

        let (year, month) = input.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u8 = month.parse().map_err(|_| invalid())?;

        if !(1..=12).contains(&month) {
            return Err(invalid());
        }

        Ok(Self { year, month })
    }

    pub const fn year(self) -> i32 {
        self.year
    }

    pub const fn month(self) -> u8 {
        self.month
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn derives_key_from_date() {
        let key = YearMonth::from_date(date!(2023 - 04 - 17));
        assert_eq!(key.to_string(), "2023-04");
    }

    #[test]
    fn orders_chronologically() {
        let december = YearMonth::from_date(date!(2022 - 12 - 31));
        let january = YearMonth::from_date(date!(2023 - 01 - 01));
        assert!(december < january);
        assert!(december.to_string() < january.to_string());
    }

    #[test]
    fn rejects_invalid_month() {
        let err = YearMonth::parse("2023-13").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidYearMonth { .. }));
    }
}
