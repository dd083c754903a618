use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{Result, StorageError};
use crate::models::{Sex, WeightClassTable};

pub const UNCLASSIFIED: &str = "0";

#[derive(Debug, Clone, PartialEq)]
struct Boundary {
    limit: Decimal,
    label: String,
}

/// Ordered numeric boundaries built from a federation weight-class table.
#[derive(Debug, Clone, Default)]
pub struct WeightClassResolver {
    male: Vec<Boundary>,
    female: Vec<Boundary>,
}

impl WeightClassResolver {
    pub fn from_table(table: &WeightClassTable) -> Result<Self> {
        Ok(Self {
            male: boundaries(&table.male, Sex::Male)?,
            female: boundaries(&table.female, Sex::Female)?,
        })
    }

    /// Label of the smallest class whose limit is at least `bodyweight`, or the
    /// top limit with a `+` once the lifter is heavier than every limit.
    /// Returns `"0"` when sex or bodyweight is unknown.
    pub fn resolve(&self, sex: Option<Sex>, bodyweight: Option<Decimal>) -> String {
        let (Some(sex), Some(bodyweight)) = (sex, bodyweight) else {
            return UNCLASSIFIED.to_string();
        };
        if bodyweight <= Decimal::ZERO {
            return UNCLASSIFIED.to_string();
        }

        let table = match sex {
            Sex::Female if !self.female.is_empty() => &self.female,
            _ => &self.male,
        };

        if let Some(boundary) = table.iter().find(|b| b.limit >= bodyweight) {
            return boundary.label.clone();
        }

        match table.last() {
            Some(top) => format!("{}+", top.label),
            None => UNCLASSIFIED.to_string(),
        }
    }
}

fn boundaries(labels: &[String], sex: Sex) -> Result<Vec<Boundary>> {
    let mut parsed = Vec::with_capacity(labels.len());

    for label in labels {
        let bare = label.trim().trim_end_matches('+').trim();
        let limit = Decimal::from_str(bare).map_err(|_| StorageError::InvalidWeightClass {
            label: label.clone(),
            sex: sex.as_str(),
        })?;
        parsed.push(Boundary {
            limit,
            label: bare.to_string(),
        });
    }

    parsed.sort_by(|a, b| a.limit.cmp(&b.limit));
    parsed.dedup_by(|a, b| a.limit == b.limit);

    Ok(parsed)
}
