use serde::Serialize;

use crate::constants::{MAX_MONTH, MAX_YEAR, MIN_MONTH, MIN_YEAR};
use crate::error::{Result, ValidationError};

/// Accounting month used when closing reports and liabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Period {
    month: u32,
    year: u32,
}

impl Period {
    pub fn new(month: u32, year: u32) -> std::result::Result<Self, ValidationError> {
        if !(MIN_MONTH..=MAX_MONTH).contains(&month) {
            return Err(ValidationError::MonthOutOfRange(month));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(ValidationError::YearOutOfRange(year));
        }
        Ok(Self { month, year })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    /// Serialized form both parties sign, e.g. `{"month":3,"year":2025}`.
    pub fn contract(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
