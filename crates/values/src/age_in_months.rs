//! Age in whole months
//!
//! Stored as a total number of months and written as `years:months`,
//! e.g. `"3:6"` for three and a half years. Parsing accepts any month
//! component (`"1:15"` is 27 months) and whitespace around either number
//! (`" 3 : 6 "`); formatting always normalizes.

use std::ops::Add;
use valuekit_core::value::write_fmt;
use valuekit_core::{
    impl_serde_as_text, impl_text_boundary, ComparableValue, EquatableValue, Result,
    SpanSerializable, ValueError, ValueType,
};

const MONTHS_PER_YEAR: i32 = 12;

/// An age measured in months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct AgeInMonths(i32);

impl AgeInMonths {
    /// Zero months
    pub const ZERO: AgeInMonths = AgeInMonths(0);

    /// Create an age from a total number of months
    pub const fn new(total_months: i32) -> Self {
        AgeInMonths(total_months)
    }

    /// Create an age from years and months
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the total overflows.
    pub fn from_years_and_months(years: i32, months: i32) -> Result<Self> {
        years
            .checked_mul(MONTHS_PER_YEAR)
            .and_then(|m| m.checked_add(months))
            .map(AgeInMonths)
            .ok_or_else(|| ValueError::out_of_range(Self::TYPE_NAME, format!("{}:{}", years, months)))
    }

    /// Total months
    #[inline]
    pub const fn total_months(self) -> i32 {
        self.0
    }

    /// Whole years
    #[inline]
    pub const fn years(self) -> i32 {
        self.0 / MONTHS_PER_YEAR
    }

    /// Months beyond the whole years
    #[inline]
    pub const fn months(self) -> i32 {
        self.0 % MONTHS_PER_YEAR
    }

    /// Add months
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` on overflow.
    pub fn add_months(self, months: i32) -> Result<Self> {
        self.0
            .checked_add(months)
            .map(AgeInMonths)
            .ok_or_else(|| ValueError::out_of_range(Self::TYPE_NAME, format!("{} + {} months", self, months)))
    }

    /// Add years
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` on overflow.
    pub fn add_years(self, years: i32) -> Result<Self> {
        years
            .checked_mul(MONTHS_PER_YEAR)
            .ok_or_else(|| ValueError::out_of_range(Self::TYPE_NAME, format!("{} + {} years", self, years)))
            .and_then(|months| self.add_months(months))
    }
}

impl ValueType for AgeInMonths {
    const TYPE_NAME: &'static str = "AgeInMonths";
}

impl EquatableValue for AgeInMonths {
    type Underlying = i32;

    fn is_valid_value(_value: &i32) -> bool {
        true
    }

    fn from_value(value: i32) -> Result<Self> {
        Ok(AgeInMonths(value))
    }

    fn value(&self) -> Result<&i32> {
        Ok(&self.0)
    }
}

impl ComparableValue for AgeInMonths {}

impl SpanSerializable for AgeInMonths {
    const MAX_SERIALIZED_CHAR_LENGTH: usize = 14;
    const MAX_SERIALIZED_BYTE_LENGTH: usize = 14;

    fn try_format(&self, destination: &mut [u8]) -> Result<usize> {
        write_fmt(format_args!("{}:{}", self.years(), self.months()), destination)
    }

    fn parse(s: &str) -> Result<Self> {
        let invalid = || ValueError::format(Self::TYPE_NAME, s);
        if s.len() < 3 {
            return Err(invalid());
        }
        let (years, months) = s.split_once(':').ok_or_else(invalid)?;
        let years = years.trim().parse::<i32>().map_err(|_| invalid())?;
        let months = months.trim().parse::<i32>().map_err(|_| invalid())?;
        Self::from_years_and_months(years, months).map_err(|_| invalid())
    }
}

impl Add for AgeInMonths {
    type Output = AgeInMonths;

    /// Saturates at the bounds of `i32`
    fn add(self, rhs: AgeInMonths) -> AgeInMonths {
        AgeInMonths(self.0.saturating_add(rhs.0))
    }
}

impl From<AgeInMonths> for i32 {
    fn from(value: AgeInMonths) -> Self {
        value.0
    }
}

impl_text_boundary!(AgeInMonths);
impl_serde_as_text!(AgeInMonths);
