//! Competitor records

use serde::{Deserialize, Serialize};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Youngest age that qualifies for a tessera
pub const TESSERA_MIN_AGE: u32 = 12;

/// First age that no longer qualifies for a tessera
pub const TESSERA_MAX_AGE: u32 = 18;

/// District identifier
pub type DistrictId = i32;

// ============================================================================
// CORE TYPES
// ============================================================================

/// Which population a competitor belongs to, by birth month
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parity {
    Odd,
    Even,
}

impl Parity {
    /// Parity of a birth month (1-12)
    pub fn of_month(month: u8) -> Self {
        if month % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

/// A single competitor
///
/// Records are immutable once built: the tessera flag is derived from the age
/// at construction and the district never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    first_name: String,
    last_name: String,
    birth_month: u8,
    age: u32,
    district_id: DistrictId,
    effectiveness: i32,
    tessera: bool,
}

impl Person {
    /// Create a competitor, deriving the tessera flag from `age`
    pub fn new(
        birth_month: u8,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: u32,
        district_id: DistrictId,
        effectiveness: i32,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_month,
            age,
            district_id,
            effectiveness,
            tessera: (TESSERA_MIN_AGE..TESSERA_MAX_AGE).contains(&age),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn birth_month(&self) -> u8 {
        self.birth_month
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn district_id(&self) -> DistrictId {
        self.district_id
    }

    pub fn effectiveness(&self) -> i32 {
        self.effectiveness
    }

    /// Holds a tessera (aged 12 to 17 inclusive)
    pub fn tessera(&self) -> bool {
        self.tessera
    }

    /// Population this competitor lives in
    pub fn parity(&self) -> Parity {
        Parity::of_month(self.birth_month)
    }
}
