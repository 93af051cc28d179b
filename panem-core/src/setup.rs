//! Input parsing - builds the waiting list of districts
//!
//! Format, one record per line:
//!
//! ```text
//! <district count>
//! <district id>                                     (district count times)
//! <person count>
//! <first> <last> <birth month> <age> <district id> <effectiveness>
//! ```

use std::path::Path;

use rustc_hash::FxHashMap;

use crate::district::District;
use crate::person::{DistrictId, Person};

/// Error types for reading an input file
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("line {line}: invalid number '{value}'")]
    InvalidNumber { line: usize, value: String },

    #[error("line {line}: malformed person record: {reason}")]
    MalformedPerson { line: usize, reason: String },

    #[error("line {line}: birth month {month} is outside 1-12")]
    BirthMonthOutOfRange { line: usize, month: u8 },
}

/// Read and parse an input file
pub fn load_panem(path: impl AsRef<Path>) -> Result<Vec<District>, SetupError> {
    let text = std::fs::read_to_string(path)?;
    parse_panem(&text)
}

/// Parse districts and people.
///
/// Districts keep their order of appearance. Each person joins the first
/// district with a matching id; people naming an unknown district are skipped.
pub fn parse_panem(text: &str) -> Result<Vec<District>, SetupError> {
    let mut lines = Lines::new(text);

    let district_count: usize = lines.next_number("district count")?;
    let mut districts = Vec::with_capacity(district_count);
    let mut by_id: FxHashMap<DistrictId, usize> = FxHashMap::default();
    for _ in 0..district_count {
        let id: DistrictId = lines.next_number("district id")?;
        by_id.entry(id).or_insert(districts.len());
        districts.push(District::new(id));
    }

    let person_count: usize = lines.next_number("person count")?;
    for _ in 0..person_count {
        let (line, record) = lines.next_line("person record")?;
        let person = parse_person(line, record)?;
        match by_id.get(&person.district_id()) {
            Some(&index) => districts[index].add_person(person),
            None => tracing::warn!(
                "line {}: {} names unknown district {}; skipped",
                line,
                person.full_name(),
                person.district_id()
            ),
        }
    }

    tracing::debug!(
        "Parsed {} districts and {} people",
        districts.len(),
        person_count
    );
    Ok(districts)
}

fn parse_person(line: usize, record: &str) -> Result<Person, SetupError> {
    let fields: Vec<&str> = record.split_whitespace().collect();
    let [first, last, month, age, district, effectiveness] = fields.as_slice() else {
        return Err(SetupError::MalformedPerson {
            line,
            reason: format!("expected 6 fields, found {}", fields.len()),
        });
    };

    let month: u8 = parse_number(line, month)?;
    if !(1..=12).contains(&month) {
        return Err(SetupError::BirthMonthOutOfRange { line, month });
    }

    Ok(Person::new(
        month,
        *first,
        *last,
        parse_number(line, age)?,
        parse_number(line, district)?,
        parse_number(line, effectiveness)?,
    ))
}

fn parse_number<T: std::str::FromStr>(line: usize, value: &str) -> Result<T, SetupError> {
    value.trim().parse().map_err(|_| SetupError::InvalidNumber {
        line,
        value: value.to_string(),
    })
}

/// Non-blank lines with 1-based line numbers
struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.lines().enumerate(),
        }
    }

    fn next_line(&mut self, expected: &'static str) -> Result<(usize, &'a str), SetupError> {
        self.inner
            .by_ref()
            .map(|(index, line)| (index + 1, line.trim()))
            .find(|(_, line)| !line.is_empty())
            .ok_or(SetupError::UnexpectedEof { expected })
    }

    fn next_number<T: std::str::FromStr>(&mut self, expected: &'static str) -> Result<T, SetupError> {
        let (line, value) = self.next_line(expected)?;
        parse_number(line, value)
    }
}
