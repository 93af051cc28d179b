//! Districts and their two populations

use serde::{Deserialize, Serialize};

use crate::person::{DistrictId, Parity, Person};

/// A district: an identifier plus odd- and even-birth-month populations
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    district_id: DistrictId,
    odd_population: Vec<Person>,
    even_population: Vec<Person>,
}

impl District {
    /// Create an empty district
    pub fn new(district_id: DistrictId) -> Self {
        Self {
            district_id,
            odd_population: Vec::new(),
            even_population: Vec::new(),
        }
    }

    pub fn district_id(&self) -> DistrictId {
        self.district_id
    }

    pub fn odd_population(&self) -> &[Person] {
        &self.odd_population
    }

    pub fn even_population(&self) -> &[Person] {
        &self.even_population
    }

    /// Population for the given parity
    pub fn population(&self, parity: Parity) -> &[Person] {
        match parity {
            Parity::Odd => &self.odd_population,
            Parity::Even => &self.even_population,
        }
    }

    fn population_mut(&mut self, parity: Parity) -> &mut Vec<Person> {
        match parity {
            Parity::Odd => &mut self.odd_population,
            Parity::Even => &mut self.even_population,
        }
    }

    pub fn add_odd_person(&mut self, person: Person) {
        self.odd_population.push(person);
    }

    pub fn add_even_person(&mut self, person: Person) {
        self.even_population.push(person);
    }

    /// Append a person to the population matching their birth month
    pub fn add_person(&mut self, person: Person) {
        self.population_mut(person.parity()).push(person);
    }

    /// Remove the person at `index` from a population, preserving order
    pub(crate) fn take_person(&mut self, parity: Parity, index: usize) -> Option<Person> {
        let population = self.population_mut(parity);
        if index < population.len() {
            Some(population.remove(index))
        } else {
            None
        }
    }

    /// One of the two populations is empty
    pub fn is_exhausted(&self) -> bool {
        self.odd_population.is_empty() || self.even_population.is_empty()
    }

    /// Competitors across both populations
    pub fn size(&self) -> usize {
        self.odd_population.len() + self.even_population.len()
    }
}
