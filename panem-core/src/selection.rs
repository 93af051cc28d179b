//! Dueler selection
//!
//! Picks one odd-month and one even-month competitor from different
//! districts. Tessera holders are preferred; any role left open falls back to
//! a random draw.
//!
//! ## Architecture
//! - Level 2: choose() - full selection for one round
//! - Level 3: tessera scan, random fallback
//! - Level 4: candidate/pair types

use serde::{Deserialize, Serialize};

use crate::district::District;
use crate::person::{DistrictId, Parity, Person};
use crate::rng::RandomSource;
use crate::tree::DistrictTree;

// ============================================================================
// TYPES (Level 4)
// ============================================================================

/// Position of a selected competitor inside the tree
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub district_id: DistrictId,
    pub parity: Parity,
    pub index: usize,
}

/// Candidates chosen for one round, before anyone is moved
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    /// Odd-population competitor
    pub odd: Option<Candidate>,
    /// Even-population competitor
    pub even: Option<Candidate>,
}

/// The two competitors facing each other in a round.
///
/// Either side may be absent when no eligible competitor exists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelPair {
    /// Drawn from an odd population
    pub person1: Option<Person>,
    /// Drawn from an even population
    pub person2: Option<Person>,
}

impl DuelPair {
    pub fn new(person1: Option<Person>, person2: Option<Person>) -> Self {
        Self { person1, person2 }
    }

    /// Both participants present
    pub fn is_complete(&self) -> bool {
        self.person1.is_some() && self.person2.is_some()
    }

    /// Neither participant present
    pub fn is_empty(&self) -> bool {
        self.person1.is_none() && self.person2.is_none()
    }
}

// ============================================================================
// LEVEL 2 - ROUND SELECTION
// ============================================================================

/// Choose the odd and even competitors for the next duel.
///
/// Order of resolution:
/// 1. first odd tessera holder
/// 2. first even tessera holder outside the odd pick's district
/// 3. random odd pick outside the even pick's district, if still open
/// 4. random even pick outside the odd pick's district, if still open
pub fn choose(tree: &DistrictTree, rng: &mut dyn RandomSource) -> Selection {
    let mut odd = find_tessera(tree, Parity::Odd, None);
    let mut even = find_tessera(tree, Parity::Even, district_of(odd));

    if odd.is_none() {
        odd = find_random(tree, Parity::Odd, district_of(even), rng);
    }
    if even.is_none() {
        even = find_random(tree, Parity::Even, district_of(odd), rng);
    }

    Selection { odd, even }
}

// ============================================================================
// LEVEL 3 - SCANS
// ============================================================================

/// First tessera holder of the given parity, scanning each node's population
/// before its left and then right subtree.
pub fn find_tessera(
    tree: &DistrictTree,
    parity: Parity,
    excluded: Option<DistrictId>,
) -> Option<Candidate> {
    tree.pre_order()
        .filter(|district| !is_excluded(district, excluded))
        .find_map(|district| {
            district
                .population(parity)
                .iter()
                .position(Person::tessera)
                .map(|index| Candidate {
                    district_id: district.district_id(),
                    parity,
                    index,
                })
        })
}

/// Random competitor of the given parity.
///
/// Starts at the root and draws a uniform member of the node's population.
/// A draw landing in the excluded district moves on to the left subtree and
/// then the right one. Returns `None` once the traversal is exhausted, which
/// happens when the excluded district is the only one in the tree.
pub fn find_random(
    tree: &DistrictTree,
    parity: Parity,
    excluded: Option<DistrictId>,
    rng: &mut dyn RandomSource,
) -> Option<Candidate> {
    for district in tree.pre_order() {
        let population = district.population(parity);
        if population.is_empty() {
            continue;
        }
        let index = rng.uniform(population.len());
        if !is_excluded(district, excluded) {
            return Some(Candidate {
                district_id: district.district_id(),
                parity,
                index,
            });
        }
    }
    None
}

fn is_excluded(district: &District, excluded: Option<DistrictId>) -> bool {
    excluded == Some(district.district_id())
}

fn district_of(candidate: Option<Candidate>) -> Option<DistrictId> {
    candidate.map(|c| c.district_id)
}
