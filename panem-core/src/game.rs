//! Game engine - waiting list, district tree, and the duel loop
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: play() - run rounds until the game ends
//! - Level 2: play_round(), select_duelers(), eliminate_dueler()
//! - Level 3: district entry/elimination, competitor return
//! - Level 4: reports and queries

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::district::District;
use crate::duel::{DuelRule, EffectivenessDuel, Victor};
use crate::person::{DistrictId, Person};
use crate::rng::{RandomSource, SeededRandom};
use crate::selection::{self, Candidate, DuelPair, Selection};
use crate::setup::{self, SetupError};
use crate::tree::{DistrictTree, TreeNode};

// ============================================================================
// REPORTS (Level 4)
// ============================================================================

/// What happened to a duel pair
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// Both participants fought; the loser is out of the game
    Duel {
        victor: Victor,
        winner: Person,
        loser: Person,
        /// Loser's district, if the loss exhausted it, with the members it
        /// still held when it left the tree
        eliminated: Option<District>,
    },
    /// Only one participant was found; they went back to their district
    Unpaired { returned: Person },
    /// Nobody was selected
    Empty,
}

impl Resolution {
    pub fn is_duel(&self) -> bool {
        matches!(self, Resolution::Duel { .. })
    }

    /// Competitors that left the game: the loser plus anyone still in an
    /// eliminated district
    pub fn removed_competitors(&self) -> usize {
        match self {
            Resolution::Duel { eliminated, .. } => {
                1 + eliminated.as_ref().map_or(0, District::size)
            }
            _ => 0,
        }
    }
}

/// Outcome of a single round
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundReport {
    /// Duels fought so far, counting this round's duel if there was one
    pub round: usize,
    pub resolution: Resolution,
}

/// Outcome of a full game
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSummary {
    /// Rounds in which a duel took place
    pub rounds: usize,
    /// Districts in order of elimination
    pub eliminated: Vec<DistrictId>,
    /// Districts still in the tree, ascending
    pub survivors: Vec<DistrictId>,
    /// Competitors left across surviving districts
    pub remaining_competitors: usize,
    /// Stopped by the round cap rather than by the game ending
    pub capped: bool,
}

impl GameSummary {
    /// The last district standing, if exactly one survived
    pub fn winner(&self) -> Option<DistrictId> {
        match self.survivors.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// ============================================================================
// ENGINE
// ============================================================================

/// The games: districts waiting to enter, districts in play, and the
/// collaborators that drive the duels.
pub struct HungerGames<R: RandomSource = SeededRandom> {
    districts: Vec<District>,
    game: DistrictTree,
    rng: R,
    duel_rule: Box<dyn DuelRule>,
    config: GameConfig,
    rounds: usize,
    eliminated: Vec<DistrictId>,
}

impl HungerGames<SeededRandom> {
    /// Empty game with the default seed
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Empty game seeded from `config`
    pub fn with_config(config: GameConfig) -> Self {
        let rng = SeededRandom::new(config.seed);
        Self::with_random_source(rng, config)
    }

    /// Game whose waiting list holds `districts`
    pub fn from_districts(districts: Vec<District>, config: GameConfig) -> Self {
        let mut games = Self::with_config(config);
        games.districts = districts;
        games
    }

    /// Game whose waiting list is read from an input file
    pub fn setup_panem(path: impl AsRef<Path>, config: GameConfig) -> Result<Self, SetupError> {
        let districts = setup::load_panem(path)?;
        Ok(Self::from_districts(districts, config))
    }
}

impl Default for HungerGames<SeededRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> HungerGames<R> {
    /// Empty game drawing from a caller-supplied random source
    pub fn with_random_source(rng: R, config: GameConfig) -> Self {
        Self {
            districts: Vec::new(),
            game: DistrictTree::new(),
            rng,
            duel_rule: Box::new(EffectivenessDuel),
            config,
            rounds: 0,
            eliminated: Vec::new(),
        }
    }

    /// Replace the duel rule
    pub fn with_duel_rule(mut self, rule: impl DuelRule + 'static) -> Self {
        self.duel_rule = Box::new(rule);
        self
    }

    /// Append districts to the waiting list
    pub fn load_districts(&mut self, districts: impl IntoIterator<Item = District>) {
        self.districts.extend(districts);
    }

    // ========================================================================
    // QUERIES (Level 4)
    // ========================================================================

    /// Districts that have not entered the game yet
    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    /// Root of the district tree
    pub fn root(&self) -> Option<&TreeNode> {
        self.game.root()
    }

    pub fn tree(&self) -> &DistrictTree {
        &self.game
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Look up a district in the game
    pub fn find_district(&self, id: DistrictId) -> Option<&District> {
        self.game.find(id)
    }

    /// Competitors across all districts in the game
    pub fn competitor_count(&self) -> usize {
        self.game.competitor_count()
    }

    /// Districts eliminated so far, in order
    pub fn eliminated(&self) -> &[DistrictId] {
        &self.eliminated
    }

    // ========================================================================
    // LEVEL 3 - DISTRICT ENTRY AND ELIMINATION
    // ========================================================================

    /// Move the first waiting district with this id into the game.
    ///
    /// The district leaves the waiting list even if a district with the same
    /// id is already in play or one of its populations is empty; in that case
    /// it is discarded and `false` is returned. Returns `false` as well when no waiting district has this id.
    pub fn add_district(&mut self, id: DistrictId) -> bool {
        let Some(position) = self.districts.iter().position(|d| d.district_id() == id) else {
            return false;
        };
        let district = self.districts.remove(position);
        self.add_district_to_game(district)
    }

    /// Insert a district directly into the tree.
    ///
    /// A district missing either population cannot duel and is discarded.
    pub fn add_district_to_game(&mut self, district: District) -> bool {
        let id = district.district_id();
        if district.is_exhausted() {
            tracing::warn!(
                "District {} lacks an odd or even population; entry ignored",
                id
            );
            return false;
        }
        let inserted = self.game.insert(district);
        if inserted {
            tracing::debug!("District {} entered the game", id);
        } else {
            tracing::warn!("District {} is already in the game; entry ignored", id);
        }
        inserted
    }

    /// Move the next waiting district into the game
    pub fn enter_next(&mut self) -> Option<DistrictId> {
        if self.districts.is_empty() {
            return None;
        }
        let district = self.districts.remove(0);
        let id = district.district_id();
        self.add_district_to_game(district);
        Some(id)
    }

    /// Move every waiting district into the game, in waiting-list order
    pub fn enter_all(&mut self) {
        while self.enter_next().is_some() {}
    }

    /// Remove a district from the game. Missing ids are ignored.
    ///
    /// Populations are not inspected; callers decide when a district is out.
    pub fn eliminate_district(&mut self, id: DistrictId) -> Option<District> {
        let removed = self.game.remove(id);
        if removed.is_some() {
            tracing::info!("District {} eliminated", id);
            self.eliminated.push(id);
        }
        removed
    }

    // ========================================================================
    // LEVEL 2 - SELECTION AND RESOLUTION
    // ========================================================================

    /// Select the next pair of duelers.
    ///
    /// Selected competitors are removed from their populations until
    /// [`eliminate_dueler`](Self::eliminate_dueler) returns them.
    pub fn select_duelers(&mut self) -> DuelPair {
        let Selection { odd, even } = selection::choose(&self.game, &mut self.rng);
        let pair = DuelPair::new(
            odd.and_then(|c| self.reserve(c)),
            even.and_then(|c| self.reserve(c)),
        );
        tracing::debug!(
            "Selected {} vs {}",
            describe(pair.person1.as_ref()),
            describe(pair.person2.as_ref())
        );
        pair
    }

    /// Resolve a duel pair.
    ///
    /// With both participants present the winner returns to its district and
    /// the loser is dropped; the loser's district is eliminated if either of
    /// its populations is now empty. A lone participant simply returns home.
    pub fn eliminate_dueler(&mut self, pair: DuelPair) -> Resolution {
        match (pair.person1, pair.person2) {
            (Some(person1), Some(person2)) => self.resolve_duel(person1, person2),
            (Some(person), None) | (None, Some(person)) => {
                self.return_to_district(person.clone());
                Resolution::Unpaired { returned: person }
            }
            (None, None) => Resolution::Empty,
        }
    }

    /// Select and resolve one round
    pub fn play_round(&mut self) -> RoundReport {
        let pair = self.select_duelers();
        let resolution = self.eliminate_dueler(pair);
        if resolution.is_duel() {
            self.rounds += 1;
        }
        RoundReport {
            round: self.rounds,
            resolution,
        }
    }

    // ========================================================================
    // LEVEL 1 - ORCHESTRATION
    // ========================================================================

    /// Play rounds until no complete pair can be formed or the round cap is hit
    pub fn play(&mut self) -> GameSummary {
        let mut capped = false;
        loop {
            if self.config.max_rounds.is_some_and(|max| self.rounds >= max) {
                capped = true;
                break;
            }
            if !self.play_round().resolution.is_duel() {
                break;
            }
        }

        let summary = self.summary(capped);
        match summary.winner() {
            Some(id) => tracing::info!("District {} wins after {} rounds", id, summary.rounds),
            None => tracing::info!(
                "Game stopped after {} rounds with {} districts left",
                summary.rounds,
                summary.survivors.len()
            ),
        }
        summary
    }

    /// Snapshot of the game so far
    pub fn summary(&self, capped: bool) -> GameSummary {
        GameSummary {
            rounds: self.rounds,
            eliminated: self.eliminated.clone(),
            survivors: self.game.ids_in_order(),
            remaining_competitors: self.competitor_count(),
            capped,
        }
    }

    // ========================================================================
    // LEVEL 3 - STEPS
    // ========================================================================

    fn resolve_duel(&mut self, person1: Person, person2: Person) -> Resolution {
        let victor = self.duel_rule.duel(&person1, &person2, &mut self.rng);
        let (winner, loser) = match victor {
            Victor::First => (person1, person2),
            Victor::Second => (person2, person1),
        };
        tracing::debug!("{} defeated {}", winner.full_name(), loser.full_name());

        self.return_to_district(winner.clone());

        let loser_district = loser.district_id();
        let exhausted = self
            .game
            .find(loser_district)
            .is_some_and(District::is_exhausted);
        let eliminated = if exhausted {
            self.eliminate_district(loser_district)
        } else {
            None
        };

        Resolution::Duel {
            victor,
            winner,
            loser,
            eliminated,
        }
    }

    fn return_to_district(&mut self, person: Person) {
        match self.game.find_mut(person.district_id()) {
            Some(district) => district.add_person(person),
            None => tracing::warn!(
                "District {} left the game; {} cannot return",
                person.district_id(),
                person.full_name()
            ),
        }
    }

    fn reserve(&mut self, candidate: Candidate) -> Option<Person> {
        self.game
            .find_mut(candidate.district_id)?
            .take_person(candidate.parity, candidate.index)
    }
}

impl<R: RandomSource + Clone> HungerGames<R> {
    /// The pair [`select_duelers`](Self::select_duelers) would return next,
    /// without reserving anyone or advancing the random source.
    pub fn peek_duelers(&self) -> DuelPair {
        let mut rng = self.rng.clone();
        let Selection { odd, even } = selection::choose(&self.game, &mut rng);
        DuelPair::new(self.lookup(odd), self.lookup(even))
    }

    fn lookup(&self, candidate: Option<Candidate>) -> Option<Person> {
        let candidate = candidate?;
        self.game
            .find(candidate.district_id)?
            .population(candidate.parity)
            .get(candidate.index)
            .cloned()
    }
}

fn describe(person: Option<&Person>) -> String {
    person.map_or_else(|| "nobody".to_string(), Person::full_name)
}
