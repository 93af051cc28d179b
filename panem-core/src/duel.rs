//! Duel rules - decide which of two competitors survives

use serde::{Deserialize, Serialize};

use crate::person::Person;
use crate::rng::RandomSource;

/// Sides of the random roll added to each competitor's effectiveness
pub const ROLL_SIDES: usize = 10;

/// Which participant won a duel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Victor {
    First,
    Second,
}

/// Decides the winner of a duel between two competitors
pub trait DuelRule {
    fn duel(&self, first: &Person, second: &Person, rng: &mut dyn RandomSource) -> Victor;
}

impl<F> DuelRule for F
where
    F: Fn(&Person, &Person, &mut dyn RandomSource) -> Victor,
{
    fn duel(&self, first: &Person, second: &Person, rng: &mut dyn RandomSource) -> Victor {
        self(first, second, rng)
    }
}

/// Each side rolls `uniform(10) + effectiveness`; higher total wins, ties go to `first`
#[derive(Clone, Copy, Debug, Default)]
pub struct EffectivenessDuel;

impl DuelRule for EffectivenessDuel {
    fn duel(&self, first: &Person, second: &Person, rng: &mut dyn RandomSource) -> Victor {
        let first_total = rng.uniform(ROLL_SIDES) as i64 + first.effectiveness() as i64;
        let second_total = rng.uniform(ROLL_SIDES) as i64 + second.effectiveness() as i64;
        if second_total > first_total {
            Victor::Second
        } else {
            Victor::First
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SeededRandom;

    #[test]
    fn test_dominant_effectiveness_always_wins() {
        let strong = Person::new(1, "s", "s", 20, 1, 100);
        let weak = Person::new(2, "w", "w", 20, 2, 0);
        let mut rng = SeededRandom::new(1);
        for _ in 0..50 {
            assert_eq!(EffectivenessDuel.duel(&strong, &weak, &mut rng), Victor::First);
            assert_eq!(EffectivenessDuel.duel(&weak, &strong, &mut rng), Victor::Second);
        }
    }

    #[test]
    fn test_closure_rule() {
        let always_second = |_: &Person, _: &Person, _: &mut dyn RandomSource| Victor::Second;
        let a = Person::new(1, "a", "a", 20, 1, 5);
        let b = Person::new(2, "b", "b", 20, 2, 5);
        let mut rng = SeededRandom::default();
        assert_eq!(always_second.duel(&a, &b, &mut rng), Victor::Second);
    }
}
