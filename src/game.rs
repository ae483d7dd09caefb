use rand::Rng;
use std::fmt::Display;

pub const WHITE_DICE: usize = 5;

/// One round of the dice game: two black dice read as a two-digit target and
/// five white dice to combine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roll {
    pub target: i64,
    pub numbers: Vec<i64>,
}

impl Roll {
    pub fn random(rng: &mut impl Rng) -> Self {
        let mut die = || rng.random_range(1..=6i64);
        let target = die() * 10 + die();
        let numbers = (0..WHITE_DICE).map(|_| die()).collect();
        Self { target, numbers }
    }
}

impl Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [ ", self.target)?;
        for number in &self.numbers {
            write!(f, "{number} ")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::{Roll, WHITE_DICE};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn dice_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let roll = Roll::random(&mut rng);
            assert!((11..=66).contains(&roll.target));
            assert!((1..=6).contains(&(roll.target % 10)));
            assert_eq!(roll.numbers.len(), WHITE_DICE);
            assert!(roll.numbers.iter().all(|n| (1..=6).contains(n)));
        }
    }

    #[test]
    fn seeded_rolls_repeat() {
        let a = Roll::random(&mut StdRng::seed_from_u64(42));
        let b = Roll::random(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn display() {
        let roll = Roll {
            target: 31,
            numbers: vec![1, 2, 3, 4, 5],
        };
        assert_eq!(roll.to_string(), "31 [ 1 2 3 4 5 ]");
    }
}
