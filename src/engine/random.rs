use rand::Rng;
use rand_pcg::Pcg64;
use rand_seeder::Seeder;

/*
    A source of uniformly distributed integers, injected into the battle so rounds can be replayed
 */
pub trait RandomSource {
    /// Returns an integer in `min..=max`.
    fn next_int(&mut self, min: u32, max: u32) -> u32;
}

pub struct SeededRandom {
    rng: Pcg64
}

impl SeededRandom {
    pub fn new(seed: String) -> SeededRandom {
        let rng : Pcg64 = Seeder::from(seed).into_rng();
        SeededRandom { rng }
    }
}

impl RandomSource for SeededRandom {
    fn next_int(&mut self, min: u32, max: u32) -> u32 {
        self.rng.random_range(min..=max)
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::random::{RandomSource, SeededRandom};

    #[test]
    fn test_next_int_inclusive_bounds() {
        let mut random = SeededRandom::new(String::from("test"));
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..2000 {
            let value = random.next_int(1, 3);
            assert!((1..=3).contains(&value));
            seen_min |= value == 1;
            seen_max |= value == 3;
        }
        assert!(seen_min && seen_max, "Both bounds should be reachable");
    }

    #[test]
    fn test_next_int_single_value() {
        let mut random = SeededRandom::new(String::from("test"));
        assert_eq!(7, random.next_int(7, 7));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut first = SeededRandom::new(String::from("abc123"));
        let mut second = SeededRandom::new(String::from("abc123"));
        let first_values : Vec<u32> = (0..20).map(|_| first.next_int(80, 120)).collect();
        let second_values : Vec<u32> = (0..20).map(|_| second.next_int(80, 120)).collect();
        assert_eq!(first_values, second_values);
    }
}
