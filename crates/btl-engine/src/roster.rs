//! Suspect pool and roster selection.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Minimum suspects in an encounter.
pub const MIN_SUSPECTS: usize = 3;
/// Maximum suspects in an encounter.
pub const MAX_SUSPECTS: usize = 5;

/// The full cast of suspects a roster is drawn from.
pub const CHARACTERS: [&str; 9] = [
    "Bystander",
    "Lawyer",
    "Delivery Man",
    "Doctor",
    "Old Man",
    "Bartender",
    "Electrician",
    "Taxi Driver",
    "Tutor",
];

/// Draw an active roster from a character pool.
///
/// Shuffles a copy of the pool and takes `count`, clamped to 3-5 and to the
/// pool size. The returned order is the display order (left to right) and
/// stays fixed for the whole session; nothing here mutates the pool.
pub fn choose_roster(pool: &[&str], count: usize, rng: &mut StdRng) -> Vec<String> {
    let mut shuffled: Vec<&str> = pool.to_vec();
    shuffled.shuffle(rng);
    let take = count.clamp(MIN_SUSPECTS, MAX_SUSPECTS).min(shuffled.len());
    shuffled[..take].iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn roster_has_requested_size() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(choose_roster(&CHARACTERS, 3, &mut rng).len(), 3);
        assert_eq!(choose_roster(&CHARACTERS, 5, &mut rng).len(), 5);
    }

    #[test]
    fn roster_size_is_clamped() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(choose_roster(&CHARACTERS, 0, &mut rng).len(), 3);
        assert_eq!(choose_roster(&CHARACTERS, 99, &mut rng).len(), 5);
    }

    #[test]
    fn roster_clamped_to_pool_size() {
        let mut rng = StdRng::seed_from_u64(1);
        let pool = ["Amy", "Bob", "Cid", "Dot"];
        assert_eq!(choose_roster(&pool, 5, &mut rng).len(), 4);
    }

    #[test]
    fn roster_members_are_distinct_and_from_pool() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            let roster = choose_roster(&CHARACTERS, 5, &mut rng);
            for (i, name) in roster.iter().enumerate() {
                assert!(CHARACTERS.contains(&name.as_str()));
                assert!(!roster[i + 1..].contains(name), "duplicate {name}");
            }
        }
    }

    #[test]
    fn pool_is_not_mutated() {
        let mut rng = StdRng::seed_from_u64(3);
        let pool = ["Amy", "Bob", "Cid"];
        let before = pool;
        let _ = choose_roster(&pool, 3, &mut rng);
        assert_eq!(pool, before);
    }
}
