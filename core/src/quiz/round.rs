//! One question: a target and three distractors.

use hashbrown::HashSet;
use rand::Rng;
use rand::seq::SliceRandom;

use super::error::QuizError;

/// Answer buttons per round.
pub const OPTION_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizRound {
    pub round_id: u64,
    pub target_id: u32,
    /// Distinct IDs, exactly one of which is `target_id`.
    pub option_ids: [u32; OPTION_COUNT],
    pub answered_id: Option<u32>,
}

impl QuizRound {
    pub fn is_answered(&self) -> bool {
        self.answered_id.is_some()
    }

    /// `None` until answered.
    pub fn is_correct(&self) -> Option<bool> {
        self.answered_id.map(|id| id == self.target_id)
    }

    pub fn has_option(&self, id: u32) -> bool {
        self.option_ids.contains(&id)
    }
}

/// Build a round from a list of IDs.
///
/// The target is uniform over `ids`; distractors are drawn uniformly by rejection
/// sampling and the four options are shuffled (Fisher–Yates). Fewer than
/// [`OPTION_COUNT`] distinct IDs is an error, so the sampling loop always terminates.
pub fn generate_round<R: Rng + ?Sized>(
    ids: &[u32],
    round_id: u64,
    rng: &mut R,
) -> Result<QuizRound, QuizError> {
    let distinct = ids.iter().collect::<HashSet<_>>().len();
    if distinct < OPTION_COUNT {
        return Err(QuizError::RosterTooSmall { len: distinct });
    }

    let target_id = ids[rng.random_range(0..ids.len())];

    let mut options = [target_id; OPTION_COUNT];
    let mut filled = 1;
    while filled < OPTION_COUNT {
        let candidate = ids[rng.random_range(0..ids.len())];
        if !options[..filled].contains(&candidate) {
            options[filled] = candidate;
            filled += 1;
        }
    }
    options.shuffle(rng);

    Ok(QuizRound {
        round_id,
        target_id,
        option_ids: options,
        answered_id: None,
    })
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn options_are_distinct_and_contain_target_once() {
        let ids: Vec<u32> = (1..=151).collect();
        let mut rng = StdRng::seed_from_u64(7);

        for round_id in 0..500 {
            let round = generate_round(&ids, round_id, &mut rng).unwrap();
            let mut sorted = round.option_ids.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), OPTION_COUNT);
            assert_eq!(
                round.option_ids.iter().filter(|&&id| id == round.target_id).count(),
                1
            );
            assert!(round.option_ids.iter().all(|id| ids.contains(id)));
            assert!(!round.is_answered());
        }
    }

    #[test]
    fn exactly_four_ids_uses_all_of_them() {
        let ids = [10, 20, 30, 40];
        let mut rng = StdRng::seed_from_u64(1);
        let round = generate_round(&ids, 0, &mut rng).unwrap();
        let mut sorted = round.option_ids;
        sorted.sort_unstable();
        assert_eq!(sorted, ids);
    }

    #[test]
    fn too_few_ids_fail_fast() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            generate_round(&[1, 2, 3], 0, &mut rng),
            Err(QuizError::RosterTooSmall { len: 3 })
        );
        assert_eq!(
            generate_round(&[], 0, &mut rng),
            Err(QuizError::RosterTooSmall { len: 0 })
        );
        // Duplicates do not count twice
        assert_eq!(
            generate_round(&[5, 5, 6, 6, 7], 0, &mut rng),
            Err(QuizError::RosterTooSmall { len: 3 })
        );
    }

    #[test]
    fn target_position_varies() {
        let ids: Vec<u32> = (1..=20).collect();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; OPTION_COUNT];
        for round_id in 0..200 {
            let round = generate_round(&ids, round_id, &mut rng).unwrap();
            if let Some(pos) = round.option_ids.iter().position(|&id| id == round.target_id) {
                seen[pos] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }
}
