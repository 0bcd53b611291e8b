use crate::cards::Card;
use crate::evaluator::evaluate_three;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Trials used when the caller has no preference; balances estimator variance
/// against cost.
pub const DEFAULT_TRIALS: u32 = 1_000;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EstimateError {
    #[error("remaining shoe has {0} cards, at least 3 are needed to deal an opponent")]
    InsufficientShoe(usize),
    #[error("trial count must be positive")]
    ZeroTrials,
}

/// Estimate the probability, in percent, that `my_hand` beats one opponent
/// hand drawn at random from `remaining_shoe`.
///
/// Each trial samples 3 cards without replacement from the remaining shoe
/// (a partial Fisher-Yates shuffle; draws across trials are independent),
/// classifies them, and credits a win as 1, a score tie as 0.5 and a loss
/// as 0. The result is `wins / trials * 100`, always within [0, 100].
///
/// The caller's slice is never mutated; sampling works on an internal copy.
/// The estimate converges to the true win probability as `trials` grows; for
/// run-to-run reproducibility use [`estimate_win_chance_seeded`] or pass a
/// seeded RNG.
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use teenpatti_rs::estimator::{estimate_win_chance, DEFAULT_TRIALS};
/// use teenpatti_rs::shoe::Shoe;
///
/// let mut shoe = Shoe::default();
/// shoe.shuffle_seeded(11);
/// let dealt = shoe.draw_n(3);
/// let my_hand = [dealt[0].card(), dealt[1].card(), dealt[2].card()];
///
/// let mut rng = ChaCha8Rng::seed_from_u64(0);
/// let chance =
///     estimate_win_chance(&my_hand, &shoe.faces(), DEFAULT_TRIALS, &mut rng).unwrap();
/// assert!((0.0..=100.0).contains(&chance));
/// ```
pub fn estimate_win_chance<R: Rng + ?Sized>(
    my_hand: &[Card; 3],
    remaining_shoe: &[Card],
    trials: u32,
    rng: &mut R,
) -> Result<f64, EstimateError> {
    if remaining_shoe.len() < 3 {
        return Err(EstimateError::InsufficientShoe(remaining_shoe.len()));
    }
    if trials == 0 {
        return Err(EstimateError::ZeroTrials);
    }

    let my_score = evaluate_three(my_hand).score();

    // Scratch copy so the caller's shoe is never reordered
    let mut pool: Vec<Card> = remaining_shoe.to_vec();
    let mut wins = 0.0f64;

    for _ in 0..trials {
        let (drawn, _) = pool.partial_shuffle(rng, 3);
        let opponent = [drawn[0], drawn[1], drawn[2]];
        let opponent_score = evaluate_three(&opponent).score();

        if my_score > opponent_score {
            wins += 1.0;
        } else if my_score == opponent_score {
            wins += 0.5; // Split
        }
    }

    Ok(wins / trials as f64 * 100.0)
}

/// [`estimate_win_chance`] on a seeded RNG for reproducible results.
pub fn estimate_win_chance_seeded(
    my_hand: &[Card; 3],
    remaining_shoe: &[Card],
    trials: u32,
    seed: u64,
) -> Result<f64, EstimateError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    estimate_win_chance(my_hand, remaining_shoe, trials, &mut rng)
}
