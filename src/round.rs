//! Multi-player round ranking.
//!
//! A round collects one three-card hand per player, ranks them by score and
//! explains why the winner beat the runner-up.

use crate::describe::{explain_comparison, hand_name};
use crate::evaluator::{evaluate, Evaluation};
use crate::hand::Hand;

/// One player's place in a round, after ranking.
#[derive(Debug, Clone, Copy)]
pub struct Standing {
    /// 1-based player number, in hand-entry order.
    pub player: usize,
    pub eval: Evaluation,
}

/// Rank the given hands strongest first. Ties keep entry order, so the
/// earlier player lists ahead of a later player with an identical score.
pub fn rank_hands(hands: &[Hand]) -> Vec<Standing> {
    let mut standings: Vec<Standing> = hands
        .iter()
        .enumerate()
        .map(|(i, hand)| Standing { player: i + 1, eval: evaluate(hand) })
        .collect();
    standings.sort_by(|a, b| b.eval.cmp(&a.eval));
    standings
}

/// Sentence explaining the round's outcome, comparing the winner against the
/// runner-up. `None` when fewer than two standings exist.
///
/// ```
/// use teenpatti_rs::round::{rank_hands, verdict};
///
/// let hands = vec![
///     "Kh Qd Js".parse().unwrap(),
///     "As Ah Ad".parse().unwrap(),
/// ];
/// let standings = rank_hands(&hands);
/// assert_eq!(
///     verdict(&standings).unwrap(),
///     "Player 2's Trail of Aces wins because their Trail of Aces outranks \
///      a King-High Sequence compared to Player 1.",
/// );
/// ```
pub fn verdict(standings: &[Standing]) -> Option<String> {
    let winner = standings.first()?;
    let runner_up = standings.get(1)?;
    Some(format!(
        "Player {}'s {} wins because {} compared to Player {}.",
        winner.player,
        hand_name(&winner.eval),
        explain_comparison(&winner.eval, &runner_up.eval),
        runner_up.player,
    ))
}
