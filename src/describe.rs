//! Human-readable hand names and comparison rationales.
//!
//! The comparison text walks the same ordered checks the score packs
//! (category, then each sorted rank position), so the sentence and the
//! numeric order cannot disagree.

use crate::evaluator::{Category, Evaluation};

/// Display name for a classified hand, e.g. "Trail of Aces" or
/// "Pair of Queens".
///
/// For a pair the name uses the paired rank, which is not always the top
/// card: A-Q-Q names as "Pair of Queens".
pub fn hand_name(eval: &Evaluation) -> String {
    let ranks = eval.ranks();
    let top = ranks[0];
    match eval.category {
        Category::Trail => format!("Trail of {}", top.plural()),
        Category::PureSequence => format!("{}-High Pure Sequence", top.name()),
        Category::Sequence => format!("{}-High Sequence", top.name()),
        Category::Color => format!("{}-High Color", top.name()),
        Category::Pair => {
            let pair_rank = if ranks[0] == ranks[1] { ranks[0] } else { ranks[1] };
            format!("Pair of {}", pair_rank.plural())
        }
        _ => format!("{} High Card", top.name()),
    }
}

/// A natural-language justification for how `a` compares against `b`.
///
/// Decides in the same order the score does: category first, then the sorted
/// rank triples position by position, most significant first. Identical hands
/// are reported as equal.
///
/// ```
/// use teenpatti_rs::describe::explain_comparison;
/// use teenpatti_rs::evaluator::evaluate;
///
/// let trail = evaluate(&"As Ah Ad".parse().unwrap());
/// let seq = evaluate(&"Kh Qd Js".parse().unwrap());
/// assert_eq!(
///     explain_comparison(&trail, &seq),
///     "their Trail of Aces outranks a King-High Sequence",
/// );
/// ```
pub fn explain_comparison(a: &Evaluation, b: &Evaluation) -> String {
    let a_name = hand_name(a);
    let b_name = hand_name(b);

    if a.category > b.category {
        return format!("their {a_name} outranks a {b_name}");
    }
    if a.category < b.category {
        return format!("their {a_name} is outranked by a {b_name}");
    }

    // Same category, tie-break on the sorted rank triples
    let va = a.ranks();
    let vb = b.ranks();

    if va[0] > vb[0] {
        return format!("their {a_name} has a higher top card than the {b_name}");
    }
    if va[0] < vb[0] {
        return format!("their {a_name} has a lower top card than the {b_name}");
    }

    if va[1] > vb[1] {
        return format!("their {a_name} has a higher second card");
    }
    if va[1] < vb[1] {
        return format!("their {a_name} has a lower second card");
    }

    if va[2] > vb[2] {
        return format!("their {a_name} has a higher third card");
    }
    if va[2] < vb[2] {
        return format!("their {a_name} has a lower third card");
    }

    "both hands are identical in rank".to_string()
}
