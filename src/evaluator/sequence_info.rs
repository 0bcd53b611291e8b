use crate::cards::Rank;

/// Information about whether a hand's ranks are strictly consecutive and the
/// top rank of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceInfo {
    pub is_sequence: bool,
    pub top_rank: Option<Rank>,
}

impl SequenceInfo {
    /// Detect a run of 3 consecutive ranks. There is no Ace-low or wraparound
    /// form in this variant, so with four ranks the only runs are A-K-Q and
    /// K-Q-J.
    pub fn detect(ranks: &[Rank; 3]) -> Self {
        // Sort ranks descending
        let mut sorted_ranks = *ranks;
        sorted_ranks.sort_by(|a, b| b.cmp(a));

        let is_consecutive =
            (0..2).all(|i| sorted_ranks[i].value() == sorted_ranks[i + 1].value() + 1);

        if is_consecutive {
            SequenceInfo { is_sequence: true, top_rank: Some(sorted_ranks[0]) }
        } else {
            SequenceInfo { is_sequence: false, top_rank: None }
        }
    }
}
