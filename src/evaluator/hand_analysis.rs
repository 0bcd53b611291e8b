use super::rank_groups::RankGroups;
use super::sequence_info::SequenceInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};
use crate::evaluator::{Category, Evaluation, HandScore};

/// Pre-computed analysis of a 3-card hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub sorted_cards: [Card; 3],
    pub ranks: [Rank; 3],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub sequence_info: SequenceInfo,
}

impl HandAnalysis {
    /// Analyze a 3-card hand, computing all properties needed for classification.
    pub fn new(cards: &[Card; 3]) -> Self {
        // Sort cards by rank descending, then by suit descending
        let mut sorted_cards = *cards;
        sorted_cards.sort_by(|a, b| b.rank().cmp(&a.rank()).then(b.suit().cmp(&a.suit())));

        let ranks = [sorted_cards[0].rank(), sorted_cards[1].rank(), sorted_cards[2].rank()];

        let rank_groups = RankGroups::from_ranks(&ranks);
        let suit_info = SuitInfo::detect(&sorted_cards);
        let sequence_info = SequenceInfo::detect(&ranks);

        Self { sorted_cards, ranks, rank_groups, suit_info, sequence_info }
    }

    /// Build an Evaluation for a category. The tie-break key is always the
    /// sorted rank triple, whatever the category.
    pub fn build_evaluation(&self, category: Category) -> Evaluation {
        let score = HandScore::from_parts(category, &self.ranks);
        Evaluation { category, cards: self.sorted_cards, score }
    }
}
