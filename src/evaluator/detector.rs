use super::hand_analysis::HandAnalysis;
use crate::evaluator::{Category, Evaluation};

/// Strategy pattern: each category detector knows how to detect and build its
/// evaluation.
pub trait CategoryDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool;
    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Trail: three cards of the same rank
pub struct TrailDetector;

impl CategoryDetector for TrailDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.trips().is_some()
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        analysis.build_evaluation(Category::Trail)
    }
}

/// Pure Sequence: three consecutive ranks, all same suit
pub struct PureSequenceDetector;

impl CategoryDetector for PureSequenceDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.sequence_info.is_sequence && analysis.suit_info.is_color
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        analysis.build_evaluation(Category::PureSequence)
    }
}

/// Sequence: three consecutive ranks, mixed suits
pub struct SequenceDetector;

impl CategoryDetector for SequenceDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.sequence_info.is_sequence
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        analysis.build_evaluation(Category::Sequence)
    }
}

/// Color: all three cards of the same suit (not consecutive, not a trail —
/// those match earlier detectors)
pub struct ColorDetector;

impl CategoryDetector for ColorDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_color
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        analysis.build_evaluation(Category::Color)
    }
}

/// Pair: exactly two of the three ranks equal
pub struct PairDetector;

impl CategoryDetector for PairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.pair().is_some()
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        analysis.build_evaluation(Category::Pair)
    }
}

/// High Card: none of the above patterns apply
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn detect(&self, _analysis: &HandAnalysis) -> bool {
        true // Always matches as fallback
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        analysis.build_evaluation(Category::HighCard)
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 6] = [
    &TrailDetector,
    &PureSequenceDetector,
    &SequenceDetector,
    &ColorDetector,
    &PairDetector,
    &HighCardDetector,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};

    #[test]
    fn test_trail_detector() {
        let cards = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Ace, Suit::Diamonds),
        ];
        let analysis = HandAnalysis::new(&cards);
        let detector = TrailDetector;

        assert!(detector.detect(&analysis));
        let eval = detector.build_evaluation(&analysis);
        assert_eq!(eval.category, Category::Trail);
    }

    #[test]
    fn test_pure_sequence_detector() {
        let cards = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Queen, Suit::Spades),
        ];
        let analysis = HandAnalysis::new(&cards);
        let detector = PureSequenceDetector;

        assert!(detector.detect(&analysis));
        let eval = detector.build_evaluation(&analysis);
        assert_eq!(eval.category, Category::PureSequence);
    }

    #[test]
    fn test_sequence_detector() {
        let cards = [
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::Queen, Suit::Diamonds),
            Card::new(Rank::Jack, Suit::Spades),
        ];
        let analysis = HandAnalysis::new(&cards);
        let detector = SequenceDetector;

        assert!(detector.detect(&analysis));
        let eval = detector.build_evaluation(&analysis);
        assert_eq!(eval.category, Category::Sequence);
    }

    #[test]
    fn test_color_detector() {
        let cards = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Queen, Suit::Spades),
            Card::new(Rank::Jack, Suit::Spades),
        ];
        let analysis = HandAnalysis::new(&cards);
        let detector = ColorDetector;

        assert!(detector.detect(&analysis));
        let eval = detector.build_evaluation(&analysis);
        assert_eq!(eval.category, Category::Color);
    }

    #[test]
    fn test_pair_detector() {
        let cards = [
            Card::new(Rank::Queen, Suit::Hearts),
            Card::new(Rank::Queen, Suit::Diamonds),
            Card::new(Rank::Jack, Suit::Hearts),
        ];
        let analysis = HandAnalysis::new(&cards);
        let detector = PairDetector;

        assert!(detector.detect(&analysis));
        let eval = detector.build_evaluation(&analysis);
        assert_eq!(eval.category, Category::Pair);
    }

    #[test]
    fn test_high_card_detector() {
        let cards = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Queen, Suit::Hearts),
            Card::new(Rank::Jack, Suit::Diamonds),
        ];
        let analysis = HandAnalysis::new(&cards);
        let detector = HighCardDetector;

        assert!(detector.detect(&analysis));
        let eval = detector.build_evaluation(&analysis);
        assert_eq!(eval.category, Category::HighCard);
    }

    #[test]
    fn test_detector_priority_pure_sequence_over_sequence_and_color() {
        let cards = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Queen, Suit::Spades),
        ];
        let analysis = HandAnalysis::new(&cards);

        // Sequence and color detectors also match, but pure sequence is first
        assert!(PureSequenceDetector.detect(&analysis));
        assert!(SequenceDetector.detect(&analysis));
        assert!(ColorDetector.detect(&analysis));
    }

    #[test]
    fn test_detector_priority_trail_over_color() {
        // Three copies of the same face from different decks are both a trail
        // and a color; trail is checked first.
        let cards = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Ace, Suit::Spades),
        ];
        let analysis = HandAnalysis::new(&cards);

        assert!(TrailDetector.detect(&analysis));
        assert!(ColorDetector.detect(&analysis));
    }
}
