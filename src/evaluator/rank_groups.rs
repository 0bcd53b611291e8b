use crate::cards::Rank;

/// Groups ranks by their frequency in a hand, sorted by (count desc, rank desc).
///
/// Example: AAK groups as [(Ace, 2), (King, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Create RankGroups from the hand's rank triple.
    pub fn from_ranks(ranks: &[Rank; 3]) -> Self {
        let mut groups: Vec<(Rank, u8)> = Vec::with_capacity(3);

        for rank in Rank::ALL.iter().copied() {
            let count = ranks.iter().filter(|&&r| r == rank).count() as u8;
            if count > 0 {
                groups.push((rank, count));
            }
        }

        // Sort by count (descending), then by rank (descending)
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    /// Returns the rank of a three-of-a-kind, if present.
    pub fn trips(&self) -> Option<Rank> {
        self.groups.iter().find(|(_, count)| *count == 3).map(|(rank, _)| *rank)
    }

    /// Returns the paired rank, if exactly two of the three ranks match.
    pub fn pair(&self) -> Option<Rank> {
        self.groups.iter().find(|(_, count)| *count == 2).map(|(rank, _)| *rank)
    }

    /// Returns all singleton (kicker) ranks, in descending order.
    pub fn kickers(&self) -> Vec<Rank> {
        self.groups.iter().filter(|(_, count)| *count == 1).map(|(rank, _)| *rank).collect()
    }
}
