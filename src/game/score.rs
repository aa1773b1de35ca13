/// The score for the current session
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct ScoreTracker {
    score: u32,
}

impl ScoreTracker {
    pub(crate) fn new() -> ScoreTracker {
        ScoreTracker::default()
    }

    /// Record one piece of food eaten
    pub(crate) fn increment(&mut self) {
        self.score = self.score.saturating_add(1);
    }

    pub(crate) fn current(&self) -> u32 {
        self.score
    }

    /// Return the high score to keep once this session is over, given the
    /// best score from previous sessions
    pub(crate) fn finalize_high_score(&self, persisted: u32) -> u32 {
        persisted.max(self.score)
    }

    pub(crate) fn reset(&mut self) {
        self.score = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn counts_increments() {
        let mut tracker = ScoreTracker::new();
        for _ in 0..7 {
            tracker.increment();
        }
        assert_eq!(tracker.current(), 7);
        tracker.reset();
        assert_eq!(tracker.current(), 0);
    }

    #[rstest]
    #[case(0, 0, 0)]
    #[case(3, 7, 7)]
    #[case(7, 2, 7)]
    #[case(5, 5, 5)]
    fn test_finalize(#[case] persisted: u32, #[case] score: u32, #[case] high: u32) {
        let mut tracker = ScoreTracker::new();
        for _ in 0..score {
            tracker.increment();
        }
        assert_eq!(tracker.finalize_high_score(persisted), high);
    }
}
