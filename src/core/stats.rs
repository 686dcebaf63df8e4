//! Per-process game statistics

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl Statistics {
    pub fn record(&mut self, won: bool) {
        self.total_games += 1;
        if won {
            self.games_won += 1;
        }
    }

    /// Percentage of games won, 0 before the first game
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stats_have_zero_win_rate() {
        assert!(Statistics::default().win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn record_counts_games_and_wins() {
        let mut stats = Statistics::default();
        stats.record(true);
        stats.record(false);
        stats.record(true);
        stats.record(true);
        assert_eq!(stats.total_games, 4);
        assert_eq!(stats.games_won, 3);
        assert!((stats.win_rate() - 75.0).abs() < f64::EPSILON);
    }
}
