//! Win/loss statistics across the rounds of one process run

use crate::core::MAX_GUESSES;

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Won using this many guesses (1-6)
    Won(usize),
    Lost,
}

/// Wins bucketed by guess count, plus total losses
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    wins: [usize; MAX_GUESSES],
    losses: usize,
}

impl Statistics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one finished round
    ///
    /// # Panics
    /// Panics in debug mode if a win reports a guess count outside 1-6
    pub fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::Won(guesses) => {
                debug_assert!(
                    (1..=MAX_GUESSES).contains(&guesses),
                    "win recorded with {guesses} guesses"
                );
                if let Some(bucket) = guesses.checked_sub(1).and_then(|i| self.wins.get_mut(i)) {
                    *bucket += 1;
                }
            }
            RoundOutcome::Lost => self.losses += 1,
        }
    }

    /// Rounds won in exactly `guesses` guesses
    #[must_use]
    pub fn wins_in(&self, guesses: usize) -> usize {
        guesses
            .checked_sub(1)
            .and_then(|i| self.wins.get(i))
            .copied()
            .unwrap_or(0)
    }

    #[must_use]
    pub const fn losses(&self) -> usize {
        self.losses
    }

    #[must_use]
    pub fn games_won(&self) -> usize {
        self.wins.iter().sum()
    }

    #[must_use]
    pub fn games_played(&self) -> usize {
        self.games_won() + self.losses
    }

    /// Share of rounds won, as a percentage
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        match self.games_played() {
            0 => 0.0,
            played => self.games_won() as f64 / played as f64 * 100.0,
        }
    }

    /// Win counts for 1 through 6 guesses
    #[must_use]
    pub const fn distribution(&self) -> &[usize; MAX_GUESSES] {
        &self.wins
    }

    /// Plain-text summary, one line per guess count then the losses
    #[must_use]
    pub fn render(&self) -> String {
        let buckets: Vec<String> = self
            .wins
            .iter()
            .enumerate()
            .map(|(i, count)| format!("{} moves: {count}", i + 1))
            .collect();
        format!(
            "Games won in:\n{}\nGames lost: {}",
            buckets.join("\n"),
            self.losses
        )
    }
}
