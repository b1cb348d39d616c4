//! Round configuration options.

use crate::hand::BLACKJACK;

/// Configuration options for a round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use ppt_blackjack::GameOptions;
///
/// let options = GameOptions::default()
///     .with_dealer_stands_at(17)
///     .with_max_line_len(32);
/// assert_eq!(options.max_line_len, 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// The dealer draws while their total is below this value.
    pub dealer_stands_at: u8,
    /// Longest accepted input line, in bytes, excluding the line terminator.
    pub max_line_len: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_stands_at: 17,
            max_line_len: 64,
        }
    }
}

impl GameOptions {
    /// Creates new options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the total at which the dealer stops drawing.
    ///
    /// Values above 21 are clamped to 21.
    #[must_use]
    pub const fn with_dealer_stands_at(mut self, total: u8) -> Self {
        self.dealer_stands_at = if total > BLACKJACK { BLACKJACK } else { total };
        self
    }

    /// Sets the longest accepted input line.
    #[must_use]
    pub const fn with_max_line_len(mut self, len: usize) -> Self {
        self.max_line_len = len;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dealer_threshold_is_clamped_to_21() {
        assert_eq!(GameOptions::new().dealer_stands_at, 17);
        assert_eq!(GameOptions::new().with_dealer_stands_at(19).dealer_stands_at, 19);
        assert_eq!(GameOptions::new().with_dealer_stands_at(22).dealer_stands_at, 21);
        assert_eq!(GameOptions::new().with_dealer_stands_at(u8::MAX).dealer_stands_at, 21);
    }
}
