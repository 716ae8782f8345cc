//! Game configuration options.

/// Chips a new session starts with.
pub const DEFAULT_STARTING_CHIPS: u32 = 1000;

/// Configuration options for a session.
///
/// The rules themselves are fixed; options only cover the session around them.
///
/// ```
/// use wulong::GameOptions;
///
/// let options = GameOptions::default().with_starting_chips(250);
/// assert_eq!(options.starting_chips, 250);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Chips the player holds when the session starts.
    pub starting_chips: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_chips: DEFAULT_STARTING_CHIPS,
        }
    }
}

impl GameOptions {
    /// Sets the starting chip balance.
    ///
    /// # Example
    ///
    /// ```
    /// use wulong::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_chips(5000);
    /// assert_eq!(options.starting_chips, 5000);
    /// ```
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: u32) -> Self {
        self.starting_chips = chips;
        self
    }
}
