// Confirmed vs provisional skin selection

/// Which skin is active and which one the menu cursor is on.
///
/// `confirmed` only moves on an explicit confirm; `provisional` follows the
/// cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    confirmed: usize,
    provisional: usize,
}

impl SelectionState {
    /// Start with the cursor on the confirmed skin
    pub fn new(confirmed: usize) -> Self {
        Self {
            confirmed,
            provisional: confirmed,
        }
    }

    pub fn confirmed(&self) -> usize {
        self.confirmed
    }

    pub fn provisional(&self) -> usize {
        self.provisional
    }

    /// Move the cursor. Returns true if it actually moved.
    pub fn set_provisional(&mut self, index: usize) -> bool {
        let changed = self.provisional != index;
        self.provisional = index;
        changed
    }

    /// Commit the cursor position
    pub fn confirm(&mut self) -> usize {
        self.confirmed = self.provisional;
        self.confirmed
    }

    /// Put the cursor back on the confirmed skin. Returns true if it moved.
    pub fn revert(&mut self) -> bool {
        self.set_provisional(self.confirmed)
    }

    /// Fall back to the first built-in skin
    pub fn reset(&mut self) {
        self.confirmed = 0;
        self.provisional = 0;
    }
}
