//! Rule-variant configuration, fixed for the lifetime of a game.
//!
//! `GameOptions` selects between the common Klondike house rules: draw
//! count, what may land on an empty tableau column, whether foundation
//! cards may come back down, how many times the stock may be recycled,
//! and how scoring behaves. Two values are derived from the options:
//!
//! - `score_multiplier`: harder variants score higher, easier ones lower.
//! - `config_key`: a canonical string identifying the rule set, used by
//!   the statistics collaborator to aggregate results per variant.

use serde::{Deserialize, Serialize};

/// How many cards a stock draw turns over at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawCount {
    #[default]
    One,
    Three,
}

impl DrawCount {
    /// The number of cards drawn.
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::One => 1,
            Self::Three => 3,
        }
    }

    /// Parse from a raw count. Only 1 and 3 are valid Klondike draws.
    #[must_use]
    pub fn from_count(count: usize) -> Option<Self> {
        match count {
            1 => Some(Self::One),
            3 => Some(Self::Three),
            _ => None,
        }
    }
}

/// Immutable rule variants for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOptions {
    /// Any card may be placed on an empty tableau column, not just Kings.
    pub allow_any_card_in_empty_tableau: bool,

    /// Cards turned per stock draw.
    pub draw_count: DrawCount,

    /// Permit moving a foundation's top card back to the tableau.
    pub allow_foundation_to_tableau: bool,

    /// Times the waste may be recycled into the stock. `None` = unlimited.
    pub max_stock_redeals: Option<u32>,

    /// When false, every score delta is zero.
    pub enable_scoring: bool,

    /// Reverse the waste order when recycling it into the stock.
    pub reverse_waste_on_recycle: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            allow_any_card_in_empty_tableau: false,
            draw_count: DrawCount::One,
            allow_foundation_to_tableau: false,
            max_stock_redeals: None,
            enable_scoring: true,
            reverse_waste_on_recycle: false,
        }
    }
}

impl GameOptions {
    /// Create the default rule set: draw one, Kings only on empty columns,
    /// no foundation-to-tableau, unlimited redeals, scoring on.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow any card on an empty tableau column.
    #[must_use]
    pub fn with_any_card_in_empty_tableau(mut self) -> Self {
        self.allow_any_card_in_empty_tableau = true;
        self
    }

    /// Set the draw count.
    #[must_use]
    pub fn with_draw_count(mut self, draw_count: DrawCount) -> Self {
        self.draw_count = draw_count;
        self
    }

    /// Allow foundation-to-tableau moves.
    #[must_use]
    pub fn with_foundation_to_tableau(mut self) -> Self {
        self.allow_foundation_to_tableau = true;
        self
    }

    /// Cap the number of stock redeals.
    #[must_use]
    pub fn with_max_stock_redeals(mut self, limit: u32) -> Self {
        self.max_stock_redeals = Some(limit);
        self
    }

    /// Disable scoring; all score deltas become zero.
    #[must_use]
    pub fn without_scoring(mut self) -> Self {
        self.enable_scoring = false;
        self
    }

    /// Reverse the waste when recycling it into the stock.
    #[must_use]
    pub fn with_reversed_recycle(mut self) -> Self {
        self.reverse_waste_on_recycle = true;
        self
    }

    /// Difficulty multiplier applied to every score delta.
    ///
    /// Draw-three scores x1.5; the two easing options each scale by x0.9;
    /// tight redeal caps of 0/1/2 scale by x1.3/x1.2/x1.1. Factors compose
    /// multiplicatively. Always 1.0 when scoring is disabled.
    #[must_use]
    pub fn score_multiplier(&self) -> f64 {
        if !self.enable_scoring {
            return 1.0;
        }

        let mut multiplier = 1.0;
        if self.draw_count == DrawCount::Three {
            multiplier *= 1.5;
        }
        if self.allow_any_card_in_empty_tableau {
            multiplier *= 0.9;
        }
        if self.allow_foundation_to_tableau {
            multiplier *= 0.9;
        }
        match self.max_stock_redeals {
            Some(0) => multiplier *= 1.3,
            Some(1) => multiplier *= 1.2,
            Some(2) => multiplier *= 1.1,
            _ => {}
        }
        multiplier
    }

    /// Canonical identity string for this rule set.
    ///
    /// Format: `{King|Any}_{n}Draw_{FT|NoFT}_{n}Redeals`, with unlimited
    /// redeals encoded as `-1`. Statistics are keyed by this string.
    #[must_use]
    pub fn config_key(&self) -> String {
        format!(
            "{}_{}Draw_{}_{}Redeals",
            if self.allow_any_card_in_empty_tableau {
                "Any"
            } else {
                "King"
            },
            self.draw_count.count(),
            if self.allow_foundation_to_tableau {
                "FT"
            } else {
                "NoFT"
            },
            self.max_stock_redeals.map_or(-1, i64::from),
        )
    }
}
