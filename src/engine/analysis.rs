//! Board analysis: stuck detection, win detection, and auto-completion.
//!
//! `has_available_moves` and `can_auto_complete` are read-only probes a
//! host can poll after every command; `auto_complete` plays out the
//! deterministic endgame through the normal command path, so its moves
//! score and undo like any others.

use super::game::{GameEngine, FOUNDATION_PILES, TABLEAU_COLUMNS};
use super::rules;

/// Ceiling on auto-complete passes. A well-formed board finishes in at
/// most 52 foundation moves; the guard only matters if the loop logic is
/// ever broken.
const MAX_AUTO_COMPLETE_ITERATIONS: usize = 1000;

impl GameEngine {
    /// Whether the game is won: all four foundations complete to King.
    #[must_use]
    pub fn is_game_won(&self) -> bool {
        self.foundations.iter().all(|pile| pile.len() == 13)
    }

    /// Whether any legal move remains. Read-only; used to tell the player
    /// the game is stuck.
    #[must_use]
    pub fn has_available_moves(&self) -> bool {
        if !self.stock.is_empty() {
            return true;
        }

        // Stock is empty: recycling counts as a move while allowed.
        if !self.waste.is_empty() {
            let allowance_left = self
                .options
                .max_stock_redeals
                .map_or(true, |limit| self.redeals < limit);
            if allowance_left {
                return true;
            }
        }

        if let Some(card) = self.active_waste_card() {
            for column in 0..TABLEAU_COLUMNS {
                if self.can_place_on_tableau(card, column) {
                    return true;
                }
            }
            for foundation in 0..FOUNDATION_PILES {
                if self.can_place_on_foundation(card, foundation) {
                    return true;
                }
            }
        }

        for from in 0..TABLEAU_COLUMNS {
            let Some(top) = self.tableau[from].last() else {
                continue;
            };

            for foundation in 0..FOUNDATION_PILES {
                if self.can_place_on_foundation(*top, foundation) {
                    return true;
                }
            }

            // Any face-up card, at any depth, that fits another column.
            for card in self.tableau[from].iter().filter(|card| card.face_up) {
                for to in 0..TABLEAU_COLUMNS {
                    if to != from && self.can_place_on_tableau(*card, to) {
                        return true;
                    }
                }
            }
        }

        if self.options.allow_foundation_to_tableau {
            for foundation in 0..FOUNDATION_PILES {
                let Some(top) = self.foundations[foundation].last() else {
                    continue;
                };
                for column in 0..TABLEAU_COLUMNS {
                    if self.can_place_on_tableau(*top, column) {
                        return true;
                    }
                }
            }
        }

        false
    }

    /// Whether the remaining play is foundation-only: stock and waste
    /// empty, every tableau card face-up.
    #[must_use]
    pub fn can_auto_complete(&self) -> bool {
        if !self.stock.is_empty() || !self.waste.is_empty() {
            return false;
        }
        self.tableau
            .iter()
            .all(|column| column.iter().all(|card| card.face_up))
    }

    /// Play out a deterministic endgame: repeatedly move column tops to
    /// the first accepting foundation, restarting the left-to-right scan
    /// after every success, until a full pass moves nothing.
    ///
    /// Returns whether the game ended won. Does nothing (and returns the
    /// current win state) unless `can_auto_complete` holds.
    pub fn auto_complete(&mut self) -> bool {
        if !self.can_auto_complete() {
            return self.is_game_won();
        }

        let mut moves_made = 0usize;
        let mut progressed = true;
        let mut iterations = 0usize;

        while progressed && iterations < MAX_AUTO_COMPLETE_ITERATIONS {
            progressed = false;
            iterations += 1;

            'columns: for column in 0..TABLEAU_COLUMNS {
                let Some(top) = self.tableau[column].last().copied() else {
                    continue;
                };

                for foundation in 0..FOUNDATION_PILES {
                    if rules::can_stack_on_foundation(self.foundations[foundation].last(), top) {
                        self.move_tableau_to_foundation(column, foundation)
                            .expect("validated foundation move");
                        moves_made += 1;
                        progressed = true;
                        break 'columns;
                    }
                }
            }
        }

        let won = self.is_game_won();
        tracing::debug!(moves_made, won, "auto-complete finished");
        won
    }
}
