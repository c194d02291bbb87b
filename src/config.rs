//! Board dimensions and mine density.

use crate::common::ConfigError;

pub const DEFAULT_WIDTH: usize = 20;
pub const DEFAULT_HEIGHT: usize = 20;
/// Fraction of cells holding a mine.
pub const DEFAULT_MINE_FRACTION: f64 = 0.14;

/// Parameters used to generate a fresh board.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
    pub mine_fraction: f64,
}

impl BoardConfig {
    pub const fn new(width: usize, height: usize, mine_fraction: f64) -> Self {
        Self {
            width,
            height,
            mine_fraction,
        }
    }

    /// Check dimensions are positive, the fraction lies strictly in (0, 1)
    /// and the mine count fits the signed bombs-remaining counter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        // written so NaN is rejected too
        if !(self.mine_fraction > 0.0 && self.mine_fraction < 1.0) {
            return Err(ConfigError::MineFractionOutOfRange(self.mine_fraction));
        }
        let cells = self
            .width
            .checked_mul(self.height)
            .ok_or(ConfigError::BoardTooLarge {
                width: self.width,
                height: self.height,
            })?;
        let mines = (cells as f64 * self.mine_fraction) as usize;
        if i32::try_from(mines).is_err() {
            return Err(ConfigError::TooManyMines(mines));
        }
        Ok(())
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// `floor(width * height * mine_fraction)`.
    pub fn mine_count(&self) -> usize {
        (self.cell_count() as f64 * self.mine_fraction) as usize
    }

    /// Cells that must be revealed to win.
    pub fn safe_cells(&self) -> usize {
        self.cell_count() - self.mine_count()
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_MINE_FRACTION)
    }
}
