//! Error types shared by the board and the session.

/// Invalid board parameters, detected when a board is constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Grid width must be at least one column.
    ZeroWidth,
    /// Grid height must be at least one row.
    ZeroHeight,
    /// Mine fraction must lie strictly between 0 and 1.
    MineFractionOutOfRange(f64),
    /// `width * height` overflows.
    BoardTooLarge { width: usize, height: usize },
    /// More mines than the bombs-remaining counter can represent.
    TooManyMines(usize),
    /// A fixed layout contained no rows or no columns.
    EmptyLayout,
    /// A fixed layout row had a different length than the first row.
    RaggedLayout { row: usize, expected: usize, found: usize },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroWidth => write!(f, "Board width must be positive"),
            ConfigError::ZeroHeight => write!(f, "Board height must be positive"),
            ConfigError::MineFractionOutOfRange(fraction) => {
                write!(f, "Mine fraction {} is outside (0, 1)", fraction)
            }
            ConfigError::BoardTooLarge { width, height } => {
                write!(f, "Board of {}x{} cells is too large", width, height)
            }
            ConfigError::TooManyMines(count) => write!(f, "{} mines is too many", count),
            ConfigError::EmptyLayout => write!(f, "Mine layout is empty"),
            ConfigError::RaggedLayout {
                row,
                expected,
                found,
            } => write!(
                f,
                "Mine layout row {} has {} columns, expected {}",
                row, found, expected
            ),
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoardError {
    /// Board could not be built from the given parameters.
    Config(ConfigError),
    /// Coordinate lies outside the grid.
    OutOfBounds { row: usize, col: usize },
}

impl From<ConfigError> for BoardError {
    fn from(err: ConfigError) -> Self {
        BoardError::Config(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::Config(e) => write!(f, "Configuration error: {}", e),
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Cell ({}, {}) is out of bounds", row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
