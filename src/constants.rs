//! Board dimensions and engine-wide limits.
//!
//! The engine accepts any positive board size at runtime. The default size
//! used by the binary is chosen at compile time through Cargo features:
//! - no feature: 9x9
//! - `board13x13`: 13x13
//! - `board19x19`: 19x19 (wins if both features are enabled)
//!
//! ```sh
//! cargo build                           # 9x9 default
//! cargo build --features board19x19     # 19x19 default
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN). Standard Go sizes are 9, 13, or 19.
#[cfg(feature = "board19x19")]
pub const DEFAULT_SIZE: usize = 19;

#[cfg(all(feature = "board13x13", not(feature = "board19x19")))]
pub const DEFAULT_SIZE: usize = 13;

#[cfg(not(any(feature = "board13x13", feature = "board19x19")))]
pub const DEFAULT_SIZE: usize = 9;

/// Largest board GTP vertex notation can address (A..Z without I).
pub const MAX_GTP_SIZE: usize = 25;

// =============================================================================
// Neighbor Offsets
// =============================================================================

/// Orthogonal (row, col) offsets: North, South, West, East.
pub const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

// =============================================================================
// Display Characters
// =============================================================================

/// Black stone.
pub const STONE_BLACK: char = 'X';

/// White stone.
pub const STONE_WHITE: char = 'O';

/// Empty point.
pub const EMPTY: char = '.';
