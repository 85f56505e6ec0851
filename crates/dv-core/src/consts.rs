//! Map symbols
//!
//! The fixed character set of the rendered map.

/// Untouched cell
pub const BLANK: char = ' ';
/// Room border
pub const WALL: char = '#';
/// Room interior
pub const FLOOR: char = '.';
pub const DOOR: char = 'D';
pub const CORRIDOR: char = ':';

/// Entity symbol used for any boss, whatever its type
pub const BOSS_MARKER: char = 'B';

/// Frame characters around the map
pub const FRAME_HORIZONTAL: char = '-';
pub const FRAME_VERTICAL: char = '|';
