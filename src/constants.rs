// Constants for the dump visualizer

/// Fixed width of the output image
pub const IMG_SIZE_X: u32 = 1200;

/// Margin around the image and between rows
pub const IMG_MARGIN: u32 = 8;

/// Nominal text height, also the height of every label row
pub const FONT_SIZE: u32 = 10;

/// Height of a block or allocation bar
pub const MAP_SIZE: u32 = 24;

/// Gap between a grid line and its size label
pub const TEXT_MARGIN: i32 = 4;

/// Grid ruler starts at this many bytes per line and doubles from there
pub const GRID_START_BYTES: u64 = 32;

/// Grid lines are never closer together than this
pub const GRID_MIN_SPACING: u32 = 64;

/// Vertical pitch of one committed allocation or block row (label + bar)
pub const ROW_PITCH: u32 = IMG_MARGIN * 2 + FONT_SIZE + MAP_SIZE;

/// Height of a single text row (heap header, grid legend, entry label)
pub const TEXT_ROW: u32 = FONT_SIZE + IMG_MARGIN;

/// Horizontal space available to the largest block
pub const USABLE_WIDTH: u32 = IMG_SIZE_X - IMG_MARGIN * 2;
