//! Shared application-wide constants.
//! Centralizes tweakable values used across the canvas engine and UI.

// Canvas scale
/// Number of canvas pixels per physical inch at zoom 1.0.
pub const PIXELS_PER_INCH: f32 = 12.0;
/// Fixed padding (in canvas pixels) kept around the content when auto-sizing the canvas.
pub const CANVAS_PADDING: f32 = 40.0;

// Snapping
/// Maximum distance (in canvas pixels) at which an edge or center snaps to alignment.
pub const SNAP_THRESHOLD: f32 = 10.0;

// Zoom
/// Minimum zoom scale.
pub const MIN_ZOOM: f32 = 0.2;
/// Maximum zoom scale.
pub const MAX_ZOOM: f32 = 5.0;
/// Multiplicative zoom step for a single wheel notch (in).
pub const WHEEL_ZOOM_IN: f32 = 1.1;
/// Multiplicative zoom step for a single wheel notch (out).
pub const WHEEL_ZOOM_OUT: f32 = 0.9;
/// Multiplicative zoom step for the toolbar zoom-in button.
pub const BUTTON_ZOOM_IN: f32 = 1.2;
/// Multiplicative zoom step for the toolbar zoom-out button.
pub const BUTTON_ZOOM_OUT: f32 = 0.8;

// View defaults
/// Initial pan offset of the canvas, in screen pixels.
pub const DEFAULT_PAN: (f32, f32) = (20.0, 20.0);

// Keyboard overlay
/// A standard full-size keyboard is about 17.5 inches wide and 5.5 inches deep.
pub const KEYBOARD_FULL_SIZE_INCHES: (f32, f32) = (17.5, 5.5);
/// A 75% keyboard is about 12.5 inches wide and 5.5 inches deep.
pub const KEYBOARD_COMPACT_INCHES: (f32, f32) = (12.5, 5.5);
/// Default top-left position of the keyboard overlay in canvas space.
pub const KEYBOARD_DEFAULT_POSITION: (f32, f32) = (20.0, 350.0);
/// Border color for the keyboard overlay (deep yellow).
pub const KEYBOARD_COLOR: [u8; 3] = [0xfb, 0xc0, 0x2d];

// Labels
/// Padding (in screen pixels) required around a label for it to fit inside its object.
pub const LABEL_PADDING: f32 = 16.0;

// Grid
/// Spacing between background grid dots, in screen pixels.
pub const GRID_DOT_SPACING: f32 = 20.0;
/// Radius of background grid dots, in screen pixels.
pub const GRID_DOT_RADIUS: f32 = 1.0;

/// Palette cycled through when assigning colors to new monitors.
pub const MONITOR_COLORS: [[u8; 3]; 9] = [
    [0x00, 0xff, 0xff], // cyan
    [0xff, 0x00, 0xff], // magenta
    [0x00, 0xff, 0x00], // lime
    [0xff, 0x8c, 0x00], // darkorange
    [0x00, 0xbf, 0xff], // deepskyblue
    [0xad, 0xff, 0x2f], // greenyellow
    [0xff, 0x63, 0x47], // tomato
    [0xda, 0x70, 0xd6], // orchid
    [0x40, 0xe0, 0xd0], // turquoise
];

/// Common diagonal sizes (inches) offered by the add-monitor form.
pub const DIAGONAL_PRESETS: [f32; 5] = [23.8, 27.0, 31.5, 34.0, 49.0];

/// Common aspect ratios offered by the add-monitor form.
pub const ASPECT_RATIO_PRESETS: [(&str, f32, f32); 5] = [
    ("16:9", 16.0, 9.0),
    ("21:9", 21.0, 9.0),
    ("32:9", 32.0, 9.0),
    ("16:10", 16.0, 10.0),
    ("4:3", 4.0, 3.0),
];

/// Common pixel resolutions offered by the add-monitor form.
pub const RESOLUTION_PRESETS: [(&str, u32, u32); 6] = [
    ("1080p FHD", 1920, 1080),
    ("1440p QHD", 2560, 1440),
    ("4K UHD", 3840, 2160),
    ("UW-QHD", 3440, 1440),
    ("S-UW-QHD", 5120, 1440),
    ("5K", 5120, 2880),
];
