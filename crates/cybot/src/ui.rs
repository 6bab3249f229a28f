//! Styling helpers shared by the renderer and the menus.

/// Basic ANSI color codes. The animated renderer writes these around a
/// whole message and always resets afterwards.
pub mod colors {
    pub const GREEN: &str = "\x1b[32m";
    pub const CYAN: &str = "\x1b[36m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RED: &str = "\x1b[31m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Bullet marker used for tips and menu lines.
pub const BULLET: &str = "•";

/// Border under the welcome banner.
pub fn welcome_border() -> String {
    "=".repeat(60)
}

/// Border around the help menu.
pub fn menu_border() -> String {
    "-".repeat(50)
}
