//! ANSI SGR palette used for level colors.
//!
//! The constant names and escape sequences are stable; callers depend on the
//! exact bytes.

pub const RESET: &str = "\x1b[0m";

// Regular
pub const BLACK: &str = "\x1b[0;30m";
pub const RED: &str = "\x1b[0;31m";
pub const GREEN: &str = "\x1b[0;32m";
pub const YELLOW: &str = "\x1b[0;33m";
pub const BLUE: &str = "\x1b[0;34m";
pub const PURPLE: &str = "\x1b[0;35m";
pub const CYAN: &str = "\x1b[0;36m";
pub const WHITE: &str = "\x1b[0;37m";

// Bold
pub const BLACK_BOLD: &str = "\x1b[1;30m";
pub const RED_BOLD: &str = "\x1b[1;31m";
pub const GREEN_BOLD: &str = "\x1b[1;32m";
pub const YELLOW_BOLD: &str = "\x1b[1;33m";
pub const BLUE_BOLD: &str = "\x1b[1;34m";
pub const PURPLE_BOLD: &str = "\x1b[1;35m";
pub const CYAN_BOLD: &str = "\x1b[1;36m";
pub const WHITE_BOLD: &str = "\x1b[1;37m";

// Underline
pub const BLACK_UNDERLINED: &str = "\x1b[4;30m";
pub const RED_UNDERLINED: &str = "\x1b[4;31m";
pub const GREEN_UNDERLINED: &str = "\x1b[4;32m";
pub const YELLOW_UNDERLINED: &str = "\x1b[4;33m";
pub const BLUE_UNDERLINED: &str = "\x1b[4;34m";
pub const PURPLE_UNDERLINED: &str = "\x1b[4;35m";
pub const CYAN_UNDERLINED: &str = "\x1b[4;36m";
pub const WHITE_UNDERLINED: &str = "\x1b[4;37m";

// Background
pub const BLACK_BACKGROUND: &str = "\x1b[40m";
pub const RED_BACKGROUND: &str = "\x1b[41m";
pub const GREEN_BACKGROUND: &str = "\x1b[42m";
pub const YELLOW_BACKGROUND: &str = "\x1b[43m";
pub const BLUE_BACKGROUND: &str = "\x1b[44m";
pub const PURPLE_BACKGROUND: &str = "\x1b[45m";
pub const CYAN_BACKGROUND: &str = "\x1b[46m";
pub const WHITE_BACKGROUND: &str = "\x1b[47m";

// High intensity
pub const BLACK_BRIGHT: &str = "\x1b[0;90m";
pub const RED_BRIGHT: &str = "\x1b[0;91m";
pub const GREEN_BRIGHT: &str = "\x1b[0;92m";
pub const YELLOW_BRIGHT: &str = "\x1b[0;93m";
pub const BLUE_BRIGHT: &str = "\x1b[0;94m";
pub const PURPLE_BRIGHT: &str = "\x1b[0;95m";
pub const CYAN_BRIGHT: &str = "\x1b[0;96m";
pub const WHITE_BRIGHT: &str = "\x1b[0;97m";

// Bold high intensity
pub const BLACK_BOLD_BRIGHT: &str = "\x1b[1;90m";
pub const RED_BOLD_BRIGHT: &str = "\x1b[1;91m";
pub const GREEN_BOLD_BRIGHT: &str = "\x1b[1;92m";
pub const YELLOW_BOLD_BRIGHT: &str = "\x1b[1;93m";
pub const BLUE_BOLD_BRIGHT: &str = "\x1b[1;94m";
pub const PURPLE_BOLD_BRIGHT: &str = "\x1b[1;95m";
pub const CYAN_BOLD_BRIGHT: &str = "\x1b[1;96m";
pub const WHITE_BOLD_BRIGHT: &str = "\x1b[1;97m";

// High intensity backgrounds
pub const BLACK_BACKGROUND_BRIGHT: &str = "\x1b[0;100m";
pub const RED_BACKGROUND_BRIGHT: &str = "\x1b[0;101m";
pub const GREEN_BACKGROUND_BRIGHT: &str = "\x1b[0;102m";
pub const YELLOW_BACKGROUND_BRIGHT: &str = "\x1b[0;103m";
pub const BLUE_BACKGROUND_BRIGHT: &str = "\x1b[0;104m";
pub const PURPLE_BACKGROUND_BRIGHT: &str = "\x1b[0;105m";
pub const CYAN_BACKGROUND_BRIGHT: &str = "\x1b[0;106m";
pub const WHITE_BACKGROUND_BRIGHT: &str = "\x1b[0;107m";

/// Every named color as `(name, code)`, in declaration order.
pub const ALL: &[(&str, &str)] = &[
    ("RESET", RESET),
    ("BLACK", BLACK),
    ("RED", RED),
    ("GREEN", GREEN),
    ("YELLOW", YELLOW),
    ("BLUE", BLUE),
    ("PURPLE", PURPLE),
    ("CYAN", CYAN),
    ("WHITE", WHITE),
    ("BLACK_BOLD", BLACK_BOLD),
    ("RED_BOLD", RED_BOLD),
    ("GREEN_BOLD", GREEN_BOLD),
    ("YELLOW_BOLD", YELLOW_BOLD),
    ("BLUE_BOLD", BLUE_BOLD),
    ("PURPLE_BOLD", PURPLE_BOLD),
    ("CYAN_BOLD", CYAN_BOLD),
    ("WHITE_BOLD", WHITE_BOLD),
    ("BLACK_UNDERLINED", BLACK_UNDERLINED),
    ("RED_UNDERLINED", RED_UNDERLINED),
    ("GREEN_UNDERLINED", GREEN_UNDERLINED),
    ("YELLOW_UNDERLINED", YELLOW_UNDERLINED),
    ("BLUE_UNDERLINED", BLUE_UNDERLINED),
    ("PURPLE_UNDERLINED", PURPLE_UNDERLINED),
    ("CYAN_UNDERLINED", CYAN_UNDERLINED),
    ("WHITE_UNDERLINED", WHITE_UNDERLINED),
    ("BLACK_BACKGROUND", BLACK_BACKGROUND),
    ("RED_BACKGROUND", RED_BACKGROUND),
    ("GREEN_BACKGROUND", GREEN_BACKGROUND),
    ("YELLOW_BACKGROUND", YELLOW_BACKGROUND),
    ("BLUE_BACKGROUND", BLUE_BACKGROUND),
    ("PURPLE_BACKGROUND", PURPLE_BACKGROUND),
    ("CYAN_BACKGROUND", CYAN_BACKGROUND),
    ("WHITE_BACKGROUND", WHITE_BACKGROUND),
    ("BLACK_BRIGHT", BLACK_BRIGHT),
    ("RED_BRIGHT", RED_BRIGHT),
    ("GREEN_BRIGHT", GREEN_BRIGHT),
    ("YELLOW_BRIGHT", YELLOW_BRIGHT),
    ("BLUE_BRIGHT", BLUE_BRIGHT),
    ("PURPLE_BRIGHT", PURPLE_BRIGHT),
    ("CYAN_BRIGHT", CYAN_BRIGHT),
    ("WHITE_BRIGHT", WHITE_BRIGHT),
    ("BLACK_BOLD_BRIGHT", BLACK_BOLD_BRIGHT),
    ("RED_BOLD_BRIGHT", RED_BOLD_BRIGHT),
    ("GREEN_BOLD_BRIGHT", GREEN_BOLD_BRIGHT),
    ("YELLOW_BOLD_BRIGHT", YELLOW_BOLD_BRIGHT),
    ("BLUE_BOLD_BRIGHT", BLUE_BOLD_BRIGHT),
    ("PURPLE_BOLD_BRIGHT", PURPLE_BOLD_BRIGHT),
    ("CYAN_BOLD_BRIGHT", CYAN_BOLD_BRIGHT),
    ("WHITE_BOLD_BRIGHT", WHITE_BOLD_BRIGHT),
    ("BLACK_BACKGROUND_BRIGHT", BLACK_BACKGROUND_BRIGHT),
    ("RED_BACKGROUND_BRIGHT", RED_BACKGROUND_BRIGHT),
    ("GREEN_BACKGROUND_BRIGHT", GREEN_BACKGROUND_BRIGHT),
    ("YELLOW_BACKGROUND_BRIGHT", YELLOW_BACKGROUND_BRIGHT),
    ("BLUE_BACKGROUND_BRIGHT", BLUE_BACKGROUND_BRIGHT),
    ("PURPLE_BACKGROUND_BRIGHT", PURPLE_BACKGROUND_BRIGHT),
    ("CYAN_BACKGROUND_BRIGHT", CYAN_BACKGROUND_BRIGHT),
    ("WHITE_BACKGROUND_BRIGHT", WHITE_BACKGROUND_BRIGHT),
];

/// Look up a palette color by its constant name, ignoring case.
pub fn by_name(name: &str) -> Option<&'static str> {
    ALL.iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name.trim()))
        .map(|(_, code)| *code)
}
