/// Key / description pairs. An empty key marks a section header.
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("", "FEED"),
    ("j / ↓", "Scroll down"),
    ("k / ↑", "Scroll up"),
    ("PgDn / Ctrl+D", "Scroll down half a page"),
    ("PgUp / Ctrl+U", "Scroll up half a page"),
    ("g / Home", "Jump to oldest notification"),
    ("G / End", "Jump to newest and follow"),
    ("", ""),
    ("", "GENERAL"),
    ("F1 or ?", "Toggle this help"),
    ("q / Esc", "Quit"),
    ("Ctrl+C", "Quit"),
];

pub const HELP_FOOTER: &str = "press ? or Esc to close";
