//! Terminal ANSI - Uses your terminal's native ANSI colors
//! Perfect for users who have carefully crafted their terminal theme

pub const THEME: &str = r##"# Terminal ANSI theme for translate-mate
# Uses your terminal's native ANSI colors - adapts to your terminal theme!
#
# This theme uses "ansi:X" syntax instead of hex colors:
# - ansi:0-7 = standard colors (black, red, green, yellow, blue, magenta, cyan, white)
# - ansi:8-15 = bright variants
# - ansi:fg = terminal's default foreground
# - ansi:bg = terminal's default background (transparent)

[meta]
name = "Terminal ANSI"
version = 1
author = "translate-mate"

[ui]
background = "ansi:bg"
foreground = "ansi:fg"
border = "ansi:8"
border_focused = "ansi:4"
title = "ansi:4"
status_bar = "ansi:fg"
muted = "ansi:8"

[row]
card = "ansi:bg"
card_border = "ansi:8"
link = "ansi:4"
label = "ansi:fg"
source = "ansi:8"
icon = "ansi:fg"
icon_active = "ansi:2"
"##;
