//! Nord - Arctic, bluish color palette

pub const THEME: &str = r##"# Nord theme for translate-mate
# Arctic, bluish color palette

[meta]
name = "Nord"
version = 1
author = "iTerm2-Color-Schemes"

[ui]
background = "#2e3440"
foreground = "#d8dee9"
border = "#4c566a"
border_focused = "#ebcb8b"
title = "#88c0d0"
status_bar = "#d8dee9"
muted = "#7b88a1"

[row]
card = "#3b4252"
card_border = "#4c566a"
link = "#88c0d0"
label = "#eceff4"
source = "#7b88a1"
icon = "#d8dee9"
icon_active = "#a3be8c"

[logs]
error = "#bf616a"
warn = "#ebcb8b"
info = "#d8dee9"
debug = "#7b88a1"
"##;
