//! Mate Dark - the default theme, grouped-card look on a dark background

pub const THEME: &str = r##"# Mate Dark theme for translate-mate
# Cards on a near-black background, link-blue titles and dividers

[meta]
name = "Mate Dark"
version = 1
author = "translate-mate"

[ui]
background = "#101114"
foreground = "#e6e6eb"
border = "#3a3b40"
border_focused = "#0a84ff"
title = "#0a84ff"
status_bar = "#8e8e93"
muted = "#8e8e93"
border_type = "rounded"

[row]
card = "#1c1c1e"
card_border = "#3a3a3c"
link = "#0a84ff"
label = "#f2f2f7"
source = "#8e8e93"
icon = "#e6e6eb"
icon_active = "#30d158"

[logs]
error = "#ff453a"
warn = "#ffd60a"
info = "#e6e6eb"
debug = "#8e8e93"
"##;
