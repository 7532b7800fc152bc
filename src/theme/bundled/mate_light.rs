//! Mate Light - light grouped background with white cards

pub const THEME: &str = r##"# Mate Light theme for translate-mate

[meta]
name = "Mate Light"
version = 1
author = "translate-mate"

[ui]
background = "#f2f2f7"
foreground = "#1c1c1e"
border = "#c7c7cc"
border_focused = "#007aff"
title = "#007aff"
status_bar = "#6c6c70"
muted = "#8e8e93"
border_type = "rounded"

[row]
card = "#ffffff"
card_border = "#d1d1d6"
link = "#007aff"
label = "#000000"
source = "#8e8e93"
icon = "#1c1c1e"
icon_active = "#34c759"

[logs]
error = "#ff3b30"
warn = "#c93400"
info = "#1c1c1e"
debug = "#8e8e93"
"##;
