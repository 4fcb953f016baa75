//! Color selection for levels, modules and user tags

use std::f64::consts::PI;

use colored::{ColoredString, Colorize};

use crate::types::Level;

/// 32-bit rolling string hash (`h * 31 + unit` over UTF-16 units)
pub fn hash_str(s: &str) -> i32 {
    s.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5).wrapping_sub(hash).wrapping_add(i32::from(unit))
    })
}

/// Position of a module on the hue circle, in degrees (0..360)
pub fn module_hue(module: &str) -> u16 {
    (hash_str(module).unsigned_abs() % 360) as u16
}

/// RGB triplet from three sine waves 120° apart
pub fn hue_to_rgb(hue: u16) -> (u8, u8, u8) {
    let angle = f64::from(hue % 360).to_radians();
    let channel = |phase: f64| ((angle + phase).sin() * 127.0 + 128.0).round() as u8;
    (channel(0.0), channel(2.0 * PI / 3.0), channel(4.0 * PI / 3.0))
}

/// Stable color for a module name
pub fn module_color(module: &str) -> (u8, u8, u8) {
    hue_to_rgb(module_hue(module))
}

pub(crate) fn paint_level(level: Level, label: &str) -> ColoredString {
    match level {
        Level::Debug => label.dimmed(),
        Level::Info => label.blue(),
        Level::Warn => label.yellow(),
        Level::Error => label.red(),
    }
}

pub(crate) fn paint_module(module: &str) -> ColoredString {
    let (r, g, b) = module_color(module);
    format!("[{module}]").truecolor(r, g, b)
}

pub(crate) fn paint_user(user_id: &str) -> ColoredString {
    format!("[{user_id}]").magenta()
}

pub(crate) fn paint_timestamp(timestamp: &str) -> ColoredString {
    format!("[{timestamp}]").dimmed()
}

/// Force colors on or off for the whole process, ignoring terminal detection
pub fn set_color_override(enabled: bool) {
    colored::control::set_override(enabled);
}

/// Return to automatic color detection (`NO_COLOR`, `CLICOLOR`, tty)
pub fn unset_color_override() {
    colored::control::unset_override();
}
