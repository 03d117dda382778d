// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the savera CLI.
//!
//! Status marks, sizes, durations and throughput, colored when stdout is a
//! terminal. Respects `NO_COLOR` and non-TTY detection for pipelines.

use std::io::IsTerminal;
use std::sync::OnceLock;
use std::time::Duration;

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
}

pub use colors::*;

static USE_COLORS: OnceLock<bool> = OnceLock::new();

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    *USE_COLORS.get_or_init(|| std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal())
}

/// Apply color if TTY, otherwise return plain text
pub fn color(c: &str, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", c, text, RESET)
    } else {
        text.to_string()
    }
}

pub fn pass_mark() -> String {
    color(GREEN, "✓")
}

pub fn fail_mark() -> String {
    color(RED, "❌")
}

/// Format bytes as human-readable size
pub fn format_size(bytes: usize) -> String {
    const KIB: f64 = 1024.0;
    let b = bytes as f64;
    if b >= KIB * KIB * KIB {
        format!("{:.2} GiB", b / KIB / KIB / KIB)
    } else if b >= KIB * KIB {
        format!("{:.1} MiB", b / KIB / KIB)
    } else if b >= KIB {
        format!("{:.1} KiB", b / KIB)
    } else {
        format!("{} B", bytes)
    }
}

/// Format a duration with a unit that keeps 3-4 significant digits
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs >= 1.0 {
        format!("{:.2}s", secs)
    } else if secs >= 1e-3 {
        format!("{:.1}ms", secs * 1e3)
    } else {
        format!("{:.0}µs", secs * 1e6)
    }
}

/// Color-coded throughput (green=fast, yellow=medium, red=slow)
pub fn throughput(mib_s: f64) -> String {
    let text = format!("{:>8.1} MiB/s", mib_s);
    let c = if mib_s >= 50.0 {
        GREEN
    } else if mib_s >= 10.0 {
        YELLOW
    } else {
        RED
    };
    color(c, &text)
}

/// Truncate a path to max_len characters, adding ... prefix if needed
pub fn truncate_path(path: &str, max_len: usize) -> String {
    let len = path.chars().count();
    if len <= max_len {
        return path.to_string();
    }
    let keep = max_len.saturating_sub(3);
    let tail: String = path.chars().skip(len - keep).collect();
    format!("...{}", tail)
}
