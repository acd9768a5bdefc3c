use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Number of colors in the rotating categorical palette.
pub const PALETTE_SIZE: usize = 8;

/// Ordered categorical palette. Assignment wraps; the offset shifts the
/// starting color so sibling charts on one page don't collide.
const PALETTE: [Color; PALETTE_SIZE] = [
    Color::from_rgb8(0x4e, 0x79, 0xa7),
    Color::from_rgb8(0xf2, 0x8e, 0x2b),
    Color::from_rgb8(0xe1, 0x57, 0x59),
    Color::from_rgb8(0x76, 0xb7, 0xb2),
    Color::from_rgb8(0x59, 0xa1, 0x4f),
    Color::from_rgb8(0xed, 0xc9, 0x48),
    Color::from_rgb8(0xb0, 0x7a, 0xa1),
    Color::from_rgb8(0x9c, 0x75, 0x5f),
];

const SUCCESS_COLOR: Color = Color::from_rgb8(0x22, 0xc5, 0x5e);
const WARN_COLOR: Color = Color::from_rgb8(0xf5, 0x9e, 0x0b);
const DANGER_COLOR: Color = Color::from_rgb8(0xef, 0x44, 0x44);

/// Status keyword carried by a chart entry's `state` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Success,
    Warn,
    Danger,
    Info,
}

impl EntryStatus {
    /// Parses a status keyword, case-insensitively. Unrecognized input maps
    /// to `None` so entries keep their categorical palette color.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "success" | "ok" => Some(Self::Success),
            "warn" | "warning" => Some(Self::Warn),
            "danger" | "error" | "critical" => Some(Self::Danger),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

/// Deterministic palette slot for `index` shifted by `offset`.
///
/// Total for negative inputs and periodic in `PALETTE_SIZE`.
#[must_use]
pub fn palette_color(index: i64, offset: i64) -> Color {
    let n = PALETTE_SIZE as i64;
    let slot = ((offset.wrapping_add(index)) % n + n) % n;
    PALETTE[slot as usize]
}

/// Resolves an entry's color.
///
/// Entries with a recognized non-`Info` status get the fixed semantic color
/// regardless of position; everything else rotates through the palette.
#[must_use]
pub fn pick_color(status: Option<EntryStatus>, index: i64, offset: i64) -> Color {
    match status {
        Some(EntryStatus::Success) => SUCCESS_COLOR,
        Some(EntryStatus::Warn) => WARN_COLOR,
        Some(EntryStatus::Danger) => DANGER_COLOR,
        Some(EntryStatus::Info) | None => palette_color(index, offset),
    }
}
