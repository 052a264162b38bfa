//! Random display identities for users who join without a profile.

use canvas::geom::Color;
use rand::Rng;

const ADJECTIVES: &[&str] = &["Creative", "Artistic", "Sketchy", "Digital", "Colorful"];
const NOUNS: &[&str] = &["Artist", "Designer", "Creator", "Sketch", "Master"];

/// The identity palette. Remote cursors and chat names render in the
/// user's assigned color, so the palette stays small and high-contrast.
pub const PALETTE: &[Color] = &[
    Color::rgb(0xFF, 0x3B, 0x30),
    Color::rgb(0xFF, 0x95, 0x00),
    Color::rgb(0xFF, 0xCC, 0x00),
    Color::rgb(0x4C, 0xD9, 0x64),
    Color::rgb(0x5A, 0xC8, 0xFA),
    Color::rgb(0x00, 0x7A, 0xFF),
    Color::rgb(0x58, 0x56, 0xD6),
    Color::rgb(0xFF, 0x2D, 0x55),
];

/// A generated display name like `SketchyArtist42`.
#[must_use]
pub fn random_username() -> String {
    let mut rng = rand::rng();
    let adjective = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.random_range(0..NOUNS.len())];
    let number = rng.random_range(0..100);
    format!("{adjective}{noun}{number}")
}

/// A color drawn from [`PALETTE`].
#[must_use]
pub fn random_color() -> Color {
    let mut rng = rand::rng();
    PALETTE[rng.random_range(0..PALETTE.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_is_adjective_noun_number() {
        for _ in 0..50 {
            let name = random_username();
            let adjective = ADJECTIVES
                .iter()
                .find(|a| name.starts_with(**a))
                .unwrap_or_else(|| panic!("no adjective prefix in {name}"));
            let rest = &name[adjective.len()..];
            let noun = NOUNS
                .iter()
                .find(|n| rest.starts_with(**n))
                .unwrap_or_else(|| panic!("no noun after adjective in {name}"));
            let number: u32 = rest[noun.len()..].parse().unwrap();
            assert!(number < 100);
        }
    }

    #[test]
    fn color_comes_from_the_palette() {
        for _ in 0..50 {
            assert!(PALETTE.contains(&random_color()));
        }
    }
}
