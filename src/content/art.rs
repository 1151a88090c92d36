//! Hand-drawn ASCII art for the avatar chips and the storm portrait.

/// Head-and-shoulders avatar shown on the About page.
pub const AVATAR: &[&str] = &[
    r"      _____      ",
    r"    .'     '.    ",
    r"   /  _   _  \   ",
    r"  |  (_) (_)  |  ",
    r"  |     ^     |  ",
    r"  |   \___/   |  ",
    r"   \         /   ",
    r"    '._____.'    ",
    r"   __/     \__   ",
    r"  /   STORM   \  ",
    r" |    CODER    | ",
];

/// Monogram revealed by the strike latch on the Home page.
pub const STORM_MONOGRAM: &[&str] = &[
    r"  ____     _      ",
    r" |  _ \   / \     ",
    r" | | | | / _ \    ",
    r" | |_| |/ ___ \   ",
    r" |____//_/   \_\  ",
    r"    __/\__        ",
    r"    \    /        ",
    r"     \/\/         ",
];

/// Small bolt glyph block for headers and empty states.
pub const BOLT_MARK: &[&str] = &[
    r"  __ ",
    r" / / ",
    r"/ /_ ",
    r"\__/ ",
];

/// Widest row of an art block, for centering.
#[must_use]
pub fn block_width(lines: &[&str]) -> usize {
    lines.iter().map(|line| line.chars().count()).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn art_blocks_are_rectangular_enough_to_center() {
        assert_eq!(block_width(AVATAR), 17);
        assert_eq!(block_width(STORM_MONOGRAM), 18);
        assert_eq!(block_width(&[]), 0);
    }

    #[test]
    fn art_is_plain_ascii() {
        for line in AVATAR.iter().chain(STORM_MONOGRAM).chain(BOLT_MARK) {
            assert!(line.is_ascii(), "{line}");
        }
    }
}
