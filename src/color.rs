/// Stable per-category colors.
use ratatui::style::Color;

const PALETTE: &[Color] = &[
    Color::Rgb(0x62, 0x00, 0xee),
    Color::Rgb(0xff, 0x57, 0x33),
    Color::Rgb(0x33, 0xa8, 0x57),
    Color::Rgb(0x33, 0x57, 0xff),
    Color::Rgb(0xf3, 0x33, 0xff),
    Color::Rgb(0xff, 0xa8, 0x33),
    Color::Rgb(0x33, 0xb5, 0xb0),
    Color::Rgb(0xff, 0x33, 0x80),
];

/// Color for a free-text category. The same name always maps to the same color.
pub fn category_color(name: &str) -> Color {
    // FNV-1a; std's hasher is randomly seeded per process.
    let hash = name.bytes().fold(0xcbf2_9ce4_8422_2325_u64, |acc, b| {
        (acc ^ u64::from(b)).wrapping_mul(0x0000_0100_0000_01b3)
    });
    PALETTE[(hash % PALETTE.len() as u64) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_name_same_color() {
        assert_eq!(category_color("Workout"), category_color("Workout"));
        assert!(PALETTE.contains(&category_color("")));
    }
}
