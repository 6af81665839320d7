//! Character folding for address and name text.

/// Variant glyph folded to its canonical form before any matching.
const VARIANT_FOLDS: &[(char, char)] = &[('臺', '台')];

/// Folds full-width ASCII, the ideographic space, and known CJK variant
/// glyphs so equivalent addresses compare equal.
pub fn fold_variants(value: &str) -> String {
    value.chars().map(fold_char).collect()
}

fn fold_char(ch: char) -> char {
    if let Some((_, canonical)) = VARIANT_FOLDS.iter().find(|(variant, _)| *variant == ch) {
        return *canonical;
    }
    match ch {
        '\u{3000}' => ' ',
        '\u{FF01}'..='\u{FF5E}' => char::from_u32(ch as u32 - 0xFEE0).unwrap_or(ch),
        _ => ch,
    }
}

/// Returns `None` for missing or whitespace-only values.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
