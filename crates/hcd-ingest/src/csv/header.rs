//! CSV header and cell normalization.

/// Trims whitespace and a leading BOM, and collapses inner whitespace runs.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}').trim();
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

pub fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header_strips_bom() {
        assert_eq!(normalize_header("\u{feff}醫事機構名稱"), "醫事機構名稱");
        assert_eq!(normalize_header("  整合團隊名稱  "), "整合團隊名稱");
    }

    #[test]
    fn test_normalize_header_collapses_spaces() {
        assert_eq!(normalize_header("居家  醫療\t項目"), "居家 醫療 項目");
        assert_eq!(normalize_header("   "), "");
    }

    #[test]
    fn test_normalize_cell() {
        assert_eq!(normalize_cell("  02-2345-6789 "), "02-2345-6789");
    }
}
