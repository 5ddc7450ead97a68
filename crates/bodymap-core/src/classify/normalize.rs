use unicode_normalization::UnicodeNormalization;

/// Normalize a raw body-part label for dictionary lookup.
///
/// Steps:
/// 1. Uppercase
/// 2. Canonical decomposition (NFD)
/// 3. Drop combining diacritical marks (U+0300..U+036F), so "MUÑECA" becomes "MUNECA"
/// 4. Trim surrounding whitespace
///
/// Inner whitespace is left as is.
pub fn normalize_label(raw: &str) -> String {
    let decomposed: String = raw
        .to_uppercase()
        .nfd()
        .filter(|c| !is_combining_diacritic(*c))
        .collect();
    decomposed.trim().to_string()
}

fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase() {
        assert_eq!(normalize_label("hombro izquierdo"), "HOMBRO IZQUIERDO");
    }

    #[test]
    fn test_strips_accents() {
        assert_eq!(normalize_label("Muñeca"), "MUNECA");
        assert_eq!(normalize_label("TALÓN"), "TALON");
        assert_eq!(normalize_label("glúteo"), "GLUTEO");
        assert_eq!(normalize_label("Tórax"), "TORAX");
    }

    #[test]
    fn test_precomposed_and_decomposed_agree() {
        // "á" as one code point vs "a" + U+0301
        assert_eq!(normalize_label("cr\u{e1}neo"), normalize_label("cra\u{301}neo"));
    }

    #[test]
    fn test_whitespace_handling() {
        assert_eq!(normalize_label("  pie \t\n"), "PIE");
        assert_eq!(normalize_label("pie  der"), "PIE  DER");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize_label(""), "");
        assert_eq!(normalize_label("   "), "");
    }
}
