//! Removal of inline allergen and diet annotations from dish text.

/// Annotation codes that appear inline in Aromi dish listings,
/// e.g. `"Kanapasta, L, G"` or `"Kasvissosekeitto, Veg"`.
pub const ALLERGEN_CODES: [&str; 8] = ["L", "M", "G", "N", "S", "K", "Veg", "♥"];

/// Strip every standalone allergen code from a dish fragment, then trim
/// stray commas and whitespace from the edges.
///
/// Matching is case-sensitive and word-bounded: `"Lohikeitto"` keeps its
/// `L`, a lone `L` between separators is removed.
pub fn strip_allergens(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    let mut rest = fragment;
    while let Some(ch) = rest.chars().next() {
        if let Some(tail) = strip_code(&out, rest) {
            rest = tail;
            continue;
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }
    out.trim_matches([' ', ',']).to_string()
}

/// If `rest` starts with an allergen code sitting on word boundaries,
/// return `rest` with the code consumed. `written` supplies the character
/// preceding the candidate match.
fn strip_code<'a>(written: &str, rest: &'a str) -> Option<&'a str> {
    if written.chars().next_back().is_some_and(char::is_alphanumeric) {
        return None;
    }
    for code in ALLERGEN_CODES {
        if let Some(tail) = rest.strip_prefix(code) {
            if !tail.chars().next().is_some_and(char::is_alphanumeric) {
                return Some(tail);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_codes() {
        assert_eq!(strip_allergens("Kanapasta, L, G"), "Kanapasta");
        assert_eq!(strip_allergens("Kasvissosekeitto, Veg"), "Kasvissosekeitto");
    }

    #[test]
    fn strips_heart_glyph() {
        assert_eq!(strip_allergens("Uunilohi ♥"), "Uunilohi");
    }

    #[test]
    fn keeps_codes_inside_words() {
        // Plenty of Finnish dish names start with allergen letters.
        assert_eq!(strip_allergens("Lohikeitto"), "Lohikeitto");
        assert_eq!(strip_allergens("Makaronilaatikko"), "Makaronilaatikko");
        assert_eq!(strip_allergens("Vegaaninen pata"), "Vegaaninen pata");
    }

    #[test]
    fn strips_parenthesized_codes() {
        assert_eq!(strip_allergens("Hernekeitto (L)"), "Hernekeitto ()");
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(strip_allergens("veg"), "veg");
    }

    #[test]
    fn empty_and_code_only_fragments_collapse() {
        assert_eq!(strip_allergens(""), "");
        assert_eq!(strip_allergens("  "), "");
        assert_eq!(strip_allergens("G"), "");
        assert_eq!(strip_allergens("L, G"), "");
    }

    #[test]
    fn adjacent_letters_are_not_codes() {
        // `LL` is a single word, not two `L` annotations.
        assert_eq!(strip_allergens("LL"), "LL");
    }
}
