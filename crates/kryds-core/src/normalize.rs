use kryds_types::QueryKind;
use unicode_normalization::UnicodeNormalization;

/// Canonical form of a query, used both as cache key and upstream segment.
///
/// Patterns go upstream untouched since every character is a literal
/// position. Synonyms are trimmed, lowercased, NFC-composed and run through
/// the language's substitution table.
pub fn normalize(kind: QueryKind, raw: &str, substitutions: &[(char, &str)]) -> String {
    match kind {
        QueryKind::Pattern => raw.to_string(),
        QueryKind::Synonym => normalize_synonym(raw, substitutions),
    }
}

fn normalize_synonym(raw: &str, substitutions: &[(char, &str)]) -> String {
    let composed: String = raw.trim().to_lowercase().nfc().collect();

    if substitutions.is_empty() {
        return composed;
    }

    let mut out = String::with_capacity(composed.len());
    for c in composed.chars() {
        match substitutions.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => out.push_str(to),
            None => out.push(c),
        }
    }
    out
}
