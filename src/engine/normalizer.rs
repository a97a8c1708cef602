// ==========================================
// Siparis Converter - product code normalizer
// ==========================================
// Responsibility: canonical comparable form of a raw product code.
// Pure functions, no state.
// ==========================================

/// Normalize a raw product code into its comparable form.
///
/// Trims, removes spaces/hyphens/underscores, upper-cases, then strips
/// every character that is not an ASCII letter, digit or period.
/// Idempotent: `normalize_code(normalize_code(x)) == normalize_code(x)`.
pub fn normalize_code(code: &str) -> String {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    trimmed
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_uppercase)
        .filter(|c| c.is_ascii_alphanumeric() || *c == '.')
        .collect()
}

/// Derive the adjusted code: everything up to and including the first
/// hyphen removed ("D01-ABC123" -> "ABC123"). Codes without a hyphen
/// pass through unchanged.
pub fn adjusted_code(raw_code: &str) -> String {
    match raw_code.find('-') {
        Some(pos) => raw_code[pos + 1..].to_string(),
        None => raw_code.to_string(),
    }
}
