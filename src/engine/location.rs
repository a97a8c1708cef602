// ==========================================
// Siparis Converter - location classifier
// ==========================================
// Responsibility: free-text purchase-order / branch / ship-to text
// into one of the five warehouse locations, or None ("Diğer").
// Classification is total: every input maps to exactly one outcome.
// ==========================================

use crate::domain::types::Location;

/// Generic token rule (Schaeffler, Valeo, both ZF variants).
///
/// Case-sensitive literal tokens, fixed priority, first match wins.
pub fn classify_generic(text: &str) -> Option<Location> {
    if text.contains("IME") || text.contains("285") || text.contains("İST") || text.contains("IST")
    {
        Some(Location::Imes)
    } else if text.contains("ANK") || text.contains("321") {
        Some(Location::Ankara)
    } else if text.contains("322") {
        Some(Location::Bolu)
    } else if text.contains("323") {
        Some(Location::Maslak)
    } else if text.contains("IKI") || text.contains("324") {
        Some(Location::Ikitelli)
    } else {
        None
    }
}

/// Delphi rule, keyed on exact branch-name substrings.
pub fn classify_branch(text: &str) -> Option<Location> {
    if text.contains("Teknik Dizel-Bolu") {
        Some(Location::Bolu)
    } else if text.contains("Teknik Dizel-Ümraniye") {
        Some(Location::Imes)
    } else if text.contains("Teknik Dizel-Maslak") {
        Some(Location::Maslak)
    } else if text.contains("Teknik Dizel-Ankara") {
        Some(Location::Ankara)
    } else if text.contains("Teknik Dizel-İkitelli") {
        Some(Location::Ikitelli)
    } else {
        None
    }
}

/// Mann/Filtron rule, keyed on short codes embedded in the customer
/// purchase-order field.
pub fn classify_short_code(text: &str) -> Option<Location> {
    if text.contains("AAS") {
        Some(Location::Ankara)
    } else if text.contains("DAS") {
        Some(Location::Imes)
    } else if text.contains("BAS") {
        Some(Location::Bolu)
    } else if text.contains("MAS") {
        Some(Location::Maslak)
    } else if text.contains("EAS") {
        Some(Location::Ikitelli)
    } else {
        None
    }
}
