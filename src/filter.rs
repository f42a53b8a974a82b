//! Lodging relevance heuristic.

/// Name fragments that disqualify a place outright
pub const EXCLUDED_KEYWORDS: &[&str] = &["restaurant", "bar", "shop", "museum"];

/// Name fragments that mark a place as lodging even without a lodging type
pub const LODGING_NAME_HINTS: &[&str] = &["hotel", "hostel", "apartment"];

/// Places API type shared by hotels, hostels and apartments
pub const LODGING_TYPE: &str = "lodging";

/// Decide whether a place belongs in the output.
///
/// Excluded keywords win over everything else, so "City Museum Hotel" is
/// rejected even though its name mentions a hotel. Matching is a
/// case-insensitive substring test, which means "bar" also rejects names
/// such as "Barvinok".
pub fn is_relevant(name: &str, detail_types: &[String]) -> bool {
    let name = name.to_lowercase();

    if EXCLUDED_KEYWORDS.iter().any(|k| name.contains(k)) {
        return false;
    }

    detail_types.iter().any(|t| t == LODGING_TYPE)
        || LODGING_NAME_HINTS.iter().any(|h| name.contains(h))
}
