//! Catalog of known mobile products.

use crate::error::SelectionError;

pub const KNOWN_MOBILES: [&str; 10] = [
    "Samsung Galaxy S24",
    "iPhone 15 Pro",
    "OnePlus 12",
    "Xiaomi 14 Ultra",
    "Realme GT 6",
    "Vivo V30 Pro",
    "Oppo Reno 12",
    "Motorola Edge 50",
    "Nothing Phone 2a",
    "Google Pixel 8",
];

/// Look up a catalog entry by name, ignoring case and surrounding space.
pub fn find_mobile(name: &str) -> Option<&'static str> {
    let name = name.trim();
    KNOWN_MOBILES
        .iter()
        .copied()
        .find(|mobile| mobile.eq_ignore_ascii_case(name))
}

/// Resolve which mobile a review is about.
///
/// A non-blank custom name wins over a catalog pick. `selected` is the
/// 1-based position in [`KNOWN_MOBILES`]. Custom names matching a catalog
/// entry are returned with the catalog spelling.
pub fn resolve_mobile(
    custom: Option<&str>,
    selected: Option<usize>,
) -> Result<String, SelectionError> {
    if let Some(name) = custom.map(str::trim).filter(|name| !name.is_empty()) {
        return Ok(find_mobile(name).unwrap_or(name).to_string());
    }
    match selected {
        Some(index) => index
            .checked_sub(1)
            .and_then(|idx| KNOWN_MOBILES.get(idx))
            .map(|mobile| (*mobile).to_string())
            .ok_or(SelectionError::UnknownIndex {
                index,
                available: KNOWN_MOBILES.len(),
            }),
        None => Err(SelectionError::NoMobile),
    }
}
