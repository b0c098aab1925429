use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Glyph rendered when an icon name has no entry in the table.
pub const DEFAULT_ICON: &str = "👛";

static ICONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("ShoppingBag", "🛍"),
        ("Utensils", "🍴"),
        ("Bus", "🚌"),
        ("Home", "🏠"),
        ("Briefcase", "💼"),
        ("Heart", "❤"),
        ("Tv", "📺"),
        ("Plane", "✈"),
        ("Landmark", "🏛"),
        ("Wallet", "👛"),
        ("Gift", "🎁"),
    ])
});

/// Total icon lookup: unknown names fall back to [`DEFAULT_ICON`] rather
/// than reporting absence.
pub fn resolve_icon(name: &str) -> &'static str {
    ICONS.get(name).copied().unwrap_or(DEFAULT_ICON)
}
