//! Display formatting shared by cards and the detail view

/// Currency prefix shown before every price
pub const CURRENCY_PREFIX: &str = "R$";

/// Maximum characters of a description shown on a card
pub const SUMMARY_LIMIT: usize = 50;

/// Marker appended to truncated descriptions
pub const ELLIPSIS: &str = "...";

/// Default placeholder image service
pub const DEFAULT_PLACEHOLDER_BASE: &str = "https://via.placeholder.com";

/// Format a price with the currency prefix and exactly two decimals
pub fn format_price(price: f64) -> String {
    format!("{CURRENCY_PREFIX} {price:.2}")
}

/// Shorten a description for card display
///
/// Counts characters, not bytes, so accented text is never split mid-char.
pub fn summarize(description: &str) -> String {
    match description.char_indices().nth(SUMMARY_LIMIT) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &description[..cut]),
        None => description.to_string(),
    }
}

/// Placeholder image slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// 200x150, used on listing cards
    Card,
    /// 400x300, used in the detail modal
    Detail,
}

impl Placeholder {
    pub fn size(self) -> (u32, u32) {
        match self {
            Placeholder::Card => (200, 150),
            Placeholder::Detail => (400, 300),
        }
    }

    /// Build the placeholder URL against a service base
    pub fn url(self, base: &str) -> String {
        let (width, height) = self.size();
        format!(
            "{}/{width}x{height}?text=Sem+Imagem",
            base.trim_end_matches('/')
        )
    }
}
