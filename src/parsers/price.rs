/// Characters dropped from scraped price text: the currency sign, the
/// thousands separator and the mojibake left behind by a bad decode of it.
const PRICE_NOISE: [char; 4] = ['€', '.', '▒', '\u{FFFD}'];

/// Normalize a price for the import file, e.g. `€ 1.234,–` becomes `1234,–`.
/// The value stays text; the decimal comma and dash are left for the shop's
/// importer to interpret.
pub fn clean_price(price_text: &str) -> String {
    price_text
        .chars()
        .filter(|c| !PRICE_NOISE.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}
