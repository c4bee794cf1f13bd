pub mod price;
pub mod product;
pub mod selectors;

pub use price::*;
pub use product::*;

use scraper::ElementRef;

/// Concatenated text of an element and its descendants, trimmed.
/// Entities are already decoded by the HTML parser; inner whitespace is kept
/// as the page has it.
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
