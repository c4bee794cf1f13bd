use scraper::{Html, Selector};

use crate::models::{ExtractedFields, ProductRecord};
use crate::parsers::selectors::{
    DESCRIPTION_SELECTOR, PICTURE_IMAGE_SELECTOR, PRICE_SELECTOR, TITLE_SELECTOR,
    ZOOM_PICTURE_SELECTOR,
};
use crate::parsers::{clean_price, element_text};

/// Map a product detail page onto an export record. Missing elements give
/// empty fields, never an error.
pub fn extract_product(html: &str) -> ProductRecord {
    ProductRecord::from_extracted(extract_fields(html))
}

pub fn extract_fields(html: &str) -> ExtractedFields {
    let document = Html::parse_document(html);

    ExtractedFields {
        title: first_text(&document, &TITLE_SELECTOR),
        price: clean_price(&first_text(&document, &PRICE_SELECTOR)),
        description: first_text(&document, &DESCRIPTION_SELECTOR),
        image_urls: zoom_image_urls(&document),
    }
}

fn first_text(document: &Html, selector: &Selector) -> String {
    document
        .select(selector)
        .next()
        .map(element_text)
        .unwrap_or_default()
}

fn zoom_image_urls(document: &Html) -> Vec<String> {
    document
        .select(&ZOOM_PICTURE_SELECTOR)
        .filter_map(|picture| picture.select(&PICTURE_IMAGE_SELECTOR).next())
        .filter_map(|img| img.value().attr("src"))
        .map(str::to_string)
        .collect()
}
