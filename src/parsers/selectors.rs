//! CSS selectors for the shop's markup. When the page layout changes,
//! this is the only file that should need touching.

use once_cell::sync::Lazy;
use scraper::Selector;

pub const PRODUCT_LINK: &str = "a.product__content";
pub const TITLE: &str = "h1.fx-product-headline";
pub const PRICE: &str = "div.price";
pub const DESCRIPTION: &str = "div.text-original";
pub const ZOOM_PICTURE: &str = "picture.ZoomImagePicture";
pub const PICTURE_IMAGE: &str = "img";

/// Every named selector, for diagnostics.
pub const ALL: [(&str, &str); 6] = [
    ("product link", PRODUCT_LINK),
    ("title", TITLE),
    ("price", PRICE),
    ("description", DESCRIPTION),
    ("zoom picture", ZOOM_PICTURE),
    ("picture image", PICTURE_IMAGE),
];

fn compile(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("Invalid selector {css:?}: {e:?}"))
}

pub static PRODUCT_LINK_SELECTOR: Lazy<Selector> = Lazy::new(|| compile(PRODUCT_LINK));
pub static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| compile(TITLE));
pub static PRICE_SELECTOR: Lazy<Selector> = Lazy::new(|| compile(PRICE));
pub static DESCRIPTION_SELECTOR: Lazy<Selector> = Lazy::new(|| compile(DESCRIPTION));
pub static ZOOM_PICTURE_SELECTOR: Lazy<Selector> = Lazy::new(|| compile(ZOOM_PICTURE));
pub static PICTURE_IMAGE_SELECTOR: Lazy<Selector> = Lazy::new(|| compile(PICTURE_IMAGE));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_selectors_compile() {
        for (name, css) in ALL {
            assert!(Selector::parse(css).is_ok(), "{name} selector {css:?} is invalid");
        }
    }
}
