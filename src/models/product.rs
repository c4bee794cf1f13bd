use serde::Serialize;

/// WooCommerce product import columns, in file order.
pub const EXPORT_COLUMNS: [&str; 44] = [
    "ID",
    "Type",
    "SKU",
    "Name",
    "Published",
    "Is featured?",
    "Visibility in catalog",
    "Short description",
    "Description",
    "Date sale price starts",
    "Date sale price ends",
    "Tax status",
    "Tax class",
    "In stock?",
    "Stock",
    "Low stock amount",
    "Backorders allowed?",
    "Sold individually?",
    "Weight (kg)",
    "Length (cm)",
    "Width (cm)",
    "Height (cm)",
    "Allow customer reviews?",
    "Purchase note",
    "Sale price",
    "Regular price",
    "Categories",
    "Tags",
    "Shipping class",
    "Images",
    "Download limit",
    "Download expiry days",
    "Parent",
    "Grouped products",
    "Upsells",
    "Cross-sells",
    "External URL",
    "Button text",
    "Position",
    "Meta: _custom_field",
    "Attribute 1 name",
    "Attribute 1 value(s)",
    "Attribute 1 visible",
    "Attribute 1 global",
];

pub const BRAND_ATTRIBUTE_NAME: &str = "Marke";

/// Raw values pulled off a detail page before they are mapped onto the
/// import schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    pub title: String,
    pub price: String,
    pub description: String,
    pub image_urls: Vec<String>,
}

/// One row of the export file. Field order must match [`EXPORT_COLUMNS`].
/// `ID` and `SKU` stay blank; the shop assigns them on import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRecord {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Type")]
    pub product_type: String,
    #[serde(rename = "SKU")]
    pub sku: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Published")]
    pub published: u8,
    #[serde(rename = "Is featured?")]
    pub is_featured: u8,
    #[serde(rename = "Visibility in catalog")]
    pub visibility: String,
    #[serde(rename = "Short description")]
    pub short_description: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Date sale price starts")]
    pub sale_price_starts: String,
    #[serde(rename = "Date sale price ends")]
    pub sale_price_ends: String,
    #[serde(rename = "Tax status")]
    pub tax_status: String,
    #[serde(rename = "Tax class")]
    pub tax_class: String,
    #[serde(rename = "In stock?")]
    pub in_stock: u8,
    #[serde(rename = "Stock")]
    pub stock: String,
    #[serde(rename = "Low stock amount")]
    pub low_stock_amount: String,
    #[serde(rename = "Backorders allowed?")]
    pub backorders_allowed: u8,
    #[serde(rename = "Sold individually?")]
    pub sold_individually: u8,
    #[serde(rename = "Weight (kg)")]
    pub weight_kg: String,
    #[serde(rename = "Length (cm)")]
    pub length_cm: String,
    #[serde(rename = "Width (cm)")]
    pub width_cm: String,
    #[serde(rename = "Height (cm)")]
    pub height_cm: String,
    #[serde(rename = "Allow customer reviews?")]
    pub allow_reviews: u8,
    #[serde(rename = "Purchase note")]
    pub purchase_note: String,
    #[serde(rename = "Sale price")]
    pub sale_price: String,
    #[serde(rename = "Regular price")]
    pub regular_price: String,
    #[serde(rename = "Categories")]
    pub categories: String,
    #[serde(rename = "Tags")]
    pub tags: String,
    #[serde(rename = "Shipping class")]
    pub shipping_class: String,
    /// Comma separated image URLs.
    #[serde(rename = "Images")]
    pub images: String,
    #[serde(rename = "Download limit")]
    pub download_limit: String,
    #[serde(rename = "Download expiry days")]
    pub download_expiry_days: String,
    #[serde(rename = "Parent")]
    pub parent: String,
    #[serde(rename = "Grouped products")]
    pub grouped_products: String,
    #[serde(rename = "Upsells")]
    pub upsells: String,
    #[serde(rename = "Cross-sells")]
    pub cross_sells: String,
    #[serde(rename = "External URL")]
    pub external_url: String,
    #[serde(rename = "Button text")]
    pub button_text: String,
    #[serde(rename = "Position")]
    pub position: u32,
    #[serde(rename = "Meta: _custom_field")]
    pub meta_custom_field: String,
    #[serde(rename = "Attribute 1 name")]
    pub attribute_1_name: String,
    #[serde(rename = "Attribute 1 value(s)")]
    pub attribute_1_values: String,
    #[serde(rename = "Attribute 1 visible")]
    pub attribute_1_visible: u8,
    #[serde(rename = "Attribute 1 global")]
    pub attribute_1_global: u8,
}

impl Default for ProductRecord {
    fn default() -> Self {
        Self {
            id: String::new(),
            product_type: "simple".to_string(),
            sku: String::new(),
            name: String::new(),
            published: 1,
            is_featured: 0,
            visibility: "visible".to_string(),
            short_description: String::new(),
            description: String::new(),
            sale_price_starts: String::new(),
            sale_price_ends: String::new(),
            tax_status: "taxable".to_string(),
            tax_class: String::new(),
            in_stock: 1,
            stock: String::new(),
            low_stock_amount: String::new(),
            backorders_allowed: 0,
            sold_individually: 0,
            weight_kg: String::new(),
            length_cm: String::new(),
            width_cm: String::new(),
            height_cm: String::new(),
            allow_reviews: 1,
            purchase_note: String::new(),
            sale_price: String::new(),
            regular_price: String::new(),
            categories: String::new(),
            tags: String::new(),
            shipping_class: String::new(),
            images: String::new(),
            download_limit: String::new(),
            download_expiry_days: String::new(),
            parent: String::new(),
            grouped_products: String::new(),
            upsells: String::new(),
            cross_sells: String::new(),
            external_url: String::new(),
            button_text: String::new(),
            position: 0,
            meta_custom_field: String::new(),
            attribute_1_name: BRAND_ATTRIBUTE_NAME.to_string(),
            attribute_1_values: String::new(),
            attribute_1_visible: 1,
            attribute_1_global: 1,
        }
    }
}

impl ProductRecord {
    pub fn from_extracted(fields: ExtractedFields) -> Self {
        let brand = brand_from_title(&fields.title);

        Self {
            name: fields.title,
            short_description: fields.description.clone(),
            description: fields.description,
            regular_price: fields.price,
            images: fields.image_urls.join(","),
            attribute_1_values: brand,
            ..Default::default()
        }
    }

    pub fn brand(&self) -> &str {
        &self.attribute_1_values
    }
}

/// First whitespace-delimited token of the title, or empty.
pub fn brand_from_title(title: &str) -> String {
    title
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn serialized_header(record: &ProductRecord) -> Vec<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(record).unwrap();
        let bytes = writer.into_inner().unwrap();
        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        reader
            .headers()
            .unwrap()
            .iter()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn serde_field_order_matches_export_columns() {
        let header = serialized_header(&ProductRecord::default());
        assert_eq!(header, EXPORT_COLUMNS.to_vec());
    }

    #[test]
    fn from_extracted_maps_fields_and_keeps_constants() {
        let record = ProductRecord::from_extracted(ExtractedFields {
            title: "Technics SL-1210 MK7".to_string(),
            price: "899,–".to_string(),
            description: "Direct drive turntable".to_string(),
            image_urls: vec!["a.jpg".to_string(), "b.jpg".to_string()],
        });

        assert_eq!(record.name, "Technics SL-1210 MK7");
        assert_eq!(record.regular_price, "899,–");
        assert_eq!(record.short_description, "Direct drive turntable");
        assert_eq!(record.description, "Direct drive turntable");
        assert_eq!(record.images, "a.jpg,b.jpg");
        assert_eq!(record.brand(), "Technics");
        assert_eq!(record.product_type, "simple");
        assert_eq!(record.attribute_1_name, "Marke");
        assert_eq!(record.published, 1);
        assert_eq!(record.position, 0);
        assert!(record.id.is_empty());
        assert!(record.sku.is_empty());
    }

    #[test]
    fn brand_is_empty_for_blank_title() {
        assert_eq!(brand_from_title(""), "");
        assert_eq!(brand_from_title("   "), "");
        assert_eq!(brand_from_title("  Reloop  RP-7000"), "Reloop");
    }
}
