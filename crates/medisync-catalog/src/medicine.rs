//! Medicine product record.

use serde::{Deserialize, Serialize};

use crate::ids::MedicineId;

/// A single product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Medicine {
    /// Unique identifier. Older documents spell the key `_id`.
    #[serde(alias = "_id")]
    pub id: MedicineId,
    /// Display name.
    pub name: String,
    /// Image URL.
    pub image: String,
    /// Brand line shown under the name.
    pub brand: String,
    /// Category label used for filtering.
    pub category: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Price in the store's currency unit.
    pub price: f64,
}

impl Medicine {
    /// Format the price as `<prefix> <price>`, e.g. `LKR 160`.
    ///
    /// No locale grouping or rounding is applied.
    pub fn price_display(&self, currency_prefix: &str) -> String {
        format!("{} {}", currency_prefix, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panadol() -> Medicine {
        Medicine {
            id: MedicineId::new("1"),
            name: "Panadol".to_string(),
            image: "https://example.com/panadol.jpeg".to_string(),
            brand: "Panadol".to_string(),
            category: "Pain Relief".to_string(),
            description: "Effective relief for headaches and minor aches.".to_string(),
            price: 160.0,
        }
    }

    #[test]
    fn test_price_display_integral() {
        assert_eq!(panadol().price_display("LKR"), "LKR 160");
    }

    #[test]
    fn test_price_display_fractional() {
        let mut m = panadol();
        m.price = 99.5;
        assert_eq!(m.price_display("LKR"), "LKR 99.5");
    }

    #[test]
    fn test_deserialize_legacy_id_key() {
        let json = r#"{
            "_id": "9",
            "name": "Cetirizine",
            "image": "",
            "brand": "Zyrtec",
            "category": "Allergy",
            "price": 75
        }"#;
        let m: Medicine = serde_json::from_str(json).unwrap();
        assert_eq!(m.id.as_str(), "9");
        assert_eq!(m.description, "");
        assert_eq!(m.price, 75.0);
    }
}
