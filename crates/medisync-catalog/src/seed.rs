//! Built-in catalog data.

use crate::ids::MedicineId;
use crate::medicine::Medicine;

const PILLS_IMAGE: &str =
    "https://images.pexels.com/photos/159211/headache-pain-pills-medication-159211.jpeg";

/// Category labels shown as filter buttons, in display order.
pub(crate) const CATEGORIES: [&str; 5] = [
    "Pain Relief",
    "Allergy",
    "Digestive",
    "Cold & Flu",
    "Vitamins",
];

pub(crate) fn medicines() -> Vec<Medicine> {
    vec![
        record(
            "1",
            "Panadol",
            "Pain Relief",
            "Effective relief for headaches and minor aches.",
            160.0,
        ),
        record(
            "2",
            "Amoxicillin",
            "Antibiotic",
            "Broad-spectrum antibiotic for bacterial infections.",
            200.0,
        ),
        record(
            "3",
            "Ibuprofen",
            "Pain Relief",
            "Nonsteroidal anti-inflammatory drug.",
            180.0,
        ),
        record(
            "4",
            "Paracetamol",
            "Pain Relief",
            "Common pain reliever and fever reducer.",
            150.0,
        ),
    ]
}

pub(crate) fn categories() -> Vec<String> {
    CATEGORIES.iter().map(|c| c.to_string()).collect()
}

// Every sample record uses its name as the brand.
fn record(id: &str, name: &str, category: &str, description: &str, price: f64) -> Medicine {
    Medicine {
        id: MedicineId::new(id),
        name: name.to_string(),
        image: PILLS_IMAGE.to_string(),
        brand: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        price,
    }
}
