//! Catalog inspection commands.

use anyhow::Result;
use serde::Serialize;

use medisync_sdk::medisync_catalog::{Catalog, Medicine, Selection};

use super::{CatalogArgs, CatalogCommand};
use crate::context::Context;
use crate::output::category_badge;

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;

    match args.command {
        CatalogCommand::List { category } => {
            let selection = category.as_deref().map(Selection::parse).unwrap_or_default();
            list_medicines(&catalog, &selection, ctx)
        }
        CatalogCommand::Show { id } => show_medicine(&catalog, &id, ctx),
        CatalogCommand::Check => check_catalog(&catalog, ctx),
    }
}

fn list_medicines(catalog: &Catalog, selection: &Selection, ctx: &Context) -> Result<()> {
    let visible = catalog.filter(selection);

    if ctx.output.is_json() {
        ctx.output.json(&visible);
        return Ok(());
    }

    ctx.output.header(&format!("Medicines ({})", selection));

    if let Selection::Category(label) = selection {
        if !catalog.is_known_category(label) {
            ctx.output
                .warn(&format!("'{}' is not a known category label", label));
        }
    }

    if visible.is_empty() {
        ctx.output.info("No medicines in this category.");
        return Ok(());
    }

    let rows = table_rows(&visible, &ctx.config.store.currency);
    let widths = column_widths(&rows);
    for row in &rows {
        let cols: Vec<&str> = row.iter().map(String::as_str).collect();
        ctx.output.table_row(&cols, &widths);
    }

    ctx.output.debug(&format!(
        "{} of {} medicines visible",
        visible.len(),
        catalog.len()
    ));

    Ok(())
}

fn show_medicine(catalog: &Catalog, id: &str, ctx: &Context) -> Result<()> {
    let medicine = catalog.require(id)?;

    if ctx.output.is_json() {
        ctx.output.json(medicine);
        return Ok(());
    }

    ctx.output.header(&medicine.name);
    ctx.output.kv("id", medicine.id.as_str());
    ctx.output.kv("brand", &medicine.brand);
    ctx.output.kv(
        "category",
        &category_badge(&medicine.category, catalog.is_known_category(&medicine.category)),
    );
    ctx.output
        .kv("price", &medicine.price_display(&ctx.config.store.currency));
    ctx.output.kv("image", &medicine.image);
    if !medicine.description.is_empty() {
        ctx.output.kv("description", &medicine.description);
    }

    Ok(())
}

fn check_catalog(catalog: &Catalog, ctx: &Context) -> Result<()> {
    let report = CheckReport::new(catalog);

    if ctx.output.is_json() {
        ctx.output.json(&report);
        return Ok(());
    }

    ctx.output.header("Checking catalog");
    ctx.output.kv("medicines", &report.medicines.to_string());
    ctx.output.kv("categories", &report.categories.to_string());

    for item in &report.uncategorized {
        ctx.output.warn(&format!(
            "Medicine {} ({}) has unknown category '{}' and is only listed under All",
            item.id, item.name, item.category
        ));
    }

    for label in &report.empty_categories {
        ctx.output
            .info(&format!("Category '{}' has no medicines", label));
    }

    ctx.output.success("Catalog is valid");

    Ok(())
}

/// Result of `catalog check`.
///
/// Loading already rejected structural errors; what is left are
/// observations.
#[derive(Debug, Serialize, PartialEq)]
pub struct CheckReport {
    pub medicines: usize,
    pub categories: usize,
    pub uncategorized: Vec<UncategorizedItem>,
    pub empty_categories: Vec<String>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct UncategorizedItem {
    pub id: String,
    pub name: String,
    pub category: String,
}

impl CheckReport {
    pub fn new(catalog: &Catalog) -> Self {
        let uncategorized = catalog
            .uncategorized()
            .into_iter()
            .map(|m| UncategorizedItem {
                id: m.id.to_string(),
                name: m.name.clone(),
                category: m.category.clone(),
            })
            .collect();

        let empty_categories = catalog
            .categories()
            .iter()
            .filter(|label| catalog.count(&Selection::category(label.as_str())) == 0)
            .cloned()
            .collect();

        Self {
            medicines: catalog.len(),
            categories: catalog.categories().len(),
            uncategorized,
            empty_categories,
        }
    }
}

/// Header row followed by one row per medicine.
fn table_rows(medicines: &[&Medicine], currency: &str) -> Vec<[String; 5]> {
    let header = ["ID", "NAME", "BRAND", "CATEGORY", "PRICE"].map(String::from);

    std::iter::once(header)
        .chain(medicines.iter().map(|m| {
            [
                m.id.to_string(),
                m.name.clone(),
                m.brand.clone(),
                m.category.clone(),
                m.price_display(currency),
            ]
        }))
        .collect()
}

fn column_widths(rows: &[[String; 5]]) -> Vec<usize> {
    (0..5)
        .map(|i| rows.iter().map(|r| r[i].chars().count()).max().unwrap_or(0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_report_builtin() {
        let report = CheckReport::new(&Catalog::builtin());

        assert_eq!(report.medicines, 4);
        assert_eq!(report.categories, 5);
        assert_eq!(
            report.uncategorized,
            vec![UncategorizedItem {
                id: "2".to_string(),
                name: "Amoxicillin".to_string(),
                category: "Antibiotic".to_string(),
            }]
        );
        assert_eq!(
            report.empty_categories,
            vec!["Allergy", "Digestive", "Cold & Flu", "Vitamins"]
        );
    }

    #[test]
    fn test_table_rows_filtered() {
        let catalog = Catalog::builtin();
        let visible = catalog.filter(&Selection::category("Pain Relief"));
        let rows = table_rows(&visible, "LKR");

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0][0], "ID");
        assert_eq!(rows[1][1], "Panadol");
        assert_eq!(rows[3][4], "LKR 150");

        let widths = column_widths(&rows);
        assert_eq!(widths[1], "Paracetamol".len());
        assert_eq!(widths[3], "Pain Relief".len());
    }
}
