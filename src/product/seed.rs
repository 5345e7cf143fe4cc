use super::{ProductId, ProductRecord};

/// The catalog a fresh dashboard session starts with.
pub fn seed_products() -> Vec<ProductRecord> {
    [
        (1, "Premium Widget", "WDG-001", 145, 29.99, "Electronics"),
        (2, "Deluxe Gadget", "GDG-002", 67, 49.99, "Accessories"),
        (3, "Standard Tool", "TOL-003", 234, 19.99, "Tools"),
        (4, "Professional Kit", "KIT-004", 89, 99.99, "Kits"),
        (5, "Basic Component", "CMP-005", 12, 14.99, "Components"),
    ]
    .into_iter()
    .map(|(id, name, sku, stock, price, category)| ProductRecord {
        id: ProductId(id),
        name: name.to_string(),
        sku: sku.to_string(),
        category: category.to_string(),
        stock,
        price,
    })
    .collect()
}
