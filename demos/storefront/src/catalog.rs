//! The vintage catalog the shop currently merchandises.
//!
//! Hardcoded the way the buying team hands it over: four racks, each a
//! run of photographed one-off pieces sharing a rack price.

use thrift_commerce::prelude::*;

/// Build the current catalog.
pub fn vintage_catalog() -> Catalog {
    Catalog::new(vec![
        Category::new("Contrast T-Shirt", Money::from_rupees(999))
            .with_description(
                "Vintage Contrast T-Shirt, premium cotton blend with bold contrast panels. \
                 Clean, rare, and easy to style.",
            )
            .with_sizes(["M", "L", "XL"])
            .with_products(rack(
                1,
                12,
                "Contrast T-Shirt",
                999,
                "contrast-tshirt",
                Some(&["M", "L", "XL"]),
                "Vintage Contrast T-Shirt, excellent condition.",
            )),
        Category::new("Faux Jacket", Money::from_rupees(2499))
            .with_description(
                "Classic faux leather jacket, warm lining, strong silhouette, and a timeless \
                 BSS FASHION staple.",
            )
            .with_sizes(["L", "XL"])
            .with_products(rack(
                101,
                14,
                "Faux Jacket",
                2499,
                "faux-jacket",
                Some(&["L", "XL"]),
                "Classic faux jacket, excellent condition.",
            )),
        Category::new("Shoes", Money::from_rupees(2999))
            .with_description(
                "Vintage footwear, solid build, clean finish, and ready for daily wear.",
            )
            .with_sizes(["UK 43", "UK 44", "UK 45"])
            .with_products(rack(
                201,
                32,
                "Shoes",
                2999,
                "shoes",
                Some(&["UK 43", "UK 44", "UK 45"]),
                "Vintage shoes, excellent condition.",
            )),
        Category::new("Tote Bag", Money::from_rupees(1999)).with_products(rack(
            301,
            28,
            "Tote Bag",
            1999,
            "tote-bag",
            None,
            "Everyday tote, clean, roomy, and easy styling.",
        )),
    ])
}

/// Marketing tags for a piece, derived from its rack.
pub fn tags_for(product: &Product) -> Vec<&'static str> {
    if product.category.contains("Jacket") {
        vec!["Premium", "Vintage"]
    } else if product.category.contains("Shoes") {
        vec!["Rare", "Vintage"]
    } else if product.category.contains("Tote") {
        vec!["Classic", "Vintage"]
    } else {
        vec!["Vintage", "Last piece"]
    }
}

fn rack(
    first_id: u32,
    count: u32,
    category: &str,
    rupees: i64,
    slug: &str,
    sizes: Option<&[&str]>,
    description: &str,
) -> Vec<Product> {
    (0..count)
        .map(|i| {
            let image = format!("/{slug}-{}.jpg", i + 1);
            let mut product = Product::new(
                first_id + i,
                format!("{category} - View {}", i + 1),
                category,
                Money::from_rupees(rupees),
                image.clone(),
            )
            .with_description(description)
            .with_all_images([image]);
            if let Some(sizes) = sizes {
                product = product.with_sizes(sizes.iter().copied());
            }
            product
        })
        .collect()
}
