//! Catalog smoke tool: fetch the catalog once and summarize it per
//! category. Useful for checking an endpoint before pointing the frontend
//! at it.

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::collections::BTreeMap;

    use storefront_client::{CatalogClient, DEFAULT_BASE_URL};

    storefront_observability::init();

    let base_url = std::env::var("STOREFRONT_API_URL")
        .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    tracing::info!(%base_url, "fetching catalog");

    let client = CatalogClient::new(base_url);
    let products = client.fetch_products().await?;

    let mut per_category: BTreeMap<&str, usize> = BTreeMap::new();
    for product in &products {
        *per_category.entry(product.category.as_str()).or_default() += 1;
    }

    println!("{} products", products.len());
    for (category, count) in per_category {
        println!("  {category}: {count}");
    }

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
