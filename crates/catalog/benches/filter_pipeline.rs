use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use storefront_catalog::{Criteria, PriceRange, PriceSort, Product, ProductId, filter_and_sort};

fn sample_products(count: u64) -> Vec<Product> {
    let categories = ["smartphones", "laptops", "fragrances", "groceries"];
    (0..count)
        .map(|i| Product {
            id: ProductId::new(i),
            title: format!("Product {i}"),
            description: "Benchmark fixture".to_string(),
            price: ((i * 37) % 200) as f64 + 0.5,
            category: categories[(i % categories.len() as u64) as usize].to_string(),
            thumbnail: String::new(),
        })
        .collect()
}

fn bench_filter_and_sort(c: &mut Criterion) {
    let products = sample_products(1_000);

    let passthrough = Criteria::default();
    c.bench_function("filter_and_sort/1k_passthrough", |b| {
        b.iter(|| filter_and_sort(black_box(&products), black_box(&passthrough)))
    });

    let mut narrowed = Criteria::default();
    narrowed.query = "product 1".to_string();
    narrowed.category = "laptops".to_string();
    narrowed.price_range = PriceRange::TenToFifty;
    c.bench_function("filter_and_sort/1k_narrowed", |b| {
        b.iter(|| filter_and_sort(black_box(&products), black_box(&narrowed)))
    });

    let mut sorted = Criteria::default();
    sorted.price_sort = PriceSort::Ascending;
    c.bench_function("filter_and_sort/1k_price_sorted", |b| {
        b.iter(|| filter_and_sort(black_box(&products), black_box(&sorted)))
    });
}

criterion_group!(benches, bench_filter_and_sort);
criterion_main!(benches);
