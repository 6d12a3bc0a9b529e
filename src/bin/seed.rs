use anyhow::Context;
use inventory_records::infra::{config, logging};
use inventory_records::{NewProduct, ProductStore, StoreError};
use std::path::PathBuf;

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin seed -- <products.json>\n\
         \n\
         Creates every product in the given JSON array in the store file.\n\
         Honors PRODUCTS_FILE (default: {}).\n",
        config::DEFAULT_PRODUCTS_FILE
    );
    std::process::exit(2);
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }
    let [input] = args.as_slice() else {
        usage_and_exit();
    };
    let input = PathBuf::from(input);

    let raw = std::fs::read(&input).with_context(|| format!("reading {}", input.display()))?;
    let candidates: Vec<NewProduct> = serde_json::from_slice(&raw)
        .with_context(|| format!("{} must hold a JSON array of products", input.display()))?;

    let mut store = ProductStore::new(config::products_file());
    let (mut created, mut rejected) = (0usize, 0usize);

    for candidate in candidates {
        let title = candidate.title.clone();
        match store.create(candidate) {
            Ok(product) => {
                created += 1;
                tracing::info!(id = product.id, title = %product.title, "seeded");
            }
            Err(StoreError::Validation(reason)) => {
                rejected += 1;
                tracing::warn!(title = %title, %reason, "skipped");
            }
            Err(e) => return Err(anyhow::Error::new(e).context("seeding aborted")),
        }
    }

    println!(
        "created={} rejected={} file={}",
        created,
        rejected,
        store.path().display()
    );
    Ok(())
}
