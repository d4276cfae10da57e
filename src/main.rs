//! Lepix storefront CLI

use std::process;

use clap::{Args, Parser, Subcommand};
use tabled::{Table, Tabled, settings::Style};

use lepix::cart::{CartStore, LineId};
use lepix::catalog::{CatalogClient, Product, VariantSelection};
use lepix::checkout::{ContactDetails, submit_order};
use lepix::config::{ApiConfig, LoggingConfig, StorageConfig};
use lepix::observability;
use lepix::prices::format_price;
use lepix::storage::FileCartStorage;

#[derive(Debug, Parser)]
#[command(name = "lepix", about = "Lepix storefront CLI", long_about = None)]
struct Cli {
    #[command(flatten)]
    api: ApiConfig,

    #[command(flatten)]
    storage: StorageConfig,

    #[command(flatten)]
    logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse the catalog
    Catalog(CatalogCommand),

    /// Inspect and mutate the shopping cart
    Cart(CartCommand),

    /// Submit the cart as an order
    Checkout(CheckoutArgs),
}

#[derive(Debug, Args)]
struct CatalogCommand {
    #[command(subcommand)]
    command: CatalogSubcommand,
}

#[derive(Debug, Subcommand)]
enum CatalogSubcommand {
    /// List categories
    Categories,

    /// List brands
    Brands,

    /// List products, optionally per category
    Products(ProductsArgs),

    /// Show one product with its variants
    Product(ProductArgs),
}

#[derive(Debug, Args)]
struct ProductsArgs {
    /// Only products of this category
    #[arg(long)]
    category: Option<i64>,
}

#[derive(Debug, Args)]
struct ProductArgs {
    /// Product id
    id: i64,
}

#[derive(Debug, Args)]
struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Show the cart lines and totals
    Show,

    /// Add a product to the cart
    Add(AddArgs),

    /// Remove a line
    Remove(LineArgs),

    /// Change the quantity of a line
    SetQty(SetQtyArgs),

    /// Empty the cart
    Clear,
}

#[derive(Debug, Args)]
struct AddArgs {
    /// Product id
    #[arg(long)]
    product: i64,

    /// Pin an exact variant id
    #[arg(long, conflicts_with_all = ["color", "size"])]
    variant: Option<i64>,

    /// Variant colour
    #[arg(long)]
    color: Option<String>,

    /// Variant size
    #[arg(long)]
    size: Option<String>,

    /// Units to add
    #[arg(long, default_value_t = 1)]
    qty: u32,
}

#[derive(Debug, Args)]
struct LineArgs {
    /// Line id, in "product:variant" form
    #[arg(long)]
    line: LineId,
}

#[derive(Debug, Args)]
struct SetQtyArgs {
    /// Line id, in "product:variant" form
    #[arg(long)]
    line: LineId,

    /// New quantity
    #[arg(long)]
    qty: u32,
}

#[derive(Debug, Args)]
struct CheckoutArgs {
    /// Contact name
    #[arg(long)]
    name: String,

    /// Contact email
    #[arg(long)]
    email: String,

    /// Contact phone
    #[arg(long)]
    phone: Option<String>,
}

#[derive(Tabled)]
struct CartRow {
    #[tabled(rename = "Line")]
    line: String,

    #[tabled(rename = "Product")]
    product: String,

    #[tabled(rename = "Unit price")]
    unit_price: String,

    #[tabled(rename = "Qty")]
    quantity: u32,

    #[tabled(rename = "Total")]
    total: String,
}

#[tokio::main]
async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = observability::init_subscriber(&cli.logging) {
        eprintln!("{error}");
        process::exit(1);
    }

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    let client = CatalogClient::new(cli.api.catalog());

    match cli.command {
        Commands::Catalog(CatalogCommand { command }) => run_catalog(&client, command).await,
        Commands::Cart(CartCommand { command }) => {
            let mut store = open_store(&cli.storage)?;

            run_cart(&client, &mut store, command).await
        }
        Commands::Checkout(args) => {
            let mut store = open_store(&cli.storage)?;

            run_checkout(&mut store, args).await
        }
    }
}

fn open_store(config: &StorageConfig) -> Result<CartStore, String> {
    let storage = FileCartStorage::new(&config.dir);

    CartStore::open(Box::new(storage)).map_err(|error| format!("failed to open cart: {error}"))
}

async fn run_catalog(client: &CatalogClient, command: CatalogSubcommand) -> Result<(), String> {
    match command {
        CatalogSubcommand::Categories => {
            let categories = client
                .categories()
                .await
                .map_err(|error| format!("failed to list categories: {error}"))?;

            for category in categories {
                println!("{}\t{}\t/{}", category.id, category.name, category.slug);
            }
        }
        CatalogSubcommand::Brands => {
            let brands = client
                .brands()
                .await
                .map_err(|error| format!("failed to list brands: {error}"))?;

            for brand in brands {
                println!(
                    "{}\t{}\t{}",
                    brand.id,
                    brand.name,
                    brand.website.unwrap_or_default()
                );
            }
        }
        CatalogSubcommand::Products(args) => {
            let products = match args.category {
                Some(category_id) => client.products_by_category(category_id).await,
                None => client.products().await,
            }
            .map_err(|error| format!("failed to list products: {error}"))?;

            for product in products {
                println!(
                    "{}\t{}\t{}\t{}",
                    product.id,
                    product.name,
                    format_price(product.price),
                    product.brand_name.unwrap_or_default()
                );
            }
        }
        CatalogSubcommand::Product(args) => {
            let product = client
                .product(args.id)
                .await
                .map_err(|error| format!("failed to fetch product {}: {error}", args.id))?;

            print_product(&product);
        }
    }

    Ok(())
}

fn print_product(product: &Product) {
    println!("{} ({})", product.name, format_price(product.price));

    if let Some(brand) = &product.brand_name {
        println!("Brand: {brand}");
    }

    if let Some(description) = &product.description {
        println!("{description}");
    }

    for variant in &product.variants {
        println!(
            "  variant {}\t{}\t{}\t{}{}",
            variant.id,
            variant.color.as_deref().unwrap_or("-"),
            variant.size.as_deref().unwrap_or("-"),
            format_price(variant.price),
            if variant.is_default { "\t(default)" } else { "" }
        );
    }
}

async fn run_cart(
    client: &CatalogClient,
    store: &mut CartStore,
    command: CartSubcommand,
) -> Result<(), String> {
    match command {
        CartSubcommand::Show => print_cart(store),
        CartSubcommand::Add(args) => {
            let product = client
                .product(args.product)
                .await
                .map_err(|error| format!("failed to fetch product {}: {error}", args.product))?;

            let selection = match args.variant {
                Some(variant_id) => VariantSelection::for_variant(&product, variant_id)
                    .ok_or_else(|| {
                        format!("product {} has no variant {variant_id}", args.product)
                    })?,
                None if args.color.is_some() || args.size.is_some() => {
                    VariantSelection::with_choice(&product, args.color, args.size)
                }
                None => VariantSelection::new(&product),
            };

            let input = selection.to_add_to_cart();
            let name = input.display_name.clone().unwrap_or_else(|| input.name.clone());

            store.add(input, args.qty);

            println!(
                "Added {name} × {} ({} items in cart)",
                args.qty.max(1),
                store.total_items()
            );
        }
        CartSubcommand::Remove(args) => {
            store.remove(&args.line);

            println!("Removed {} ({} items in cart)", args.line, store.total_items());
        }
        CartSubcommand::SetQty(args) => {
            store.set_qty(&args.line, args.qty);

            println!("{} items in cart", store.total_items());
        }
        CartSubcommand::Clear => {
            store.clear();

            println!("Cart cleared");
        }
    }

    Ok(())
}

fn print_cart(store: &CartStore) {
    if store.items().is_empty() {
        println!("Cart is empty");
        return;
    }

    let rows: Vec<CartRow> = store
        .items()
        .iter()
        .map(|line| CartRow {
            line: line.line_id.to_string(),
            product: line.product.name.clone(),
            unit_price: format_price(line.product.price),
            quantity: line.quantity,
            total: format_price(line.line_total()),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());

    println!("{table}");
    println!(
        "{} items, total {}",
        store.total_items(),
        format_price(store.total_amount())
    );
}

async fn run_checkout(store: &mut CartStore, args: CheckoutArgs) -> Result<(), String> {
    let contact = ContactDetails {
        name: args.name,
        email: args.email,
        phone: args.phone,
    };

    let confirmation = submit_order(store, &contact).await;

    println!(
        "Thanks! Your order was sent: {} lines, {} items, total {}. We'll be in touch shortly.",
        confirmation.lines,
        confirmation.total_items,
        format_price(confirmation.total_amount)
    );

    Ok(())
}
