use anyhow::{Context, Result};
use clap::Parser;
use pg_finder::catalog::{self, Catalog};
use pg_finder::{BookingQuote, Config, Listing, PriceRange, Query, SortKey};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Search paying-guest listings
#[derive(Debug, Parser)]
#[command(name = "pg-finder", version)]
struct Args {
    /// Free-text term matched against name, locality and city
    #[arg(long)]
    text: Option<String>,

    /// Occupancy category (boys, girls, co-ed); repeatable
    #[arg(long = "category")]
    categories: Vec<String>,

    #[arg(long, default_value_t = PriceRange::default().low)]
    min_price: i64,

    #[arg(long, default_value_t = PriceRange::default().high)]
    max_price: i64,

    /// Required amenity ("Food Included" checks the food flag); repeatable
    #[arg(long = "amenity")]
    amenities: Vec<String>,

    /// price_asc, price_desc, rating_desc or a page label such as "Rating"
    #[arg(long, default_value = "Rating")]
    sort: String,

    /// Show at most this many results
    #[arg(long)]
    limit: Option<usize>,

    /// Show one listing and its booking quote instead of searching
    #[arg(long)]
    slug: Option<String>,

    /// Room to quote together with --slug
    #[arg(long, requires = "slug")]
    room: Option<String>,

    /// Print JSON instead of cards
    #[arg(long)]
    json: bool,
}

impl Args {
    fn query(&self) -> Query {
        Query {
            text: self.text.clone(),
            categories: self.categories.iter().cloned().collect(),
            price_range: PriceRange::new(self.min_price, self.max_price),
            amenities: self.amenities.iter().cloned().collect(),
            sort_key: SortKey::parse(&self.sort),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    let source = config.catalog_source()?;
    let catalog = Catalog::load(source.as_ref()).await?;

    match &args.slug {
        Some(slug) => show_listing(&catalog, slug, args.room.as_deref(), args.json),
        None => run_search(&catalog, &args),
    }
}

fn run_search(catalog: &Catalog, args: &Args) -> Result<()> {
    let query = args.query();
    info!(
        "Searching {} listings ({} active filters)",
        catalog.listings().len(),
        query.active_filter_count()
    );

    let mut results = catalog.search(&query);
    let found = results.len();
    if let Some(limit) = args.limit {
        results.truncate(limit);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if found == 0 {
        println!("No PGs found. Try clearing some filters.");
        return Ok(());
    }

    match query.sort_key {
        Some(key) => println!("{} PGs Found (sorted by {})\n", found, key.label()),
        None => println!("{} PGs Found\n", found),
    }
    for (i, listing) in results.iter().enumerate() {
        print_card(i + 1, listing);
    }

    if query.text.is_none() && query.active_filter_count() == 0 {
        let featured = catalog::featured(catalog.listings(), catalog::FEATURED_LIMIT);
        let names: Vec<&str> = featured.iter().map(|l| l.name.as_str()).collect();
        println!("Featured: {}", names.join(", "));

        let cities: Vec<String> = catalog::popular_cities()
            .iter()
            .map(|c| format!("{} ({}+)", c.name, c.count))
            .collect();
        println!("Popular cities: {}", cities.join(", "));
    }

    Ok(())
}

fn show_listing(catalog: &Catalog, slug: &str, room: Option<&str>, json: bool) -> Result<()> {
    let listing = catalog::find_by_slug(catalog.listings(), slug)
        .with_context(|| format!("No listing with slug {}", slug))?;
    let quote = BookingQuote::for_listing(listing, room)?;

    if json {
        let value = serde_json::json!({ "listing": listing, "quote": quote });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    print_card(1, listing);
    for room in &listing.rooms {
        println!(
            "   {:?} sharing: ₹{}/month, deposit ₹{}, {} beds available{}",
            room.room_type,
            room.price,
            room.deposit,
            room.available,
            if room.ac { ", AC" } else { "" }
        );
    }
    println!();
    println!("   Monthly rent:     ₹{}", quote.monthly_rent);
    println!("   Security deposit: ₹{}", quote.deposit);
    if quote.food_included {
        println!("   Food:             included");
    }
    println!("   Due at move-in:   ₹{}", quote.move_in_total);

    Ok(())
}

fn print_card(n: usize, listing: &Listing) {
    println!("{}. {} ({})", n, listing.name, listing.occupancy.label());
    println!("   {}, {}", listing.locality, listing.city);
    println!(
        "   ₹{} - ₹{} / month, rated {:.1} ({} reviews){}",
        listing.min_price,
        listing.max_price,
        listing.rating,
        listing.review_count,
        if listing.verified { ", verified" } else { "" }
    );
    println!("   Amenities: {}", listing.amenities.join(", "));
    println!("   Slug: {}", listing.slug);
    println!();
}
