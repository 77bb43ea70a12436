use anyhow::Context;
use rental_scout::config::Config;
use rental_scout::listings::{FixtureListingProvider, ListingProvider};
use rental_scout::report::AnalysisReport;
use rental_scout::{ListingNormalizer, Portfolio, SearchFilters, SearchQuery};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    // Initialize logging, RUST_LOG wins over the configured level
    let configured = EnvFilter::try_new(&config.log_level);
    let bad_level = configured.is_err();
    let filter = EnvFilter::try_from_default_env()
        .or(configured)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    if bad_level {
        warn!("Ignoring unparseable log level {:?}", config.log_level);
    }

    info!("🏠 Rental Scout - Investment Analyzer");
    info!("=====================================");

    let provider = match &config.listings_path {
        Some(path) => FixtureListingProvider::from_file(path)
            .await
            .with_context(|| format!("Failed to load listings from {}", path.display()))?,
        None => FixtureListingProvider::default(),
    };

    let query = SearchQuery::classify(&config.query).context("Search query is empty")?;
    info!(
        "Searching {} for {:?} ({})",
        provider.source_name(),
        query.text(),
        if query.is_single_listing() { "single listing" } else { "city" }
    );

    let listings = provider
        .search(&query, &SearchFilters::default())
        .await
        .context("Listing search failed")?;

    let normalizer = ListingNormalizer::new();
    let mut portfolio = Portfolio::with_seed();
    for listing in listings {
        let address = listing.address.clone();
        if let Err(err) = portfolio.import(&normalizer, listing) {
            warn!("Skipping {}: {}", address, err);
        }
    }

    info!("\n✅ Analyzed {} properties\n", portfolio.len());

    let report = AnalysisReport::build(&config.query, portfolio.properties());
    for (i, entry) in report.properties.iter().enumerate() {
        let property = &entry.property;
        let metrics = &entry.metrics;
        let favorite = if property.is_favorite { " ★" } else { "" };

        println!("{}. {} (${:.0}){}", i + 1, property.address, property.price, favorite);
        println!(
            "   {} bd, {} ba, {} sqft",
            property.bedrooms, property.bathrooms, property.sqft
        );
        println!("   Mortgage: ${:.2}/mo", metrics.monthly_mortgage_payment);
        println!(
            "   Revenue: ${:.2}  Expenses: ${:.2}  NOI: ${:.2}",
            metrics.gross_annual_revenue,
            metrics.annual_operating_expenses,
            metrics.net_operating_income
        );
        println!(
            "   Cash flow: ${:.2}/yr (${:.2}/mo)",
            metrics.annual_cash_flow, metrics.monthly_cash_flow
        );
        println!(
            "   Cap rate: {}  Cash-on-cash: {}  Break-even occupancy: {}",
            percent(metrics.cap_rate),
            percent(metrics.cash_on_cash_return),
            percent(metrics.break_even_occupancy)
        );
        println!("   Offer: {}", property.fair_offer_recommendation);
        println!();
    }

    let json = serde_json::to_string_pretty(&report)?;
    tokio::fs::write(&config.report_path, json)
        .await
        .with_context(|| format!("Failed to write {}", config.report_path.display()))?;
    info!("💾 Saved analysis to {}", config.report_path.display());

    Ok(())
}

fn percent(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.2}%", v))
        .unwrap_or_else(|| "n/a".to_string())
}
