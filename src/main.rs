use analytics::{DateWindow, DirectoryQuery, OrderCriteria, SortDirection, SortField};
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use comfy_table::Table;
use configuration::{Config, LogFormat};
use core_types::parse_timestamp;
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::PathBuf;
use web_server::AppState;

/// The main entry point for the Platter restaurant analytics service.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load `PLATTER__*` overrides from a .env file, if there is one.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = configuration::load_config_from(&cli.config)?;
    if let Some(format) = cli.log_format {
        config.logging.format = format;
    }
    let _log_guard = configuration::init_tracing(&config.logging)?;
    tracing::debug!(config = %cli.config.display(), "Configuration loaded.");

    match cli.command {
        Commands::Serve(args) => handle_serve(args, config).await,
        Commands::Restaurants(args) => handle_restaurants(args, &config, cli.json),
        Commands::Trends(args) => handle_trends(args, &config, cli.json),
        Commands::Top(args) => handle_top(args, &config, cli.json),
        Commands::Orders(args) => handle_orders(args, &config, cli.json),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Restaurant performance analytics over a restaurants/orders dataset.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,

    /// Override the configured log line format.
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    /// Print query results as JSON instead of a table.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API.
    Serve(ServeArgs),
    /// Search and page the restaurant directory.
    Restaurants(RestaurantsArgs),
    /// Show per-day order metrics for one restaurant.
    Trends(TrendsArgs),
    /// Rank restaurants by revenue.
    Top(TopArgs),
    /// Filter and page individual orders.
    Orders(OrdersArgs),
}

#[derive(Parser)]
struct ServeArgs {
    /// Listen on this port instead of the configured one.
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Parser)]
struct RestaurantsArgs {
    /// Case-insensitive term matched against name, location and cuisine.
    #[arg(long)]
    search: Option<String>,

    /// One of name, location, cuisine, id.
    #[arg(long, default_value = "name")]
    sort_by: String,

    /// asc or desc.
    #[arg(long, default_value = "asc")]
    sort_order: String,

    #[arg(long, default_value_t = 1)]
    page: usize,
}

#[derive(Parser)]
struct TrendsArgs {
    #[arg(long)]
    restaurant_id: u64,

    /// First day of the window (format: YYYY-MM-DD).
    #[arg(long)]
    from: NaiveDate,

    /// Last day of the window, inclusive (format: YYYY-MM-DD).
    #[arg(long)]
    to: NaiveDate,
}

#[derive(Parser)]
struct TopArgs {
    /// First day of the window (format: YYYY-MM-DD).
    #[arg(long)]
    from: NaiveDate,

    /// End of the window, compared as midnight of this day (format: YYYY-MM-DD).
    #[arg(long)]
    to: NaiveDate,

    /// How many restaurants to show. Defaults to the configured length.
    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Parser)]
struct OrdersArgs {
    #[arg(long)]
    restaurant_id: Option<u64>,

    /// Earliest order time, inclusive.
    #[arg(long, value_parser = timestamp_arg)]
    start_date: Option<NaiveDateTime>,

    /// Latest order time, inclusive.
    #[arg(long, value_parser = timestamp_arg)]
    end_date: Option<NaiveDateTime>,

    #[arg(long)]
    min_amount: Option<Decimal>,

    #[arg(long)]
    max_amount: Option<Decimal>,

    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=23))]
    start_hour: Option<u32>,

    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=23))]
    end_hour: Option<u32>,

    #[arg(long, default_value_t = 1)]
    page: usize,
}

fn timestamp_arg(raw: &str) -> Result<NaiveDateTime, String> {
    parse_timestamp(raw).map_err(|e| e.to_string())
}

// ==============================================================================
// Command Handlers
// ==============================================================================

async fn handle_serve(args: ServeArgs, mut config: Config) -> anyhow::Result<()> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    let addr = config.server.socket_addr()?;
    let state = AppState::from_config(&config)?;
    web_server::run_server(addr, state).await
}

fn handle_restaurants(args: RestaurantsArgs, config: &Config, json: bool) -> anyhow::Result<()> {
    let state = AppState::from_config(config)?;
    let query = DirectoryQuery {
        search: args.search,
        sort_by: SortField::from(args.sort_by.as_str()),
        sort_order: SortDirection::from(args.sort_order.as_str()),
        page: args.page,
    };
    let page = state.engine.list_restaurants(&state.dataset, &query);

    if json {
        return print_json(&page);
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Location", "Cuisine"]);
    for r in &page.data {
        table.add_row(vec![r.id.to_string(), r.name.clone(), r.location.clone(), r.cuisine.clone()]);
    }
    println!("{table}");
    println!(
        "Page {} of {} ({} restaurants)",
        page.current_page, page.last_page, page.total
    );
    Ok(())
}

fn handle_trends(args: TrendsArgs, config: &Config, json: bool) -> anyhow::Result<()> {
    let state = AppState::from_config(config)?;
    let window = DateWindow::new(args.from, args.to)?;
    let report = state.engine.daily_trends(&state.dataset, args.restaurant_id, &window);

    if json {
        return print_json(&report);
    }

    let mut table = Table::new();
    table.set_header(vec!["Date", "Orders", "Revenue", "Avg Order", "Peak Hour"]);
    for day in &report.daily_data {
        table.add_row(vec![
            day.date.to_string(),
            day.orders_count.to_string(),
            day.revenue.to_string(),
            day.average_order_value.to_string(),
            day.peak_hour.map_or_else(|| "-".to_string(), |h| format!("{h:02}:00")),
        ]);
    }
    println!("Restaurant {} from {} to {}", report.restaurant_id, report.start_date, report.end_date);
    println!("{table}");
    Ok(())
}

fn handle_top(args: TopArgs, config: &Config, json: bool) -> anyhow::Result<()> {
    let state = AppState::from_config(config)?;
    let window = DateWindow::new(args.from, args.to)?;
    let ranked = state.engine.top_restaurants(&state.dataset, &window, args.limit);

    if json {
        return print_json(&ranked);
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "ID", "Name", "Location", "Orders", "Revenue", "Avg Order"]);
    for (rank, stat) in ranked.iter().enumerate() {
        table.add_row(vec![
            (rank + 1).to_string(),
            stat.id.to_string(),
            stat.name.clone(),
            stat.location.clone(),
            stat.total_orders.to_string(),
            stat.total_revenue.to_string(),
            stat.average_order_value.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn handle_orders(args: OrdersArgs, config: &Config, json: bool) -> anyhow::Result<()> {
    let state = AppState::from_config(config)?;
    let criteria = OrderCriteria {
        restaurant_id: args.restaurant_id,
        start_date: args.start_date,
        end_date: args.end_date,
        min_amount: args.min_amount,
        max_amount: args.max_amount,
        start_hour: args.start_hour,
        end_hour: args.end_hour,
    };
    let page = state.engine.filtered_orders(&state.dataset, &criteria, args.page);

    if json {
        return print_json(&page);
    }

    let mut table = Table::new();
    table.set_header(vec!["Order", "Time", "Amount", "Restaurant"]);
    for enriched in &page.data {
        let restaurant = enriched
            .restaurant
            .as_ref()
            .map_or_else(|| format!("#{} (unknown)", enriched.order.restaurant_id), |r| r.name.clone());
        table.add_row(vec![
            enriched.order.id.to_string(),
            enriched.order.order_time.to_string(),
            enriched.order.order_amount.to_string(),
            restaurant,
        ]);
    }
    println!("{table}");
    println!("Page {} of {} ({} orders)", page.current_page, page.last_page, page.total);
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
