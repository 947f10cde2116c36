use clap::Parser;
use product_lookup::utils::logger;
use product_lookup::DependencyResolver;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "product-lookup")]
#[command(about = "Look up a product by id in the configured store")]
struct Cli {
    /// Product id payload, as the function would receive it
    input: String,

    /// Directory holding appsettings.json (defaults to the current directory)
    #[arg(long)]
    base_dir: Option<PathBuf>,

    /// Create the products table and seed row before the lookup
    #[arg(long)]
    init_schema: bool,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting product-lookup CLI");

    let mut resolver = DependencyResolver::new();
    if let Some(dir) = &cli.base_dir {
        resolver = resolver.with_base_dir(dir);
    }

    let function = match resolver.resolve() {
        Ok(function) => function,
        Err(e) => {
            tracing::error!("Failed to wire dependencies: {}", e);
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    if cli.init_schema {
        function.repository().ensure_schema().await?;
        tracing::info!("Schema ensured and seed row in place");
    }

    match function.handle(&cli.input).await {
        Ok(Some(product)) => {
            println!("{}", serde_json::to_string_pretty(&product)?);
        }
        Ok(None) => {
            tracing::info!(input = %cli.input, "no product found");
            println!("null");
        }
        Err(e) => {
            tracing::error!("Lookup failed: {}", e);
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }

    Ok(())
}
