use clap::Parser;

use trivia_api::db;
use trivia_api::server::app::run_server;
use trivia_api::settings::get_settings;
use trivia_api::telemetry::init_tracing;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[clap(default_value = "serve")]
    runner: Runner,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Runner {
    Serve,
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();
    let cli = Cli::parse();
    let settings = get_settings()?;
    let pool = db::establish_connection(&settings.db_path).await?;

    tracing::info!("Running db migrations...");
    db::run_migrations(&pool).await?;

    if let Runner::Serve = cli.runner {
        run_server(pool, &settings.address()).await?;
    }
    Ok(())
}
