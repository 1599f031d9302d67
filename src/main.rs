use clap::Parser;
use std::time::Duration;
use tallyboard::core::tally::TRACKED_PARTY;
use tallyboard::utils::{logger, validation::Validate};
use tallyboard::{
    CliConfig, ConfigProvider, DashboardData, DashboardEngine, SheetPipeline, SourceStatus,
    TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting tallyboard");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Some(path) = cli.config.clone() {
        let config = TomlConfig::from_file(&path)?;
        check_config(&config);
        run(config, cli.watch, cli.json).await
    } else {
        check_config(&cli);
        run(cli.clone(), cli.watch, cli.json).await
    }
}

fn check_config<C: Validate>(config: &C) {
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

async fn run<C: ConfigProvider>(config: C, watch: bool, json: bool) -> anyhow::Result<()> {
    let revalidate_secs = config.revalidate_secs();
    let pipeline = SheetPipeline::new(config)?;
    let engine = DashboardEngine::new(pipeline);

    if watch {
        tracing::info!("Watch mode: refreshing every {}s", revalidate_secs);
        let mut ticker = tokio::time::interval(Duration::from_secs(revalidate_secs));
        loop {
            ticker.tick().await;
            let data = engine.dashboard_data().await;
            print_snapshot(&data, json)?;
        }
    } else {
        let data = engine.dashboard_data().await;
        print_snapshot(&data, json)?;
    }

    Ok(())
}

fn print_snapshot(data: &DashboardData, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(data)?);
        return Ok(());
    }

    match &data.status {
        SourceStatus::Failed { reason } => {
            println!("❌ Results unavailable: {}", reason);
            return Ok(());
        }
        SourceStatus::Fresh { fetched_at } => {
            println!("Election results (fetched {})", fetched_at.to_rfc3339());
        }
    }

    if data.records.is_empty() {
        println!("No results yet.");
        return Ok(());
    }

    let agg = &data.aggregate;
    println!(
        "Constituencies: {}   Total votes: {}   Declared: {}   Undeclared: {}",
        agg.total_constituencies, agg.total_votes, agg.declared_seats, agg.undeclared_seats
    );

    println!("Seats won:");
    for (label, seats) in agg.seat_distribution() {
        println!("  {:<12} {}", label, seats);
    }

    println!("{} wins by division:", TRACKED_PARTY);
    for (division, wins) in &agg.wins_by_division {
        println!("  {:<12} {}", division, wins);
    }

    Ok(())
}
