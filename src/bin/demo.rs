//! Demo client for the customer grid.
//!
//! Runs the canonical scenario end to end: verify the region starts empty,
//! save `Customer(1, "Jon Doe")`, read it back, query it with a wildcard,
//! and let the identity function stamp a fresh id onto a second customer.
//! Without `--server` the repository runs against an embedded local region;
//! with it, every operation goes over HTTP to a grid server.

use anyhow::{ensure, Context};
use customer_grid::client::CustomerRepository;
use customer_grid::config::ClientConfig;
use customer_grid::model::Customer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let config = match ClientConfig::from_args(&args[1..]) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!(
                "Usage: {} [--server <addr:port>] [--region <name>]",
                args[0]
            );
            std::process::exit(1);
        }
    };

    let repository = match config.server {
        Some(server) => {
            tracing::info!("Connecting to grid server at {}", server);
            CustomerRepository::connect(server)
        }
        None => {
            tracing::info!("Running against local region '{}'", config.region_name);
            CustomerRepository::local(&config.region_name)
        }
    };

    ensure!(
        repository.count().await? == 0,
        "expected an empty region at startup"
    );

    let jon_doe = Customer::new_customer(1, "Jon Doe");

    tracing::info!("Saving customer [{:?}]...", jon_doe);
    let jon_doe = repository.save(jon_doe).await?;

    ensure!(jon_doe.id() == 1, "saved customer id should be 1");
    ensure!(
        jon_doe.name() == "Jon Doe",
        "saved customer name should be 'Jon Doe'"
    );
    ensure!(
        repository.count().await? == 1,
        "region should hold one customer after save"
    );

    let retrieved = repository
        .find_by_id(1)
        .await?
        .context("customer 1 not found after save")?;
    ensure!(retrieved == jon_doe, "retrieved customer should equal saved");

    tracing::info!("Querying for customer [name LIKE '%Doe']...");
    let queried = repository
        .find_by_name_like("%Doe")
        .await?
        .context("no customer matched '%Doe'")?;
    ensure!(queried == jon_doe, "queried customer should equal saved");

    tracing::info!("Customer was [{:?}]", queried);

    let pie_doe = repository
        .identify(Customer::new_customer(0, "Pie Doe"))
        .await?;
    ensure!(
        pie_doe.name() == "Pie Doe",
        "identity function must preserve the name"
    );
    ensure!(pie_doe.id() > 1, "identity function must assign a fresh id");
    tracing::info!("Identified customer [{:?}]", pie_doe);

    tracing::info!("Demo scenario completed successfully");

    Ok(())
}
