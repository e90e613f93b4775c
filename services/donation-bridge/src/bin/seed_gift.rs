// Publishes a single gift event onto the stream, for smoke-testing the bridge.
//
// Usage: seed_gift <event_type> <user_name> <amount> <currency>
//        seed_gift DONATION Cher 100 RUB

use donation_bridge::config::Config;
use dotenv::dotenv;
use event_queue::{Publisher, QueueEvent};
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let _subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 5 {
        eprintln!("Usage: {} <event_type> <user_name> <amount> <currency>", args[0]);
        std::process::exit(2);
    }

    let event = QueueEvent {
        event_type: args[1].clone(),
        user_name: args[2].clone(),
        amount: Some(Decimal::from_str(&args[3])?),
        currency: args[4].clone(),
    };

    let config = Config::from_env()?;
    let publisher =
        Publisher::connect(&config.nats.url, &config.nats.stream, &config.nats.subject).await?;

    publisher.publish(&event).await?;

    info!(
        "Published {} event: {} {} from {}",
        event.event_type, args[3], event.currency, event.user_name
    );

    Ok(())
}
