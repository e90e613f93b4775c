// Donation Bridge - forwards gift-queue donations into the ledger service

use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use donation_bridge::{config::Config, DonationConsumer, LedgerClient};
use dotenv::dotenv;
use event_queue::{Subscriber, SubscriberConfig};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    let _subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    info!("Starting Donation Bridge...");

    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Invalid configuration");

    let rates = config.rate_table().expect("Invalid rate table");
    info!(
        "Rate table loaded (base: {}, mode: {:?})",
        rates.base(),
        rates.mode()
    );

    let forwarder = LedgerClient::new(&config.ledger.base_url, config.ledger.timeout_secs)
        .expect("Failed to build ledger client");
    let consumer = Arc::new(DonationConsumer::new(rates, forwarder));

    let subscriber_config = SubscriberConfig {
        stream: config.nats.stream.clone(),
        subject: config.nats.subject.clone(),
        durable_name: config.nats.durable_name.clone(),
        ack_wait: Duration::from_secs(config.nats.ack_wait_secs),
        max_deliver: config.nats.max_deliver,
    };

    let subscriber = Subscriber::connect(&config.nats.url, subscriber_config)
        .await
        .expect("Failed to connect to NATS");

    info!("✅ Connected to NATS: {}", config.nats.url);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let consumer_task = tokio::spawn(async move {
        if let Err(e) = subscriber.run(consumer, shutdown_rx).await {
            error!("Consumer loop failed: {}", e);
        }
    });

    let server_config = config.server.clone();
    info!(
        "🚀 Starting HTTP server on {}:{}",
        server_config.host, server_config.port
    );

    HttpServer::new(|| App::new().route("/health", web::get().to(health_check)))
        .workers(1)
        .bind((server_config.host, server_config.port))?
        .run()
        .await?;

    // HTTP server exits on SIGINT; stop pulling new messages. A message
    // already in flight is driven to its outcome before the loop ends.
    let _ = shutdown_tx.send(true);
    if let Err(e) = consumer_task.await {
        error!("Consumer task aborted: {}", e);
    }

    info!("Donation Bridge stopped");
    Ok(())
}

async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "donation-bridge",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
