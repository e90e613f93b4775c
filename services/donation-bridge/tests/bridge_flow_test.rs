// End-to-end bridge tests against a real loopback ledger endpoint

use actix_web::{web, App, HttpResponse, HttpServer};
use donation_bridge::rates::{ConversionMode, RateTable};
use donation_bridge::{DonationConsumer, ForwardOutcome, Forwarder, LedgerClient};
use donation_bridge::models::DonationPayload;
use event_queue::{EventHandler, QueueEvent, QueueMessage};
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

/// Spawn a minimal ledger endpoint on an OS-assigned port. Accepted bodies
/// are pushed into `recorded`; `accept` controls the response status.
fn spawn_ledger(accept: bool, recorded: web::Data<Mutex<Vec<Value>>>) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        actix_web::rt::System::new().block_on(async move {
            HttpServer::new(move || {
                App::new().app_data(recorded.clone()).route(
                    "/donate",
                    web::post().to(
                        move |data: web::Data<Mutex<Vec<Value>>>, body: web::Json<Value>| async move {
                            data.lock().unwrap().push(body.into_inner());
                            if accept {
                                HttpResponse::Ok().json(json!({"message": "Success"}))
                            } else {
                                HttpResponse::InternalServerError().finish()
                            }
                        },
                    ),
                )
            })
            .listen(listener)
            .unwrap()
            .workers(1)
            .run()
            .await
            .unwrap();
        });
    });

    format!("http://{}", addr)
}

/// URL of a port with nothing listening on it.
fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

fn rate_table() -> RateTable {
    RateTable::new(
        "RUB".to_string(),
        ConversionMode::Scaled,
        HashMap::from([
            ("RUB".to_string(), dec!(1)),
            ("USD".to_string(), dec!(80)),
        ]),
    )
    .unwrap()
}

fn donation_message(amount: rust_decimal::Decimal, currency: &str) -> QueueMessage {
    QueueMessage::new(QueueEvent {
        event_type: "DONATION".to_string(),
        user_name: "Cher".to_string(),
        amount: Some(amount),
        currency: currency.to_string(),
    })
}

#[tokio::test]
async fn test_delivered_when_ledger_accepts() {
    let recorded = web::Data::new(Mutex::new(Vec::new()));
    let base_url = spawn_ledger(true, recorded.clone());

    let client = LedgerClient::new(&base_url, 5).unwrap();
    let outcome = client
        .forward(DonationPayload::new(dec!(100), "Cher".to_string()))
        .await
        .unwrap();

    assert_eq!(outcome, ForwardOutcome::Delivered);
}

#[tokio::test]
async fn test_non_success_response_still_counts_as_delivered() {
    let recorded = web::Data::new(Mutex::new(Vec::new()));
    let base_url = spawn_ledger(false, recorded.clone());

    let client = LedgerClient::new(&base_url, 5).unwrap();
    let outcome = client
        .forward(DonationPayload::new(dec!(100), "Cher".to_string()))
        .await
        .unwrap();

    // The contract only distinguishes reachability; the body is not inspected
    assert_eq!(outcome, ForwardOutcome::Delivered);
}

#[tokio::test]
async fn test_refused_connection_is_unreachable() {
    let client = LedgerClient::new(&refused_url(), 2).unwrap();
    let outcome = client
        .forward(DonationPayload::new(dec!(100), "Cher".to_string()))
        .await
        .unwrap();

    assert_eq!(outcome, ForwardOutcome::Unreachable);
}

#[tokio::test]
async fn test_donation_flow_records_and_finishes() {
    let recorded = web::Data::new(Mutex::new(Vec::new()));
    let base_url = spawn_ledger(true, recorded.clone());

    let consumer = DonationConsumer::new(rate_table(), LedgerClient::new(&base_url, 5).unwrap());
    let mut message = donation_message(dec!(100), "RUB");

    consumer.on_message(&mut message).await.unwrap();
    assert!(message.is_finished());

    let entries = recorded.lock().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["value"], json!(100.0));
    assert_eq!(entries[0]["name"], "Cher");
    assert!(entries[0]["date"].is_string());
}

#[tokio::test]
async fn test_foreign_donation_is_normalized_on_the_wire() {
    let recorded = web::Data::new(Mutex::new(Vec::new()));
    let base_url = spawn_ledger(true, recorded.clone());

    let consumer = DonationConsumer::new(rate_table(), LedgerClient::new(&base_url, 5).unwrap());
    let mut message = donation_message(dec!(100), "USD");

    consumer.on_message(&mut message).await.unwrap();
    assert!(message.is_finished());

    let entries = recorded.lock().unwrap();
    assert_eq!(entries[0]["value"], json!(8000.0));
}

#[tokio::test]
async fn test_unreachable_ledger_leaves_flow_pending() {
    let consumer = DonationConsumer::new(rate_table(), LedgerClient::new(&refused_url(), 2).unwrap());
    let mut message = donation_message(dec!(100), "RUB");

    // Returns normally; the message stays pending for redelivery
    consumer.on_message(&mut message).await.unwrap();
    assert!(!message.is_finished());
}
