//! # planthubd — planthub daemon
//!
//! Composition root that wires all adapters together and runs the control
//! loop.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Install the tracing subscriber
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Connect to the MQTT broker and subscribe to the sensor topic
//! - Spawn the MQTT event loop, the message ingestor and the reconciler
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use anyhow::Context;
use tokio::sync::{mpsc, watch};
use tracing_subscriber::EnvFilter;

use planthub_adapter_storage_sqlite_sqlx::{
    SqliteAreaDirectory, SqliteAuditLog, SqliteAutomationFlag, SqliteBoundsRepository,
};
use planthub_app::ingestor::MessageIngestor;
use planthub_app::reconciler::Reconciler;
use planthub_app::state::ControlState;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    let filter = EnvFilter::try_new(&config.logging.filter).unwrap_or_else(|err| {
        eprintln!("invalid log filter {:?}: {err}", config.logging.filter);
        EnvFilter::new("info")
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Database
    let db = planthub_adapter_storage_sqlite_sqlx::Config {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await
    .context("failed to open database")?;
    let pool = db.pool().clone();

    // Repositories
    let directory = SqliteAreaDirectory::new(pool.clone());
    let bounds = SqliteBoundsRepository::new(pool.clone());
    let automation = SqliteAutomationFlag::new(pool.clone());
    let audit = SqliteAuditLog::new(pool);

    // Transport
    let (inbound_tx, inbound_rx) = mpsc::channel(config.mqtt.channel_capacity);
    let (publisher, pump) = planthub_adapter_mqtt::connect(&config.mqtt, inbound_tx)
        .await
        .context("failed to connect to MQTT broker")?;

    // Control loop
    let state = Arc::new(ControlState::new());
    let ingestor = MessageIngestor::new(
        &config.mqtt.sensor_topic,
        directory.clone(),
        Arc::clone(&state),
    );
    let reconciler = Reconciler::new(state, directory, bounds, automation, audit, publisher);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let pump_task = tokio::spawn(pump.run());
    let ingest_task = tokio::spawn(ingestor.run(inbound_rx));
    let reconcile_task = tokio::spawn(reconciler.run(config.interval(), shutdown_rx));

    tracing::info!(
        interval_secs = config.reconciler.interval_secs,
        "planthubd running"
    );

    shutdown_signal().await;
    tracing::info!("shutdown requested");

    // Dropping the event loop closes the inbound channel, which stops the
    // ingestor once it has drained what was already received. The reconciler
    // stops last so its final flush records every ingested reading.
    pump_task.abort();
    ingest_task.await.context("ingestor task failed")?;

    shutdown_tx.send_replace(true);
    reconcile_task.await.context("reconciler task failed")?;

    tracing::info!("planthubd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
