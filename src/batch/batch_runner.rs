use std::fs::File;
use std::io::BufReader;

use anyhow::Context;
use csv::{ReaderBuilder, Trim};
use tokio::sync::mpsc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::{error, info};

use crate::batch::records::{BatchOutcome, BatchRow};
use crate::client::CyberSource;
use crate::transport::Transport;

/// Runs every row of a CSV file through the client, strictly one after another.
pub struct BatchRunner<T: Transport> {
    client: CyberSource<T>,
    backpressure: usize
}

impl<T: Transport> BatchRunner<T> {
    pub fn new(client: CyberSource<T>) -> Self {
        Self {
            client,
            backpressure: 64
        }
    }

    pub fn client(&self) -> &CyberSource<T> {
        &self.client
    }

    /// Reads the file on a blocking task and executes rows in file order.
    ///
    /// Malformed CSV lines are logged and skipped. Rows that fail locally or in
    /// transport still produce an outcome carrying the error text.
    pub async fn run(&self, path: &str) -> anyhow::Result<Vec<BatchOutcome>> {
        //NOTE: The bounded channel keeps file I/O off the runtime and caps how far the reader runs ahead of slow SOAP calls
        let (sender, receiver) = mpsc::channel::<BatchRow>(self.backpressure);
        let csv_handle = self.spawn_csv_reader(path.to_string(), sender);
        let outcomes = self.process_rows(receiver).await;

        csv_handle.await.context("CSV reader task panicked")??;

        info!("Processed [{}] batch rows from [{path}]", outcomes.len());

        Ok(outcomes)
    }

    fn spawn_csv_reader(&self, path: String, sender: mpsc::Sender<BatchRow>) -> JoinHandle<anyhow::Result<()>> {
        spawn_blocking(move || {
            let file = File::open(&path).with_context(|| format!("Error opening CSV at path: {path}"))?;

            let mut reader = ReaderBuilder::new()
                .trim(Trim::All)
                .flexible(true)
                .from_reader(BufReader::new(file));

            for result in reader.deserialize::<BatchRow>() {
                match result {
                    Ok(row) => {
                        if sender.blocking_send(row).is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        error!("CSV deserialization error: {error}");
                    }
                }
            }

            Ok(())
        })
    }

    async fn process_rows(&self, mut receiver: mpsc::Receiver<BatchRow>) -> Vec<BatchOutcome> {
        let mut outcomes = Vec::new();

        //NOTE: Rows are awaited one at a time so that a capture always follows the auth it references
        while let Some(row) = receiver.recv().await {
            outcomes.push(self.process_row(&row).await);
        }

        outcomes
    }

    async fn process_row(&self, row: &BatchRow) -> BatchOutcome {
        let args = match row.to_args() {
            Ok(args) => args,
            Err(error) => {
                error!("Batch row [{}] is unusable: {error}", row.reference);
                return BatchOutcome::from_error(row, &error);
            }
        };

        match self.client.run_named_transaction(&row.service, &row.reference, args).await {
            Ok(response) => BatchOutcome::from_response(row, &response),
            Err(error) => {
                error!("Batch row [{}] failed: {error}", row.reference);
                BatchOutcome::from_error(row, &error)
            }
        }
    }
}
