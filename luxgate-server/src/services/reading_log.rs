use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use luxgate_api::models::{Reading, ReadingTimestamp};
use tokio::sync::RwLock;

use crate::errors::ValidationError;

/// Append-only history of sensor readings in arrival order.
#[async_trait]
pub trait ReadingLog: Send + Sync {
    /// All retained readings, oldest first.
    async fn list_readings(&self) -> Vec<Reading>;

    async fn push(&self, reading: Reading);

    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Validates a reported measurement and appends it.
    ///
    /// No deduplication or range checks happen here; timestamps are not
    /// required to increase.
    async fn append_reading(
        &self,
        valor_luz: Option<f64>,
        timestamp: Option<ReadingTimestamp>,
    ) -> Result<Reading, ValidationError> {
        let valor_luz = valor_luz.ok_or(ValidationError::MissingField("valor_luz"))?;
        if !valor_luz.is_finite() {
            return Err(ValidationError::InvalidNumber("valor_luz"));
        }
        let timestamp = timestamp.ok_or(ValidationError::MissingField("timestamp"))?;

        let reading = Reading {
            valor_luz,
            timestamp,
        };
        self.push(reading.clone()).await;

        Ok(reading)
    }
}

/// Keeps every reading for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryReadingLog {
    entries: RwLock<Vec<Reading>>,
}

impl MemoryReadingLog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReadingLog for MemoryReadingLog {
    async fn list_readings(&self) -> Vec<Reading> {
        self.entries.read().await.clone()
    }

    async fn push(&self, reading: Reading) {
        self.entries.write().await.push(reading);
    }

    async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

/// Ring buffer retaining the most recent `capacity` readings.
#[derive(Debug)]
pub struct BoundedReadingLog {
    capacity: usize,
    entries: RwLock<VecDeque<Reading>>,
}

impl BoundedReadingLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);

        Self {
            capacity,
            entries: RwLock::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[async_trait]
impl ReadingLog for BoundedReadingLog {
    async fn list_readings(&self) -> Vec<Reading> {
        self.entries.read().await.iter().cloned().collect()
    }

    async fn push(&self, reading: Reading) {
        let mut entries = self.entries.write().await;
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(reading);
    }

    async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

/// Picks the log implementation for an optional retention limit.
pub fn reading_log_for(capacity: Option<usize>) -> Arc<dyn ReadingLog> {
    match capacity {
        Some(capacity) => Arc::new(BoundedReadingLog::new(capacity)),
        None => Arc::new(MemoryReadingLog::new()),
    }
}
