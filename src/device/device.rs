use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;
use tracing::{info, warn};

use super::config::{ConfigError, DeviceConfig};
use crate::document::{Document, ReadHandle, ReadOutcome};
use crate::types::{ReportError, TransferError};

#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("Transfer failed: {0}")]
    Transfer(#[from] TransferError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Host-facing word-count device.
///
/// Owns the document for its whole lifetime. Registration and unload are
/// announced through `tracing`; the report is released on drop.
#[derive(Debug)]
pub struct WordCountDevice {
    config: DeviceConfig,
    document: Document,
    times_opened: AtomicU64,
}

impl WordCountDevice {
    pub fn register(config: DeviceConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        info!(
            node = %config.node_name,
            class = %config.class_name,
            "device registered"
        );

        Ok(Self {
            config,
            document: Document::new(),
            times_opened: AtomicU64::new(0),
        })
    }

    pub fn on_open(&self) -> ReadHandle {
        let opened = self.times_opened.fetch_add(1, Ordering::Relaxed) + 1;
        info!(node = %self.config.node_name, times_opened = opened, "device opened");
        ReadHandle::new()
    }

    /// Accept the first `length` bytes of `buffer` as the new document text.
    pub fn on_write(&self, buffer: &[u8], length: usize) -> Result<usize, DeviceError> {
        let input = buffer
            .get(..length)
            .ok_or(TransferError::SourceTooShort {
                declared: length,
                available: buffer.len(),
            })?;

        let accepted = self.document.write(input).map_err(|err| {
            warn!(node = %self.config.node_name, error = %err, "write rejected");
            err
        })?;
        info!(node = %self.config.node_name, bytes = accepted, "received text");
        Ok(accepted)
    }

    /// One-shot read into a destination of `capacity` bytes.
    ///
    /// `handle` carries the `*ppos` offset; use `Document::read_at` to read
    /// at an explicit offset.
    pub fn on_read(
        &self,
        handle: &mut ReadHandle,
        capacity: usize,
    ) -> Result<ReadOutcome, DeviceError> {
        match self.document.read(handle, capacity) {
            Ok(ReadOutcome::EndOfStream) => Ok(ReadOutcome::EndOfStream),
            Ok(outcome) => {
                info!(node = %self.config.node_name, bytes = outcome.len(), "sent report");
                Ok(outcome)
            }
            Err(err) => {
                warn!(node = %self.config.node_name, error = %err, "failed to send report");
                Err(err.into())
            }
        }
    }

    /// Copy the report into `dest`, returning the number of bytes written.
    pub fn read_into(&self, handle: &mut ReadHandle, dest: &mut [u8]) -> Result<usize, DeviceError> {
        let outcome = self.on_read(handle, dest.len())?;
        let bytes = outcome.as_bytes();
        dest[..bytes.len()].copy_from_slice(bytes);
        Ok(bytes.len())
    }

    pub fn on_release(&self, handle: ReadHandle) {
        info!(
            node = %self.config.node_name,
            offset = handle.offset(),
            "device closed"
        );
    }

    pub fn times_opened(&self) -> u64 {
        self.times_opened.load(Ordering::Relaxed)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }
}

impl Drop for WordCountDevice {
    fn drop(&mut self) {
        info!(
            node = %self.config.node_name,
            generation = self.document.generation().get(),
            "device unloaded"
        );
    }
}
