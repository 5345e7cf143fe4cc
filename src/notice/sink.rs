use std::fmt;
use std::sync::{Arc, Mutex};

#[cfg(feature = "emitter")]
use event_emitter_rs::EventEmitter;

use super::Notice;

/// Destination for operation notices.
pub trait NoticeSink {
    type Error: fmt::Display;

    fn deliver(&mut self, notice: &Notice) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogNoticeSinkError {
    BufferPoisoned,
}

impl fmt::Display for LogNoticeSinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogNoticeSinkError::BufferPoisoned => write!(f, "notice buffer poisoned"),
        }
    }
}

impl std::error::Error for LogNoticeSinkError {}

/// Writes notices to the `tracing` log, or into a shared buffer.
#[derive(Debug, Clone, Default)]
pub struct LogNoticeSink {
    buffer: Option<Arc<Mutex<Vec<String>>>>,
}

impl LogNoticeSink {
    pub fn new() -> Self {
        LogNoticeSink { buffer: None }
    }

    pub fn with_buffer(buffer: Arc<Mutex<Vec<String>>>) -> Self {
        LogNoticeSink {
            buffer: Some(buffer),
        }
    }
}

impl NoticeSink for LogNoticeSink {
    type Error = LogNoticeSinkError;

    fn deliver(&mut self, notice: &Notice) -> Result<(), Self::Error> {
        let line = format!("[NOTICE] {}: {}", notice.title(), notice.description());
        match &self.buffer {
            Some(buffer) => {
                let mut buffer = buffer
                    .lock()
                    .map_err(|_| LogNoticeSinkError::BufferPoisoned)?;
                buffer.push(line);
            }
            None => tracing::info!(kind = notice.kind(), "{}", line),
        }
        Ok(())
    }
}

/// Emits notices on an `EventEmitter` for in-process listeners.
///
/// The event name is [`Notice::kind`]; the payload is the notice as JSON.
/// Listeners run on the emitter's threads, not the caller's.
#[cfg(feature = "emitter")]
pub struct EmitterNoticeSink {
    emitter: EventEmitter,
}

#[cfg(feature = "emitter")]
impl EmitterNoticeSink {
    pub fn new(emitter: EventEmitter) -> Self {
        EmitterNoticeSink { emitter }
    }

    /// Register a listener for one notice kind.
    pub fn on<F>(&mut self, kind: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.emitter.on(kind, listener);
    }
}

#[cfg(feature = "emitter")]
impl Default for EmitterNoticeSink {
    fn default() -> Self {
        Self::new(EventEmitter::new())
    }
}

#[cfg(feature = "emitter")]
impl NoticeSink for EmitterNoticeSink {
    type Error = serde_json::Error;

    fn deliver(&mut self, notice: &Notice) -> Result<(), Self::Error> {
        let payload = notice.to_json()?;
        self.emitter.emit(notice.kind(), payload);
        Ok(())
    }
}
