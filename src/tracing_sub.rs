use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::Level;

use crate::error::{DeskError, Result};

/// Where log lines end up. The desktop owns the alternate screen, so the
/// default is to drop them rather than scribble over the panels.
#[derive(Clone, Debug, Default)]
pub enum LogTarget {
    #[default]
    Discard,
    File(Arc<Mutex<File>>),
}

impl LogTarget {
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| DeskError::LogFile {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(LogTarget::File(Arc::new(Mutex::new(file))))
    }
}

pub struct DelegatingWriter {
    target: LogTarget,
}

impl Write for DelegatingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &self.target {
            LogTarget::Discard => Ok(buf.len()),
            LogTarget::File(file) => {
                let mut file = lock(file)?;
                file.write(buf)
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &self.target {
            LogTarget::Discard => Ok(()),
            LogTarget::File(file) => {
                let mut file = lock(file)?;
                file.flush()
            }
        }
    }
}

fn lock(file: &Mutex<File>) -> io::Result<MutexGuard<'_, File>> {
    file.lock()
        .map_err(|_| io::Error::other("log file lock poisoned"))
}

#[derive(Clone, Debug)]
pub struct SubscriberMakeWriter {
    target: LogTarget,
}

impl SubscriberMakeWriter {
    pub fn new(target: LogTarget) -> Self {
        Self { target }
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SubscriberMakeWriter {
    type Writer = DelegatingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        DelegatingWriter {
            target: self.target.clone(),
        }
    }
}

/// Install the global subscriber. Safe to call multiple times; later calls
/// are no-ops.
pub fn init(target: LogTarget, level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(SubscriberMakeWriter::new(target))
        .with_ansi(false)
        .with_target(false)
        .with_thread_names(false)
        .try_init();
}
