//! Background Preference Writer
//!
//! Wraps a preference store so `set` never blocks the caller: writes are
//! queued on a crossbeam channel and applied in order by a worker thread.
//! Reads go straight to the wrapped store.

use std::sync::Arc;
use std::thread::JoinHandle;

use crossbeam_channel::Sender;
use tracing::{debug, error, warn};

use super::{FilePreferences, MemoryPreferences, PreferenceStore};
use crate::error::{Error, Result};

struct WriteRequest {
    key: String,
    value: String,
}

/// Fire-and-forget writer over any thread-safe store
///
/// Dropping the writer flushes queued writes and joins the worker.
pub struct BackgroundPreferences<S> {
    store: Arc<S>,
    tx: Option<Sender<WriteRequest>>,
    worker: Option<JoinHandle<()>>,
}

impl<S> BackgroundPreferences<S>
where
    S: PreferenceStore + Send + Sync + 'static,
{
    /// Spawn the worker thread for `store`
    pub fn spawn(store: S) -> Result<Self> {
        let store = Arc::new(store);
        let (tx, rx) = crossbeam_channel::unbounded::<WriteRequest>();

        let worker_store = store.clone();
        let worker = std::thread::Builder::new()
            .name("preference-writer".to_string())
            .spawn(move || {
                while let Ok(request) = rx.recv() {
                    match worker_store.set(&request.key, &request.value) {
                        Ok(()) => debug!(key = %request.key, "Preference written"),
                        Err(e) => {
                            warn!(error = %e, key = %request.key, "Failed to persist preference")
                        }
                    }
                }
                debug!("Preference writer stopped");
            })?;

        Ok(Self {
            store,
            tx: Some(tx),
            worker: Some(worker),
        })
    }

    /// The wrapped store
    pub fn inner(&self) -> &S {
        &self.store
    }
}

impl<S> PreferenceStore for BackgroundPreferences<S>
where
    S: PreferenceStore + Send + Sync + 'static,
{
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.store.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let Some(tx) = self.tx.as_ref() else {
            return Err(Error::PersistenceUnavailable {
                message: "preference writer closed".to_string(),
            });
        };

        tx.send(WriteRequest {
            key: key.to_string(),
            value: value.to_string(),
        })
        .map_err(|e| Error::PersistenceUnavailable {
            message: format!("preference writer stopped: {e}"),
        })
    }
}

/// Durable preferences in the config directory behind a background writer
///
/// Falls back to session-only memory preferences when the config directory
/// or the writer thread is unavailable.
pub fn open_preferences() -> Box<dyn PreferenceStore> {
    open_or_memory(FilePreferences::in_config_dir())
}

fn open_or_memory(file: Result<FilePreferences>) -> Box<dyn PreferenceStore> {
    match file.and_then(BackgroundPreferences::spawn) {
        Ok(store) => Box::new(store) as Box<dyn PreferenceStore>,
        Err(e) => {
            warn!(error = %e, "Preferences unavailable, language choice kept in memory for this session");
            Box::new(MemoryPreferences::new())
        }
    }
}

impl<S> Drop for BackgroundPreferences<S> {
    fn drop(&mut self) {
        // Closing the channel ends the worker loop once the queue drains
        drop(self.tx.take());
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                error!("Preference writer panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::LANGUAGE_KEY;
    use crate::services::MemoryPreferences;
    use crate::services::UnavailablePreferences;
    use tracing_test::traced_test;

    #[test]
    fn writes_are_flushed_on_drop_in_order() {
        let memory = MemoryPreferences::new();
        let writer = BackgroundPreferences::spawn(memory.clone()).expect("spawn writer");

        writer.set(LANGUAGE_KEY, "ar").expect("queue");
        writer.set(LANGUAGE_KEY, "fr").expect("queue");
        writer.set(LANGUAGE_KEY, "ar").expect("queue");
        drop(writer);

        assert_eq!(memory.get(LANGUAGE_KEY).expect("get").as_deref(), Some("ar"));
    }

    #[test]
    fn reads_go_through_to_the_store() {
        let memory = MemoryPreferences::with_value(LANGUAGE_KEY, "ar");
        let writer = BackgroundPreferences::spawn(memory).expect("spawn writer");
        assert_eq!(writer.get(LANGUAGE_KEY).expect("get").as_deref(), Some("ar"));
        assert_eq!(writer.inner().get("missing").expect("get"), None);
    }

    #[test]
    fn failing_store_does_not_fail_the_caller() {
        let writer = BackgroundPreferences::spawn(UnavailablePreferences).expect("spawn writer");
        assert!(writer.set(LANGUAGE_KEY, "fr").is_ok());
        assert!(writer.get(LANGUAGE_KEY).is_err());
    }

    #[test]
    #[traced_test]
    fn unavailable_config_dir_falls_back_to_memory() {
        let store = open_or_memory(Err(Error::Invalid {
            message: "no config dir".to_string(),
        }));

        store.set(LANGUAGE_KEY, "ar").expect("memory set");
        assert_eq!(store.get(LANGUAGE_KEY).expect("memory get").as_deref(), Some("ar"));
        assert!(logs_contain("Preferences unavailable"));
    }

    #[test]
    fn available_file_is_written_in_the_background() {
        let path = std::env::temp_dir()
            .join(format!("artisan-locale-{}", uuid::Uuid::new_v4()))
            .join("preferences.toml");

        let store = open_or_memory(Ok(FilePreferences::new(&path)));
        store.set(LANGUAGE_KEY, "ar").expect("queue");
        drop(store);

        let reopened = FilePreferences::new(&path);
        assert_eq!(reopened.get(LANGUAGE_KEY).expect("get").as_deref(), Some("ar"));

        let _ = std::fs::remove_dir_all(path.parent().expect("parent"));
    }
}
