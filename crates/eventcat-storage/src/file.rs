use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use eventcat_common::Event;

use crate::store::{EventStore, StoreError, StoreResult};

const EVENTS_FILE: &str = "events.json";
const COUNTER_FILE: &str = "counter.json";

/// Flat-file backend: `events.json` holds the full collection as an array,
/// `counter.json` holds the next id as a bare integer.
///
/// Every mutation rewrites the whole collection. The mapping and the counter
/// live behind one mutex, so read-assign-persist is a single critical section
/// within the process; writes commit via temp-file-then-rename.
#[derive(Debug)]
pub struct JsonStore {
    data_dir: PathBuf,
    inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
    events: HashMap<i64, Event>,
    counter: i64,
}

impl Inner {
    fn next(&self) -> Inner {
        Inner {
            events: self.events.clone(),
            counter: self.counter,
        }
    }
}

impl JsonStore {
    /// Opens the store, creating the data directory if absent. Missing files
    /// mean a first run: empty collection, counter at 1. An unreadable or
    /// unparseable file is an error, not an empty store.
    pub fn open(data_dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;
        let events = load_events(&data_dir.join(EVENTS_FILE))?;
        let counter = load_counter(&data_dir.join(COUNTER_FILE))?;
        Ok(Self {
            data_dir,
            inner: Mutex::new(Inner { events, counter }),
        })
    }

    fn persist(&self, inner: &Inner) -> StoreResult<()> {
        let events: Vec<&Event> = inner.events.values().collect();
        write_atomic(
            &self.data_dir,
            EVENTS_FILE,
            &serde_json::to_vec_pretty(&events)?,
        )?;
        write_atomic(
            &self.data_dir,
            COUNTER_FILE,
            &serde_json::to_vec(&inner.counter)?,
        )?;
        Ok(())
    }
}

#[async_trait]
impl EventStore for JsonStore {
    async fn sync(&self) -> StoreResult<()> {
        fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }

    async fn health(&self) -> StoreResult<()> {
        fs::metadata(&self.data_dir)?;
        Ok(())
    }

    async fn list_events(&self) -> StoreResult<Vec<Event>> {
        let inner = self.inner.lock().await;
        Ok(inner.events.values().cloned().collect())
    }

    async fn get_event(&self, id: i64) -> StoreResult<Option<Event>> {
        let inner = self.inner.lock().await;
        Ok(inner.events.get(&id).cloned())
    }

    async fn create_event(&self, mut event: Event) -> StoreResult<Event> {
        let mut inner = self.inner.lock().await;
        event.id = inner.counter;
        let mut next = inner.next();
        next.counter += 1;
        next.events.insert(event.id, event.clone());
        // Persist before committing, so a failed write leaves memory intact.
        self.persist(&next)?;
        *inner = next;
        Ok(event)
    }

    async fn update_event(&self, id: i64, mut event: Event) -> StoreResult<Event> {
        let mut inner = self.inner.lock().await;
        if !inner.events.contains_key(&id) {
            return Err(StoreError::NotFound(id));
        }
        event.id = id;
        let mut next = inner.next();
        next.events.insert(id, event.clone());
        self.persist(&next)?;
        *inner = next;
        Ok(event)
    }

    async fn delete_event(&self, id: i64) -> StoreResult<bool> {
        let mut inner = self.inner.lock().await;
        if !inner.events.contains_key(&id) {
            return Ok(false);
        }
        let mut next = inner.next();
        next.events.remove(&id);
        self.persist(&next)?;
        *inner = next;
        Ok(true)
    }
}

fn load_events(path: &Path) -> StoreResult<HashMap<i64, Event>> {
    let Some(bytes) = read_if_present(path)? else {
        return Ok(HashMap::new());
    };
    let events: Vec<Event> = serde_json::from_slice(&bytes)?;
    Ok(events.into_iter().map(|event| (event.id, event)).collect())
}

fn load_counter(path: &Path) -> StoreResult<i64> {
    let Some(bytes) = read_if_present(path)? else {
        return Ok(1);
    };
    Ok(serde_json::from_slice(&bytes)?)
}

fn read_if_present(path: &Path) -> StoreResult<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn write_atomic(dir: &Path, name: &str, bytes: &[u8]) -> io::Result<()> {
    let tmp = dir.join(format!("{name}.tmp"));
    fs::write(&tmp, bytes)?;
    fs::rename(&tmp, dir.join(name))
}
