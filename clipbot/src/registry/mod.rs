//! Durable name → clip registry.
//!
//! The whole mapping is kept in memory and rewritten to a single JSON file on
//! every mutation. That is O(registry size) per write, which is fine for a
//! personal or small-group bot; a larger deployment would want an embedded
//! key-value store behind the same methods.

mod record;

pub use record::{normalize_name, ClipRecord};

use crate::error::ClipError;
use parking_lot::RwLock;
use record::StoredClip;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Default)]
struct Entries {
    /// Names in insertion order
    order: Vec<String>,
    records: HashMap<String, ClipRecord>,
}

pub struct ClipRegistry {
    path: PathBuf,
    entries: RwLock<Entries>,
}

impl ClipRegistry {
    /// Load the registry from `path`. A missing file is an empty registry;
    /// an unreadable or malformed one is an error.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ClipError> {
        let path = path.into();

        let entries = match fs::read_to_string(&path) {
            Ok(contents) => parse_entries(&path, &contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!(
                    "Registry: No file at {}, starting empty",
                    path.display()
                );
                Entries::default()
            }
            Err(source) => return Err(ClipError::Persistence { path, source }),
        };

        log::info!(
            "Registry: Loaded {} clips from {}",
            entries.order.len(),
            path.display()
        );

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, name: &str) -> Option<ClipRecord> {
        let key = normalize_name(name);
        self.entries.read().records.get(&key).cloned()
    }

    /// Insert or overwrite the clip for `name` and persist the whole registry.
    ///
    /// If the file can't be written the in-memory change is undone, so memory
    /// never holds an entry the file doesn't.
    pub fn put(&self, name: &str, remote_handle: &str) -> Result<ClipRecord, ClipError> {
        let key = normalize_name(name);
        let record = ClipRecord::new(&key, remote_handle);

        let mut entries = self.entries.write();
        let previous = entries.records.insert(key.clone(), record.clone());
        if previous.is_none() {
            entries.order.push(key.clone());
        }

        if let Err(e) = self.write_file(&entries) {
            match previous {
                Some(old) => {
                    entries.records.insert(key, old);
                }
                None => {
                    entries.records.remove(&key);
                    entries.order.pop();
                }
            }
            return Err(e);
        }

        Ok(record)
    }

    pub fn list(&self) -> Vec<String> {
        self.entries.read().order.clone()
    }

    /// All clips whose name contains `query`, ignoring case, in registry order.
    pub fn search(&self, query: &str) -> Vec<ClipRecord> {
        let needle = query.to_lowercase();
        let entries = self.entries.read();
        entries
            .order
            .iter()
            .filter(|name| name.contains(&needle))
            .filter_map(|name| entries.records.get(name).cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Write to a sibling temp file, then rename over the real one.
    fn write_file(&self, entries: &Entries) -> Result<(), ClipError> {
        let mut map = serde_json::Map::new();
        for name in &entries.order {
            if let Some(record) = entries.records.get(name) {
                let value = serde_json::to_value(record.to_stored()).map_err(|source| {
                    ClipError::Corrupt {
                        path: self.path.clone(),
                        source,
                    }
                })?;
                map.insert(name.clone(), value);
            }
        }

        let json = serde_json::to_string_pretty(&serde_json::Value::Object(map)).map_err(
            |source| ClipError::Corrupt {
                path: self.path.clone(),
                source,
            },
        )?;

        let io_err = |source| ClipError::Persistence {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let tmp_path = tmp_path_for(&self.path);
        let written = fs::File::create(&tmp_path)
            .and_then(|mut file| {
                file.write_all(json.as_bytes())?;
                file.sync_all()
            })
            .and_then(|()| fs::rename(&tmp_path, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(io_err(e));
        }

        log::debug!(
            "Registry: Saved {} clips to {}",
            entries.order.len(),
            self.path.display()
        );
        Ok(())
    }
}

fn parse_entries(path: &Path, contents: &str) -> Result<Entries, ClipError> {
    let corrupt = |source| ClipError::Corrupt {
        path: path.to_path_buf(),
        source,
    };

    let map: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(contents).map_err(corrupt)?;

    let mut entries = Entries::default();
    for (name, value) in map {
        let stored: StoredClip = serde_json::from_value(value).map_err(corrupt)?;
        let key = normalize_name(&name);
        if entries.records.contains_key(&key) {
            log::warn!(
                "Registry: Duplicate clip name '{}' after normalizing, keeping the later entry",
                key
            );
        } else {
            entries.order.push(key.clone());
        }
        entries
            .records
            .insert(key.clone(), ClipRecord::from_stored(key, stored));
    }
    Ok(entries)
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
