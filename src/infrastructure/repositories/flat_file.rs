//! Flat File Repository
//!
//! One record per line, fields separated by commas, no header. Every call
//! reads the whole file; every mutation rewrites the whole file, so the file
//! is always a complete snapshot.
//!
//! - A missing or empty file is an empty dataset.
//! - A line that fails to decode is logged and skipped; the rest of the file
//!   still loads. Rewrites keep such lines verbatim, so a hand edit is never
//!   lost to an unrelated mutation.
//! - Read failures on `get`/`get_all` are logged and degrade to an empty
//!   result. Mutations abort instead, leaving the file untouched.

use std::fs;
use std::io::{self, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::entities::{EntityId, HasId, Record, FIELD_SEPARATOR};
use crate::domain::ports::{Repository, RepositoryError, RepositoryResult};

/// Entity-agnostic file repository; `T` supplies its own line format.
#[derive(Debug)]
pub struct FlatFileRepository<T> {
    path: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> FlatFileRepository<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_from_disk(&self) -> RepositoryResult<Snapshot<T>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Snapshot::default()),
            Err(source) => {
                return Err(RepositoryError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        Ok(parse_records(&content, &self.path))
    }

    /// Snapshot for read-only calls; failures are logged, never raised.
    fn load_or_empty(&self) -> Vec<T> {
        match self.load_from_disk() {
            Ok(snapshot) => snapshot.records,
            Err(e) => {
                log::error!("{e}; treating {} as empty", T::KIND);
                Vec::new()
            }
        }
    }

    fn save_to_disk(&self, lines: &[String]) -> RepositoryResult<()> {
        let write_err = |source| RepositoryError::Write {
            path: self.path.clone(),
            source,
        };

        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(write_err)?;

        let mut content = String::new();
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }

        let mut tmp = NamedTempFile::new_in(parent).map_err(write_err)?;
        tmp.write_all(content.as_bytes()).map_err(write_err)?;
        tmp.persist(&self.path).map_err(|e| write_err(e.error))?;

        log::debug!(
            "rewrote {} with {} {} line(s)",
            self.path.display(),
            lines.len(),
            T::KIND
        );
        Ok(())
    }

    /// Read, apply `op` to the decoded records, rewrite. Lines that did not
    /// decode go back out verbatim in their original position.
    fn mutate<F>(&self, op: F) -> RepositoryResult<()>
    where
        F: FnOnce(&mut Vec<T>),
    {
        let Snapshot {
            mut records,
            layout,
        } = self.load_from_disk()?;
        op(&mut records);

        let mut lines = Vec::with_capacity(layout.len() + records.len());
        for slot in layout {
            match slot {
                Slot::Unparsed(raw) => lines.push(raw),
                Slot::Record(id) => {
                    if let Some(pos) = records.iter().position(|r| r.id() == id) {
                        lines.push(records.remove(pos).to_line());
                    }
                }
            }
        }
        lines.extend(records.iter().map(|r| r.to_line()));
        self.save_to_disk(&lines)
    }
}

/// One non-blank line of the file
#[derive(Debug)]
enum Slot {
    Record(EntityId),
    Unparsed(String),
}

/// Decoded records plus the line layout needed to rewrite the file
#[derive(Debug)]
struct Snapshot<T> {
    records: Vec<T>,
    layout: Vec<Slot>,
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            layout: Vec::new(),
        }
    }
}

/// Decode every line. Later duplicates of an id replace the earlier record
/// in place, so file order is kept. Undecodable lines stay in the layout.
fn parse_records<T: Record>(content: &str, path: &Path) -> Snapshot<T> {
    let mut snapshot: Snapshot<T> = Snapshot::default();
    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        match T::from_fields(&fields) {
            Ok(record) => match snapshot.records.iter_mut().find(|r| r.id() == record.id()) {
                Some(existing) => {
                    log::warn!(
                        "{}:{}: duplicate {} id {}, keeping the later line",
                        path.display(),
                        index + 1,
                        T::KIND,
                        record.id()
                    );
                    *existing = record;
                }
                None => {
                    snapshot.layout.push(Slot::Record(record.id()));
                    snapshot.records.push(record);
                }
            },
            Err(e) => {
                log::warn!(
                    "{}:{}: skipping malformed {} record: {}",
                    path.display(),
                    index + 1,
                    T::KIND,
                    e
                );
                snapshot.layout.push(Slot::Unparsed(line.to_string()));
            }
        }
    }
    snapshot
}

impl<T: Record + Clone> Repository<T> for FlatFileRepository<T> {
    fn create(&self, entity: T) -> RepositoryResult<()> {
        self.mutate(|records| {
            if records.iter().all(|r| r.id() != entity.id()) {
                records.push(entity);
            }
        })
    }

    fn get(&self, id: EntityId) -> RepositoryResult<Option<T>> {
        Ok(self.load_or_empty().into_iter().find(|r| r.id() == id))
    }

    fn update(&self, entity: T) -> RepositoryResult<()> {
        self.mutate(|records| {
            if let Some(existing) = records.iter_mut().find(|r| r.id() == entity.id()) {
                *existing = entity;
            }
        })
    }

    fn delete(&self, id: EntityId) -> RepositoryResult<()> {
        self.mutate(|records| records.retain(|r| r.id() != id))
    }

    fn get_all(&self) -> RepositoryResult<Vec<T>> {
        Ok(self.load_or_empty())
    }
}
