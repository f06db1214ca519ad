//! The shared pause document and its single-writer discipline.
//!
//! All mutations go through [`PauseStore::load_for_update`], which hands out an
//! [`UpdateSession`] holding the store-wide writer lock. Only one session exists
//! at a time, whatever badge it is for: the document is one aggregate. The lock is
//! taken twice: an in-process mutex queues this process's toggles, and an advisory
//! lock on a `<document>.lock` sidecar excludes other processes (a `serve` and a
//! terminal `pause` on the same file). The session always re-reads the document
//! from disk once both are held, and [`UpdateSession::commit`] replaces it
//! atomically (temp file + rename), so readers never see a half-written file.
//!
//! Readers use [`PauseStore::read_only`] and never wait for the writer lock; they
//! read the last committed file.

use crate::errors::{AppError, AppResult};
use crate::models::PauseDocument;
use chrono::Utc;
use fs2::FileExt;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

pub const DEFAULT_MAX_PENDING: usize = 64;

pub struct PauseStore {
    path: PathBuf,
    lock_path: PathBuf,
    writer: Mutex<()>,
    /// Sessions waiting for or holding the writer lock.
    pending: AtomicUsize,
    max_pending: usize,
}

/// An exclusive read-modify-write session. Dropping it without calling
/// [`commit`](UpdateSession::commit) leaves the document untouched.
pub struct UpdateSession<'a> {
    store: &'a PauseStore,
    document: PauseDocument,
    /// The file on disk did not parse; it is kept aside before being replaced.
    unparsable: bool,
    // released on drop, file lock first
    _file_lock: File,
    _guard: MutexGuard<'a, ()>,
    _slot: PendingSlot<'a>,
}

struct PendingSlot<'a>(&'a AtomicUsize);

impl Drop for PendingSlot<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

/// What was found on disk.
struct Loaded {
    document: PauseDocument,
    unparsable: bool,
}

impl PauseStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_max_pending(path, DEFAULT_MAX_PENDING)
    }

    pub fn with_max_pending(path: impl Into<PathBuf>, max_pending: usize) -> Self {
        let path = path.into();
        let mut lock_name = path.file_name().unwrap_or_default().to_os_string();
        lock_name.push(".lock");
        Self {
            lock_path: path.with_file_name(lock_name),
            path,
            writer: Mutex::new(()),
            pending: AtomicUsize::new(0),
            max_pending: max_pending.max(1),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create an empty document on disk if none exists yet. Returns true if created.
    pub fn init(&self) -> AppResult<bool> {
        let _guard = self.lock_writer();
        let _file_lock = self.lock_file()?;
        if self.path.exists() {
            return Ok(false);
        }
        write_atomic(&self.path, &serde_json::to_vec_pretty(&PauseDocument::new())?)?;
        Ok(true)
    }

    /// Begin an exclusive session. Blocks while another session is open, in
    /// this process or another one.
    ///
    /// Fails fast with [`AppError::StoreBusy`] when `max_pending` sessions are
    /// already queued, before any lock is taken.
    pub fn load_for_update(&self) -> AppResult<UpdateSession<'_>> {
        let slot = self.reserve_slot()?;
        let guard = self.lock_writer();
        let file_lock = self.lock_file()?;
        let Loaded {
            document,
            unparsable,
        } = self.read_from_disk()?;

        Ok(UpdateSession {
            store: self,
            document,
            unparsable,
            _file_lock: file_lock,
            _guard: guard,
            _slot: slot,
        })
    }

    /// The last committed document.
    pub fn read_only(&self) -> AppResult<PauseDocument> {
        Ok(self.read_from_disk()?.document)
    }

    fn reserve_slot(&self) -> AppResult<PendingSlot<'_>> {
        let prev = self.pending.fetch_add(1, Ordering::AcqRel);
        let slot = PendingSlot(&self.pending);
        if prev >= self.max_pending {
            warn!(limit = self.max_pending, "pause store queue full, rejecting toggle");
            return Err(AppError::StoreBusy(self.max_pending));
        }
        Ok(slot)
    }

    /// The mutex guards no data and nothing uncommitted is ever visible, so a
    /// session that panicked leaves nothing to repair.
    fn lock_writer(&self) -> MutexGuard<'_, ()> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_file(&self) -> AppResult<File> {
        if let Some(dir) = self.lock_path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|e| {
                AppError::Storage(format!("cannot create {}: {e}", dir.display()))
            })?;
        }
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.lock_path)
            .map_err(|e| {
                AppError::Storage(format!("cannot open {}: {e}", self.lock_path.display()))
            })?;
        file.lock_exclusive().map_err(|e| {
            AppError::Storage(format!("cannot lock {}: {e}", self.lock_path.display()))
        })?;
        Ok(file)
    }

    /// Missing, empty or unparsable files yield a fresh document; any other
    /// read failure is a storage error.
    fn read_from_disk(&self) -> AppResult<Loaded> {
        let fresh = |unparsable| Loaded {
            document: PauseDocument::new(),
            unparsable,
        };
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => {
                debug!(path = %self.path.display(), "pause document is empty, starting fresh");
                Ok(fresh(false))
            }
            Ok(content) => match serde_json::from_str::<PauseDocument>(&content) {
                Ok(document) => {
                    debug!(
                        path = %self.path.display(),
                        active = document.active.len(),
                        history = document.history.len(),
                        "pause document loaded"
                    );
                    Ok(Loaded {
                        document,
                        unparsable: false,
                    })
                }
                Err(e) => {
                    warn!(
                        path = %self.path.display(),
                        error = %e,
                        "pause document unreadable, starting from an empty document"
                    );
                    Ok(fresh(true))
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no pause document yet, starting fresh");
                Ok(fresh(false))
            }
            Err(e) => Err(AppError::Storage(format!(
                "cannot read {}: {e}",
                self.path.display()
            ))),
        }
    }

    /// `pauses.json` → `pauses.json.corrupt-20250310T090000.000Z`
    fn quarantine_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(format!(".corrupt-{}", Utc::now().format("%Y%m%dT%H%M%S%.3fZ")));
        self.path.with_file_name(name)
    }
}

impl UpdateSession<'_> {
    pub fn document(&self) -> &PauseDocument {
        &self.document
    }

    /// Persist `next`, then release the session. On failure the file keeps its
    /// previous content.
    ///
    /// A document that failed to parse is copied aside first, so recovering to
    /// an empty document never destroys what was there.
    pub fn commit(self, next: PauseDocument) -> AppResult<()> {
        let path = &self.store.path;
        if self.unparsable {
            let backup = self.store.quarantine_path();
            fs::copy(path, &backup).map_err(|e| {
                AppError::Storage(format!("cannot back up {}: {e}", path.display()))
            })?;
            warn!(
                path = %path.display(),
                backup = %backup.display(),
                "unreadable pause document kept aside before overwrite"
            );
        }

        let bytes = serde_json::to_vec_pretty(&next)?;
        write_atomic(path, &bytes)
            .map_err(|e| AppError::Storage(format!("cannot write {}: {e}", path.display())))?;

        debug!(
            path = %path.display(),
            active = next.active.len(),
            history = next.history.len(),
            "pause document committed"
        );
        Ok(())
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> AppResult<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| AppError::Io(e.error))?;
    Ok(())
}
