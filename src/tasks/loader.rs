use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::thread;

use crossbeam_channel::unbounded;
use tracing::debug;

use crate::config::ThumbnailOptions;
use crate::error::DecodeError;
use crate::processing::thumbnail::{Thumbnail, decode_thumbnail};

pub type LoadResult = Result<Thumbnail, DecodeError>;

/// Decodes a picked batch into thumbnails, one result per path, in selection order.
pub fn decode_batch(
    paths: &[PathBuf],
    opts: &ThumbnailOptions,
    max_concurrent: usize,
) -> Vec<LoadResult> {
    decode_batch_with(paths, max_concurrent, |path| decode_thumbnail(path, opts))
}

/// Runs `decode` over `paths` on at most `max_concurrent` workers.
///
/// Results come back in the order of `paths` no matter which worker finishes first.
pub fn decode_batch_with<T, F>(paths: &[PathBuf], max_concurrent: usize, decode: F) -> Vec<T>
where
    T: Send,
    F: Fn(&Path) -> T + Sync,
{
    let workers = max_concurrent.clamp(1, paths.len().max(1));
    debug!(count = paths.len(), workers, "decoding batch");
    if workers == 1 {
        return paths.iter().map(|path| decode(path)).collect();
    }

    let (job_tx, job_rx) = unbounded::<(usize, &Path)>();
    let (done_tx, done_rx) = unbounded::<(usize, T)>();
    for (index, path) in paths.iter().enumerate() {
        let _ = job_tx.send((index, path.as_path()));
    }
    drop(job_tx);

    let mut ordered = InOrder::new();
    let mut out = Vec::with_capacity(paths.len());
    thread::scope(|scope| {
        for _ in 0..workers {
            let jobs = job_rx.clone();
            let done = done_tx.clone();
            let decode = &decode;
            scope.spawn(move || {
                for (index, path) in jobs.iter() {
                    if done.send((index, decode(path))).is_err() {
                        break;
                    }
                }
            });
        }
        drop(done_tx);

        for (index, item) in done_rx.iter() {
            out.extend(ordered.push(index, item));
        }
    });
    debug_assert!(ordered.is_drained());
    out
}

/// Reorder buffer: holds items that arrive early until every lower index has been released.
#[derive(Debug)]
pub struct InOrder<T> {
    next: usize,
    pending: BTreeMap<usize, T>,
}

impl<T> InOrder<T> {
    pub fn new() -> Self {
        Self {
            next: 0,
            pending: BTreeMap::new(),
        }
    }

    /// Accepts the item for `index` and returns everything now releasable, lowest index first.
    pub fn push(&mut self, index: usize, item: T) -> Vec<T> {
        self.pending.insert(index, item);
        let mut ready = Vec::new();
        while let Some(item) = self.pending.remove(&self.next) {
            ready.push(item);
            self.next += 1;
        }
        ready
    }

    pub fn is_drained(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<T> Default for InOrder<T> {
    fn default() -> Self {
        Self::new()
    }
}
