//! Issuing and revoking display URLs.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use log::{debug, warn};

use crate::models::{DisplayUrl, ImagePayload};

const URL_SCHEME: &str = "blob:whisperer";

/// Issues unique display URLs and tracks which are still live.
///
/// Sequence numbers only ever grow, so a revoked URL is never handed out
/// again.
#[derive(Debug, Default)]
pub struct DisplayUrlRegistry {
    next: AtomicU64,
    live: Mutex<HashSet<DisplayUrl>>,
}

impl DisplayUrlRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a new URL for `payload`.
    pub fn issue(&self, payload: &ImagePayload) -> DisplayUrl {
        let seq = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        let url = DisplayUrl(format!("{URL_SCHEME}/{seq}/{}", payload.file_name));
        self.live_set().insert(url.clone());
        url
    }

    /// Revokes `url`. Returns `false` if it was not live.
    pub fn revoke(&self, url: &DisplayUrl) -> bool {
        let removed = self.live_set().remove(url);
        if removed {
            debug!("Revoked {}", url.as_str());
        } else {
            warn!("Attempted to revoke unknown or revoked URL {}", url.as_str());
        }
        removed
    }

    pub fn is_live(&self, url: &DisplayUrl) -> bool {
        self.live_set().contains(url)
    }

    pub fn live_count(&self) -> usize {
        self.live_set().len()
    }

    fn live_set(&self) -> std::sync::MutexGuard<'_, HashSet<DisplayUrl>> {
        // The set holds no invariants a panicking holder could break.
        self.live.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
