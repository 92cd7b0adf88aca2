//! Scoped ownership of a live stream.

use std::ops::{Deref, DerefMut};

use log::debug;

use super::device::VideoStream;

/// Owns a live stream and stops all of its tracks when dropped.
///
/// Every way out of a session (stop, capture, cancel, dropping the manager)
/// goes through this guard's `Drop`.
pub(crate) struct ActiveStream<S: VideoStream> {
    stream: S,
}

impl<S: VideoStream> ActiveStream<S> {
    pub(crate) fn new(stream: S) -> Self {
        Self { stream }
    }
}

impl<S: VideoStream> Deref for ActiveStream<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.stream
    }
}

impl<S: VideoStream> DerefMut for ActiveStream<S> {
    fn deref_mut(&mut self) -> &mut S {
        &mut self.stream
    }
}

impl<S: VideoStream> Drop for ActiveStream<S> {
    fn drop(&mut self) {
        let tracks = self.stream.live_tracks();
        self.stream.stop();
        debug!("Released camera stream ({tracks} track(s) stopped)");
    }
}
