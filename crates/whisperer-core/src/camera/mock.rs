//! In-memory camera used by unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::device::{
    CameraBackend, DeviceError, DeviceErrorKind, Dimensions, VideoConstraints, VideoFrame,
    VideoStream,
};

/// Shared count of running tracks across all streams of a mock camera.
#[derive(Debug, Clone, Default)]
pub(crate) struct TrackCounter(Arc<AtomicUsize>);

impl TrackCounter {
    pub(crate) fn live(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct MockCamera {
    delivered: Dimensions,
    failure: Arc<Mutex<Option<DeviceErrorKind>>>,
    ready: bool,
    corrupt_frames: bool,
    tracks: TrackCounter,
    seen: Arc<Mutex<Option<VideoConstraints>>>,
}

impl MockCamera {
    pub(crate) fn delivering(width: u32, height: u32) -> Self {
        Self {
            delivered: Dimensions::new(width, height),
            failure: Arc::new(Mutex::new(None)),
            ready: true,
            corrupt_frames: false,
            tracks: TrackCounter::default(),
            seen: Arc::new(Mutex::new(None)),
        }
    }

    pub(crate) fn failing(kind: DeviceErrorKind) -> Self {
        let camera = Self::delivering(1280, 720);
        *camera.failure.lock().unwrap() = Some(kind);
        camera
    }

    pub(crate) fn never_ready(mut self) -> Self {
        self.ready = false;
        self
    }

    pub(crate) fn with_corrupt_frames(mut self) -> Self {
        self.corrupt_frames = true;
        self
    }

    pub(crate) fn tracks(&self) -> TrackCounter {
        self.tracks.clone()
    }

    pub(crate) fn failure_switch(&self) -> Arc<Mutex<Option<DeviceErrorKind>>> {
        Arc::clone(&self.failure)
    }

    pub(crate) fn seen_constraints(&self) -> Arc<Mutex<Option<VideoConstraints>>> {
        Arc::clone(&self.seen)
    }
}

impl CameraBackend for MockCamera {
    type Stream = MockStream;

    async fn request_stream(
        &self,
        constraints: &VideoConstraints,
    ) -> Result<MockStream, DeviceError> {
        *self.seen.lock().unwrap() = Some(*constraints);
        if let Some(kind) = *self.failure.lock().unwrap() {
            return Err(DeviceError::new(kind, "mock acquisition failure"));
        }

        self.tracks.0.fetch_add(1, Ordering::SeqCst);
        Ok(MockStream {
            dimensions: self.delivered,
            ready: self.ready,
            corrupt_frames: self.corrupt_frames,
            running: true,
            tracks: self.tracks.clone(),
        })
    }
}

#[derive(Debug)]
pub(crate) struct MockStream {
    dimensions: Dimensions,
    ready: bool,
    corrupt_frames: bool,
    running: bool,
    tracks: TrackCounter,
}

impl VideoStream for MockStream {
    async fn ready(&mut self) -> Result<Dimensions, DeviceError> {
        if self.ready {
            Ok(self.dimensions)
        } else {
            Err(DeviceError::new(DeviceErrorKind::Other, "no frames"))
        }
    }

    fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    fn read_frame(&mut self) -> Result<VideoFrame, DeviceError> {
        let Dimensions { width, height } = self.dimensions;
        let mut rgba = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                rgba.extend_from_slice(&[(x % 256) as u8, (y % 256) as u8, 90, 255]);
            }
        }
        if self.corrupt_frames {
            rgba.truncate(rgba.len() / 2);
        }
        Ok(VideoFrame {
            width,
            height,
            rgba,
        })
    }

    fn live_tracks(&self) -> usize {
        usize::from(self.running)
    }

    fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.tracks.0.fetch_sub(1, Ordering::SeqCst);
        }
    }
}
