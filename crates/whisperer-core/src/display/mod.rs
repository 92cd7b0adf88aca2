//! Display formatting for scan results and notices.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers here add context a bare model does not carry, such as the
//! family a care sheet was looked up for or the hint under a camera error.
//! All output is markdown, rendered by the CLI's terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │    Markdown     │
//! │ (PlantRecord,   │───▶│ (CareSheet,     │───▶│     Output      │
//! │  ScanPhase)     │    │  CameraNotice)  │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ```rust
//! use whisperer_core::display::CameraNotice;
//! use whisperer_core::error::CameraError;
//!
//! let notice = CameraNotice::new(&CameraError::DeviceNotFound);
//! assert!(notice.to_string().contains("No camera found."));
//! ```

pub mod care;
pub mod models;
pub mod notices;

pub use care::{CareSheet, FamilyList};
pub use notices::CameraNotice;
