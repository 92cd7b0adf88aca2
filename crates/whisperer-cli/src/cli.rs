//! Command handlers and their clap argument structures.
//!
//! Each subcommand has an argument struct parsed by clap and a handler on
//! [`Cli`] that drives the core library and renders markdown.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use log::debug;
use whisperer_core::{
    CameraNotice, CameraSessionManager, CareInstructionTable, CareSheet, Config, FamilyList,
    IdentificationClientBuilder, NoCamera, ScanPhase, ScanWorkflow, UploadedFile,
    WhispererError,
};

use crate::renderer::TerminalRenderer;

/// Shown when the picked file is not an image.
const NO_PHOTO_SELECTED: &str = "No photo selected.";

/// Identify a plant
#[derive(Args)]
pub struct ScanArgs {
    /// Photo of the plant to upload
    #[arg(required_unless_present = "camera", conflicts_with = "camera")]
    pub path: Option<PathBuf>,
    /// Take the photo with the device camera instead
    #[arg(long)]
    pub camera: bool,
}

/// Show care instructions for a family
#[derive(Args)]
pub struct CareArgs {
    /// Botanical family, e.g. Araceae
    pub family: String,
}

/// Runs commands against the core library and renders their output.
pub struct Cli {
    config: Config,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(config: Config, renderer: TerminalRenderer) -> Self {
        Self { config, renderer }
    }

    /// Runs one scan from the capture view to a result.
    ///
    /// Identification failures are rendered with a retry hint rather than
    /// returned as errors.
    pub async fn scan(&self, args: ScanArgs) -> Result<()> {
        let client = IdentificationClientBuilder::from_config(&self.config)
            .build()
            .context("Failed to initialize identification client")?;
        let camera = CameraSessionManager::<NoCamera>::unavailable();
        let mut workflow = ScanWorkflow::new(camera, client);
        workflow.start()?;

        let pending = if args.camera {
            match workflow.open_camera().await {
                Ok(dimensions) => {
                    debug!("Camera opened at {dimensions}");
                    Some(workflow.capture_photo()?)
                }
                Err(WhispererError::Camera(err)) => {
                    self.renderer.render(&CameraNotice::new(&err).to_string())?;
                    return self.renderer.render("\nRun `pw scan <PATH>` to upload a photo.\n");
                }
                Err(err) => return Err(err.into()),
            }
        } else {
            let path = args.path.context("A photo path is required")?;
            let file = UploadedFile::from_path(&path)
                .with_context(|| format!("Failed to read photo '{}'", path.display()))?;
            workflow.submit_upload(file)?
        };

        let Some(pending) = pending else {
            return self.renderer.render(&format!("{NO_PHOTO_SELECTED}\n"));
        };

        self.renderer.render(&ScanPhase::Identifying.to_string())?;
        workflow.identify(pending).await;
        self.renderer.render(&format!("\n{}", workflow.phase()))
    }

    pub fn care(&self, args: &CareArgs) -> Result<()> {
        let table = CareInstructionTable::builtin();
        let sheet = CareSheet::lookup(&table, &args.family);
        self.renderer.render(&sheet.to_string())
    }

    pub fn families(&self) -> Result<()> {
        let table = CareInstructionTable::builtin();
        self.renderer.render(&FamilyList(table.families()).to_string())
    }

    pub fn welcome(&self) -> Result<()> {
        self.renderer.render(&ScanPhase::Welcome.to_string())?;
        self.renderer
            .render("\nRun `pw scan <PATH>` to identify a plant from a photo.\n")
    }
}
