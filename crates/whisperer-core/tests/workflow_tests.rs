mod common;

use common::{mock_service, refused_endpoint, test_client, FICUS_RESPONSE};
use tempfile::TempDir;
use whisperer_core::{
    CameraError, CameraSessionManager, CameraState, IdentificationClient, NoCamera, ScanPhase,
    ScanWorkflow, UploadedFile, WhispererError, WorkflowState,
};

fn workflow(endpoint: &str) -> ScanWorkflow<NoCamera, IdentificationClient> {
    ScanWorkflow::new(
        CameraSessionManager::<NoCamera>::unavailable(),
        test_client(endpoint),
    )
}

fn photo() -> UploadedFile {
    UploadedFile::new("fig.jpg", "image/jpeg", vec![0xFF, 0xD8, 0xFF, 0xE0, 0, 1])
}

#[tokio::test]
async fn test_upload_scan_end_to_end() {
    let (url, handle) = mock_service(200, FICUS_RESPONSE).await;
    let mut workflow = workflow(&url);

    workflow.start().unwrap();
    let pending = workflow.submit_upload(photo()).unwrap().unwrap();
    assert_eq!(workflow.state(), WorkflowState::Identifying);
    assert_eq!(workflow.display_urls().live_count(), 1);

    assert!(workflow.identify(pending).await);
    assert_eq!(workflow.state(), WorkflowState::ResultSuccess);

    let plant = workflow.plant().unwrap();
    assert_eq!(plant.name, "Fiddle Leaf Fig");
    assert_eq!(plant.confidence, 92);
    assert!(workflow.phase().to_string().contains("## Care Instructions"));

    workflow.new_scan().unwrap();
    assert_eq!(workflow.state(), WorkflowState::Capturing);
    assert!(workflow.image().is_none());
    assert_eq!(workflow.display_urls().live_count(), 0);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_upload_from_disk() {
    let (url, handle) = mock_service(200, FICUS_RESPONSE).await;
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("fig.png");
    std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

    let mut workflow = workflow(&url);
    workflow.start().unwrap();
    let file = UploadedFile::from_path(&path).unwrap();
    let pending = workflow.submit_upload(file).unwrap().unwrap();
    assert_eq!(pending.payload().media_type, "image/png");
    assert_eq!(pending.payload().file_name, "fig.png");

    workflow.identify(pending).await;
    assert_eq!(workflow.state(), WorkflowState::ResultSuccess);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_text_file_is_ignored() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("notes.txt");
    std::fs::write(&path, "not a plant").unwrap();

    let mut workflow = workflow(&refused_endpoint().await);
    workflow.start().unwrap();
    let file = UploadedFile::from_path(&path).unwrap();

    assert!(workflow.submit_upload(file).unwrap().is_none());
    assert_eq!(workflow.state(), WorkflowState::Capturing);
    assert!(workflow.image().is_none());
}

#[tokio::test]
async fn test_camera_unavailable_keeps_upload_path() {
    let mut workflow = workflow(&refused_endpoint().await);
    workflow.start().unwrap();

    let err = workflow.open_camera().await.unwrap_err();
    assert!(matches!(err, WhispererError::Camera(CameraError::Unsupported)));
    assert_eq!(
        err.to_string(),
        "Camera not supported on this device. Please use the upload option."
    );
    assert_eq!(workflow.camera_state(), CameraState::Error);
    assert_eq!(workflow.camera_error(), Some(&CameraError::Unsupported));
    assert_eq!(workflow.state(), WorkflowState::Capturing);
    assert!(workflow.can_upload());
}

#[tokio::test]
async fn test_network_failure_then_retry() {
    let mut workflow = workflow(&refused_endpoint().await);
    workflow.start().unwrap();

    let pending = workflow.submit_upload(photo()).unwrap().unwrap();
    workflow.identify(pending).await;

    assert_eq!(workflow.state(), WorkflowState::ResultError);
    assert_eq!(
        workflow.phase(),
        &ScanPhase::Failed {
            message: "Failed to identify plant. Please try again.".to_string()
        }
    );

    workflow.new_scan().unwrap();
    assert!(workflow.can_upload());
}

#[tokio::test]
async fn test_reset_orphans_in_flight_identification() {
    let (url, handle) = mock_service(200, FICUS_RESPONSE).await;
    let mut workflow = workflow(&url);
    workflow.start().unwrap();

    let pending = workflow.submit_upload(photo()).unwrap().unwrap();
    let task = tokio::spawn(pending.run());
    workflow.reset();

    let outcome = task.await.unwrap();
    assert!(outcome.result.is_ok());
    assert!(!workflow.complete(outcome));
    assert_eq!(workflow.state(), WorkflowState::Welcome);
    assert!(workflow.plant().is_none());
    handle.await.unwrap();
}
