//! Workflow and HTTP tests for the journal crate, run against a temp content root

use std::sync::Arc;

use bytes::Bytes;
use tempfile::TempDir;

use crate::application::{JournalConfig, PublishInput, PublishJournalUseCase, UploadPart};
use crate::domain::repository::JournalLedger;
use crate::error::JournalError;
use crate::infra::{FsBlobStore, JsonFileLedger};

struct Fixture {
    dir: TempDir,
    ledger: Arc<JsonFileLedger>,
    blobs: Arc<FsBlobStore>,
}

async fn fixture() -> Fixture {
    let dir = TempDir::new().unwrap();
    let config = JournalConfig::new(dir.path());
    let ledger = Arc::new(JsonFileLedger::open(config.ledger_path()).await.unwrap());
    let blobs = Arc::new(FsBlobStore::open(dir.path()).await.unwrap());
    Fixture { dir, ledger, blobs }
}

fn part(name: &str, data: &'static [u8]) -> UploadPart {
    UploadPart {
        original_name: name.to_string(),
        data: Bytes::from_static(data),
    }
}

fn files_in(dir: &std::path::Path) -> usize {
    std::fs::read_dir(dir).map(|d| d.count()).unwrap_or(0)
}

#[cfg(test)]
mod workflow_tests {
    use super::*;

    fn use_case(fx: &Fixture) -> PublishJournalUseCase<JsonFileLedger, FsBlobStore> {
        PublishJournalUseCase::new(fx.ledger.clone(), fx.blobs.clone())
    }

    fn input(name: &str) -> PublishInput {
        PublishInput {
            journal_name: Some(name.to_string()),
            description: Some("Quarterly".to_string()),
            issn: Some("1234-5678".to_string()),
            image: Some(part("cover.jpg", b"jpeg")),
            file: Some(part("issue.pdf", b"%PDF")),
        }
    }

    #[tokio::test]
    async fn test_publish_stores_blobs_and_appends_entry() {
        let fx = fixture().await;

        let output = use_case(&fx).execute(input("Vertex")).await.unwrap();
        let entry = output.entry;

        assert_eq!(entry.journal_name.as_deref(), Some("Vertex"));
        assert_eq!(entry.issn.as_deref(), Some("1234-5678"));
        assert!(entry.image_path.starts_with("journals/images/"));
        assert!(entry.file_path.starts_with("journals/files/"));
        assert_eq!(std::fs::read(fx.blobs.resolve(&entry.image_path)).unwrap(), b"jpeg");
        assert_eq!(std::fs::read(fx.blobs.resolve(&entry.file_path)).unwrap(), b"%PDF");

        assert_eq!(fx.ledger.entries().await.unwrap(), vec![entry]);
    }

    #[tokio::test]
    async fn test_missing_part_writes_nothing() {
        let fx = fixture().await;

        let mut without_file = input("No file");
        without_file.file = None;
        let err = use_case(&fx).execute(without_file).await.unwrap_err();
        assert!(matches!(err, JournalError::MissingUpload("fileFile")));

        let mut without_image = input("No image");
        without_image.image = None;
        let err = use_case(&fx).execute(without_image).await.unwrap_err();
        assert!(matches!(err, JournalError::MissingUpload("imageFile")));

        assert_eq!(files_in(&fx.dir.path().join("journals/images")), 0);
        assert_eq!(files_in(&fx.dir.path().join("journals/files")), 0);
        assert!(fx.ledger.entries().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_text_fields_are_optional() {
        let fx = fixture().await;

        let output = use_case(&fx)
            .execute(PublishInput {
                image: Some(part("a.png", b"a")),
                file: Some(part("a.pdf", b"a")),
                ..PublishInput::default()
            })
            .await
            .unwrap();

        assert!(output.entry.journal_name.is_none());
        assert!(output.entry.description.is_none());
        assert!(output.entry.issn.is_none());
    }

    #[tokio::test]
    async fn test_sequential_publishes_keep_order_and_unique_ids() {
        let fx = fixture().await;
        let uc = use_case(&fx);

        let mut ids = Vec::new();
        for i in 0..4 {
            ids.push(uc.execute(input(&format!("issue-{i}"))).await.unwrap().entry.id);
        }

        let entries = fx.ledger.entries().await.unwrap();
        let stored: Vec<_> = entries.iter().map(|e| e.id).collect();
        assert_eq!(stored, ids);

        let mut paths: Vec<_> = entries.iter().map(|e| e.image_path.clone()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), 4);
    }

    #[tokio::test]
    async fn test_concurrent_publishes_lose_nothing() {
        let fx = fixture().await;
        let uc = Arc::new(use_case(&fx));

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let uc = uc.clone();
                tokio::spawn(async move { uc.execute(input(&format!("issue-{i}"))).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(fx.ledger.entries().await.unwrap().len(), 16);
        assert_eq!(files_in(&fx.dir.path().join("journals/images")), 16);
        assert_eq!(files_in(&fx.dir.path().join("journals/files")), 16);
    }

    #[tokio::test]
    async fn test_corrupt_ledger_fails_publish_but_keeps_file() {
        let fx = fixture().await;
        std::fs::write(fx.ledger.path(), "[{").unwrap();

        let err = use_case(&fx).execute(input("Lost")).await.unwrap_err();
        assert!(matches!(err, JournalError::LedgerCorrupt(_)));
        assert_eq!(std::fs::read_to_string(fx.ledger.path()).unwrap(), "[{");
    }
}

#[cfg(test)]
mod http_tests {
    use super::*;
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::presentation::router::journal_router;

    const BOUNDARY: &str = "X-JOURNAL-BOUNDARY";

    enum FormPart<'a> {
        Text(&'a str, &'a str),
        File(&'a str, &'a str, &'a [u8]),
    }

    fn multipart_body(parts: &[FormPart<'_>]) -> Vec<u8> {
        let mut body = Vec::new();
        for part in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match part {
                FormPart::Text(name, value) => {
                    body.extend_from_slice(
                        format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n")
                            .as_bytes(),
                    );
                    body.extend_from_slice(value.as_bytes());
                }
                FormPart::File(name, filename, data) => {
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                             Content-Type: application/octet-stream\r\n\r\n"
                        )
                        .as_bytes(),
                    );
                    body.extend_from_slice(data);
                }
            }
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn app(fx: &Fixture, max_upload_bytes: usize) -> Router {
        let config = JournalConfig::new(fx.dir.path()).with_max_upload_bytes(max_upload_bytes);
        journal_router(fx.ledger.clone(), fx.blobs.clone(), &config)
    }

    async fn upload(app: Router, parts: &[FormPart<'_>]) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/uploadAdminJournal")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(multipart_body(parts)))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_upload_publishes_journal() {
        let fx = fixture().await;

        let (status, body) = upload(
            app(&fx, 1024 * 1024),
            &[
                FormPart::Text("journalName", "Vertex Review"),
                FormPart::Text("description", "Spring issue"),
                FormPart::Text("issn", "2049-3630"),
                FormPart::File("imageFile", "cover.png", b"png"),
                FormPart::File("fileFile", "issue.pdf", b"pdf"),
            ],
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Journal published successfully!");

        let entries = fx.ledger.entries().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].journal_name.as_deref(), Some("Vertex Review"));
        assert_eq!(entries[0].description.as_deref(), Some("Spring issue"));
        assert!(entries[0].image_path.ends_with(".png"));
        assert!(entries[0].file_path.ends_with(".pdf"));
    }

    #[tokio::test]
    async fn test_upload_without_file_part_is_bad_request() {
        let fx = fixture().await;

        let (status, body) = upload(
            app(&fx, 1024 * 1024),
            &[
                FormPart::Text("journalName", "Half"),
                FormPart::File("imageFile", "cover.png", b"png"),
            ],
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Missing required upload: fileFile");
        assert_eq!(files_in(&fx.dir.path().join("journals/images")), 0);
        assert!(fx.ledger.entries().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_repeated_file_part_is_bad_request() {
        let fx = fixture().await;

        let (status, body) = upload(
            app(&fx, 1024 * 1024),
            &[
                FormPart::File("imageFile", "a.png", b"a"),
                FormPart::File("imageFile", "b.png", b"b"),
                FormPart::File("fileFile", "c.pdf", b"c"),
            ],
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(fx.ledger.entries().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_ledger_reports_parse_error() {
        let fx = fixture().await;
        std::fs::write(fx.ledger.path(), "not json").unwrap();

        let (status, body) = upload(
            app(&fx, 1024 * 1024),
            &[
                FormPart::File("imageFile", "cover.png", b"png"),
                FormPart::File("fileFile", "issue.pdf", b"pdf"),
            ],
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Error parsing journal data");
    }

    #[tokio::test]
    async fn test_oversized_upload_is_rejected() {
        let fx = fixture().await;
        let big = vec![0u8; 4096];

        let (status, _) = upload(
            app(&fx, 1024),
            &[
                FormPart::File("imageFile", "cover.png", &big),
                FormPart::File("fileFile", "issue.pdf", b"pdf"),
            ],
        )
        .await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert!(fx.ledger.entries().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_non_multipart_body_gets_json_error() {
        let fx = fixture().await;
        let request = Request::builder()
            .method("POST")
            .uri("/uploadAdminJournal")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .unwrap();

        let response = app(&fx, 1024 * 1024).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert!(body["message"].is_string());
        assert!(fx.ledger.entries().await.unwrap().is_empty());
    }
}
