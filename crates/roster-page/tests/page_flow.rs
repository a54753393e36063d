//! End-to-end page flow over the file transport.

use std::path::PathBuf;

use roster_core::PageConfig;
use roster_data::{FetchClient, FileTransport};
use roster_observability::{LogCapture, LogLevel, RequestId, StructuredLogger};
use roster_page::StudentDirectoryPage;

const ROSTER: &str = r#"{
    "students": [
        {"id": 1, "name": "Ana", "age": 23, "course": "AI"},
        {"id": 2, "name": "Ben", "age": 21, "course": "Web Development"},
        {"id": 3, "name": "Cy", "course": "Cyber Defense"}
    ],
    "courses": [
        {"title": "AI", "description": "Intro to AI"},
        {"title": "Web Development", "description": "HTML, CSS and JS"},
        {"title": "Cyber Defense", "description": "Securing networks"}
    ],
    "instructors": [
        {"id": 1, "name": "Bo", "subject": "Artificial Intelligence"},
        {"id": 2, "name": "Lee", "subject": "Advanced Web Development"}
    ]
}"#;

fn site(name: &str, roster: Option<&str>) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("roster-page-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(dir.join("data")).unwrap();
    if let Some(body) = roster {
        std::fs::write(dir.join("data/students.json"), body).unwrap();
    }
    dir
}

fn page(root: &PathBuf, config: PageConfig) -> (StudentDirectoryPage<FileTransport>, LogCapture) {
    let capture = LogCapture::new();
    let logger = StructuredLogger::new(RequestId::from_string("flow"))
        .with_workload("student-directory")
        .with_min_level(LogLevel::Debug)
        .with_capture(capture.clone());
    let client = FetchClient::new(FileTransport::new(root), logger);
    (StudentDirectoryPage::new(client, config), capture)
}

#[tokio::test]
async fn test_full_page_from_disk() {
    let root = site("full", Some(ROSTER));
    let (page, logs) = page(&root, PageConfig::default());

    let html = page.render_document().await.unwrap();

    assert!(html.contains(r#"<div class="student highlight">Ana (23) - AI *</div>"#));
    assert!(html.contains(r#"<div class="student">Ben (21) - Web Development</div>"#));
    assert!(html.contains(r#"<div class="student">Cy (undefined) - Cyber Defense</div>"#));
    assert!(html.contains("Web Development → Taught by Lee"));
    assert!(html.contains("Cyber Defense → Taught by Carlos Dela Cruz"));
    assert!(html.contains("I am Lee and I teach Advanced Web Development."));

    let order: Vec<usize> = ["students", "courses", "instructors", "relationships", "examples"]
        .iter()
        .map(|name| html.find(&format!(r#"data-section="{}""#, name)).unwrap())
        .collect();
    assert!(order.windows(2).all(|w| w[0] < w[1]));

    assert_eq!(logs.find("fetch complete").len(), 2);
    for entry in logs.entries() {
        assert_eq!(entry.workload.as_deref(), Some("student-directory"));
    }
}

#[tokio::test]
async fn test_missing_file_renders_fallback() {
    let root = site("missing", None);
    let (page, logs) = page(&root, PageConfig::default());

    let html = page.render_document().await.unwrap();
    assert!(html.contains(r#"<div id="output">Failed to load data (see console).</div>"#));

    let failures = logs.find("fetch failed");
    assert_eq!(failures.len(), 2);
    assert!(failures
        .iter()
        .all(|e| e.field_str("error") == Some("Network response was not ok: 404")));
}

#[tokio::test]
async fn test_custom_data_path_and_container() {
    let root = site("custom", None);
    std::fs::write(root.join("data/term2.json"), ROSTER).unwrap();

    let mut config = PageConfig::default().with_data_path("data/term2.json");
    config.container_id = "roster".to_string();
    let (page, _) = page(&root, config);

    let container = page.run().await;
    assert_eq!(container.id(), Some("roster"));
    assert_eq!(container.children().len(), 5);
}
