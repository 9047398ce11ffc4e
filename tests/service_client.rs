use resume_scanner::contract::BackendContract;
use resume_scanner::core::{AnalysisTransport, ServiceClient, ServiceConfig};
use resume_scanner::types::{AnalysisRequest, AnalysisResult, ResumeFile};
use resume_scanner::{AnalysisError, AnalyzeSession};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Raw request captured by the stub backend
struct Captured {
    head: String,
    body: String,
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Serve exactly one HTTP response and hand back the request that produced it
async fn stub_backend(status: u16, body: &'static str) -> (String, oneshot::Receiver<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];

        let header_end = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before headers");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = find(&buf, b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
        let content_length = head
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            });

        loop {
            let received = buf.len() - header_end;
            let complete = match content_length {
                Some(len) => received >= len,
                None => find(&buf[header_end..], b"\r\n0\r\n\r\n").is_some(),
            };
            if complete {
                break;
            }
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }

        let response = format!(
            "HTTP/1.1 {} Stub\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        let _ = tx.send(Captured {
            head,
            body: String::from_utf8_lossy(&buf[header_end..]).to_string(),
        });
    });

    (base_url, rx)
}

fn client(base_url: String, contract: BackendContract) -> ServiceClient {
    ServiceClient::new(&ServiceConfig {
        base_url,
        contract,
        timeout_seconds: Some(10),
    })
    .unwrap()
}

const JOB: &str = "Backend engineer: Rust, Tokio, PostgreSQL, observability and on-call experience.";

#[tokio::test]
async fn structured_success_posts_multipart_and_returns_report() {
    let (base_url, captured) = stub_backend(
        200,
        r#"{"success": true, "data": {"matchScore": 82, "strengths": ["Rust", "Tokio"], "missingSkills": ["PostgreSQL"], "summary": "Strong fit"}}"#,
    )
    .await;

    let mut session = AnalyzeSession::new(
        BackendContract::Structured,
        client(base_url, BackendContract::Structured),
    );
    session.select_file(ResumeFile::new("jane.txt", b"Jane Doe, Rust engineer".to_vec()));
    session.set_job_text(JOB);

    let state = session.submit().await;
    assert!(!state.is_loading());
    assert!(state.error().is_none());
    match state.result() {
        Some(AnalysisResult::Structured(report)) => {
            assert_eq!(report.match_score, 82);
            assert_eq!(report.strengths, vec!["Rust", "Tokio"]);
            assert_eq!(report.missing_skills, vec!["PostgreSQL"]);
            assert_eq!(report.summary, "Strong fit");
        }
        other => panic!("unexpected result: {:?}", other),
    }

    let request = captured.await.unwrap();
    assert!(request.head.starts_with("POST /api/analyze HTTP/1.1"));
    assert!(request.head.to_lowercase().contains("multipart/form-data"));
    assert!(request.body.contains("name=\"resume\"; filename=\"jane.txt\""));
    assert!(request.body.contains("Jane Doe, Rust engineer"));
    assert!(request.body.contains("name=\"job_description\""));
    assert!(request.body.contains(JOB));
}

#[tokio::test]
async fn markdown_success_uses_job_requirements_field() {
    let (base_url, captured) = stub_backend(
        200,
        r#"{"success": true, "analysis": "**SCORE: 64/100**\n- Python", "resume_preview": "Jane"}"#,
    )
    .await;

    let transport = client(base_url, BackendContract::Markdown);
    let request = AnalysisRequest {
        resume: ResumeFile::new("cv.pdf", b"%PDF-1.7".to_vec()),
        job_text: "  Python developer  ".to_string(),
    };

    let result = transport.analyze(&request).await.unwrap();
    assert_eq!(
        result,
        AnalysisResult::Markdown {
            analysis: "**SCORE: 64/100**\n- Python".to_string(),
            resume_preview: Some("Jane".to_string()),
        }
    );

    let request = captured.await.unwrap();
    assert!(request.head.starts_with("POST /analyze HTTP/1.1"));
    assert!(request.body.contains("name=\"job_requirements\"\r\n\r\nPython developer\r\n"));
    assert!(request.body.contains("application/pdf"));
}

#[tokio::test]
async fn error_status_carries_server_message() {
    let (base_url, _captured) =
        stub_backend(500, r#"{"success": false, "error": "Error reading PDF"}"#).await;

    let transport = client(base_url, BackendContract::Markdown);
    let request = AnalysisRequest {
        resume: ResumeFile::new("cv.pdf", vec![1, 2, 3]),
        job_text: "Python".to_string(),
    };
    match transport.analyze(&request).await {
        Err(AnalysisError::Server { status, message }) => {
            assert_eq!(status, Some(500));
            assert_eq!(message.as_deref(), Some("Error reading PDF"));
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[tokio::test]
async fn falsy_success_shows_error_in_session() {
    let (base_url, _captured) =
        stub_backend(200, r#"{"success": false, "error": "Job requirements are required"}"#).await;

    let mut session = AnalyzeSession::new(
        BackendContract::Markdown,
        client(base_url, BackendContract::Markdown),
    );
    session.select_file(ResumeFile::new("cv.txt", b"Jane".to_vec()));
    session.set_job_text("Python");

    let state = session.submit().await;
    assert!(!state.is_loading());
    assert!(state.result().is_none());
    assert_eq!(state.error(), Some("Job requirements are required"));
}

#[tokio::test]
async fn unreachable_backend_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let mut session = AnalyzeSession::new(
        BackendContract::Structured,
        client(base_url, BackendContract::Structured),
    );
    session.select_file(ResumeFile::new("cv.pdf", b"%PDF".to_vec()));
    session.set_job_text(JOB);

    let state = session.submit().await;
    assert!(!state.is_loading());
    assert!(state.result().is_none());
    assert_eq!(state.error(), Some("Analysis failed. Please try again."));
}
