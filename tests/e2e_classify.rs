// LogClassify - tests/e2e_classify.rs
//
// End-to-end tests for the classification pipeline.
//
// These tests exercise the real reqwest client against a real loopback HTTP
// server on a background thread, so the bytes on the wire are what the
// classification service would see. No mocks of the transport itself.

use logclassify::app::classify::{run_pipeline, ClassifyManager};
use logclassify::app::state::{AppState, PipelinePhase};
use logclassify::app::transport::ClassifierClient;
use logclassify::core::model::{ClassifyProgress, PipelineOutcome};
use logclassify::app::headless;
use logclassify::util::error::{AppError, ClassifyError, ErrorKind};
use serde_json::json;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

// =============================================================================
// Helpers
// =============================================================================

/// One request as received by the stub server.
struct Captured {
    head: String,
    body: Vec<u8>,
}

impl Captured {
    fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

/// A loopback HTTP/1.1 server that answers `connections` requests.
struct Stub {
    addr: SocketAddr,
    captured: mpsc::Receiver<Captured>,
}

impl Stub {
    fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    fn next_request(&self) -> Captured {
        self.captured
            .recv_timeout(Duration::from_secs(5))
            .expect("stub server saw no request")
    }
}

type Responder = Box<dyn Fn(&Captured) -> (u16, String) + Send + 'static>;

fn start_stub(connections: usize, respond: Responder) -> Stub {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for stream in listener.incoming().take(connections) {
            let mut stream = stream.unwrap();
            let request = read_request(&mut stream);
            let (status, body) = respond(&request);
            let response = format!(
                "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
            let _ = tx.send(request);
        }
    });

    Stub { addr, captured: rx }
}

/// Echo each JSON request body back with a 200, so each outcome names its request.
fn echo_body(stream: &mut TcpStream, request: &Captured) {
    let body = String::from_utf8_lossy(&request.body);
    let response = format!(
        "HTTP/1.1 200 Stub\r\nContent-Type: application/json\r\n\
         Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    stream.write_all(response.as_bytes()).unwrap();
    stream.flush().unwrap();
}

/// A stub that holds two requests open, echoes the one whose body contains
/// `answer_first`, and echoes the other only once `release` fires.
fn start_held_stub(answer_first: &'static str, release: mpsc::Receiver<()>) -> Stub {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let mut held: Vec<(TcpStream, Captured)> = listener
            .incoming()
            .take(2)
            .map(|stream| {
                let mut stream = stream.unwrap();
                let request = read_request(&mut stream);
                (stream, request)
            })
            .collect();

        let first = held
            .iter()
            .position(|(_, req)| String::from_utf8_lossy(&req.body).contains(answer_first))
            .expect("no held request matched");
        let (mut stream, request) = held.remove(first);
        echo_body(&mut stream, &request);
        let _ = tx.send(request);

        release.recv_timeout(Duration::from_secs(5)).unwrap();
        let (mut stream, request) = held.remove(0);
        echo_body(&mut stream, &request);
        let _ = tx.send(request);
    });

    Stub { addr, captured: rx }
}

fn fixed(status: u16, body: &'static str) -> Responder {
    Box::new(move |_: &Captured| (status, body.to_string()))
}

fn read_request(stream: &mut TcpStream) -> Captured {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let head_end = loop {
        let n = stream.read(&mut chunk).unwrap();
        assert!(n > 0, "connection closed before headers completed");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..head_end]).to_string();
    let content_length = head
        .lines()
        .filter_map(|l| l.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .map(|(_, v)| v.trim().parse::<usize>().unwrap())
        .unwrap_or(0);

    while buf.len() < head_end + content_length {
        let n = stream.read(&mut chunk).unwrap();
        assert!(n > 0, "connection closed before body completed");
        buf.extend_from_slice(&chunk[..n]);
    }

    Captured {
        head,
        body: buf[head_end..head_end + content_length].to_vec(),
    }
}

/// An address nothing listens on.
fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/classify")
}

const LABELLED: &str =
    r#"[{"label_id":"L1","label":"Error","source":"App1","confidence":0.93}]"#;

// =============================================================================
// Transport / pipeline E2E
// =============================================================================

/// The basic scenario puts exactly the expected array on the wire.
#[tokio::test]
async fn e2e_basic_run_posts_expected_payload() {
    let stub = start_stub(1, fixed(200, LABELLED));
    let client = ClassifierClient::new(&stub.url("/classify")).unwrap();

    let run = run_pipeline(&client, "error: disk full\nwarning: low memory\n", "App1").await;

    assert_eq!(run.items, 2);
    match run.outcome {
        PipelineOutcome::Succeeded(result) => {
            assert_eq!(result, serde_json::from_str::<serde_json::Value>(LABELLED).unwrap());
        }
        PipelineOutcome::Failed(e) => panic!("unexpected failure: {e}"),
    }

    let request = stub.next_request();
    assert!(request.head.starts_with("POST /classify HTTP/1.1"), "{}", request.head);
    assert!(
        request
            .head
            .to_ascii_lowercase()
            .contains("content-type: application/json"),
        "{}",
        request.head
    );
    assert_eq!(
        request.json(),
        json!([
            {"source": "App1", "log_message": "error: disk full"},
            {"source": "App1", "log_message": "warning: low memory"}
        ])
    );
}

/// A blank buffer is still submitted, as an empty array.
#[tokio::test]
async fn e2e_blank_buffer_submits_empty_array() {
    let stub = start_stub(1, fixed(200, "[]"));
    let client = ClassifierClient::new(&stub.url("/classify")).unwrap();

    let run = run_pipeline(&client, "", "App1").await;

    assert_eq!(run.items, 0);
    assert!(run.outcome.is_success());
    assert_eq!(stub.next_request().body, b"[]");
}

/// Whitespace-only lines go out verbatim; exact-empty lines do not.
#[tokio::test]
async fn e2e_whitespace_lines_submitted_verbatim() {
    let stub = start_stub(1, fixed(200, "[]"));
    let client = ClassifierClient::new(&stub.url("/classify")).unwrap();

    let run = run_pipeline(&client, "a\n\n   \nb", "App1").await;

    assert_eq!(run.items, 3);
    let sent = stub.next_request().json();
    let messages: Vec<&str> = sent
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["log_message"].as_str().unwrap())
        .collect();
    assert_eq!(messages, vec!["a", "   ", "b"]);
}

/// Connection refused surfaces as a Transport failure, not a panic.
#[tokio::test]
async fn e2e_connection_refused_is_transport_error() {
    let client = ClassifierClient::new(&closed_port_url()).unwrap();

    let run = run_pipeline(&client, "error: disk full", "App1").await;

    match run.outcome {
        PipelineOutcome::Failed(e) => assert_eq!(e.kind(), ErrorKind::Transport),
        PipelineOutcome::Succeeded(v) => panic!("unexpected success: {v}"),
    }
}

/// A non-JSON body surfaces as a Decode failure.
#[tokio::test]
async fn e2e_non_json_body_is_decode_error() {
    let stub = start_stub(1, fixed(200, "<html>oops</html>"));
    let client = ClassifierClient::new(&stub.url("/classify")).unwrap();

    let run = run_pipeline(&client, "x", "App1").await;

    match run.outcome {
        PipelineOutcome::Failed(e) => {
            assert_eq!(e.kind(), ErrorKind::Decode);
            assert!(e.to_string().contains("HTTP 200"));
        }
        PipelineOutcome::Succeeded(v) => panic!("unexpected success: {v}"),
    }
}

/// Any valid JSON is accepted, whatever the status code.
#[tokio::test]
async fn e2e_json_error_body_is_stored_verbatim() {
    let stub = start_stub(1, fixed(500, r#"{"error":"model offline"}"#));
    let client = ClassifierClient::new(&stub.url("/classify")).unwrap();

    let run = run_pipeline(&client, "x", "App1").await;

    match run.outcome {
        PipelineOutcome::Succeeded(v) => assert_eq!(v, json!({"error": "model offline"})),
        PipelineOutcome::Failed(e) => panic!("unexpected failure: {e}"),
    }
}

/// The health check goes to /health on the same host.
#[tokio::test]
async fn e2e_health_check_hits_health_path() {
    let stub = start_stub(1, fixed(200, r#"{"status":"healthy"}"#));
    let client = ClassifierClient::new(&stub.url("/classify")).unwrap();

    let body = client.check_health().await.unwrap();

    assert_eq!(body, json!({"status": "healthy"}));
    assert!(stub.next_request().head.starts_with("GET /health HTTP/1.1"));
}

// =============================================================================
// Manager + state E2E
// =============================================================================

/// Poll the manager until `want` completions arrive or five seconds pass.
fn wait_for_completions(manager: &ClassifyManager, state: &mut AppState, want: usize) {
    let deadline = Instant::now() + Duration::from_secs(5);
    let mut seen = 0;
    while seen < want {
        assert!(Instant::now() < deadline, "timed out waiting for outcomes");
        for msg in manager.poll_progress() {
            if let ClassifyProgress::Completed {
                generation,
                items,
                elapsed,
                outcome,
            } = msg
            {
                state.apply_outcome(generation, items, elapsed, outcome);
                seen += 1;
            }
        }
        thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn e2e_manager_stores_successful_result() {
    let stub = start_stub(1, fixed(200, LABELLED));
    let client = ClassifierClient::new(&stub.url("/classify")).unwrap();
    let manager = ClassifyManager::new(client, "App1").unwrap();
    let mut state = AppState::new(manager.endpoint(), manager.source(), false);

    state.buffer.set("error: disk full\n");
    let generation = state.begin_submission();
    manager.start(generation, state.buffer.get().to_owned());
    wait_for_completions(&manager, &mut state, 1);

    assert!(matches!(state.phase, PipelinePhase::Succeeded { items: 1, .. }));
    assert_eq!(
        state.results.get(),
        Some(&serde_json::from_str::<serde_json::Value>(LABELLED).unwrap())
    );
}

#[test]
fn e2e_manager_failure_keeps_previous_result() {
    let stub = start_stub(1, fixed(200, "not json"));
    let client = ClassifierClient::new(&stub.url("/classify")).unwrap();
    let manager = ClassifyManager::new(client, "App1").unwrap();
    let mut state = AppState::new(manager.endpoint(), manager.source(), false);
    state.results.set(json!(["previous"]));

    let generation = state.begin_submission();
    manager.start(generation, "x".to_string());
    wait_for_completions(&manager, &mut state, 1);

    assert_eq!(state.results.get(), Some(&json!(["previous"])));
    assert!(matches!(
        state.phase,
        PipelinePhase::Failed {
            kind: ErrorKind::Decode,
            ..
        }
    ));
}

/// Wait for the next completion and apply it, returning whether it was applied.
fn apply_next_completion(manager: &ClassifyManager, state: &mut AppState) -> (u64, bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        assert!(Instant::now() < deadline, "timed out waiting for an outcome");
        for msg in manager.poll_progress() {
            if let ClassifyProgress::Completed {
                generation,
                items,
                elapsed,
                outcome,
            } = msg
            {
                return (generation, state.apply_outcome(generation, items, elapsed, outcome));
            }
        }
        thread::sleep(Duration::from_millis(10));
    }
}

/// Two overlapping triggers where the older response arrives last:
/// the newer result stays in the store.
#[test]
fn e2e_older_response_arriving_last_is_discarded() {
    let (release_tx, release_rx) = mpsc::channel();
    let stub = start_held_stub("second", release_rx);
    let client = ClassifierClient::new(&stub.url("/classify")).unwrap();
    let manager = ClassifyManager::new(client, "App1").unwrap();
    let mut state = AppState::new(manager.endpoint(), manager.source(), false);

    state.buffer.set("first");
    let g1 = state.begin_submission();
    manager.start(g1, state.buffer.get().to_owned());

    state.buffer.set("second");
    let g2 = state.begin_submission();
    manager.start(g2, state.buffer.get().to_owned());

    let newest = json!([{"source": "App1", "log_message": "second"}]);

    // Newer request answered first and applied.
    assert_eq!(apply_next_completion(&manager, &mut state), (g2, true));
    assert_eq!(state.results.get(), Some(&newest));
    assert!(matches!(state.phase, PipelinePhase::Succeeded { .. }));

    // Only now does the older request get its answer.
    release_tx.send(()).unwrap();
    assert_eq!(apply_next_completion(&manager, &mut state), (g1, false));
    assert_eq!(state.results.get(), Some(&newest));
    assert!(matches!(state.phase, PipelinePhase::Succeeded { .. }));

    // Both requests really reached the server.
    let mut bodies: Vec<String> = (0..2)
        .map(|_| String::from_utf8_lossy(&stub.next_request().body).to_string())
        .collect();
    bodies.sort();
    assert!(bodies[0].contains("\"first\""));
    assert!(bodies[1].contains("\"second\""));
}

#[test]
fn e2e_manager_health_check_reports_status() {
    let stub = start_stub(1, fixed(200, r#"{"status":"healthy"}"#));
    let client = ClassifierClient::new(&stub.url("/classify")).unwrap();
    let manager = ClassifyManager::new(client, "App1").unwrap();
    let mut state = AppState::new(manager.endpoint(), manager.source(), false);

    manager.start_health_check();

    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        assert!(Instant::now() < deadline, "timed out waiting for health check");
        let done = manager.poll_progress().into_iter().any(|msg| match msg {
            ClassifyProgress::HealthChecked { result } => {
                state.apply_health(result);
                true
            }
            _ => false,
        });
        if done {
            break;
        }
        thread::sleep(Duration::from_millis(10));
    }

    assert_eq!(state.status_message, "Service status: healthy");
}

// =============================================================================
// Headless E2E
// =============================================================================

#[test]
fn e2e_headless_classifies_stdin_once() {
    let stub = start_stub(1, fixed(200, LABELLED));
    let client = ClassifierClient::new(&stub.url("/classify")).unwrap();
    let manager = ClassifyManager::new(client, "App1").unwrap();

    let raw = headless::read_input(None, "error: disk full\n\n".as_bytes()).unwrap();
    let result = headless::classify_once(&manager, &raw).unwrap();
    let mut out = Vec::new();
    headless::write_result(&result, None, &mut out).unwrap();

    let printed: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(printed, serde_json::from_str::<serde_json::Value>(LABELLED).unwrap());
    assert_eq!(
        stub.next_request().json(),
        json!([{"source": "App1", "log_message": "error: disk full"}])
    );
}

#[test]
fn e2e_headless_unreachable_service_is_classify_error() {
    let client = ClassifierClient::new(&closed_port_url()).unwrap();
    let manager = ClassifyManager::new(client, "App1").unwrap();

    let err = headless::classify_once(&manager, "a\n").unwrap_err();
    assert!(
        matches!(err, AppError::Classify(ClassifyError::Transport { .. })),
        "{err}"
    );
    assert!(err.to_string().starts_with("Classification error:"));
}
