//! `HttpApi` against a throwaway HTTP/1.1 stub.
//!
//! Each stub accepts exactly one connection, records the raw request and
//! answers with a canned response.

use agency::{
    AgencyApi, ApiError, CaseStudyLoadState, CaseStudyLoader, ContactState, HttpApi, LeadField,
    LeadForm, LeadSubmitter, LocalCell, SiteConfig, StateCell, SubmissionStatus,
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

struct RecordedRequest {
    head: String,
    body: Vec<u8>,
}

impl RecordedRequest {
    fn request_line(&self) -> &str {
        self.head.lines().next().unwrap_or_default()
    }

    fn header(&self, name: &str) -> Option<String> {
        self.head.lines().skip(1).find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.trim()
                .eq_ignore_ascii_case(name)
                .then(|| value.trim().to_string())
        })
    }

    fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("request body is json")
    }
}

async fn stub(status_line: &str, body: &str) -> (SiteConfig, JoinHandle<RecordedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
    let addr = listener.local_addr().expect("stub addr");
    let response = format!(
        "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let request = read_request(&mut socket).await;
        socket
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        socket.shutdown().await.ok();
        request
    });

    let config = SiteConfig::with_backend_url(&format!("http://{addr}")).expect("stub url");
    (config, handle)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> RecordedRequest {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let head_end = loop {
        let n = socket.read(&mut chunk).await.expect("read request");
        assert!(n > 0, "client closed before sending headers");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..head_end]).into_owned();
    let content_length = head
        .lines()
        .find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.trim()
                .eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);

    while buf.len() < head_end + content_length {
        let n = socket.read(&mut chunk).await.expect("read body");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    RecordedRequest {
        head,
        body: buf[head_end..].to_vec(),
    }
}

/// Direct connection to the stub even when a proxy is configured in the env.
fn api(config: SiteConfig) -> HttpApi {
    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("reqwest client");
    HttpApi::with_client(client, config)
}

fn jo() -> LocalCell<ContactState> {
    let cell = LocalCell::new(ContactState::new());
    cell.modify(|s| {
        s.set_field(LeadField::Name, "Jo");
        s.set_field(LeadField::Email, "jo@x.com");
        s.toggle_service("Paid Social");
    });
    cell
}

#[tokio::test]
async fn lead_post_carries_json_body_with_source() {
    let (config, server) = stub("201 Created", "{}").await;
    let cell = jo();

    let status = LeadSubmitter::new(api(config)).submit(&cell).await;
    let request = server.await.unwrap();

    assert_eq!(status, Some(SubmissionStatus::Success));
    assert_eq!(cell.snapshot().form(), &LeadForm::default());

    assert_eq!(request.request_line(), "POST /api/leads HTTP/1.1");
    assert_eq!(
        request.header("content-type").as_deref(),
        Some("application/json")
    );
    assert_eq!(
        request.json(),
        json!({
            "name": "Jo",
            "email": "jo@x.com",
            "company": "",
            "website": "",
            "services": ["Paid Social"],
            "budget": "",
            "message": "",
            "source": "website",
        })
    );
}

#[tokio::test]
async fn lead_post_500_is_error_and_form_kept() {
    let (config, server) = stub("500 Internal Server Error", r#"{"detail":"boom"}"#).await;
    let cell = jo();

    let status = LeadSubmitter::new(api(config)).submit(&cell).await;
    server.await.unwrap();

    assert_eq!(status, Some(SubmissionStatus::Error));
    let state = cell.snapshot();
    assert_eq!(state.status(), SubmissionStatus::Error);
    assert_eq!(state.form().name, "Jo");
    assert_eq!(state.form().email, "jo@x.com");
    assert_eq!(state.form().services.len(), 1);
}

#[tokio::test]
async fn unreachable_backend_is_transport_error() {
    // bind then drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = api(SiteConfig::with_backend_url(&format!("http://{addr}")).unwrap());
    let err = api.submit_lead(&LeadForm::default()).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "{err:?}");
}

#[tokio::test]
async fn case_studies_get_decodes_items() {
    let body = r#"{"items":[
        {"id":1,"title":"DTC skincare","industry":"Beauty","summary":"3x ROAS"},
        {"id":2,"title":"B2B SaaS","summary":"Pipeline rebuild","impact":"+40% SQLs"}
    ]}"#;
    let (config, server) = stub("200 OK", body).await;
    let cell = LocalCell::new(CaseStudyLoadState::Loading);

    assert!(CaseStudyLoader::new(api(config)).load_into(&cell).await);
    let request = server.await.unwrap();

    assert_eq!(request.request_line(), "GET /api/case-studies HTTP/1.1");
    let CaseStudyLoadState::Loaded(items) = cell.snapshot() else {
        panic!("still loading");
    };
    let titles: Vec<_> = items.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["DTC skincare", "B2B SaaS"]);
    assert_eq!(items[1].impact.as_deref(), Some("+40% SQLs"));
}

#[tokio::test]
async fn case_studies_500_loads_empty() {
    let (config, server) = stub("500 Internal Server Error", "{}").await;
    let api = api(config);

    let fetch = CaseStudyLoader::new(api).fetch().await;
    server.await.unwrap();

    assert!(fetch.is_failure());
    assert!(fetch.into_items().is_empty());
}

#[tokio::test]
async fn case_studies_malformed_json_is_decode_error() {
    let (config, server) = stub("200 OK", "<html>oops</html>").await;
    let api = api(config);

    let err = api.fetch_case_studies().await.unwrap_err();
    server.await.unwrap();

    assert!(matches!(err, ApiError::Decode(_)), "{err:?}");
}

#[tokio::test]
async fn case_studies_without_items_key_is_empty() {
    let (config, server) = stub("200 OK", "{}").await;
    let cell = LocalCell::new(CaseStudyLoadState::Loading);

    CaseStudyLoader::new(api(config)).load_into(&cell).await;
    server.await.unwrap();

    assert_eq!(cell.snapshot(), CaseStudyLoadState::Loaded(vec![]));
}
