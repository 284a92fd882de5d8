//! End-to-end checks of the reqwest backend against a scripted local server.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use zenflow_api::{ApiConfig, ApiError, Environment, RecordClient};

/// Serve exactly one request with a canned response, handing back the raw
/// request text.
async fn serve_once(status: u16, body: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {status} Scripted\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        let _ = tx.send(request);
    });

    (format!("http://{addr}/api"), rx)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        let text = String::from_utf8_lossy(&buf);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn config(base_url: String) -> ApiConfig {
    ApiConfig {
        base_url,
        timeout: Duration::from_millis(500),
        ..ApiConfig::for_environment(Environment::Development)
    }
}

#[tokio::test]
async fn lists_owner_records_over_http() {
    let (base_url, request) = serve_once(
        200,
        r#"[{"id":1,"usuarioId":7,"nivelEstresse":3,"data":"2024-05-02T08:30:00"}]"#,
    )
    .await;
    let client = RecordClient::from_config(&config(base_url)).unwrap();

    let records = client.list_by_owner(7).await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].stress_level, 3);
    let request = request.await.unwrap();
    assert!(request.starts_with("GET /api/Registro/usuario/7 HTTP/1.1"), "{request}");
}

#[tokio::test]
async fn create_sends_json_with_default_headers() {
    let (base_url, request) = serve_once(
        201,
        r#"{"id":9,"usuarioId":7,"nivelEstresse":5,"observacoes":"exam","data":"2024-05-02T08:30:00Z"}"#,
    )
    .await;
    let client = RecordClient::from_config(&config(base_url)).unwrap();

    let record = client.create(7, 5, Some("exam".into())).await.unwrap();

    assert_eq!(record.id, 9);
    let request = request.await.unwrap().to_ascii_lowercase();
    assert!(request.starts_with("post /api/registro http/1.1"));
    assert!(request.contains("content-type: application/json"));
    assert!(request.contains(r#""nivelestresse":5"#));
}

#[tokio::test]
async fn server_error_detail_reaches_the_caller() {
    let (base_url, _request) = serve_once(500, r#"{"detail":"invalid level"}"#).await;
    let client = RecordClient::from_config(&config(base_url)).unwrap();

    let err = client.create(7, 9, None).await.unwrap_err();

    assert!(matches!(err, ApiError::ServerRejection { status: 500, .. }));
    assert_eq!(err.to_string(), "invalid level");
}

#[tokio::test]
async fn silent_server_times_out_as_connectivity_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (_socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(5)).await;
    });
    let client = RecordClient::from_config(&config(format!("http://{addr}/api"))).unwrap();

    let err = client.list_all().await.unwrap_err();

    assert!(matches!(err, ApiError::Connectivity { .. }), "{err:?}");
}

#[tokio::test]
async fn refused_connection_is_a_connectivity_failure() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let client = RecordClient::from_config(&config(format!("http://{addr}/api"))).unwrap();

    let err = client.list_all().await.unwrap_err();

    assert!(matches!(err, ApiError::Connectivity { .. }), "{err:?}");
}

#[tokio::test]
async fn malformed_base_url_fails_before_sending() {
    let client = RecordClient::from_config(&config("not a url".to_string())).unwrap();

    let err = client.list_all().await.unwrap_err();

    assert!(matches!(err, ApiError::RequestConstruction(_)), "{err:?}");
}
