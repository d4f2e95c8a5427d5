use companion_api::config::{EnvConfig, MailConfig};
use companion_api::db::postgres_service::PostgresService;
use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub mod client;

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let postgres = Postgres::default();
        let container = postgres
            .start()
            .await
            .expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

pub fn get_test_config() -> EnvConfig {
    EnvConfig {
        port: 8080,
        db_url: "test".to_string(), // Not used in tests
        admin_key: "test-admin-key".to_string(),
        mail: MailConfig {
            api_key: "test".to_string(),
            // Nothing listens here; tests of delivery-failure behavior use
            // this default, happy-path tests point at spawn_mail_stub().
            endpoint: "http://127.0.0.1:1/emails".to_string(),
            from: "Companion Test <test@example.com>".to_string(),
        },
    }
}

#[allow(dead_code)]
pub fn get_test_config_with_mail(endpoint: &str) -> EnvConfig {
    let mut config = get_test_config();
    config.mail.endpoint = endpoint.to_string();
    config
}

/// In-process stand-in for the mail API: accepts every request and answers
/// 200. Returns the endpoint URL to hand to the mailer.
#[allow(dead_code)]
pub async fn spawn_mail_stub() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mail stub");
    let addr = listener.local_addr().expect("Failed to read stub address");

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut buf = Vec::new();
                let mut chunk = [0u8; 4096];
                loop {
                    match socket.read(&mut chunk).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => {
                            buf.extend_from_slice(&chunk[..n]);
                            if request_complete(&buf) {
                                break;
                            }
                        }
                    }
                }
                let _ = socket
                    .write_all(
                        b"HTTP/1.1 200 OK\r\n\
                          content-type: application/json\r\n\
                          content-length: 13\r\n\
                          connection: close\r\n\r\n\
                          {\"id\":\"test\"}",
                    )
                    .await;
            });
        }
    });

    format!("http://{addr}/emails")
}

#[allow(dead_code)]
fn request_complete(buf: &[u8]) -> bool {
    let Some(header_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
        return false;
    };
    let content_length = String::from_utf8_lossy(&buf[..header_end])
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .unwrap_or(0);
    buf.len() >= header_end + 4 + content_length
}
