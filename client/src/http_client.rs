use anyhow::Result;
use log::debug;
use reqwest::StatusCode;
use thiserror::Error;

use crate::client_api::NewsClient;
use crate::news::{News, NewsId, NewsInfo};

/// Error type for the HTTP news client
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("invalid server url {0:?}")]
    InvalidUrl(String),
    #[error("server answered {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Talks to the news server over HTTP/JSON.
pub struct HttpNewsClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpNewsClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = base_url.trim_end_matches('/');
        match reqwest::Url::parse(base_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            _ => return Err(ClientError::InvalidUrl(base_url.to_string())),
        }
        Ok(Self {
            base_url: base_url.to_string(),
            client: reqwest::Client::new(),
        })
    }

    fn news_url(&self) -> String {
        format!("{}/news", self.base_url)
    }

    fn news_item_url(&self, id: NewsId) -> String {
        format!("{}/news/{}", self.base_url, id)
    }

    async fn unexpected(response: reqwest::Response) -> ClientError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        ClientError::UnexpectedStatus {
            status,
            body: body.trim().to_string(),
        }
    }
}

#[async_trait::async_trait]
impl NewsClient for HttpNewsClient {
    async fn create_news(&self, info: &NewsInfo) -> Result<News> {
        let response = self
            .client
            .post(self.news_url())
            .json(info)
            .send()
            .await
            .map_err(ClientError::from)?;
        if response.status() != StatusCode::CREATED {
            return Err(Self::unexpected(response).await.into());
        }
        let news = response.json::<News>().await.map_err(ClientError::from)?;
        debug!("server assigned id {}", news.id);
        Ok(news)
    }

    async fn get_news(&self, id: NewsId) -> Result<Option<News>> {
        let response = self
            .client
            .get(self.news_item_url(id))
            .send()
            .await
            .map_err(ClientError::from)?;
        match response.status() {
            StatusCode::OK => Ok(Some(
                response.json::<News>().await.map_err(ClientError::from)?,
            )),
            StatusCode::NOT_FOUND => Ok(None),
            _ => Err(Self::unexpected(response).await.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    fn sample_info() -> NewsInfo {
        NewsInfo {
            title: String::from("Harvest festival opens."),
            context: String::from("Well done is better than well said."),
            reporter: String::from("Hana Sato"),
            country: String::from("Ghana"),
            time: Utc.with_ymd_and_hms(2001, 9, 9, 1, 46, 40).unwrap(),
        }
    }

    fn sample_news(id: NewsId) -> News {
        let at = Utc.with_ymd_and_hms(2024, 2, 29, 8, 15, 0).unwrap();
        News {
            id,
            info: sample_info(),
            created_at: at,
            updated_at: at,
        }
    }

    // Reads one request: headers, then as many body bytes as Content-Length says.
    async fn read_request(socket: &mut TcpStream) -> String {
        let mut request = Vec::new();
        let mut buffer = [0; 1024];
        loop {
            let n = socket.read(&mut buffer).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buffer[..n]);
            let text = String::from_utf8_lossy(&request);
            if let Some(end) = text.find("\r\n\r\n") {
                let content_length = text[..end]
                    .lines()
                    .find_map(|line| {
                        let (key, value) = line.split_once(':')?;
                        if key.eq_ignore_ascii_case("content-length") {
                            value.trim().parse::<usize>().ok()
                        } else {
                            None
                        }
                    })
                    .unwrap_or(0);
                if request.len() >= end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&request).into_owned()
    }

    /// Answers a single connection with `status` and `body`, returning the
    /// base url and a handle yielding the raw request that was received.
    async fn serve_once(status: &str, body: String) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            request
        });
        (format!("http://{}", addr), handle)
    }

    #[tokio::test]
    async fn test_create_news_decodes_created_record() {
        let expected = sample_news(42);
        let (url, server) = serve_once("201 Created", serde_json::to_string(&expected).unwrap()).await;
        let client = HttpNewsClient::new(&url).unwrap();

        let created = client.create_news(&sample_info()).await.unwrap();
        assert_eq!(created, expected);

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /news HTTP/1.1"));
        assert!(request.contains("\"reporter\":\"Hana Sato\""));
        assert!(request.contains("\"time\":\"2001-09-09T01:46:40Z\""));
    }

    #[tokio::test]
    async fn test_create_news_rejected() {
        let (url, _server) =
            serve_once("400 Bad Request", String::from("Failed to decode news data")).await;
        let client = HttpNewsClient::new(&url).unwrap();

        let err = client.create_news(&sample_info()).await.unwrap_err();
        match err.downcast_ref::<ClientError>() {
            Some(ClientError::UnexpectedStatus { status, body }) => {
                assert_eq!(*status, StatusCode::BAD_REQUEST);
                assert_eq!(body, "Failed to decode news data");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_news_requires_created_status() {
        let body = serde_json::to_string(&sample_news(1)).unwrap();
        let (url, _server) = serve_once("200 OK", body).await;
        let client = HttpNewsClient::new(&url).unwrap();

        let err = client.create_news(&sample_info()).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ClientError>(),
            Some(ClientError::UnexpectedStatus { status, .. }) if *status == StatusCode::OK
        ));
    }

    #[tokio::test]
    async fn test_get_news_found() {
        let expected = sample_news(-7);
        let (url, server) = serve_once("200 OK", serde_json::to_string(&expected).unwrap()).await;
        let client = HttpNewsClient::new(&url).unwrap();

        assert_eq!(client.get_news(-7).await.unwrap(), Some(expected));
        assert!(server.await.unwrap().starts_with("GET /news/-7 HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_get_news_missing_is_none() {
        let (url, _server) = serve_once("404 Not Found", String::from("News not found")).await;
        let client = HttpNewsClient::new(&url).unwrap();

        assert_eq!(client.get_news(43).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_get_news_bad_id_is_error() {
        let (url, _server) = serve_once("400 Bad Request", String::from("Invalid news ID")).await;
        let client = HttpNewsClient::new(&url).unwrap();

        let err = client.get_news(1).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ClientError>(),
            Some(ClientError::UnexpectedStatus { status, .. }) if *status == StatusCode::BAD_REQUEST
        ));
    }

    #[test]
    fn test_urls_ignore_trailing_slash() {
        let client = HttpNewsClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.news_url(), "http://localhost:8080/news");
        assert_eq!(client.news_item_url(42), "http://localhost:8080/news/42");

        let client = HttpNewsClient::new("http://localhost:8080").unwrap();
        assert_eq!(client.news_item_url(-3), "http://localhost:8080/news/-3");
    }

    #[test]
    fn test_rejects_bad_urls() {
        assert!(matches!(
            HttpNewsClient::new("localhost:8080"),
            Err(ClientError::InvalidUrl(_))
        ));
        assert!(matches!(
            HttpNewsClient::new("not a url"),
            Err(ClientError::InvalidUrl(_))
        ));
    }
}
