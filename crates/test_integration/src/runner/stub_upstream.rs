use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use color_eyre::Result;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Bytes served as the stub thumbnail, deliberately not valid UTF-8.
pub const THUMBNAIL_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0xFF, 0xD9];

/// A request the stub Dropbox API received.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Raw (still percent-encoded) request path.
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
}

#[derive(Clone, Default)]
pub struct StubUpstream {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubUpstream {
    pub fn thumbnail_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("stub lock poisoned").clone()
    }

    /// Starts the stub on an ephemeral port, serving both the manifest and the thumbnail API.
    pub async fn spawn() -> Result<(Self, SocketAddr, JoinHandle<()>)> {
        let stub = Self::default();
        let app = Router::new()
            .route("/manifest/albums.json", get(manifest))
            .route("/manifest/broken", get(broken_manifest))
            .route("/manifest/not-json", get(not_json_manifest))
            .route("/thumbnails/auto/{*path}", get(thumbnail))
            .with_state(stub.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub upstream failed");
        });

        Ok((stub, addr, handle))
    }
}

async fn manifest() -> impl IntoResponse {
    axum::Json(json!({
        "title": "Test albums",
        "albums": [
            {
                "name": "Summer",
                "url": "https://www.dropbox.com/sh/summer",
                "cover_path": "photos/a b.jpg",
                "year": 2014
            },
            {
                "name": "Winter",
                "url": "https://plus.google.com/photos/1/albums/2"
            },
            {
                "name": "Elsewhere",
                "url": "https://photos.example.com/album/3",
                "description": "Hosted <somewhere> else"
            }
        ]
    }))
}

async fn broken_manifest() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn not_json_manifest() -> &'static str {
    "this is not a manifest"
}

async fn thumbnail(State(stub): State<StubUpstream>, uri: Uri, headers: HeaderMap) -> Response {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let path = uri.path().to_owned();
    stub.requests
        .lock()
        .expect("stub lock poisoned")
        .push(RecordedRequest {
            path: path.clone(),
            query: uri.query().map(str::to_owned),
            authorization,
        });

    match path.as_str() {
        "/thumbnails/auto/photos/x.jpg" | "/thumbnails/auto/photos/a%20b.jpg" => {
            ([(header::CONTENT_TYPE, "image/jpeg")], THUMBNAIL_BYTES).into_response()
        }
        "/thumbnails/auto/photos/no-type.bin" => {
            let mut response = THUMBNAIL_BYTES.into_response();
            response.headers_mut().remove(header::CONTENT_TYPE);
            response
        }
        "/thumbnails/auto/photos/locked.jpg" => StatusCode::UNAUTHORIZED.into_response(),
        "/thumbnails/auto/photos/partial.jpg" => (
            StatusCode::PARTIAL_CONTENT,
            [(header::CONTENT_TYPE, "image/jpeg")],
            THUMBNAIL_BYTES,
        )
            .into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Answers every connection with the given raw HTTP/1.1 response, for status lines axum won't write.
pub async fn spawn_raw_http(response: &'static str) -> Result<(SocketAddr, JoinHandle<()>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let handle = tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut request = [0_u8; 4096];
            let _ = socket.read(&mut request).await;
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });
    Ok((addr, handle))
}
