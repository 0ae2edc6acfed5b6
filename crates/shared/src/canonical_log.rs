//! # Canonical Log Line ミドルウェア
//!
//! Q&A API の 1 リクエストを 1 行のサマリログ（メソッド、パス、ステータス、
//! レイテンシ、リクエスト ID）にまとめる tower Layer。
//!
//! TraceLayer のスパン内、`SetRequestIdLayer` の内側に置く。
//! `x-request-id` はその時点で必ず付与されている。

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::Instant,
};

use http::{Request, Response};
use tower::{Layer, Service};

use crate::observability::REQUEST_ID_HEADER;

/// サマリログを出さないパス（ヘルスチェック）
fn is_health_check_path(path: &str) -> bool {
    path == "/health" || path.starts_with("/health/")
}

/// リクエストごとに `log.type = "canonical"` のサマリログを出力する Layer
#[derive(Clone, Debug)]
pub struct CanonicalLogLineLayer;

impl<S> Layer<S> for CanonicalLogLineLayer {
    type Service = CanonicalLogLineService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CanonicalLogLineService { inner }
    }
}

#[derive(Clone, Debug)]
pub struct CanonicalLogLineService<S> {
    inner: S,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for CanonicalLogLineService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: std::fmt::Display + 'static,
    ReqBody: Send + 'static,
    ResBody: Send + 'static,
{
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;
    type Response = S::Response;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        // poll_ready 済みの inner を使う
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        if is_health_check_path(req.uri().path()) {
            return Box::pin(inner.call(req));
        }

        let method = req.method().clone();
        let path = req.uri().path().to_owned();
        let request_id = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-")
            .to_owned();
        let start = Instant::now();

        Box::pin(async move {
            let result = inner.call(req).await;
            let latency_ms = start.elapsed().as_millis() as u64;

            match &result {
                Ok(response) => tracing::info!(
                    log.r#type = "canonical",
                    http.method = %method,
                    http.path = %path,
                    http.request_id = %request_id,
                    http.status_code = response.status().as_u16(),
                    http.latency_ms = latency_ms,
                    "リクエスト完了"
                ),
                Err(err) => tracing::error!(
                    log.r#type = "canonical",
                    http.method = %method,
                    http.path = %path,
                    http.request_id = %request_id,
                    http.latency_ms = latency_ms,
                    error.message = %err,
                    "リクエスト処理エラー"
                ),
            }

            result
        })
    }
}
