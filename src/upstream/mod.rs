/// Tenant-scoped client for the external routing service.
///
/// Builds the per-tenant request (dynamic base path on a fixed host,
/// credential headers forwarded verbatim) and maps upstream failures
/// into [`FetchError`]. One outbound call per invocation, no retry,
/// no credential caching.
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use serde_json::{json, Value};
use thiserror::Error;

/// The only host ever contacted; the tenant base selects the path.
pub const ROUTING_HOST: &str = "https://routing.pathfindsistema.com.br";

/// Upper bound on the whole outbound call.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Failure classes of the fetch layer.
///
/// `MissingBase` is a caller-input problem detected before any network
/// action. `Upstream` carries the non-success status and response body
/// for the boundary to translate; `Transport` covers connect failures
/// and timeouts, where no status exists.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("tenant base identifier is required")]
    MissingBase,
    #[error("upstream responded with status {status}")]
    Upstream { status: u16, body: Value },
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl FetchError {
    /// True for local configuration problems (the caller's fault,
    /// never retried).
    pub fn is_configuration(&self) -> bool {
        matches!(self, FetchError::MissingBase)
    }

    /// Status code of the upstream response, if one completed.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Fetch the raw simulation collection for one tenant and date.
///
/// POSTs `{"date": <data>}` (the upstream's field name for the caller's
/// `data`) to `<host>/<base>/api/v1/simulacoes`, with the user and
/// password as `usuario`/`senha` headers. Returns the raw response
/// JSON; the aggregation engine tolerates any shape, so no validation
/// happens here.
pub async fn fetch_simulations(
    base: &str,
    usuario: &str,
    senha: &str,
    data: &str,
) -> Result<Value, FetchError> {
    if base.trim().is_empty() {
        return Err(FetchError::MissingBase);
    }
    request_simulations(ROUTING_HOST, FETCH_TIMEOUT, base, usuario, senha, data).await
}

/// Host- and timeout-parameterized request, split out so tests can
/// point it at a local stub server. Production traffic always goes
/// through [`fetch_simulations`] with the fixed host.
async fn request_simulations(
    host: &str,
    timeout: Duration,
    base: &str,
    usuario: &str,
    senha: &str,
    data: &str,
) -> Result<Value, FetchError> {
    let url = format!("{host}/{base}/api/v1/simulacoes");
    let client = reqwest::Client::builder().timeout(timeout).build()?;

    let response = client
        .post(&url)
        .header(CONTENT_TYPE, "application/json")
        .header("usuario", usuario)
        .header("senha", senha)
        .json(&json!({ "date": data }))
        .send()
        .await?;

    let status = response.status();
    let text = response.text().await?;
    // Non-JSON bodies are carried as plain strings rather than dropped.
    let body = serde_json::from_str::<Value>(&text).unwrap_or(Value::String(text));

    if !status.is_success() {
        return Err(FetchError::Upstream {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}
