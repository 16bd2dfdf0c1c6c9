use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use serde_json::{Map, Value};

use crate::error::AppError;

/// The writable fields of a project as sent by the client.
///
/// Every field is optional here; a missing value reaches the database as NULL
/// and is rejected by the `NOT NULL` constraints.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProjectParams {
    pub name: Option<String>,
    pub url: Option<String>,
    pub info: Option<String>,
}

impl ProjectParams {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn info(&self) -> Option<&str> {
        self.info.as_deref()
    }

    fn from_object(map: &Map<String, Value>) -> Self {
        ProjectParams {
            name: field(map, "name"),
            url: field(map, "url"),
            info: field(map, "info"),
        }
    }
}

impl<S: Send + Sync> FromRequest<S> for ProjectParams {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        RawParams::from_request(req, state).await?.parse()
    }
}

/// A request's query string and body, captured but not yet parsed.
///
/// Lets a handler decide whether the target exists before the body can
/// produce a 400.
#[derive(Debug)]
pub struct RawParams {
    query: Option<String>,
    content_type: Option<String>,
    body: Bytes,
}

impl RawParams {
    pub fn parse(&self) -> Result<ProjectParams, AppError> {
        parse_request(self.query.as_deref(), self.content_type.as_deref(), &self.body)
            .map_err(AppError::BadRequest)
    }
}

impl<S: Send + Sync> FromRequest<S> for RawParams {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query = req.uri().query().map(str::to_owned);
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(format!("Unable to read body: {e}")))?;

        Ok(RawParams {
            query,
            content_type,
            body,
        })
    }
}

/// Parse project parameters from the query string and a JSON or
/// form-urlencoded body. Body fields win over query fields.
pub fn parse_request(
    query: Option<&str>,
    content_type: Option<&str>,
    body: &[u8],
) -> Result<ProjectParams, String> {
    let mut fields = query
        .map(|q| parse_form_urlencoded(q.as_bytes()))
        .unwrap_or_default();

    fields.extend(
        parse_body(content_type, body)?
            .into_iter()
            .filter(|(_, v)| !v.is_null()),
    );

    Ok(ProjectParams::from_object(&fields))
}

fn parse_body(content_type: Option<&str>, body: &[u8]) -> Result<Map<String, Value>, String> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    let value = match content_type {
        Some(ct) if ct.contains("application/json") => {
            serde_json::from_slice(body).map_err(|e| format!("Invalid JSON: {e}"))?
        }
        Some(ct) if ct.contains("application/x-www-form-urlencoded") => {
            Value::Object(parse_form_urlencoded(body))
        }
        // Try JSON first, then form-urlencoded
        _ => serde_json::from_slice(body)
            .unwrap_or_else(|_| Value::Object(parse_form_urlencoded(body))),
    };

    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        _ => Err("Request body must be an object".to_string()),
    }
}

fn parse_form_urlencoded(input: &[u8]) -> Map<String, Value> {
    let mut map = Map::new();
    for (k, v) in form_urlencoded::parse(input) {
        // first occurrence of a repeated key wins
        map.entry(k.into_owned())
            .or_insert_with(|| Value::String(v.into_owned()));
    }
    map
}

/// Non-string values are stored as text, booleans as `True` / `False`.
fn field(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(true) => Some("True".to_string()),
        Value::Bool(false) => Some("False".to_string()),
        other => Some(other.to_string()),
    }
}
