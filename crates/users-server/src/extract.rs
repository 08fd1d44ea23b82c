use axum::Json;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// JSON body extractor that treats a missing body as an empty object.
///
/// Requests without an `application/json` content type, or with an empty
/// body, yield `T::default()`. Syntactically invalid JSON is rejected the
/// same way `axum::Json` rejects it. A top-level array has no named fields,
/// so it reads as an empty object; a top-level scalar is rejected with 400.
#[derive(Debug, Clone, Default)]
pub struct LenientJson<T>(pub T);

impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Ok(Self(T::default()));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        let Json(value) =
            Json::<Value>::from_bytes(&bytes).map_err(IntoResponse::into_response)?;
        let object = match value {
            Value::Object(map) => map,
            Value::Array(_) => Map::new(),
            _ => {
                return Err((
                    StatusCode::BAD_REQUEST,
                    "JSON body must be an object or an array",
                )
                    .into_response());
            }
        };

        let body = serde_json::from_value(Value::Object(object)).map_err(|err| {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Failed to deserialize the JSON body into the target type: {err}"),
            )
                .into_response()
        })?;
        Ok(Self(body))
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
}
