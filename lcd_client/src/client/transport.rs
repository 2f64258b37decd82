use reqwest::{RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{error::LcdClientError, utils::is_non_null_object};

use super::LcdClient;

/// Query parameter placeholder for requests without a query string.
pub const NO_QUERY: Option<&[(&str, &str)]> = None;

impl LcdClient {
    /// Issues a GET request. `query` is appended as a query string when given.
    pub async fn get<Q>(&self, path: &str, query: Option<&Q>) -> Result<Value, LcdClientError>
    where
        Q: Serialize + ?Sized,
    {
        let url = self.endpoint_url(path);
        debug!(%url, "GET");

        let mut request = self.http.get(&url);
        if let Some(query) = query {
            request = request.query(query);
        }

        send(request).await
    }

    /// Issues a POST request with a JSON body. The body must serialize to a JSON object.
    pub async fn post<B>(&self, path: &str, body: &B) -> Result<Value, LcdClientError>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)
            .map_err(|e| LcdClientError::InvalidArgument(e.to_string()))?;
        if !is_non_null_object(&body) {
            return Err(LcdClientError::InvalidArgument(
                "Got unexpected type of params. Expected object.".to_string(),
            ));
        }

        let url = self.endpoint_url(path);
        debug!(%url, "POST");

        send(self.http.post(&url).json(&body)).await
    }
}

async fn send(request: RequestBuilder) -> Result<Value, LcdClientError> {
    let response = request.send().await?;

    if !response.status().is_success() {
        return Err(parse_error_response(response).await);
    }

    let body = response.text().await?;
    let data = parse_body(body);
    if data.is_null() {
        return Err(LcdClientError::EmptyResponse);
    }

    Ok(data)
}

/// Decodes a success body. A body that is not JSON is kept as a string and left for the
/// endpoint's shape check to reject.
fn parse_body(body: String) -> Value {
    serde_json::from_str(&body).unwrap_or(Value::String(body))
}

/// Turns a non-2xx response into an error, preferring the message sent by the server over the
/// generic status text.
async fn parse_error_response(response: Response) -> LcdClientError {
    let status = response.status();
    let status_error = response.error_for_status_ref().err();

    let body = match response.text().await {
        Ok(body) => body,
        Err(err) => return err.into(),
    };

    match (server_error_message(&body), status_error) {
        (Some(message), _) => {
            warn!(status = status.as_u16(), %message, "LCD request failed");
            LcdClientError::Server {
                message,
                status: status.as_u16(),
            }
        }
        (None, Some(err)) => err.into(),
        (None, None) => LcdClientError::Server {
            message: status.canonical_reason().unwrap_or_default().to_string(),
            status: status.as_u16(),
        },
    }
}

/// Extracts a human readable message from an error body.
///
/// Expects `{ "error": string }`, falls back to a bare JSON string and otherwise dumps the
/// whole body. Returns `None` when the server sent nothing usable.
pub(crate) fn server_error_message(body: &str) -> Option<String> {
    if body.is_empty() {
        return None;
    }

    let data = match serde_json::from_str::<Value>(body) {
        Ok(data) => data,
        Err(_) => return Some(body.to_string()),
    };

    match data {
        Value::Null => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text),
        data => match data.get("error") {
            Some(Value::String(error)) if !error.is_empty() => Some(error.clone()),
            _ => Some(data.to_string()),
        },
    }
}
