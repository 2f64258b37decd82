//! Namespaces declared as JSON route descriptions, e.g.
//!
//! ```json
//! {
//!   "staking": {
//!     "validators": { "path": "/staking/validators", "expect": "result" },
//!     "delegation": { "path": "/staking/delegators/{delegator}/delegations/{validator}" }
//!   }
//! }
//! ```
use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    client::{endpoints::require_key, LcdClient},
    error::LcdClientError,
    utils::{assert_defined, encode_path_segment, json_type_name},
};

use super::{Args, Method, Namespace};

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Route {
    /// Path relative to the API URL; `{name}` segments are filled from the call's params.
    pub path: String,
    #[serde(default)]
    pub method: HttpMethod,
    /// Top-level key the response must carry.
    #[serde(default)]
    pub expect: Option<String>,
}

impl Route {
    pub fn parse(namespace: &str, name: &str, value: Value) -> Result<Route, LcdClientError> {
        let invalid = |reason: String| LcdClientError::InvalidRoute {
            namespace: namespace.to_string(),
            method: name.to_string(),
            reason,
        };

        if !value.is_object() {
            return Err(invalid(format!(
                "expected an object, found type {}",
                json_type_name(&value)
            )));
        }

        let route: Route = serde_json::from_value(value).map_err(|e| invalid(e.to_string()))?;
        if !route.path.starts_with('/') {
            return Err(invalid(format!("path '{}' must start with '/'", route.path)));
        }
        if !placeholders_balanced(&route.path) {
            return Err(invalid(format!("unbalanced braces in path '{}'", route.path)));
        }

        Ok(route)
    }

    /// Fills in the `{name}` placeholders of the path with percent-encoded params.
    pub fn expand_path(&self, endpoint: &str, args: &Args) -> Result<String, LcdClientError> {
        let mut path = String::with_capacity(self.path.len());
        let mut rest = self.path.as_str();

        while let Some(start) = rest.find('{') {
            path.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let end = assert_defined(after.find('}'), "unbalanced braces in route path")?;
            let name = &after[..end];
            let value = assert_defined(
                args.param(name),
                &format!("missing path parameter \"{}\" for {}", name, endpoint),
            )?;
            path.push_str(&encode_path_segment(value));
            rest = &after[end + 1..];
        }
        path.push_str(rest);

        Ok(path)
    }

    async fn invoke(
        &self,
        client: &LcdClient,
        endpoint: &str,
        args: Args,
    ) -> Result<Value, LcdClientError> {
        let path = self.expand_path(endpoint, &args)?;

        let data = match self.method {
            HttpMethod::Get => client.get(&path, Some(args.query())).await?,
            HttpMethod::Post => {
                let body = args.body().ok_or_else(|| {
                    LcdClientError::InvalidArgument(format!("{} requires a request body", endpoint))
                })?;
                client.post(&path, body).await?
            }
        };

        if let Some(key) = &self.expect {
            require_key(endpoint, key, &data)?;
        }

        Ok(data)
    }

    /// Binds the route to `client`.
    pub fn into_method(self, client: &LcdClient, endpoint: String) -> Method {
        let client = client.clone();
        let route = Arc::new(self);

        Method::new(move |args| {
            let client = client.clone();
            let route = route.clone();
            let endpoint = endpoint.clone();
            async move { route.invoke(&client, &endpoint, args).await }
        })
    }
}

fn placeholders_balanced(path: &str) -> bool {
    let mut open = false;
    for c in path.chars() {
        match (c, open) {
            ('{', false) => open = true,
            ('}', true) => open = false,
            ('{', true) | ('}', false) => return false,
            _ => {}
        }
    }
    !open
}

pub(crate) fn declared_namespace(
    client: &LcdClient,
    namespace: &str,
    routes: Map<String, Value>,
) -> Result<Namespace, LcdClientError> {
    let mut methods = Namespace::new();
    for (name, value) in routes {
        let route = Route::parse(namespace, &name, value)?;
        let endpoint = format!("{}.{}", namespace, name);
        methods = methods.with_method(&name, route.into_method(client, endpoint));
    }

    Ok(methods)
}
