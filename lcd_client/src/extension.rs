//! Composition of extension modules onto a single client.
//!
//! An extension factory receives the base [`LcdClient`] and returns an [`ExtensionModule`]: a
//! list of namespaces, each holding named [`Method`]s. Methods are usually closures over a
//! clone of the base client. Modules can also be *declared* as JSON documents describing LCD
//! routes (see [`route::Route`]), which is how modules coming from configuration files are
//! attached.
//!
//! Composition validates every module before merging any of them, so a failed composition
//! never leaves a partially extended client behind. Namespaces contributed by several modules
//! are merged key by key; on a duplicate method name the later module wins.
use std::{collections::BTreeMap, fmt, future::Future, ops::Deref, sync::Arc};

use futures::future::{BoxFuture, FutureExt};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::{
    client::LcdClient,
    config::ConnectionOptions,
    error::LcdClientError,
    utils::{ensure, json_type_name},
};

pub mod route;

pub type MethodFuture = BoxFuture<'static, Result<Value, LcdClientError>>;

/// An async function attached to a namespace.
#[derive(Clone)]
pub struct Method(Arc<dyn Fn(Args) -> MethodFuture + Send + Sync>);

impl Method {
    pub fn new<F, Fut>(f: F) -> Method
    where
        F: Fn(Args) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, LcdClientError>> + Send + 'static,
    {
        Method(Arc::new(move |args| f(args).boxed()))
    }

    pub async fn call(&self, args: Args) -> Result<Value, LcdClientError> {
        (self.0)(args).await
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Method")
    }
}

/// Arguments of a namespace method call: path parameters, query parameters and an optional
/// JSON body.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Args {
    params: BTreeMap<String, String>,
    query: Vec<(String, String)>,
    body: Option<Value>,
}

impl Args {
    pub fn new() -> Args {
        Args::default()
    }

    pub fn with_param(mut self, name: &str, value: impl ToString) -> Args {
        self.params.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_query(mut self, name: &str, value: impl ToString) -> Args {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_body(mut self, body: Value) -> Args {
        self.body = Some(body);
        self
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }
}

/// A named group of methods.
#[derive(Clone, Debug, Default)]
pub struct Namespace {
    methods: BTreeMap<String, Method>,
}

impl Namespace {
    pub fn new() -> Namespace {
        Namespace::default()
    }

    pub fn with_method(mut self, name: &str, method: Method) -> Namespace {
        self.methods.insert(name.to_string(), method);
        self
    }

    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.get(name)
    }

    pub fn method_names(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Adds the methods of `other`, replacing methods of the same name.
    fn merge(&mut self, other: Namespace) {
        self.methods.extend(other.methods);
    }
}

/// The value a module holds under a namespace key.
#[derive(Debug)]
pub enum NamespaceValue {
    Methods(Namespace),
    /// A JSON object of route descriptions, checked when the module is composed.
    Declared(Value),
}

impl From<Namespace> for NamespaceValue {
    fn from(namespace: Namespace) -> Self {
        NamespaceValue::Methods(namespace)
    }
}

impl From<Value> for NamespaceValue {
    fn from(value: Value) -> Self {
        NamespaceValue::Declared(value)
    }
}

#[derive(Debug)]
enum ModuleShape {
    Entries(Vec<(String, NamespaceValue)>),
    /// A declared module that is not a JSON object; holds the type that was found.
    Unstructured(&'static str),
}

/// What an extension factory returns.
#[derive(Debug)]
pub struct ExtensionModule {
    shape: ModuleShape,
}

impl Default for ExtensionModule {
    fn default() -> Self {
        ExtensionModule {
            shape: ModuleShape::Entries(Vec::new()),
        }
    }
}

impl ExtensionModule {
    pub fn new() -> ExtensionModule {
        ExtensionModule::default()
    }

    /// A module described by a JSON document of the form
    /// `{ "<namespace>": { "<method>": { "path": "...", ... } } }`.
    pub fn declared(value: Value) -> ExtensionModule {
        let shape = match value {
            Value::Object(namespaces) => ModuleShape::Entries(
                namespaces
                    .into_iter()
                    .map(|(key, value)| (key, NamespaceValue::Declared(value)))
                    .collect(),
            ),
            other => ModuleShape::Unstructured(json_type_name(&other)),
        };

        ExtensionModule { shape }
    }

    pub fn with_namespace(mut self, key: &str, value: impl Into<NamespaceValue>) -> ExtensionModule {
        if let ModuleShape::Entries(entries) = &mut self.shape {
            entries.push((key.to_string(), value.into()));
        }
        self
    }

    /// Turns the module into typed namespaces, binding declared routes to `client`.
    fn validate(self, client: &LcdClient) -> Result<Vec<(String, Namespace)>, LcdClientError> {
        let entries = match self.shape {
            ModuleShape::Entries(entries) => entries,
            ModuleShape::Unstructured(found) => {
                return Err(LcdClientError::InvalidExtension { found })
            }
        };

        let mut namespaces = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            ensure(!key.is_empty(), "Module keys must not be empty.")?;

            let namespace = match value {
                NamespaceValue::Methods(namespace) => namespace,
                NamespaceValue::Declared(Value::Object(routes)) => {
                    route::declared_namespace(client, &key, routes)?
                }
                NamespaceValue::Declared(other) => {
                    return Err(LcdClientError::InvalidExtensionModule {
                        namespace: key,
                        found: json_type_name(&other),
                    })
                }
            };
            namespaces.push((key, namespace));
        }

        Ok(namespaces)
    }
}

/// Sets up an extension module for a base client.
pub trait ExtensionFactory {
    fn setup(&self, client: &LcdClient) -> ExtensionModule;
}

impl<F> ExtensionFactory for F
where
    F: Fn(&LcdClient) -> ExtensionModule,
{
    fn setup(&self, client: &LcdClient) -> ExtensionModule {
        self(client)
    }
}

/// Accumulates extension factories and produces one [`ExtendedClient`].
pub struct ClientBuilder<'a> {
    options: ConnectionOptions,
    factories: Vec<Box<dyn ExtensionFactory + 'a>>,
}

impl<'a> ClientBuilder<'a> {
    pub fn new(options: ConnectionOptions) -> ClientBuilder<'a> {
        ClientBuilder {
            options,
            factories: Vec::new(),
        }
    }

    pub fn extension<F>(mut self, factory: F) -> ClientBuilder<'a>
    where
        F: ExtensionFactory + 'a,
    {
        self.factories.push(Box::new(factory));
        self
    }

    pub fn build(self) -> Result<ExtendedClient, LcdClientError> {
        let client = LcdClient::new(self.options)?;
        let modules = self
            .factories
            .iter()
            .map(|factory| factory.setup(&client))
            .collect();

        compose(client, modules)
    }
}

impl LcdClient {
    /// Creates a client and attaches the modules produced by `extensions`, in order.
    pub fn with_extensions(
        options: ConnectionOptions,
        extensions: &[&dyn ExtensionFactory],
    ) -> Result<ExtendedClient, LcdClientError> {
        let client = LcdClient::new(options)?;
        let modules = extensions
            .iter()
            .map(|factory| factory.setup(&client))
            .collect();

        compose(client, modules)
    }
}

fn compose(
    client: LcdClient,
    modules: Vec<ExtensionModule>,
) -> Result<ExtendedClient, LcdClientError> {
    let validated = modules
        .into_iter()
        .map(|module| module.validate(&client))
        .collect::<Result<Vec<_>, _>>()?;

    let mut namespaces: BTreeMap<String, Namespace> = BTreeMap::new();
    for (key, namespace) in validated.into_iter().flatten() {
        namespaces.entry(key).or_default().merge(namespace);
    }

    debug!(
        namespaces = ?namespaces.keys().collect::<Vec<_>>(),
        "composed LCD client extensions"
    );

    Ok(ExtendedClient { client, namespaces })
}

/// A client with extension namespaces attached. Derefs to the base [`LcdClient`], so all
/// core endpoints stay available.
#[derive(Clone, Debug)]
pub struct ExtendedClient {
    client: LcdClient,
    namespaces: BTreeMap<String, Namespace>,
}

impl ExtendedClient {
    pub fn namespace(&self, key: &str) -> Option<&Namespace> {
        self.namespaces.get(key)
    }

    pub fn namespace_keys(&self) -> impl Iterator<Item = &str> {
        self.namespaces.keys().map(String::as_str)
    }

    pub async fn call(
        &self,
        namespace: &str,
        method: &str,
        args: Args,
    ) -> Result<Value, LcdClientError> {
        let found = self
            .namespace(namespace)
            .ok_or_else(|| LcdClientError::UnknownNamespace(namespace.to_string()))?
            .method(method)
            .ok_or_else(|| LcdClientError::UnknownMethod {
                namespace: namespace.to_string(),
                method: method.to_string(),
            })?;

        found.call(args).await
    }

    /// Like [`ExtendedClient::call`], decoding the result into `T`.
    pub async fn call_as<T>(
        &self,
        namespace: &str,
        method: &str,
        args: Args,
    ) -> Result<T, LcdClientError>
    where
        T: DeserializeOwned,
    {
        let data = self.call(namespace, method, args).await?;

        serde_json::from_value(data).map_err(|source| LcdClientError::Decode {
            endpoint: format!("{}.{}", namespace, method),
            source,
        })
    }
}

impl Deref for ExtendedClient {
    type Target = LcdClient;

    fn deref(&self) -> &LcdClient {
        &self.client
    }
}
