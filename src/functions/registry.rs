//! Function Registry
//!
//! A dynamic registry that maps string-based function names (e.g.,
//! "identify") to executable Rust closures. This keeps the invoke endpoint
//! generic: new functions are added by registering them at startup, not by
//! touching the dispatch code.

use anyhow::Result;
use dashmap::DashMap;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Type alias for a thread-safe, asynchronous function handler.
/// It takes the JSON arguments and returns a Future resolving to the
/// JSON result.
pub type FunctionFn =
    Arc<dyn Fn(Value) -> Pin<Box<dyn Future<Output = Result<Value>> + Send>> + Send + Sync>;

/// Registry holding the mapping between function names and their
/// implementation.
pub struct FunctionRegistry {
    functions: DashMap<String, FunctionFn>,
}

impl FunctionRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            functions: DashMap::new(),
        })
    }

    /// Registers a new function under a specific name.
    pub fn register<F, Fut>(&self, function_name: &str, function: F)
    where
        F: Fn(Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value>> + Send + 'static,
    {
        // Box::pin type-erases the concrete Future so differently-typed
        // async functions share one map.
        let function_fn: FunctionFn = Arc::new(move |args: Value| {
            Box::pin(function(args)) as Pin<Box<dyn Future<Output = Result<Value>> + Send>>
        });

        self.functions
            .insert(function_name.to_string(), function_fn);

        tracing::info!("Registered function: {}", function_name);
    }

    /// Looks up a function by name and executes it with the provided
    /// arguments, returning its single result.
    pub async fn execute(&self, function_name: &str, args: Value) -> Result<Value> {
        if let Some(function_fn) = self.functions.get(function_name) {
            tracing::debug!("Invoking function '{}'", function_name);
            function_fn.value()(args).await
        } else {
            let error = format!("Unknown function: {}", function_name);
            tracing::error!("{}", error);
            Err(anyhow::anyhow!(error))
        }
    }

    /// Checks if a function is registered.
    pub fn has_function(&self, function_name: &str) -> bool {
        self.functions.contains_key(function_name)
    }

    /// Returns a list of all registered function names.
    pub fn function_names(&self) -> Vec<String> {
        self.functions
            .iter()
            .map(|entry| entry.key().clone())
            .collect()
    }

    /// Returns the total number of registered functions.
    pub fn function_count(&self) -> usize {
        self.functions.len()
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self {
            functions: DashMap::new(),
        }
    }
}
