use crate::functions::identity::{register_identity, IdentityFunction, IDENTIFY_FUNCTION};
use crate::functions::registry::FunctionRegistry;
use crate::model::Customer;
use crate::query::engine::find_by_name_like;
use crate::region::index::NameIndex;
use crate::region::memory::Region;

use super::remote::RemoteGridClient;
use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;

/// CRUD and wildcard-query storage API for customers.
///
/// The backend is chosen at construction time: `local` keeps the region
/// in-process (the LOCAL client-region mode), `connect` forwards every
/// operation to a grid server (the PROXY mode). Callers see the same API
/// either way.
pub struct CustomerRepository {
    backend: Backend,
}

enum Backend {
    Local {
        region: Arc<Region<u64, Customer>>,
        index: Arc<NameIndex>,
        functions: Arc<FunctionRegistry>,
    },
    Remote(RemoteGridClient),
}

impl CustomerRepository {
    /// Builds a repository over an embedded region, index, and function
    /// registry. The identity function is registered and seeded from the
    /// wall clock, exactly as a server would at startup.
    pub fn local(region_name: &str) -> Self {
        let functions = FunctionRegistry::new();
        register_identity(&functions, Arc::new(IdentityFunction::started_now()));

        Self {
            backend: Backend::Local {
                region: Arc::new(Region::new(region_name)),
                index: Arc::new(NameIndex::new()),
                functions,
            },
        }
    }

    /// Builds a repository forwarding to the grid server at `server`.
    pub fn connect(server: SocketAddr) -> Self {
        Self {
            backend: Backend::Remote(RemoteGridClient::new(server)),
        }
    }

    /// Saves a customer, keyed by its id, and returns the saved value.
    pub async fn save(&self, customer: Customer) -> Result<Customer> {
        match &self.backend {
            Backend::Local { region, index, .. } => {
                if let Some(previous) = region.put(customer.id(), customer.clone()) {
                    index.remove(previous.name(), previous.id());
                }
                index.insert(customer.name(), customer.id());
                Ok(customer)
            }
            Backend::Remote(client) => {
                client.save(&customer).await?;
                Ok(customer)
            }
        }
    }

    pub async fn find_by_id(&self, id: u64) -> Result<Option<Customer>> {
        match &self.backend {
            Backend::Local { region, .. } => Ok(region.get(&id)),
            Backend::Remote(client) => client.find_by_id(id).await,
        }
    }

    pub async fn count(&self) -> Result<u64> {
        match &self.backend {
            Backend::Local { region, .. } => Ok(region.len() as u64),
            Backend::Remote(client) => client.count().await,
        }
    }

    /// Derived wildcard query over the indexed name field.
    pub async fn find_by_name_like(&self, pattern: &str) -> Result<Option<Customer>> {
        match &self.backend {
            Backend::Local { region, index, .. } => find_by_name_like(pattern, index, region),
            Backend::Remote(client) => client.find_by_name_like(pattern).await,
        }
    }

    /// Runs the identity function on the customer, returning it with a
    /// freshly assigned id. Dispatches through the function registry in
    /// local mode and over the invoke endpoint in remote mode.
    pub async fn identify(&self, customer: Customer) -> Result<Customer> {
        match &self.backend {
            Backend::Local { functions, .. } => {
                let args = serde_json::to_value(&customer)?;
                let result = functions.execute(IDENTIFY_FUNCTION, args).await?;
                Ok(serde_json::from_value(result)?)
            }
            Backend::Remote(client) => client.invoke_identify(&customer).await,
        }
    }
}
