use crate::model::Customer;

use super::registry::FunctionRegistry;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Name the identity function is registered and invoked under.
pub const IDENTIFY_FUNCTION: &str = "identify";

/// Assigns durable ids to customers from a monotonically increasing
/// sequence.
///
/// The sequence is owned by this value and seeded explicitly at
/// construction; every call to [`IdentityFunction::identify`] performs an
/// atomic increment-and-get, so concurrent callers never observe duplicate
/// or lost ids.
pub struct IdentityFunction {
    sequence: AtomicU64,
}

impl IdentityFunction {
    pub fn new(seed: u64) -> Self {
        Self {
            sequence: AtomicU64::new(seed),
        }
    }

    /// Seeds the sequence from the current wall-clock time in milliseconds,
    /// the conventional process-start seed for this grid.
    pub fn started_now() -> Self {
        Self::new(now_ms())
    }

    /// Returns a new customer with the same name and the next id from the
    /// sequence. Any id already on the input is replaced.
    pub fn identify(&self, customer: Customer) -> Customer {
        let id = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        customer.identified_by(id)
    }

    /// Current value of the sequence (the most recently issued id, or the
    /// seed when nothing was issued yet).
    pub fn current(&self) -> u64 {
        self.sequence.load(Ordering::SeqCst)
    }
}

/// Registers the identity function in the given registry under
/// [`IDENTIFY_FUNCTION`]. Arguments and result are a JSON-encoded
/// [`Customer`].
pub fn register_identity(registry: &FunctionRegistry, function: Arc<IdentityFunction>) {
    registry.register(IDENTIFY_FUNCTION, move |args| {
        let function = Arc::clone(&function);
        async move {
            let customer: Customer = serde_json::from_value(args)?;
            let identified = function.identify(customer);
            Ok(serde_json::to_value(identified)?)
        }
    });
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
