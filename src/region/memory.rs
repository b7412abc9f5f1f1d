use dashmap::DashMap;
use std::hash::Hash;
use std::time::{SystemTime, UNIX_EPOCH};

/// A named in-memory key-value region.
///
/// All operations are safe under concurrent access from multiple request
/// handlers. Values are cloned out on read; the region never hands out
/// references into its own storage.
pub struct Region<K, V> {
    name: String,
    entries: DashMap<K, V>,
    processed_ops: DashMap<String, u64>,
}

impl<K, V> Region<K, V>
where
    K: Clone + Hash + Eq + Send + Sync,
    V: Clone + Send + Sync,
{
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entries: DashMap::new(),
            processed_ops: DashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Records an operation id and reports whether it is new.
    ///
    /// Retried client writes reuse their original operation id, so a write
    /// that already went through must not be applied a second time.
    pub fn begin_op(&self, op_id: &str) -> bool {
        if self.processed_ops.contains_key(op_id) {
            return false;
        }
        if self.processed_ops.len() > 10_000 {
            self.processed_ops.clear();
        }
        self.processed_ops.insert(op_id.to_string(), now_ms());
        true
    }

    /// Stores a value, returning the previous value for the key if any.
    pub fn put(&self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    /// Idempotent store: applies the write only if `op_id` has not been
    /// seen before. Returns `None` when the operation was a duplicate,
    /// otherwise the previous value for the key wrapped in `Some`.
    pub fn put_with_op(&self, op_id: &str, key: K, value: V) -> Option<Option<V>> {
        if !self.begin_op(op_id) {
            tracing::debug!("Skipping duplicate op {} on region {}", op_id, self.name);
            return None;
        }
        Some(self.put(key, value))
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    pub fn remove(&self, key: &K) -> Option<V> {
        self.entries.remove(key).map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of every entry in the region.
    pub fn entries(&self) -> Vec<(K, V)> {
        self.entries
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
