use dashmap::DashMap;

/// Index over the customer name field.
///
/// Maps an exact name to the ids currently carrying it, the moral
/// equivalent of a hash index in the grid. Wildcard queries walk the
/// indexed names instead of scanning region values.
pub struct NameIndex {
    entries: DashMap<String, Vec<u64>>,
}

impl NameIndex {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn insert(&self, name: &str, id: u64) {
        let mut ids = self.entries.entry(name.to_string()).or_default();
        if !ids.contains(&id) {
            ids.push(id);
        }
    }

    /// Drops an id from a name's posting list. Removes the list entirely
    /// when it becomes empty so stale names do not linger in query scans.
    pub fn remove(&self, name: &str, id: u64) {
        let emptied = match self.entries.get_mut(name) {
            Some(mut ids) => {
                ids.retain(|existing| *existing != id);
                ids.is_empty()
            }
            None => false,
        };
        if emptied {
            self.entries.remove(name);
        }
    }

    pub fn ids_for(&self, name: &str) -> Vec<u64> {
        self.entries
            .get(name)
            .map(|ids| ids.clone())
            .unwrap_or_default()
    }

    pub fn names(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.key().clone())
            .collect()
    }

    pub fn indexed_name_count(&self) -> usize {
        self.entries.len()
    }
}

impl Default for NameIndex {
    fn default() -> Self {
        Self::new()
    }
}
