use serde::{Deserialize, Serialize};

/// A customer record as stored in the grid.
///
/// Both fields are fixed at construction time; the only way to change the
/// id is [`Customer::identified_by`], which consumes the value and returns
/// a new one. The name field is indexed by the region for wildcard lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    id: u64,
    name: String,
}

impl Customer {
    /// Named factory for customer values.
    pub fn new_customer(id: u64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a copy of this customer carrying the given id.
    ///
    /// Used by the identity function to stamp a durable id onto a customer
    /// that does not have one yet.
    pub fn identified_by(self, id: u64) -> Self {
        Self {
            id,
            name: self.name,
        }
    }
}
