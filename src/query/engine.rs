use super::pattern::like_to_regex;
use crate::model::Customer;
use crate::region::index::NameIndex;
use crate::region::memory::Region;

use anyhow::Result;
use std::sync::Arc;

/// Finds the customer whose name matches the given `LIKE` pattern.
///
/// Matches are resolved in ascending id order so repeated queries return
/// the same customer when several names match. Returns `Ok(None)` when no
/// indexed name matches the pattern.
pub fn find_by_name_like(
    pattern: &str,
    index: &Arc<NameIndex>,
    region: &Arc<Region<u64, Customer>>,
) -> Result<Option<Customer>> {
    let matcher = like_to_regex(pattern)?;

    let mut ids: Vec<u64> = Vec::new();
    for name in index.names() {
        if matcher.is_match(&name) {
            ids.extend(index.ids_for(&name));
        }
    }

    ids.sort_unstable();
    ids.dedup();

    for id in ids {
        if let Some(customer) = region.get(&id) {
            return Ok(Some(customer));
        }
    }

    Ok(None)
}
