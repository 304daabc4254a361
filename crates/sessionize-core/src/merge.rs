//! Recursive metadata merge with first-writer-wins conflict resolution.
//!
//! The merge is applied as a left fold over a session's events in
//! chronological order, so the accumulated `base` always holds the earlier
//! values. For each key of `new`:
//!
//! * absent from `base` → inserted as-is;
//! * mapping in both → merged recursively;
//! * anything else → the value already in `base` is kept.
//!
//! The operation is not commutative; callers must fold in time order.

use serde_json::map::Entry;
use serde_json::Value;

use crate::models::Meta;

/// Merge `new` into `base` in place.
pub fn deep_merge(base: &mut Meta, new: &Meta) {
    for (key, new_value) in new {
        match base.entry(key.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(new_value.clone());
            }
            Entry::Occupied(mut slot) => {
                if let (Value::Object(base_map), Value::Object(new_map)) =
                    (slot.get_mut(), new_value)
                {
                    deep_merge(base_map, new_map);
                }
            }
        }
    }
}

/// Return the merge of `base` and `new` without touching either argument.
pub fn merged(base: &Meta, new: &Meta) -> Meta {
    let mut result = base.clone();
    deep_merge(&mut result, new);
    result
}

/// Fold `metas` left to right into a single mapping, starting from empty.
pub fn merge_all<'a, I>(metas: I) -> Meta
where
    I: IntoIterator<Item = &'a Meta>,
{
    metas.into_iter().fold(Meta::new(), |mut acc, meta| {
        deep_merge(&mut acc, meta);
        acc
    })
}
