use payloads::requests::ListQuery;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Query parameters a list view hands to its fetch function.
///
/// Parameters are compared by their serialized form, so two values that
/// serialize identically never trigger a second fetch.
pub trait QueryParams: Clone + Serialize {
    /// The 1-indexed page requested, if the parameters carry one.
    fn page(&self) -> Option<u32>;
}

impl QueryParams for ListQuery {
    fn page(&self) -> Option<u32> {
        self.page
    }
}

/// Free-form parameters, for fetches that don't have a typed query.
impl QueryParams for BTreeMap<String, Value> {
    fn page(&self) -> Option<u32> {
        self.get("page")
            .and_then(Value::as_u64)
            .and_then(|page| u32::try_from(page).ok())
    }
}

/// Structural identity of a set of query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParamsKey(String);

impl ParamsKey {
    pub fn of<P: Serialize>(params: &P) -> Self {
        match serde_json::to_string(params) {
            Ok(serialized) => Self(serialized),
            Err(e) => {
                // Same params fail the same way, so the key stays stable.
                tracing::warn!("query params failed to serialize: {e}");
                Self(format!("unserializable: {e}"))
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Monotonic counter bumped every time a controller starts a fetch.
///
/// A fetch outcome may only commit if it carries the current version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ParamsVersion(u64);

impl ParamsVersion {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}
