use std::fmt;

use serde::{Deserialize, Serialize};

/// Authenticated principal acting against the ledger.
///
/// Every mutating call names its caller explicitly; identity is never read
/// from ambient context. The inner value is opaque to the core: wallet
/// addresses and session subjects both work, whatever the host's
/// authentication layer hands over.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PartyId(String);

impl PartyId {
    /// Create a new party ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PartyId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}
