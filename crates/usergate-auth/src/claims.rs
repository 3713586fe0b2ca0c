//! Token payload.

use serde::{Deserialize, Serialize};

/// Claims carried by an access token.
///
/// Only the user identifier is required. A token whose payload lacks
/// `userId`, or carries it as anything but an integer, fails to
/// deserialize and is therefore rejected by the codec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: i64,
    /// Expiration timestamp (Unix seconds); absent for non-expiring tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<usize>,
}
