use serde::{Deserialize, Serialize};

use crate::coerce;

/// Error record embedded in facilities and QID responses. An empty message
/// means the request succeeded.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiError {
    #[serde(rename = "ErrorMessage", default, deserialize_with = "coerce::deserialize_or_default")]
    pub error_message: String,
}

impl ApiError {
    pub fn is_empty(&self) -> bool {
        self.error_message.is_empty()
    }
}
