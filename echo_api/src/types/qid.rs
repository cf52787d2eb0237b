use serde::{Deserialize, Serialize};

use crate::{coerce, response::EchoResponse};

use super::{ApiError, Facility};

/// One page of facilities from the Get QID endpoint.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QidResponse {
    #[serde(rename = "Message", default, deserialize_with = "coerce::deserialize_or_default")]
    pub message: String,

    #[serde(rename = "Error", default, deserialize_with = "coerce::deserialize_or_default")]
    pub error: ApiError,

    #[serde(rename = "QueryRows", default, deserialize_with = "coerce::deserialize_int")]
    pub query_rows: i64,

    #[serde(rename = "QueryID", default, deserialize_with = "coerce::deserialize_int")]
    pub query_id: i64,

    #[serde(rename = "PageNo", default, deserialize_with = "coerce::deserialize_int")]
    pub page_no: i64,

    #[serde(rename = "Facilities", default, deserialize_with = "coerce::deserialize_or_default")]
    pub facilities: Vec<Facility>,
}

impl EchoResponse for QidResponse {
    fn error_message(&self) -> Option<&str> {
        Some(self.error.error_message.as_str())
    }
}
