use serde::{Deserialize, Serialize};

use crate::{coerce, response::EchoResponse};

use super::{ApiError, Facility, MapOutput};

/// Response from the Get Facilities endpoint.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FacilitiesResponse {
    #[serde(rename = "Results")]
    pub results: FacilitiesResults,
}

impl EchoResponse for FacilitiesResponse {
    fn error_message(&self) -> Option<&str> {
        Some(self.results.error.error_message.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FacilitiesResults {
    #[serde(rename = "Error", default, deserialize_with = "coerce::deserialize_or_default")]
    pub error: ApiError,

    #[serde(rename = "Message", default, deserialize_with = "coerce::deserialize_or_default")]
    pub message: String,

    /// Total facilities matching the query, across all pages.
    #[serde(rename = "QueryRows", default, deserialize_with = "coerce::deserialize_int")]
    pub query_rows: i64,

    #[serde(rename = "CVRows", default, deserialize_with = "coerce::deserialize_int")]
    pub non_compliance_rows: i64,

    #[serde(rename = "V3Rows", default, deserialize_with = "coerce::deserialize_int")]
    pub quarters_non_compliance_rows: i64,

    #[serde(rename = "FEARows", default, deserialize_with = "coerce::deserialize_int")]
    pub formal_enforcement_rows: i64,

    #[serde(rename = "CAARows", default, deserialize_with = "coerce::deserialize_int")]
    pub clean_air_act_rows: i64,

    #[serde(rename = "CWARows", default, deserialize_with = "coerce::deserialize_int")]
    pub clean_water_act_rows: i64,

    #[serde(rename = "RCRRows", default, deserialize_with = "coerce::deserialize_int")]
    pub hazardous_waste_rows: i64,

    #[serde(rename = "TRIRows", default, deserialize_with = "coerce::deserialize_int")]
    pub toxic_release_rows: i64,

    /// Identifier to pass to the map and QID endpoints.
    #[serde(rename = "QueryID", default, deserialize_with = "coerce::deserialize_or_default")]
    pub query_id: String,

    #[serde(rename = "PageNo", default, deserialize_with = "coerce::deserialize_int")]
    pub page_no: i64,

    #[serde(rename = "Facilities", default, deserialize_with = "coerce::deserialize_or_default")]
    pub facilities: Vec<Facility>,

    #[serde(rename = "MapOutput", default, deserialize_with = "coerce::deserialize_or_default")]
    pub map_output: MapOutput,
}
