//! Map output types, returned by the map endpoint and embedded in facilities results.

use serde::{Deserialize, Serialize};

use crate::{coerce, response::EchoResponse};

/// Response from the Get Map Data endpoint. It carries no error record.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MapResponse {
    #[serde(rename = "MapOutput")]
    pub map_output: MapOutput,
}

impl EchoResponse for MapResponse {
    fn error_message(&self) -> Option<&str> {
        None
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct MapOutput {
    #[serde(rename = "QueryID", default, deserialize_with = "coerce::deserialize_or_default")]
    pub query_id: String,

    /// Base URL for the marker icons named in [`MapData::icon`].
    #[serde(rename = "IconBaseURL", default, deserialize_with = "coerce::deserialize_or_default")]
    pub icon_base_url: String,

    /// Base URL for facility pop-ups, completed with [`MapData::popup_value`].
    #[serde(rename = "PopUpBaseURL", default, deserialize_with = "coerce::deserialize_or_default")]
    pub popup_base_url: String,

    /// Only present on the map endpoint.
    #[serde(rename = "CenterLatitude", default, deserialize_with = "coerce::deserialize_float")]
    pub center_latitude: f64,

    #[serde(rename = "CenterLongitude", default, deserialize_with = "coerce::deserialize_float")]
    pub center_longitude: f64,

    #[serde(rename = "MapData", default, deserialize_with = "coerce::deserialize_or_default")]
    pub map_data: Vec<MapData>,
}

/// One facility marker.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MapData {
    #[serde(rename = "LAT", default, deserialize_with = "coerce::deserialize_float")]
    pub latitude: f64,

    #[serde(rename = "LON", default, deserialize_with = "coerce::deserialize_float")]
    pub longitude: f64,

    #[serde(rename = "ICON", default, deserialize_with = "coerce::deserialize_or_default")]
    pub icon: String,

    #[serde(rename = "TYPE", default, deserialize_with = "coerce::deserialize_or_default")]
    pub facility_type: String,

    #[serde(rename = "NAME", default, deserialize_with = "coerce::deserialize_or_default")]
    pub name: String,

    #[serde(rename = "PUV", default, deserialize_with = "coerce::deserialize_or_default")]
    pub popup_value: String,

    #[serde(rename = "SDWAstatus", default, deserialize_with = "coerce::deserialize_or_default")]
    pub sdwa_status: String,

    #[serde(rename = "RCRAstatus", default, deserialize_with = "coerce::deserialize_or_default")]
    pub rcra_status: String,

    #[serde(rename = "CWAstatus", default, deserialize_with = "coerce::deserialize_or_default")]
    pub cwa_status: String,

    #[serde(rename = "CAAstatus", default, deserialize_with = "coerce::deserialize_or_default")]
    pub caa_status: String,

    #[serde(rename = "LastInsp", default, deserialize_with = "coerce::deserialize_or_default")]
    pub last_inspection: String,

    #[serde(rename = "FormalCount", default, deserialize_with = "coerce::deserialize_int")]
    pub formal_action_count: i64,

    #[serde(rename = "InformalCount", default, deserialize_with = "coerce::deserialize_int")]
    pub informal_action_count: i64,
}
