//! Facility records returned by the facilities and QID endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::coerce;

/// One regulated facility.
///
/// Flags decode from `"Y"`/`"Yes"`; counts, coordinates and dates follow the
/// null-token rules in [`crate::coerce`]. Missing columns take the same value
/// their null token would.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Facility {
    /// EPA Facility Registry Service identifier.
    #[serde(rename = "RegistryID", default, deserialize_with = "coerce::deserialize_or_default")]
    pub registry_id: String,

    #[serde(rename = "FacName", default, deserialize_with = "coerce::deserialize_or_default")]
    pub name: String,

    #[serde(rename = "FacStreet", default, deserialize_with = "coerce::deserialize_or_default")]
    pub street: String,

    #[serde(rename = "FacCity", default, deserialize_with = "coerce::deserialize_or_default")]
    pub city: String,

    /// Two-letter US state code.
    #[serde(rename = "FacState", default, deserialize_with = "coerce::deserialize_or_default")]
    pub state: String,

    #[serde(rename = "FacZip", default, deserialize_with = "coerce::deserialize_or_default")]
    pub zip: String,

    #[serde(rename = "FacCounty", default, deserialize_with = "coerce::deserialize_or_default")]
    pub county: String,

    #[serde(rename = "FacFIPSCode", default, deserialize_with = "coerce::deserialize_or_default")]
    pub fips_code: String,

    #[serde(rename = "FacEPARegion", default, deserialize_with = "coerce::deserialize_or_default")]
    pub epa_region: String,

    #[serde(rename = "FacLat", default, deserialize_with = "coerce::deserialize_float")]
    pub latitude: f64,

    #[serde(rename = "FacLong", default, deserialize_with = "coerce::deserialize_float")]
    pub longitude: f64,

    /// Space separated SIC codes.
    #[serde(rename = "FacSICCodes", default, deserialize_with = "coerce::deserialize_or_default")]
    pub sic_codes: String,

    /// Space separated NAICS codes.
    #[serde(rename = "FacNAICSCodes", default, deserialize_with = "coerce::deserialize_or_default")]
    pub naics_codes: String,

    #[serde(rename = "FacActiveFlag", default, deserialize_with = "coerce::deserialize_bool")]
    pub active: bool,

    #[serde(rename = "FacMajorFlag", default, deserialize_with = "coerce::deserialize_bool")]
    pub major: bool,

    #[serde(rename = "FacFederalFlag", default, deserialize_with = "coerce::deserialize_bool")]
    pub federal: bool,

    #[serde(rename = "FacUsMexBorderFlg", default, deserialize_with = "coerce::deserialize_bool")]
    pub us_mexico_border: bool,

    #[serde(rename = "FacImpWaterFlg", default, deserialize_with = "coerce::deserialize_bool")]
    pub impaired_waters: bool,

    // Program participation.
    #[serde(rename = "AIRFlag", default, deserialize_with = "coerce::deserialize_bool")]
    pub air: bool,

    #[serde(rename = "NPDESFlag", default, deserialize_with = "coerce::deserialize_bool")]
    pub npdes: bool,

    #[serde(rename = "RCRAFlag", default, deserialize_with = "coerce::deserialize_bool")]
    pub rcra: bool,

    #[serde(rename = "TRIFlag", default, deserialize_with = "coerce::deserialize_bool")]
    pub tri: bool,

    #[serde(rename = "FacInspectionCount", default, deserialize_with = "coerce::deserialize_int")]
    pub inspection_count: i64,

    #[serde(
        rename = "FacDateLastInspection",
        default = "coerce::null_date",
        deserialize_with = "coerce::deserialize_date",
    )]
    pub last_inspection: NaiveDate,

    #[serde(rename = "FacInformalCount", default, deserialize_with = "coerce::deserialize_int")]
    pub informal_action_count: i64,

    #[serde(
        rename = "FacDateLastInformalAction",
        default = "coerce::null_date",
        deserialize_with = "coerce::deserialize_date",
    )]
    pub last_informal_action: NaiveDate,

    #[serde(rename = "FacFormalActionCount", default, deserialize_with = "coerce::deserialize_int")]
    pub formal_action_count: i64,

    #[serde(
        rename = "FacDateLastFormalAction",
        default = "coerce::null_date",
        deserialize_with = "coerce::deserialize_date",
    )]
    pub last_formal_action: NaiveDate,

    #[serde(rename = "FacPenaltyCount", default, deserialize_with = "coerce::deserialize_int")]
    pub penalty_count: i64,

    /// Dollar amount as the API formats it (e.g. "$12,500").
    #[serde(
        rename = "FacTotalPenalties",
        default,
        deserialize_with = "coerce::deserialize_or_default",
    )]
    pub total_penalties: String,

    #[serde(
        rename = "FacDateLastPenalty",
        default = "coerce::null_date",
        deserialize_with = "coerce::deserialize_date",
    )]
    pub last_penalty: NaiveDate,

    #[serde(rename = "FacQtrsWithNC", default, deserialize_with = "coerce::deserialize_int")]
    pub quarters_in_noncompliance: i64,

    #[serde(
        rename = "FacComplianceStatus",
        default,
        deserialize_with = "coerce::deserialize_or_default",
    )]
    pub compliance_status: String,

    #[serde(rename = "FacSNCFlg", default, deserialize_with = "coerce::deserialize_bool")]
    pub significant_noncompliance: bool,

    #[serde(rename = "FacPercentMinority", default, deserialize_with = "coerce::deserialize_float")]
    pub percent_minority: f64,

    #[serde(rename = "FacPopDen", default, deserialize_with = "coerce::deserialize_float")]
    pub population_density: f64,
}

impl Facility {
    /// Returns the last inspection date, or `None` for the 1900-01-01 sentinel.
    pub fn last_inspection_date(&self) -> Option<NaiveDate> {
        Some(self.last_inspection).filter(|d| *d != coerce::null_date())
    }
}
