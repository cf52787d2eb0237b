use crate::types::FacilitiesResponse;

use super::{
    common::{ParamDictionary, QueryConfig},
    Query,
};

/// Path suffix for a Get Facilities request.
const FACILITIES_API_URI: &str = "echo_rest_services.get_facilities";

const DEFAULT_RESULTS_PER_PAGE: &str = "100";

/// Human-readable names accepted by [`FacilitiesQuery`].
pub static FACILITIES_PARAMS: ParamDictionary = ParamDictionary::new(&[
    ("resultsPerPage", "responseset"),
    ("passthrough", "passthrough"),
    ("name", "p_fn"),
    ("address", "p_sa"),
    ("city", "p_ct"),
    ("county", "p_co"),
    ("fipsCode", "p_fips"),
    ("state", "p_st"),
    ("zip", "p_zip"),
    ("permitId", "p_pid"),
    ("region", "p_reg"),
    ("naicsCode", "p_ncs"),
    ("penaltyTime", "p_pen"),
    ("latitude", "p_c1lat"),
    ("longitude", "p_c1lon"),
    ("latitude2", "p_c2lat"),
    ("longitude2", "p_c2lon"),
    ("USMexicoBorderFacility", "p_usmex"),
    ("SICCode", "p_sic2"),
    ("SICCode4", "p_sic4"),
    ("federalAgencyCode", "p_fa"),
    ("federalFacility", "p_ff"),
    ("activeFacility", "p_act"),
    ("majorFacility", "p_maj"),
    ("cleanAirMACT", "p_mact"),
    ("formalEnforcementWithinYearsAgo", "p_fea"),
    ("formalEnforcementActionYearsAgo", "p_feay"),
    ("FEAAAgencyCode", "p_feaa"),
    ("FEAARestrictedToICIS", "p_feac"),
    ("informalEnforcementWithinYearsAgo", "p_iea"),
    ("informalEnforcementActionYearsAgo", "p_ieay"),
    ("informalEnforcementAgency", "p_ieaa"),
    ("currentComplianceStatus", "p_cs"),
    ("quartersInViolation", "p_qiv"),
    ("nonAttainmentArea", "p_naa"),
    ("impairedWatersCategory", "p_impw"),
    ("TRIReporterCurrent", "p_trep"),
    ("onsiteChemicalReleases", "p_ocr"),
    ("offsiteChemicalTransfers", "p_oct"),
    ("percentMinority", "p_pm"),
    ("populationDensity", "p_pd"),
    ("lowIncome", "p_li"),
    ("nativeAmericanTerritory", "p_ico"),
    ("watershedHUC", "p_huc"),
    ("mediaType", "p_med"),
    ("lastInspectionWithinYearsAgo", "p_ysl"),
    ("lastINspectionYearsAgo", "p_ysly"),
    ("inspectionAgency", "p_ysla"),
    ("quickSearch", "p_qs"),
    ("singleFacility", "p_sfs"),
    ("tribalId", "p_tribeid"),
    ("tribalDistance", "p_tribedist"),
]);

const DEFAULT_FACILITIES_PARAMS: &[(&str, &str)] = &[("resultsPerPage", DEFAULT_RESULTS_PER_PAGE)];

/// Query against the Get Facilities endpoint.
///
/// Starts with `resultsPerPage=100`. Any name in [`FACILITIES_PARAMS`] can be
/// set through [`Query::set_param`]; the `with_*` methods cover the common ones.
#[derive(Clone, Debug)]
pub struct FacilitiesQuery {
    config: QueryConfig,
}

impl Default for FacilitiesQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl Query for FacilitiesQuery {
    type Response = FacilitiesResponse;

    fn dictionary() -> &'static ParamDictionary {
        &FACILITIES_PARAMS
    }
    fn config(&self) -> &QueryConfig {
        &self.config
    }
    fn config_mut(&mut self) -> &mut QueryConfig {
        &mut self.config
    }
}

impl FacilitiesQuery {
    pub fn new() -> Self {
        let mut config = QueryConfig::new(FACILITIES_API_URI);
        for (key, value) in DEFAULT_FACILITIES_PARAMS {
            config.preset(key, value, &FACILITIES_PARAMS);
        }
        Self { config }
    }

    /// Names accepted by [`Query::set_param`] for this endpoint.
    pub fn parameter_names() -> impl Iterator<Item = &'static str> {
        FACILITIES_PARAMS.names()
    }

    pub fn with_results_per_page(mut self, results_per_page: u32) -> Self {
        self.config.preset(
            "resultsPerPage",
            &results_per_page.to_string(),
            &FACILITIES_PARAMS,
        );
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.config.preset("name", name, &FACILITIES_PARAMS);
        self
    }

    pub fn with_city(mut self, city: &str) -> Self {
        self.config.preset("city", city, &FACILITIES_PARAMS);
        self
    }

    /// Two-letter US state code (e.g. "CA").
    pub fn with_state(mut self, state: &str) -> Self {
        self.config.preset("state", state, &FACILITIES_PARAMS);
        self
    }

    pub fn with_zip(mut self, zip: &str) -> Self {
        self.config.preset("zip", zip, &FACILITIES_PARAMS);
        self
    }

    /// Restricts results to the box spanned by two corners.
    pub fn with_bounding_box(mut self, corner1: (f64, f64), corner2: (f64, f64)) -> Self {
        for (key, value) in [
            ("latitude", corner1.0),
            ("longitude", corner1.1),
            ("latitude2", corner2.0),
            ("longitude2", corner2.1),
        ] {
            self.config.preset(key, &value.to_string(), &FACILITIES_PARAMS);
        }
        self
    }
}
