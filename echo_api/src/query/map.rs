use crate::types::MapResponse;

use super::{
    common::{ParamDictionary, QueryConfig},
    Query,
};

/// Path suffix for a Get Map Data request.
const MAP_API_URI: &str = "echo_rest_services.get_map";

/// Human-readable names accepted by [`MapQuery`].
pub static MAP_PARAMS: ParamDictionary = ParamDictionary::new(&[
    ("queryID", "QID"),
    ("Latitude1", "C1Lat"),
    ("Longitude1", "C1Long"),
    ("Latitude2", "C2Lat"),
    ("Longitude2", "C2Long"),
]);

/// Query against the Get Map Data endpoint for a query ID returned by a
/// facilities search.
#[derive(Clone, Debug)]
pub struct MapQuery {
    config: QueryConfig,
}

impl Query for MapQuery {
    type Response = MapResponse;

    fn dictionary() -> &'static ParamDictionary {
        &MAP_PARAMS
    }
    fn config(&self) -> &QueryConfig {
        &self.config
    }
    fn config_mut(&mut self) -> &mut QueryConfig {
        &mut self.config
    }
}

impl MapQuery {
    pub fn new(query_id: &str) -> Self {
        let mut config = QueryConfig::new(MAP_API_URI);
        config.preset("queryID", query_id, &MAP_PARAMS);
        Self { config }
    }

    pub fn parameter_names() -> impl Iterator<Item = &'static str> {
        MAP_PARAMS.names()
    }

    /// Limits map data to the box spanned by two corners.
    pub fn with_bounding_box(mut self, corner1: (f64, f64), corner2: (f64, f64)) -> Self {
        for (key, value) in [
            ("Latitude1", corner1.0),
            ("Longitude1", corner1.1),
            ("Latitude2", corner2.0),
            ("Longitude2", corner2.1),
        ] {
            self.config.preset(key, &value.to_string(), &MAP_PARAMS);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{MapQuery, Query};

    #[test]
    fn test_map_query() {
        let base = "http://ofmpub.epa.gov";

        insta::assert_snapshot!(
            MapQuery::new("537").build_endpoint(base).unwrap().to_string(),
            @"http://ofmpub.epa.gov/echo/echo_rest_services.get_map?QID=537"
        );

        insta::assert_snapshot!(
            MapQuery::new("537")
                .with_bounding_box((30.25, -97.5), (30.5, -97.25))
                .build_endpoint(base)
                .unwrap()
                .to_string(),
            @"http://ofmpub.epa.gov/echo/echo_rest_services.get_map?C1Lat=30.25&C1Long=-97.5&C2Lat=30.5&C2Long=-97.25&QID=537"
        );
    }
}
