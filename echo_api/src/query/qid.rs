use crate::types::QidResponse;

use super::{
    common::{ParamDictionary, QueryConfig},
    Query,
};

/// Path suffix for a Get QID request.
const QID_API_URI: &str = "echo_rest_services.get_qid";

/// Human-readable names accepted by [`QidQuery`].
pub static QID_PARAMS: ParamDictionary =
    ParamDictionary::new(&[("queryID", "qid"), ("pageNumber", "pageno")]);

const DEFAULT_QID_PARAMS: &[(&str, &str)] = &[("pageNumber", "1")];

/// Query that pages through the facilities behind a query ID.
///
/// Starts on page 1. Moving to later pages is up to the caller.
#[derive(Clone, Debug)]
pub struct QidQuery {
    config: QueryConfig,
}

impl Query for QidQuery {
    type Response = QidResponse;

    fn dictionary() -> &'static ParamDictionary {
        &QID_PARAMS
    }
    fn config(&self) -> &QueryConfig {
        &self.config
    }
    fn config_mut(&mut self) -> &mut QueryConfig {
        &mut self.config
    }
}

impl QidQuery {
    pub fn new(query_id: &str) -> Self {
        let mut config = QueryConfig::new(QID_API_URI);
        config.preset("queryID", query_id, &QID_PARAMS);
        for (key, value) in DEFAULT_QID_PARAMS {
            config.preset(key, value, &QID_PARAMS);
        }
        Self { config }
    }

    pub fn parameter_names() -> impl Iterator<Item = &'static str> {
        QID_PARAMS.names()
    }

    /// Sets the page number (1-indexed).
    pub fn with_page(mut self, page: u32) -> Self {
        self.config.preset("pageNumber", &page.to_string(), &QID_PARAMS);
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{QidQuery, Query};

    #[test]
    fn test_qid_query() {
        let base = "http://ofmpub.epa.gov";

        insta::assert_snapshot!(
            QidQuery::new("537").build_endpoint(base).unwrap().to_string(),
            @"http://ofmpub.epa.gov/echo/echo_rest_services.get_qid?pageno=1&qid=537"
        );

        insta::assert_snapshot!(
            QidQuery::new("537").with_page(4).build_endpoint(base).unwrap().to_string(),
            @"http://ofmpub.epa.gov/echo/echo_rest_services.get_qid?pageno=4&qid=537"
        );
    }
}
