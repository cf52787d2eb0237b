mod common;
pub use self::common::{ParamDictionary, Query, QueryConfig, DEFAULT_TIMEOUT};

mod facilities;
pub use self::facilities::{FacilitiesQuery, FACILITIES_PARAMS};

mod map;
pub use self::map::{MapQuery, MAP_PARAMS};

mod qid;
pub use self::qid::{QidQuery, QID_PARAMS};
