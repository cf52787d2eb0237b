//! Client for the EPA ECHO "All Data Facility Search" REST services.
//!
//! Queries are built from human-readable parameter names, translated to the
//! API's wire keys, and sent as a single GET. Responses arrive with every
//! scalar encoded as a string; [`coerce`] turns those back into booleans,
//! numbers and dates.

mod client;
pub mod coerce;
mod errors;
mod query;
mod response;
pub mod types;
pub use self::client::Client;
pub use self::errors::Error;
pub use self::query::{
    FacilitiesQuery, MapQuery, ParamDictionary, QidQuery, Query, QueryConfig, DEFAULT_TIMEOUT,
    FACILITIES_PARAMS, MAP_PARAMS, QID_PARAMS,
};
pub use self::response::{unmarshal, EchoResponse};
