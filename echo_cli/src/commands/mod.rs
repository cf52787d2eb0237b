//! CLI subcommand implementations.

pub mod facilities;
pub mod map;
pub mod qid;

use anyhow::{anyhow, Context, Result};
use echo_api::Query;

/// Applies repeated `--param name=value` flags to a query.
pub fn apply_params<Q: Query>(mut query: Q, params: &[String]) -> Result<Q> {
    for param in params {
        let (key, value) = param
            .split_once('=')
            .ok_or_else(|| anyhow!("Expected name=value, got '{}'", param))?;
        query.set_param(key, value).with_context(|| {
            format!(
                "Valid parameter names: {}",
                Q::dictionary().names().collect::<Vec<_>>().join(", ")
            )
        })?;
    }
    Ok(query)
}
