use std::time::Duration;

use anyhow::Result;
use clap::Args;
use echo_api::{Client, MapQuery, Query};

use crate::output::{print_json, print_map_data_csv, print_map_data_table, OutputFormat};

#[derive(Args)]
pub struct MapArgs {
    /// Query ID returned by a facilities search
    #[arg(long)]
    pub qid: String,

    /// Any other map parameter as name=value (repeatable), e.g. --param Latitude1=38.5
    #[arg(long = "param", value_name = "NAME=VALUE")]
    pub params: Vec<String>,
}

pub async fn run(
    args: &MapArgs,
    client: &Client,
    timeout: Duration,
    format: &OutputFormat,
) -> Result<()> {
    let query = MapQuery::new(&args.qid).with_timeout(timeout);
    let query = super::apply_params(query, &args.params)?;
    let resp = client.get_map(&query).await?;
    let map = &resp.map_output;

    eprintln!(
        "Query {}: {} markers centered at ({}, {})",
        map.query_id,
        map.map_data.len(),
        map.center_latitude,
        map.center_longitude
    );

    match format {
        OutputFormat::Table => print_map_data_table(&map.map_data),
        OutputFormat::Json => print_json(map),
        OutputFormat::Csv => print_map_data_csv(&map.map_data)?,
    }

    Ok(())
}
