use std::time::Duration;

use anyhow::Result;
use clap::Args;
use echo_api::{Client, FacilitiesQuery, Query};

use crate::output::{
    print_facilities_csv, print_facilities_table, print_json, print_map_data_table, OutputFormat,
};

#[derive(Args)]
pub struct FacilitiesArgs {
    /// Filter by facility name
    #[arg(long)]
    pub name: Option<String>,

    /// Filter by city
    #[arg(long)]
    pub city: Option<String>,

    /// Filter by US state code (e.g. CA, TX, NY)
    #[arg(long)]
    pub state: Option<String>,

    /// Filter by ZIP code
    #[arg(long)]
    pub zip: Option<String>,

    /// Results per page
    #[arg(long, default_value = "100")]
    pub page_size: u32,

    /// Any other search parameter as name=value (repeatable), e.g. --param majorFacility=Y
    #[arg(long = "param", value_name = "NAME=VALUE")]
    pub params: Vec<String>,

    /// Also print the map markers returned with the search
    #[arg(long)]
    pub with_map: bool,
}

pub fn build_query(args: &FacilitiesArgs, timeout: Duration) -> Result<FacilitiesQuery> {
    let mut query = FacilitiesQuery::new()
        .with_results_per_page(args.page_size)
        .with_timeout(timeout);

    if let Some(ref name) = args.name {
        query = query.with_name(name);
    }
    if let Some(ref city) = args.city {
        query = query.with_city(city);
    }
    if let Some(ref state) = args.state {
        query = query.with_state(&state.to_uppercase());
    }
    if let Some(ref zip) = args.zip {
        query = query.with_zip(zip);
    }

    super::apply_params(query, &args.params)
}

pub async fn run(
    args: &FacilitiesArgs,
    client: &Client,
    timeout: Duration,
    format: &OutputFormat,
) -> Result<()> {
    let query = build_query(args, timeout)?;
    let resp = client.get_facilities(&query).await?;
    let results = &resp.results;

    eprintln!(
        "Query {}: {} facilities (page {}, {} shown)",
        results.query_id,
        results.query_rows,
        results.page_no,
        results.facilities.len()
    );

    match format {
        OutputFormat::Table => {
            print_facilities_table(&results.facilities);
            if args.with_map {
                print_map_data_table(&results.map_output.map_data);
            }
        }
        OutputFormat::Json => print_json(results),
        OutputFormat::Csv => print_facilities_csv(&results.facilities)?,
    }

    Ok(())
}
