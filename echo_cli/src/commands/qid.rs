use std::time::Duration;

use anyhow::Result;
use clap::Args;
use echo_api::{Client, QidQuery, Query};

use crate::output::{print_facilities_csv, print_facilities_table, print_json, OutputFormat};

#[derive(Args)]
pub struct QidArgs {
    /// Query ID returned by a facilities search
    #[arg(long)]
    pub qid: String,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u32,
}

pub async fn run(
    args: &QidArgs,
    client: &Client,
    timeout: Duration,
    format: &OutputFormat,
) -> Result<()> {
    let query = QidQuery::new(&args.qid)
        .with_page(args.page)
        .with_timeout(timeout);
    let resp = client.get_qid(&query).await?;

    eprintln!(
        "Query {}: page {} ({} total facilities)",
        resp.query_id, resp.page_no, resp.query_rows
    );

    match format {
        OutputFormat::Table => print_facilities_table(&resp.facilities),
        OutputFormat::Json => print_json(&resp),
        OutputFormat::Csv => print_facilities_csv(&resp.facilities)?,
    }

    Ok(())
}
