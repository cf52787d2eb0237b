use anyhow::Result;
use echo_api::types::{Facility, MapData};
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Tabled, Serialize)]
struct FacilityRow {
    #[tabled(rename = "Registry ID")]
    #[serde(rename = "Registry ID")]
    registry_id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "City")]
    #[serde(rename = "City")]
    city: String,
    #[tabled(rename = "State")]
    #[serde(rename = "State")]
    state: String,
    #[tabled(rename = "Active")]
    #[serde(rename = "Active")]
    active: String,
    #[tabled(rename = "Inspections")]
    #[serde(rename = "Inspections")]
    inspections: i64,
    #[tabled(rename = "Last Inspection")]
    #[serde(rename = "Last Inspection")]
    last_inspection: String,
    #[tabled(rename = "Qtrs NC")]
    #[serde(rename = "Qtrs NC")]
    quarters_in_noncompliance: i64,
    #[tabled(rename = "Penalties")]
    #[serde(rename = "Penalties")]
    penalties: String,
}

#[derive(Tabled, Serialize)]
struct MapDataRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Latitude")]
    #[serde(rename = "Latitude")]
    latitude: f64,
    #[tabled(rename = "Longitude")]
    #[serde(rename = "Longitude")]
    longitude: f64,
    #[tabled(rename = "CAA")]
    #[serde(rename = "CAA")]
    caa_status: String,
    #[tabled(rename = "CWA")]
    #[serde(rename = "CWA")]
    cwa_status: String,
    #[tabled(rename = "RCRA")]
    #[serde(rename = "RCRA")]
    rcra_status: String,
    #[tabled(rename = "Actions")]
    #[serde(rename = "Actions")]
    actions: i64,
}

// -- Row builders --

fn build_facility_rows(facilities: &[Facility]) -> Vec<FacilityRow> {
    facilities
        .iter()
        .map(|f| FacilityRow {
            registry_id: f.registry_id.clone(),
            name: f.name.clone(),
            city: f.city.clone(),
            state: f.state.clone(),
            active: if f.active { "yes" } else { "no" }.to_string(),
            inspections: f.inspection_count,
            last_inspection: format_date(f),
            quarters_in_noncompliance: f.quarters_in_noncompliance,
            penalties: f.total_penalties.clone(),
        })
        .collect()
}

fn build_map_data_rows(map_data: &[MapData]) -> Vec<MapDataRow> {
    map_data
        .iter()
        .map(|m| MapDataRow {
            name: m.name.clone(),
            latitude: m.latitude,
            longitude: m.longitude,
            caa_status: m.caa_status.clone(),
            cwa_status: m.cwa_status.clone(),
            rcra_status: m.rcra_status.clone(),
            actions: m.formal_action_count + m.informal_action_count,
        })
        .collect()
}

// -- Table output --

pub fn print_facilities_table(facilities: &[Facility]) {
    println!("{}", Table::new(build_facility_rows(facilities)));
}

pub fn print_map_data_table(map_data: &[MapData]) {
    println!("{}", Table::new(build_map_data_rows(map_data)));
}

// -- CSV output --

pub fn print_facilities_csv(facilities: &[Facility]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_facility_rows(facilities) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_map_data_csv(map_data: &[MapData]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_map_data_rows(map_data) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// `MM/DD/YYYY`, or `-` when the API reported no date.
fn format_date(facility: &Facility) -> String {
    facility
        .last_inspection_date()
        .map(|d| d.format("%m/%d/%Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}
