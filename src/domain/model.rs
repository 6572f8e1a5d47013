use serde::{Deserialize, Serialize};

/// One row of the input carrier table. Only the USDOT number is required;
/// the remaining columns ride through to the output unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WorkItem {
    #[serde(default)]
    pub usdot_number: String,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub docket_number: Option<String>,
    #[serde(default)]
    pub legal_name: Option<String>,
    #[serde(default)]
    pub dba_name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

/// Fields extracted from the USDOT INFORMATION table of a snapshot page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotFields {
    pub mcs150_form_date: String,
    pub mcs150_mileage_year: String,
    pub operating_authority_status: String,
    pub power_units: String,
    pub phone: String,
    pub mailing_address: String,
    pub physical_address: String,
}

/// Result of one lookup attempt for a single identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(SnapshotFields),
    Inactive,
    TimedOut,
}

/// One output row: snapshot fields merged with the input row's pass-through
/// columns. Field order here is the output column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CarrierRecord {
    #[serde(rename = "USDOT Number")]
    pub usdot_number: String,
    #[serde(rename = "MCS-150 Form Date")]
    pub mcs150_form_date: String,
    #[serde(rename = "MCS-150 Mileage (Year)")]
    pub mcs150_mileage_year: String,
    #[serde(rename = "Operating Authority Status")]
    pub operating_authority_status: String,
    #[serde(rename = "Power Units")]
    pub power_units: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "Mailing Address")]
    pub mailing_address: String,
    #[serde(rename = "Physical Address")]
    pub physical_address: String,
    #[serde(rename = "Prefix")]
    pub prefix: String,
    #[serde(rename = "Docket Number")]
    pub docket_number: String,
    #[serde(rename = "Legal Name")]
    pub legal_name: String,
    #[serde(rename = "DBA Name")]
    pub dba_name: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "State")]
    pub state: String,
}

impl CarrierRecord {
    pub const HEADERS: [&'static str; 14] = [
        "USDOT Number",
        "MCS-150 Form Date",
        "MCS-150 Mileage (Year)",
        "Operating Authority Status",
        "Power Units",
        "Phone",
        "Mailing Address",
        "Physical Address",
        "Prefix",
        "Docket Number",
        "Legal Name",
        "DBA Name",
        "City",
        "State",
    ];

    pub fn merge(item: &WorkItem, fields: SnapshotFields) -> Self {
        Self {
            usdot_number: item.usdot_number.clone(),
            mcs150_form_date: fields.mcs150_form_date,
            mcs150_mileage_year: fields.mcs150_mileage_year,
            operating_authority_status: fields.operating_authority_status,
            power_units: fields.power_units,
            phone: fields.phone,
            mailing_address: fields.mailing_address,
            physical_address: fields.physical_address,
            prefix: item.prefix.clone().unwrap_or_default(),
            docket_number: item.docket_number.clone().unwrap_or_default(),
            legal_name: item.legal_name.clone().unwrap_or_default(),
            dba_name: item.dba_name.clone().unwrap_or_default(),
            city: item.city.clone().unwrap_or_default(),
            state: item.state.clone().unwrap_or_default(),
        }
    }
}
