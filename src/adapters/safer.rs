use crate::domain::model::{LookupOutcome, SnapshotFields};
use crate::domain::ports::LookupClient;
use crate::utils::error::{BatchError, Result};
use async_trait::async_trait;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;
use tracing::debug;

/// Marker row of the snapshot table on the result page.
const TABLE_MARKER: &str = "USDOT INFORMATION";

/// Phrases the result page uses when a number has no retrievable record.
const NOT_FOUND_MARKERS: [&str; 2] = ["Record Not Found", "Record Inactive"];

/// Queries the SAFER company snapshot endpoint, one HTTP form post per
/// lookup. Each call is self-contained; nothing carries over between
/// identifiers. Field labels on the result page are the wire contract: a
/// snapshot table missing an expected label fails the item rather than
/// producing a partial row.
pub struct SaferLookupClient {
    client: Client,
    endpoint: String,
    header_cells: Selector,
}

impl SaferLookupClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            header_cells: Selector::parse("th").expect("static selector"),
        }
    }

    async fn query(&self, usdot_number: &str) -> Result<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .form(&[
                ("searchtype", "ANY"),
                ("query_type", "queryCarrierSnapshot"),
                ("query_param", "USDOT"),
                ("query_string", usdot_number),
            ])
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }

    fn classify(&self, usdot_number: &str, body: &str) -> Result<LookupOutcome> {
        if !body.contains(TABLE_MARKER) || NOT_FOUND_MARKERS.iter().any(|m| body.contains(m)) {
            return Ok(LookupOutcome::Inactive);
        }

        let document = Html::parse_document(body);
        let field = |label: &'static str| -> Result<String> {
            self.field_value(&document, label)
                .ok_or(BatchError::FieldExtraction {
                    usdot_number: usdot_number.to_string(),
                    label,
                })
        };

        Ok(LookupOutcome::Found(SnapshotFields {
            mcs150_form_date: field("MCS-150 Form Date:")?,
            mcs150_mileage_year: field("MCS-150 Mileage (Year):")?,
            operating_authority_status: field("Operating Authority Status:")?,
            power_units: field("Power Units:")?,
            phone: field("Phone:")?,
            mailing_address: field("Mailing Address:")?,
            physical_address: field("Physical Address:")?,
        }))
    }

    /// Text of the first cell following the header cell whose text equals
    /// `label`, whitespace-normalized.
    fn field_value(&self, document: &Html, label: &str) -> Option<String> {
        for header in document.select(&self.header_cells) {
            let text = header.text().collect::<String>();
            if text.trim() != label {
                continue;
            }
            let mut sibling = header.next_sibling();
            while let Some(node) = sibling {
                if let Some(cell) = ElementRef::wrap(node) {
                    let value = cell.text().collect::<String>();
                    return Some(value.split_whitespace().collect::<Vec<_>>().join(" "));
                }
                sibling = node.next_sibling();
            }
        }
        None
    }
}

#[async_trait]
impl LookupClient for SaferLookupClient {
    async fn lookup(&self, usdot_number: &str, timeout: Duration) -> Result<LookupOutcome> {
        let body = match tokio::time::timeout(timeout, self.query(usdot_number)).await {
            Ok(Ok(body)) => body,
            Ok(Err(BatchError::Http(e))) => {
                // Transport failures are indistinguishable from timeouts to
                // the caller's retry policy.
                debug!("lookup transport error for USDOT {usdot_number}: {e}");
                return Ok(LookupOutcome::TimedOut);
            }
            Ok(Err(e)) => return Err(e),
            Err(_) => return Ok(LookupOutcome::TimedOut),
        };
        self.classify(usdot_number, &body)
    }
}
