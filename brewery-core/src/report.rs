//! Structured state reports and short brewery listings

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::answer::tally;
use crate::{BreweryDirectory, BreweryRecord, FetchError, StateName};

/// Number of breweries the top listing shows by default
pub const TOP_BREWERIES_LIMIT: u32 = 5;

/// Full listing of a state's breweries with a type breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreweryReport {
    pub state: String,
    pub total_breweries: usize,
    /// Types in first-seen order
    pub type_breakdown: IndexMap<String, usize>,
    pub breweries: Vec<BrewerySummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrewerySummary {
    pub name: String,
    pub city: Option<String>,
    #[serde(rename = "type")]
    pub brewery_type: Option<String>,
    pub website: Option<String>,
    pub street: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub phone: Option<String>,
}

impl From<BreweryRecord> for BrewerySummary {
    fn from(record: BreweryRecord) -> Self {
        Self {
            name: record.name,
            city: record.city,
            brewery_type: record.brewery_type,
            website: record.website_url,
            street: record.street,
            state: record.state,
            postal_code: record.postal_code,
            phone: record.phone,
        }
    }
}

pub fn build_report(state: &StateName, breweries: Vec<BreweryRecord>) -> BreweryReport {
    let type_breakdown = tally(breweries.iter().map(BreweryRecord::type_label))
        .into_iter()
        .map(|(label, count)| (label.to_string(), count))
        .collect();

    BreweryReport {
        state: state.title(),
        total_breweries: breweries.len(),
        type_breakdown,
        breweries: breweries.into_iter().map(BrewerySummary::from).collect(),
    }
}

/// One page of up to `limit` breweries, rendered as a bulleted list
pub async fn top_breweries<D>(
    directory: &D,
    state: &StateName,
    limit: u32,
) -> Result<String, FetchError>
where
    D: BreweryDirectory + ?Sized,
{
    let breweries = directory.fetch_page(state, 1, limit).await?;
    Ok(render_top_breweries(state, &breweries))
}

pub fn render_top_breweries(state: &StateName, breweries: &[BreweryRecord]) -> String {
    if breweries.is_empty() {
        return format!("No breweries found in {}.", state);
    }

    let names: Vec<String> = breweries.iter().map(|b| format!("- {}", b.name)).collect();
    format!("Top breweries in {}:\n{}", state, names.join("\n"))
}
