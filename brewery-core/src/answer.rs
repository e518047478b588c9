//! Natural-language answers about breweries in a state

use std::collections::{HashMap, HashSet};

use crate::{
    extract_state, fetch_breweries, BreweryDirectory, BreweryRecord, FetchOptions, StateName,
};

pub const MISSING_STATE_ANSWER: &str = "Please mention a U.S. state in your question.";

/// How many cities the city breakdown lists
const TOP_CITIES: usize = 5;

/// What the question is asking for, derived from keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryIntent {
    Count,
    TypeBreakdown,
    CityBreakdown,
    GenericSummary,
}

impl QueryIntent {
    /// Keyword checks run in this order; the first hit wins
    pub fn classify(query: &str) -> Self {
        let query = query.to_lowercase();
        let has_any = |words: &[&str]| words.iter().any(|w| query.contains(w));

        if has_any(&["how many", "number of", "count"]) {
            QueryIntent::Count
        } else if has_any(&["types", "type"]) {
            QueryIntent::TypeBreakdown
        } else if has_any(&["cities", "city"]) {
            QueryIntent::CityBreakdown
        } else {
            QueryIntent::GenericSummary
        }
    }
}

/// Answer a free-text brewery question. Upstream failures become answer text.
pub async fn generate_answer<D>(directory: &D, options: &FetchOptions, query: &str) -> String
where
    D: BreweryDirectory + ?Sized,
{
    let Some(state) = extract_state(query) else {
        tracing::info!("[ANSWER] No state found in query");
        return MISSING_STATE_ANSWER.to_string();
    };

    match fetch_breweries(directory, &state, options).await {
        Ok(breweries) => compose_answer(query, &state, &breweries),
        Err(e) => {
            tracing::error!("[ANSWER] Error retrieving brewery data: {}", e);
            format!("Error retrieving data: {}", e)
        }
    }
}

/// Render the answer for already-fetched records
pub fn compose_answer(query: &str, state: &StateName, breweries: &[BreweryRecord]) -> String {
    if breweries.is_empty() {
        return format!("No brewery data found for '{}'.", state);
    }

    match QueryIntent::classify(query) {
        QueryIntent::Count => format!("There are {} breweries in {}.", breweries.len(), state),
        QueryIntent::TypeBreakdown => {
            let types = tally(breweries.iter().map(BreweryRecord::type_label));
            format!("Brewery types in {}: {}.", state, render_counts(&types))
        }
        QueryIntent::CityBreakdown => {
            let mut cities = tally(breweries.iter().map(BreweryRecord::city_label));
            // stable sort keeps first-seen order among equal counts
            cities.sort_by(|a, b| b.1.cmp(&a.1));
            cities.truncate(TOP_CITIES);
            format!(
                "Top cities in {} by brewery count: {}.",
                state,
                render_counts(&cities)
            )
        }
        QueryIntent::GenericSummary => {
            let cities: HashSet<&str> =
                breweries.iter().filter_map(|b| b.city.as_deref()).collect();
            format!(
                "{} has {} breweries across {} cities.",
                state,
                breweries.len(),
                cities.len()
            )
        }
    }
}

/// Count occurrences, keeping labels in first-seen order
pub(crate) fn tally<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<(&'a str, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for label in labels {
        match index.get(label) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(label, counts.len());
                counts.push((label, 1));
            }
        }
    }

    counts
}

fn render_counts(counts: &[(&str, usize)]) -> String {
    counts
        .iter()
        .map(|(label, count)| format!("{} ({})", label, count))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::testing::{record, FakeDirectory};
    use crate::FetchError;

    fn state(name: &str) -> StateName {
        StateName::parse(name).unwrap()
    }

    #[test]
    fn classify_checks_count_before_type_and_city() {
        assert_eq!(QueryIntent::classify("How many breweries?"), QueryIntent::Count);
        assert_eq!(QueryIntent::classify("NUMBER OF breweries"), QueryIntent::Count);
        assert_eq!(
            QueryIntent::classify("count the types in each city"),
            QueryIntent::Count
        );
        assert_eq!(
            QueryIntent::classify("What types are in each city?"),
            QueryIntent::TypeBreakdown
        );
        assert_eq!(QueryIntent::classify("Which cities?"), QueryIntent::CityBreakdown);
        assert_eq!(QueryIntent::classify("Tell me about Ohio"), QueryIntent::GenericSummary);
    }

    #[test]
    fn type_breakdown_keeps_first_seen_order() {
        let breweries = vec![
            record("a", Some("Austin"), Some("micro")),
            record("b", Some("Austin"), Some("micro")),
            record("c", Some("Dallas"), Some("brewpub")),
        ];

        let answer = compose_answer("What types of breweries?", &state("texas"), &breweries);

        assert_eq!(answer, "Brewery types in Texas: micro (2), brewpub (1).");
    }

    #[test]
    fn type_breakdown_labels_missing_type_unknown() {
        let breweries = vec![record("a", None, None), record("b", None, Some("nano"))];

        let answer = compose_answer("types?", &state("utah"), &breweries);

        assert_eq!(answer, "Brewery types in Utah: unknown (1), nano (1).");
    }

    #[test]
    fn city_breakdown_returns_top_five_descending() {
        let counts = [("A", 5), ("B", 4), ("C", 3), ("D", 2), ("E", 2), ("F", 1), ("G", 1)];
        // interleave so first-seen order differs from count order
        let mut breweries = Vec::new();
        for (city, n) in counts.iter().rev() {
            for i in 0..*n {
                breweries.push(record(&format!("{}{}", city, i), Some(*city), Some("micro")));
            }
        }

        let answer = compose_answer("top cities", &state("oregon"), &breweries);

        // E is seen before D in the input, so it wins the tie
        assert_eq!(
            answer,
            "Top cities in Oregon by brewery count: A (5), B (4), C (3), E (2), D (2)."
        );
    }

    #[test]
    fn generic_summary_counts_distinct_known_cities() {
        let cities = [Some("Casper"), Some("Cheyenne"), Some("Laramie"), Some("Jackson")];
        let breweries: Vec<BreweryRecord> = (0..12)
            .map(|i| record(&format!("w{}", i), cities[i % 4], Some("micro")))
            .collect();

        let answer = compose_answer("Tell me about Wyoming", &state("wyoming"), &breweries);

        assert_eq!(answer, "Wyoming has 12 breweries across 4 cities.");
    }

    #[test]
    fn generic_summary_ignores_missing_cities() {
        let breweries = vec![
            record("a", Some("Reno"), None),
            record("b", None, None),
            record("c", Some("Reno"), None),
        ];

        let answer = compose_answer("Nevada", &state("nevada"), &breweries);

        assert_eq!(answer, "Nevada has 3 breweries across 1 cities.");
    }

    #[tokio::test]
    async fn count_question_end_to_end() {
        let breweries = (0..37)
            .map(|i| record(&format!("t{}", i), Some("Austin"), Some("micro")))
            .collect();
        let directory = FakeDirectory::with_records(breweries);

        let answer = generate_answer(
            &directory,
            &FetchOptions::default(),
            "How many breweries are in Texas?",
        )
        .await;

        assert_eq!(answer, "There are 37 breweries in Texas.");
    }

    #[tokio::test]
    async fn missing_state_does_not_fetch() {
        let directory = FakeDirectory::with_records(Vec::new());

        let answer =
            generate_answer(&directory, &FetchOptions::default(), "How many breweries?").await;

        assert_eq!(answer, MISSING_STATE_ANSWER);
        assert_eq!(directory.calls(), 0);
    }

    #[tokio::test]
    async fn empty_result_is_a_no_data_message() {
        let directory = FakeDirectory::with_records(Vec::new());

        let answer = generate_answer(
            &directory,
            &FetchOptions::default(),
            "How many breweries in New Hampshire?",
        )
        .await;

        assert_eq!(answer, "No brewery data found for 'New Hampshire'.");
    }

    #[tokio::test]
    async fn fetch_failure_becomes_answer_text() {
        let directory = FakeDirectory::failing(FetchError::Status {
            status: 503,
            url: "https://api.openbrewerydb.org/v1/breweries".into(),
        });

        let answer =
            generate_answer(&directory, &FetchOptions::default(), "Breweries in Maine").await;

        assert_eq!(
            answer,
            "Error retrieving data: brewery directory returned HTTP 503 for https://api.openbrewerydb.org/v1/breweries"
        );
    }
}
