mod utils;

use std::sync::Arc;

use futures::future::join_all;
use plate_search_lib::modules::plates::domain::{
    services::plate_search::{max_distance, NormalizedFields, QueryNormalizer, RelevanceScorer},
    value_objects::CandidateStrategy,
};
use plate_search_lib::modules::plates::PlateRecord;
use utils::*;

const QUERIES: &[&str] = &[
    "b", "B", "n", "k", "hh", "ln", "rg", "i", "-", "ö", "a", "bad", "Bayern", "köln", "koeln",
    "Muenchen", "munchen", "wurzburg", "frankfurt am main", "  Bad   Homburg ", "xyz123", "rhein",
];

#[tokio::test]
async fn test_scenario_single_letter_prefix() {
    let service = build_service(scenario_corpus());

    let result = service.search("b", 1, 20).await.unwrap();

    assert_eq!(result.total, 2);
    // Code prefix of "b-mw123" beats the state prefix of "bayern"
    assert_eq!(codes(&result.data), vec!["B-MW123", "M-AB456"]);
}

#[tokio::test]
async fn test_scenario_fuzzy_umlaut_city() {
    let service = build_service(scenario_corpus());

    let (result, metrics) = service.search_with_metrics("munchen", 1, 20).await.unwrap();

    assert_eq!(metrics.max_distance, 2);
    assert_eq!(metrics.fuzzy_match_count, 1);
    assert_eq!(result.total, 1);
    assert_eq!(codes(&result.data), vec!["M-AB456"]);
}

#[tokio::test]
async fn test_transliterated_and_umlaut_queries_agree() {
    let service = build_service(german_corpus());

    let koeln = service.search("koeln", 1, 50).await.unwrap();
    let koln_umlaut = service.search("köln", 1, 50).await.unwrap();
    let koln_upper = service.search("KÖLN", 1, 50).await.unwrap();

    assert_eq!(koeln, koln_umlaut);
    assert_eq!(koeln, koln_upper);
    assert_eq!(koeln.data[0].code, "K");
}

#[tokio::test]
async fn test_empty_and_whitespace_queries_match_nothing() {
    let service = build_service(german_corpus());

    for raw in ["", "   ", "\t"] {
        let result = service.search(raw, 3, 7).await.unwrap();
        assert!(result.data.is_empty());
        assert_eq!(result.total, 0);
        assert_eq!(result.page, 3);
        assert_eq!(result.limit, 7);
    }
}

#[tokio::test]
async fn test_no_match_is_empty_not_error() {
    let service = build_service(scenario_corpus());

    let result = service.search("xyz123", 1, 20).await.unwrap();

    assert_eq!(result.total, 0);
    assert!(result.data.is_empty());
}

#[tokio::test]
async fn test_exact_code_is_always_first() {
    let corpus = german_corpus();
    let service = build_service(corpus.clone());

    for plate in &corpus {
        let result = service.search(&plate.code, 1, 5).await.unwrap();
        assert_eq!(
            result.data.first().map(|p| p.code.as_str()),
            Some(plate.code.as_str()),
            "exact code {} not ranked first",
            plate.code
        );
    }
}

#[tokio::test]
async fn test_ties_follow_german_code_order() {
    let service = build_service(german_corpus());

    let result = service.search("ö", 1, 20).await.unwrap();

    // exact, then code substrings, then city/state substrings
    assert_eq!(codes(&result.data), vec!["Ö", "GÖ", "KÖ", "LÖ", "HG", "K"]);
}

#[tokio::test]
async fn test_pages_concatenate_to_full_ranking() {
    let service = build_service(german_corpus());
    let full = service.search("a", 1, 10_000).await.unwrap();
    assert!(full.total > 5);

    for limit in 1..=7u32 {
        let mut concatenated = Vec::new();
        let mut page = 1;
        loop {
            let result = service.search("a", page, limit).await.unwrap();
            assert!(result.data.len() <= limit as usize);
            assert_eq!(result.total, full.total);
            if result.data.is_empty() {
                break;
            }
            concatenated.extend(result.data);
            page += 1;
        }
        assert_eq!(concatenated, full.data, "limit {}", limit);
    }
}

#[tokio::test]
async fn test_page_past_the_end_is_empty() {
    let service = build_service(german_corpus());

    let result = service.search("a", 500, 20).await.unwrap();

    assert!(result.data.is_empty());
    assert!(result.total > 0);
}

#[tokio::test]
async fn test_repeated_searches_are_identical() {
    let service = build_service(german_corpus());

    for query in QUERIES {
        let first = service.search(query, 1, 10).await.unwrap();
        let second = service.search(query, 1, 10).await.unwrap();
        assert_eq!(first, second, "query {:?}", query);
    }
}

#[tokio::test]
async fn test_prefilter_matches_full_corpus_scan() {
    let filtered = build_service(german_corpus());
    let unfiltered = build_unfiltered_service(german_corpus());

    let mut prefiltered_queries = 0;
    for query in QUERIES {
        let (with_prefilter, metrics) = filtered.search_with_metrics(query, 1, 10_000).await.unwrap();
        let without_prefilter = unfiltered.search(query, 1, 10_000).await.unwrap();

        if metrics.strategy == Some(CandidateStrategy::SubstringPrefilter) {
            prefiltered_queries += 1;
        }
        assert_eq!(with_prefilter, without_prefilter, "query {:?}", query);
    }

    assert!(prefiltered_queries > 0);
}

#[tokio::test]
async fn test_total_and_order_agree_with_scorer() {
    let corpus = german_corpus();
    let service = build_service(corpus.clone());
    let normalizer = QueryNormalizer::standard();
    let scorer = RelevanceScorer::new();

    for query in QUERIES {
        let normalized = normalizer.normalize_query(query);
        let threshold = max_distance(normalized.char_len());
        let score_of = |plate: &PlateRecord| {
            let fields = NormalizedFields::from_plate(plate, &normalizer);
            scorer.score(normalized.as_str(), &fields, threshold)
        };

        let expected_total = if normalized.is_empty() {
            0
        } else {
            corpus.iter().filter(|plate| score_of(*plate).is_some()).count()
        };

        let result = service.search(query, 1, 10_000).await.unwrap();
        assert_eq!(result.total as usize, expected_total, "query {:?}", query);

        let scores: Vec<f64> = result
            .data
            .iter()
            .map(|plate| score_of(plate).map(|m| m.score()).unwrap_or(f64::MAX))
            .collect();
        assert!(
            scores.windows(2).all(|pair| pair[0] <= pair[1]),
            "query {:?} not sorted: {:?}",
            query,
            scores
        );
    }
}

#[tokio::test]
async fn test_concurrent_searches_do_not_interfere() {
    let service = Arc::new(build_service(german_corpus()));

    let mut expected = Vec::new();
    for query in QUERIES {
        expected.push(service.search(query, 1, 5).await.unwrap());
    }

    let handles = QUERIES.iter().map(|query| {
        let service = Arc::clone(&service);
        let query = query.to_string();
        tokio::spawn(async move { service.search(&query, 1, 5).await })
    });

    let results = join_all(handles).await;
    for (result, expected) in results.into_iter().zip(expected) {
        assert_eq!(result.unwrap().unwrap(), expected);
    }
}

#[tokio::test]
async fn test_result_serializes_to_wire_shape() {
    let service = build_service(scenario_corpus());

    let result = service.search("b", 1, 1).await.unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["total"], 2);
    assert_eq!(json["page"], 1);
    assert_eq!(json["limit"], 1);
    assert_eq!(json["data"].as_array().map(|d| d.len()), Some(1));
    assert_eq!(json["data"][0]["code"], "B-MW123");
    assert_eq!(json["data"][0]["city"], "Berlin");
}
