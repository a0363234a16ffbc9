mod utils;

use plate_search_lib::modules::plates::{GetPlateRequest, PlateRecord, SearchPlatesRequest};
use plate_search_lib::shared::{application::Query, errors::AppError};
use utils::*;

#[tokio::test]
async fn test_search_request_resolution() {
    let app = build_app(german_corpus());

    let everything = app.search.execute(SearchPlatesRequest::new("a")).await.unwrap();
    assert_eq!(everything.limit, app.config.unpaginated_limit);
    assert_eq!(everything.data.len() as u64, everything.total);

    let second_page = app
        .search
        .execute(SearchPlatesRequest::new("a").with_page("2").with_limit("3"))
        .await
        .unwrap();
    assert_eq!(second_page.page, 2);
    assert_eq!(second_page.limit, 3);
    assert_eq!(second_page.data, everything.data[3..6].to_vec());
}

#[tokio::test]
async fn test_search_rejects_missing_query() {
    let app = build_app(german_corpus());

    let err = app
        .search
        .execute(SearchPlatesRequest::default())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidInput(_)));
    assert_eq!(err.to_string(), "Invalid input: Query parameter required");
}

#[tokio::test]
async fn test_zero_limit_falls_back_and_negative_is_rejected() {
    let app = build_app(german_corpus());

    // "0" falls back to the default rather than failing
    let result = app
        .search
        .execute(SearchPlatesRequest::new("a").with_limit("0"))
        .await
        .unwrap();
    assert_eq!(result.limit, app.config.default_page_size);

    let err = app
        .search
        .execute(SearchPlatesRequest::new("a").with_limit("-5"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)));
}

#[tokio::test]
async fn test_metrics_report_from_use_case() {
    let app = build_app(german_corpus());

    let (result, metrics) = app
        .search
        .execute_with_metrics(SearchPlatesRequest::new("wurzburg"))
        .await
        .unwrap();

    assert_eq!(result.data[0].code, "WÜ");
    assert_eq!(metrics.returned_count, result.data.len());
    assert!(metrics.report().contains("Strategy: full-corpus"));
}

#[tokio::test]
async fn test_list_is_ordered_by_code() {
    let app = build_app(german_corpus());

    let plates = app.list.execute(()).await.unwrap();
    let listed = codes(&plates);

    assert_eq!(plates.len(), german_corpus().len());
    assert_eq!(&listed[..4], &["A", "AA", "AC", "B"]);
    // Umlauts sort with their base letter
    let goe = listed.iter().position(|c| *c == "GÖ").unwrap();
    let hg = listed.iter().position(|c| *c == "HG").unwrap();
    assert!(goe < hg);
    assert_eq!(listed.last(), Some(&"WÜ"));
}

#[tokio::test]
async fn test_get_by_id_and_code() {
    let app = build_app(german_corpus());

    let by_code = app
        .get
        .execute(GetPlateRequest::from_identifier("HH"))
        .await
        .unwrap();
    assert_eq!(by_code.city, "Hamburg");

    let by_id = app
        .get
        .execute(GetPlateRequest::from_identifier(&by_code.id.to_string()))
        .await
        .unwrap();
    assert_eq!(by_id, by_code);
    assert_eq!(by_id.id, PlateRecord::id_for_code("HH"));
}

#[tokio::test]
async fn test_get_unknown_plate() {
    let app = build_app(german_corpus());

    let missing_code = app
        .get
        .execute(GetPlateRequest::ByCode("ZZZ".to_string()))
        .await
        .unwrap_err();
    assert!(matches!(missing_code, AppError::NotFound(_)));

    let bad_id = app
        .get
        .execute(GetPlateRequest::ById("12345".to_string()))
        .await
        .unwrap_err();
    assert!(matches!(bad_id, AppError::InvalidInput(_)));
}
