//! Search, sort, and pagination tests at the service level.

use rollcall::model::StudentPayload;
use rollcall::service::search::{SearchCriteria, SearchOptions};
use rollcall::service::StudentService;
use rollcall::store::StudentStore;

/// Seed 25 students in Pune with rolls 1..=25 and alphabetic-only names
async fn seeded_service() -> StudentService {
    let store = StudentStore::in_memory().await.expect("in-memory store");
    let service = StudentService::new(store);

    for i in 0..25u8 {
        let suffix = char::from(b'A' + i);
        let payload = StudentPayload {
            name: Some(format!("Student{suffix}")),
            roll: Some(i64::from(i) + 1),
            city: Some("Pune".to_string()),
        };
        service.create(payload).await.expect("seed student");
    }
    service
}

fn by_roll(page: i64, page_size: i64) -> SearchOptions {
    SearchOptions::resolve(Some("roll"), None, Some(page), Some(page_size))
        .expect("valid options")
}

#[tokio::test]
async fn second_page_holds_records_eleven_through_twenty() {
    let service = seeded_service().await;

    let results = service
        .search(SearchCriteria::default(), by_roll(2, 10))
        .await
        .unwrap();

    assert_eq!(results.total_count, 25);
    assert_eq!(results.page, 2);
    assert_eq!(results.page_size, 10);
    let rolls: Vec<i64> = results.results.iter().map(|s| s.roll).collect();
    assert_eq!(rolls, (11..=20).collect::<Vec<i64>>());
}

#[tokio::test]
async fn final_partial_page_and_empty_overflow_page() {
    let service = seeded_service().await;

    let page3 = service
        .search(SearchCriteria::default(), by_roll(3, 10))
        .await
        .unwrap();
    assert_eq!(page3.results.len(), 5);
    assert_eq!(page3.total_count, 25);

    let page4 = service
        .search(SearchCriteria::default(), by_roll(4, 10))
        .await
        .unwrap();
    assert!(page4.results.is_empty());
    assert_eq!(page4.total_count, 25);
}

#[tokio::test]
async fn absurdly_large_page_returns_empty_slice() {
    let service = seeded_service().await;

    let options = SearchOptions::resolve(None, None, Some(i64::MAX), Some(20)).unwrap();
    let results = service
        .search(SearchCriteria::default(), options)
        .await
        .unwrap();

    assert!(results.results.is_empty());
    assert_eq!(results.total_count, 25);
}

#[tokio::test]
async fn descending_roll_sort_is_non_increasing() {
    let service = seeded_service().await;

    let options = SearchOptions::resolve(Some("roll"), Some("desc"), Some(1), Some(25)).unwrap();
    let results = service
        .search(SearchCriteria::default(), options)
        .await
        .unwrap();

    let rolls: Vec<i64> = results.results.iter().map(|s| s.roll).collect();
    assert_eq!(rolls.len(), 25);
    assert!(rolls.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn city_filter_matches_regardless_of_case() {
    let service = seeded_service().await;

    let lower = service
        .search(
            SearchCriteria {
                city: Some("pun".to_string()),
                ..Default::default()
            },
            SearchOptions::resolve(None, None, Some(1), Some(50)).unwrap(),
        )
        .await
        .unwrap();

    let upper = service
        .search(
            SearchCriteria {
                city: Some("PUN".to_string()),
                ..Default::default()
            },
            SearchOptions::resolve(None, None, Some(1), Some(50)).unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(lower.total_count, 25);
    assert_eq!(upper.total_count, lower.total_count);

    let lower_ids: Vec<i64> = lower.results.iter().map(|s| s.id).collect();
    let upper_ids: Vec<i64> = upper.results.iter().map(|s| s.id).collect();
    assert_eq!(lower_ids, upper_ids);
}

#[tokio::test]
async fn empty_string_filters_do_not_constrain() {
    let service = seeded_service().await;

    let criteria = SearchCriteria {
        name: Some(String::new()),
        city: Some(String::new()),
        roll: None,
    };
    let results = service
        .search(criteria, SearchOptions::default())
        .await
        .unwrap();

    assert_eq!(results.total_count, 25);
}

#[tokio::test]
async fn name_substring_filter_narrows_results() {
    let service = seeded_service().await;

    // Only StudentA matches "denta" (case-insensitive substring of StudentA)
    let criteria = SearchCriteria {
        name: Some("denta".to_string()),
        ..Default::default()
    };
    let results = service
        .search(criteria, SearchOptions::default())
        .await
        .unwrap();

    assert_eq!(results.total_count, 1);
    assert_eq!(results.results[0].name, "StudentA");
}
