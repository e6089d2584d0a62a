mod support;

use cinetrack::domain::{MovieDetail, MovieSummary};
use cinetrack::storage::MemoryStorage;
use cinetrack::MovieApp;
use support::{detail, drain, summary, MockLookup};

type TestApp = MovieApp<MockLookup<Vec<MovieSummary>>, MockLookup<MovieDetail>>;

struct Harness {
    app: TestApp,
    search: MockLookup<Vec<MovieSummary>>,
    detail: MockLookup<MovieDetail>,
}

fn harness() -> Harness {
    let search = MockLookup::new();
    let detail = MockLookup::new();
    let app = MovieApp::from_parts(
        search.clone(),
        detail.clone(),
        Box::new(MemoryStorage::new()),
    )
    .unwrap();
    Harness { app, search, detail }
}

/// Polls the search side until it leaves loading.
async fn settled_search(app: &TestApp) -> cinetrack::FetchResult<Vec<MovieSummary>> {
    for _ in 0..200 {
        let result = app.search_result().await;
        if !result.is_loading() {
            return result;
        }
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    }
    app.search_result().await
}

async fn settled_detail(app: &TestApp) -> cinetrack::FetchResult<MovieDetail> {
    for _ in 0..200 {
        let result = app.detail_result().await;
        if !result.is_loading() {
            return result;
        }
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    }
    app.detail_result().await
}

#[tokio::test]
async fn short_queries_issue_no_request_and_stay_idle() {
    let h = harness();

    h.app.set_query("sa").await;
    assert!(h.app.search_result().await.is_idle());
    assert_eq!(h.search.issued(), 0);
}

#[tokio::test]
async fn suppression_clears_a_previously_shown_failure() {
    let h = harness();

    let tx = h.search.expect("saw");
    h.app.set_query("saw").await;
    tx.send(Err(cinetrack::fetch::FetchError::Status(500))).unwrap();
    assert!(settled_search(&h.app).await.failure().is_some());

    // Backspacing below the threshold must clear the error without a request.
    h.app.set_query("sa").await;
    assert!(h.app.search_result().await.is_idle());
    assert_eq!(h.search.issued(), 1);
}

#[tokio::test]
async fn a_query_change_during_flight_wins_over_the_older_query() {
    let h = harness();

    let saw_tx = h.search.expect("saw");
    let avatar_tx = h.search.expect("avatar");

    h.app.set_query("sa").await;
    assert!(h.app.search_result().await.is_idle());

    h.app.set_query("saw").await;
    assert!(h.app.search_result().await.is_loading());

    // The user keeps typing before "saw" resolves.
    h.app.set_query("avatar").await;

    avatar_tx
        .send(Ok(vec![summary("tt0499549", "Avatar")]))
        .unwrap();
    let result = settled_search(&h.app).await;
    assert_eq!(
        result.success().and_then(|m| m.first()).map(|m| m.title.as_str()),
        Some("Avatar")
    );

    // "saw" finally arrives; it must never be observed.
    saw_tx.send(Ok(vec![summary("tt0387564", "Saw")])).unwrap();
    drain().await;
    let result = h.app.search_result().await;
    assert_eq!(
        result.success().and_then(|m| m.first()).map(|m| m.title.as_str()),
        Some("Avatar")
    );
}

#[tokio::test]
async fn selecting_a_movie_loads_its_detail() {
    let mut h = harness();

    let tx = h.detail.expect("tt0387564");
    h.app.select_movie("tt0387564").await;
    assert_eq!(h.app.selected_id(), Some("tt0387564"));
    assert!(h.app.detail_result().await.is_loading());

    tx.send(Ok(detail("tt0387564", "Saw"))).unwrap();
    let result = settled_detail(&h.app).await;
    assert_eq!(result.success().map(|d| d.title.as_str()), Some("Saw"));
}

#[tokio::test]
async fn reselecting_the_open_movie_closes_the_detail_view() {
    let mut h = harness();

    h.detail.expect("tt0387564");
    h.app.select_movie("tt0387564").await;
    h.app.select_movie("tt0387564").await;

    assert_eq!(h.app.selected_id(), None);
    assert!(h.app.detail_result().await.is_idle());
}

#[tokio::test]
async fn a_detail_not_found_marker_reads_movie_not_found() {
    let mut h = harness();

    let tx = h.detail.expect("ttXXXX");
    h.app.select_movie("ttXXXX").await;
    tx.send(Err(cinetrack::fetch::FetchError::NotFound)).unwrap();

    let result = settled_detail(&h.app).await;
    assert_eq!(result.failure(), Some("Movie not found"));
}

#[tokio::test]
async fn confirming_a_rating_adds_a_watched_entry_and_closes_the_view() {
    let mut h = harness();

    let tx = h.detail.expect("tt0387564");
    h.app.select_movie("tt0387564").await;
    tx.send(Ok(detail("tt0387564", "Saw"))).unwrap();
    settled_detail(&h.app).await;

    // The user hesitates between ratings before confirming.
    h.app.set_rating(6);
    h.app.set_rating(8);

    assert!(h.app.confirm_watched().await.unwrap());
    assert_eq!(h.app.selected_id(), None);
    assert!(h.app.detail_result().await.is_idle());

    let watched = h.app.watched();
    assert_eq!(watched.len(), 1);
    assert_eq!(watched[0].id, "tt0387564");
    assert_eq!(watched[0].user_rating, 8);
    assert_eq!(watched[0].rating_decision_count, 2);
    assert!(h.app.is_watched("tt0387564"));
}

#[tokio::test]
async fn confirming_without_a_rating_or_detail_is_refused() {
    let mut h = harness();

    // Nothing selected at all.
    assert!(!h.app.confirm_watched().await.unwrap());

    // Selected but the detail lookup has not resolved.
    h.detail.expect("tt0387564");
    h.app.select_movie("tt0387564").await;
    h.app.set_rating(7);
    assert!(!h.app.confirm_watched().await.unwrap());
}

#[tokio::test]
async fn an_already_watched_id_is_not_added_twice() {
    let mut h = harness();

    let tx = h.detail.expect("tt0387564");
    h.app.select_movie("tt0387564").await;
    tx.send(Ok(detail("tt0387564", "Saw"))).unwrap();
    settled_detail(&h.app).await;
    h.app.set_rating(8);
    assert!(h.app.confirm_watched().await.unwrap());

    // Reopen the same title and try to confirm again.
    let tx = h.detail.expect("tt0387564");
    h.app.select_movie("tt0387564").await;
    tx.send(Ok(detail("tt0387564", "Saw"))).unwrap();
    settled_detail(&h.app).await;
    h.app.set_rating(9);
    assert!(!h.app.confirm_watched().await.unwrap());
    assert_eq!(h.app.watched().len(), 1);
}

#[tokio::test]
async fn the_decision_counter_resets_for_each_detail_session() {
    let mut h = harness();

    let tx = h.detail.expect("tt0387564");
    h.app.select_movie("tt0387564").await;
    tx.send(Ok(detail("tt0387564", "Saw"))).unwrap();
    settled_detail(&h.app).await;
    h.app.set_rating(5);
    h.app.set_rating(6);
    h.app.close_detail().await;

    // A fresh session for another title starts counting from zero.
    let tx = h.detail.expect("tt0499549");
    h.app.select_movie("tt0499549").await;
    tx.send(Ok(detail("tt0499549", "Avatar"))).unwrap();
    settled_detail(&h.app).await;
    h.app.set_rating(9);
    assert!(h.app.confirm_watched().await.unwrap());
    assert_eq!(h.app.watched()[0].rating_decision_count, 1);
}

#[tokio::test]
async fn removing_a_watched_entry_updates_the_collection_and_stats() {
    let mut h = harness();

    for (id, title, rating) in [("tt0387564", "Saw", 8), ("tt0499549", "Avatar", 6)] {
        let tx = h.detail.expect(id);
        h.app.select_movie(id).await;
        tx.send(Ok(detail(id, title))).unwrap();
        settled_detail(&h.app).await;
        h.app.set_rating(rating);
        assert!(h.app.confirm_watched().await.unwrap());
    }
    assert_eq!(h.app.watched_stats().count, 2);

    h.app.remove_watched("tt0387564").unwrap();
    assert_eq!(h.app.watched().len(), 1);
    assert_eq!(h.app.watched()[0].id, "tt0499549");
    assert!(!h.app.is_watched("tt0387564"));
}
