use std::time::Duration;

use tokio::time::Instant;
use yatra::{
    prelude::*,
    service::{Config, Error},
};

fn service(latency_ms: u64, timeout_ms: Option<u64>) -> RouteService {
    RouteService::builtin(Config {
        latency: Duration::from_millis(latency_ms),
        timeout: timeout_ms.map(Duration::from_millis),
    })
}

#[tokio::test(start_paused = true)]
async fn find_routes_waits_for_latency() {
    let service = RouteService::builtin(Config::default());
    let start = Instant::now();
    let routes = service.find_routes("Hyderabad", "Karimnagar").await.unwrap();
    assert_eq!(routes.len(), 2);
    assert!(start.elapsed() >= Duration::from_millis(1500));
}

#[tokio::test(start_paused = true)]
async fn find_routes_not_found() {
    let result = service(10, None).find_routes("Nowhere", "Nothing").await;
    assert_eq!(
        result.unwrap_err(),
        Error::NotFound {
            from: "Nowhere".into(),
            to: "Nothing".into()
        }
    );
}

#[tokio::test(start_paused = true)]
async fn find_routes_times_out() {
    let result = service(2_000, Some(500))
        .find_routes("Hyderabad", "Karimnagar")
        .await;
    assert_eq!(result.unwrap_err(), Error::TimedOut(Duration::from_millis(500)));
}

#[tokio::test(start_paused = true)]
async fn find_route_returns_preferred() {
    let route = service(10, Some(100))
        .find_route("Karimnagar", "Hyderabad")
        .await
        .unwrap();
    assert_eq!(&*route.id, "hyd-knr-fast-reverse");
}

#[tokio::test(start_paused = true)]
async fn newer_search_supersedes_older() {
    let session = service(1_000, None).session();
    let first = session.search("Hyderabad", "Karimnagar");
    let second = async {
        tokio::time::sleep(Duration::from_millis(200)).await;
        session.search("Vijayawada", "Buttayagudem").await
    };
    let (first, second) = tokio::join!(first, second);
    assert_eq!(first.unwrap_err(), Error::Superseded);
    let second = second.unwrap();
    assert_eq!(&*second.alternatives[0].id, "vjw-btg-fast");
}

#[tokio::test(start_paused = true)]
async fn cancel_stops_search_in_flight() {
    let session = service(1_000, None).session();
    let search = session.search("Hyderabad", "Karimnagar");
    let cancel = async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        session.cancel();
    };
    let (result, _) = tokio::join!(search, cancel);
    assert_eq!(result.unwrap_err(), Error::Superseded);
    assert_eq!(session.generation(), 2);
}

#[tokio::test(start_paused = true)]
async fn sequential_searches_all_complete() {
    let session = service(50, None).session();
    assert!(session.search("Hyderabad", "Karimnagar").await.is_ok());
    assert!(session.search("Karimnagar", "Hyderabad").await.is_ok());
    assert!(matches!(
        session.search("Nowhere", "Nothing").await,
        Err(Error::NotFound { .. })
    ));
}

#[test]
fn available_routes_from_table() {
    let service = service(0, None);
    assert_eq!(service.available_routes(), RouteTable::builtin().available_routes());
}
