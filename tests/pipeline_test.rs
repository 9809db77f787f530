use hotspot_targets::{
    EbirdClient, FetchParams, FrequencyBasis, HotspotError, HotspotRanker, RunOutcome, RunParams,
};
use httpmock::prelude::*;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

fn client_for(server: &MockServer) -> EbirdClient {
    EbirdClient::new(
        server.base_url(),
        server.url("/targets/get"),
        "test-key".to_string(),
    )
    .unwrap()
}

fn run_params(output: PathBuf) -> RunParams {
    RunParams {
        region: "US-CA-037".to_string(),
        species_code: "grhowl".to_string(),
        fetch: FetchParams {
            start_month: 3,
            end_month: 5,
            cutoff: 5,
        },
        basis: FrequencyBasis::YearRound,
        rank_cutoff: 3.0,
        delay: Duration::ZERO,
        max_hotspots: None,
        output: Some(output),
    }
}

fn mock_directory(server: &MockServer, hotspots: serde_json::Value) {
    server.mock(|when, then| {
        when.method(GET)
            .path("/ref/hotspot/US-CA-037")
            .query_param("fmt", "json")
            .query_param("key", "test-key");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(hotspots);
    });
}

fn mock_targets(server: &MockServer, loc_id: &str, body: serde_json::Value) {
    server.mock(|when, then| {
        when.method(GET)
            .path("/targets/get")
            .query_param("region", loc_id)
            .query_param("startMonth", "3")
            .query_param("endMonth", "5")
            .query_param("cutoff", "5");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(body);
    });
}

#[tokio::test]
async fn test_end_to_end_ranking_run() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("report.csv");

    let server = MockServer::start();
    mock_directory(
        &server,
        serde_json::json!([
            {"locId": "L1", "locName": "Echo Park", "lat": 34.07, "lng": -118.26, "numSpeciesAllTime": 180},
            {"locId": "L2", "locName": "Griffith Park", "lat": 34.13, "lng": -118.30, "numSpeciesAllTime": 250}
        ]),
    );
    // A: has grhowl at 40% year-round, 10% in window. B: no grhowl entry.
    mock_targets(
        &server,
        "L1",
        serde_json::json!({
            "items": [{"code": "grhowl", "name": "Great Horned Owl", "percent": 10.0, "percentYr": 40.0}],
            "N": 120,
            "yrN": 900
        }),
    );
    mock_targets(
        &server,
        "L2",
        serde_json::json!({
            "items": [{"code": "amecro", "name": "American Crow", "percent": 50.0, "percentYr": 60.0}],
            "N": 200,
            "yrN": 1500
        }),
    );

    let ranker = HotspotRanker::new(client_for(&server), run_params(output.clone()));
    let outcome = ranker.run().await.unwrap();

    let RunOutcome::Exported {
        path,
        rows,
        summary,
    } = outcome
    else {
        panic!("expected an exported report");
    };

    assert_eq!(path, output);
    assert_eq!(rows, 1);
    assert_eq!(summary.hotspots_found, 2);
    assert_eq!(summary.hotspots_processed, 2);
    assert_eq!(summary.species_discovered, 2);
    assert_eq!(summary.ranked_count, 1);

    let content = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "Rank,Hotspot Name,Location ID,Frequency (%),Checklists");
    assert_eq!(lines[1], "1,Echo Park,L1,40,900");
    assert_eq!(lines.len(), 2);
}

#[tokio::test]
async fn test_output_name_is_derived_from_species_name() {
    let server = MockServer::start();
    mock_directory(
        &server,
        serde_json::json!([
            {"locId": "L1", "locName": "Echo Park", "lat": 34.07, "lng": -118.26}
        ]),
    );
    mock_targets(
        &server,
        "L1",
        serde_json::json!({
            "items": [{"code": "grhowl", "name": "Great Horned Owl", "percent": 10.0, "percentYr": 40.0}],
            "N": 120,
            "yrN": 900
        }),
    );

    let mut params = run_params(PathBuf::new());
    params.output = None;

    let ranker = HotspotRanker::new(client_for(&server), params);
    let outcome = ranker.run().await.unwrap();

    let RunOutcome::Exported { path, rows, .. } = outcome else {
        panic!("expected an exported report");
    };
    assert_eq!(path, PathBuf::from("best-hotspots-great-horned-owl.csv"));
    assert_eq!(rows, 1);
    assert!(path.exists());
    std::fs::remove_file(&path).unwrap();
}

#[tokio::test]
async fn test_directory_failure_is_fatal() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/ref/hotspot/US-CA-037");
        then.status(500);
    });

    let temp_dir = TempDir::new().unwrap();
    let ranker = HotspotRanker::new(
        client_for(&server),
        run_params(temp_dir.path().join("report.csv")),
    );

    let err = ranker.run().await.unwrap_err();
    assert!(matches!(err, HotspotError::ApiError(_)));
}

#[tokio::test]
async fn test_one_hotspot_failure_does_not_abort_the_batch() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("report.csv");

    let server = MockServer::start();
    mock_directory(
        &server,
        serde_json::json!([
            {"locId": "L1", "locName": "Echo Park", "lat": 34.07, "lng": -118.26},
            {"locId": "L2", "locName": "Broken Park", "lat": 34.0, "lng": -118.0},
            {"locId": "L3", "locName": "Griffith Park", "lat": 34.13, "lng": -118.30}
        ]),
    );
    mock_targets(
        &server,
        "L1",
        serde_json::json!({
            "items": [{"code": "grhowl", "name": "Great Horned Owl", "percent": 3.0, "percentYr": 12.0}],
            "N": 40, "yrN": 400
        }),
    );
    server.mock(|when, then| {
        when.method(GET).path("/targets/get").query_param("region", "L2");
        then.status(503);
    });
    mock_targets(
        &server,
        "L3",
        serde_json::json!({
            "items": [{"code": "grhowl", "name": "Great Horned Owl", "percent": 8.0, "percentYr": 25.0}],
            "N": 90, "yrN": 700
        }),
    );

    let ranker = HotspotRanker::new(client_for(&server), run_params(output.clone()));
    let outcome = ranker.run().await.unwrap();

    let RunOutcome::Exported { rows, summary, .. } = outcome else {
        panic!("expected an exported report");
    };

    assert_eq!(summary.hotspots_found, 3);
    assert_eq!(summary.hotspots_processed, 2);
    assert_eq!(rows, 2);

    // L3 outranks L1 on the year-round basis
    let content = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[1], "1,Griffith Park,L3,25,700");
    assert_eq!(lines[2], "2,Echo Park,L1,12,400");
}

#[tokio::test]
async fn test_species_not_found_suggests_alternatives() {
    let temp_dir = TempDir::new().unwrap();

    let server = MockServer::start();
    mock_directory(
        &server,
        serde_json::json!([
            {"locId": "L1", "locName": "Echo Park", "lat": 34.07, "lng": -118.26}
        ]),
    );
    mock_targets(
        &server,
        "L1",
        serde_json::json!({
            "items": [
                {"code": "amecro", "name": "American Crow", "percent": 50.0, "percentYr": 60.0},
                {"code": "killde", "name": "Killdeer", "percent": 20.0, "percentYr": 30.0}
            ],
            "N": 200, "yrN": 1500
        }),
    );

    let mut params = run_params(temp_dir.path().join("report.csv"));
    params.species_code = "nosuch".to_string();

    let ranker = HotspotRanker::new(client_for(&server), params);
    let outcome = ranker.run().await.unwrap();

    let RunOutcome::SpeciesNotFound { code, suggestions } = outcome else {
        panic!("expected species-not-found");
    };
    assert_eq!(code, "nosuch");
    assert_eq!(suggestions, vec!["amecro".to_string(), "killde".to_string()]);
}

#[tokio::test]
async fn test_max_hotspots_trims_by_species_count() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("report.csv");

    let server = MockServer::start();
    mock_directory(
        &server,
        serde_json::json!([
            {"locId": "L1", "locName": "Small Park", "lat": 34.0, "lng": -118.0, "numSpeciesAllTime": 50},
            {"locId": "L2", "locName": "Big Park", "lat": 34.1, "lng": -118.1, "numSpeciesAllTime": 300}
        ]),
    );
    // Only the richer hotspot should be queried.
    let big = mock_targets_counted(&server, "L2");

    let mut params = run_params(output);
    params.max_hotspots = Some(1);

    let ranker = HotspotRanker::new(client_for(&server), params);
    let outcome = ranker.run().await.unwrap();

    big.assert();
    let RunOutcome::Exported { summary, .. } = outcome else {
        panic!("expected an exported report");
    };
    assert_eq!(summary.hotspots_found, 2);
    assert_eq!(summary.hotspots_processed, 1);
}

fn mock_targets_counted<'a>(server: &'a MockServer, loc_id: &str) -> httpmock::Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/targets/get")
            .query_param("region", loc_id);
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "items": [{"code": "grhowl", "name": "Great Horned Owl", "percent": 5.0, "percentYr": 15.0}],
                "N": 30, "yrN": 250
            }));
    })
}
