//! Integration tests for the fetch-and-save command

use std::path::PathBuf;
use std::time::Duration;

use fpl_history::{
    commands::{
        fetch_history::{handle_fetch_history, FetchHistoryParams},
        resolve_base_url, resolve_data_dir,
    },
    storage::{output_columns, read_positions, read_table, HistoryRow},
    ElementCode, FplError, MaxId, BASE_URL_ENV_VAR, DATA_DIR_ENV_VAR,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

fn past_season(element_code: u32, season_name: &str, bps: i64) -> Value {
    json!({
        "season_name": season_name,
        "element_code": element_code,
        "start_cost": 45,
        "end_cost": 47,
        "total_points": 120,
        "minutes": 2500,
        "goals_scored": 1,
        "assists": 3,
        "clean_sheets": 11,
        "goals_conceded": 35,
        "own_goals": 0,
        "penalties_saved": 0,
        "penalties_missed": 0,
        "yellow_cards": 4,
        "red_cards": 0,
        "saves": 0,
        "bonus": 8,
        "bps": bps,
        "influence": "500.0",
        "creativity": "210.3",
        "threat": "90.0",
        "ict_index": "80.1"
    })
}

fn element(code: u32, element_type: u8, first: &str, second: &str, now_cost: i64) -> Value {
    json!({
        "code": code,
        "element_type": element_type,
        "team_code": 8,
        "first_name": first,
        "second_name": second,
        "now_cost": now_cost,
        "selected_by_percent": "15.0",
        "total_points": 60,
        "minutes": 900,
        "goals_scored": 0,
        "assists": 1,
        "clean_sheets": 4,
        "goals_conceded": 9,
        "own_goals": 0,
        "penalties_saved": 0,
        "penalties_missed": 0,
        "yellow_cards": 1,
        "red_cards": 0,
        "saves": 0,
        "bonus": 3,
        "bps": 210,
        "influence": "150.2",
        "creativity": "80.0",
        "threat": "30.0",
        "ict_index": "26.0"
    })
}

fn bootstrap() -> Value {
    json!({
        "elements": [
            element(98745, 2, "Cesar", "Azpilicueta", 60),
            element(51507, 2, "Marcos", "Alonso", 58)
        ],
        "element_types": [
            { "id": 1, "plural_name": "Goalkeepers", "singular_name": "Goalkeeper" },
            { "id": 2, "plural_name": "Defenders", "singular_name": "Defender" },
            { "id": 3, "plural_name": "Midfielders", "singular_name": "Midfielder" },
            { "id": 4, "plural_name": "Forwards", "singular_name": "Forward" }
        ]
    })
}

async fn mock_api() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/element-summary/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "history_past": [
                past_season(98745, "2017/18", 700),
                past_season(98745, "2018/19", 650)
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    // Player whose code is not in this season's bootstrap
    Mock::given(method("GET"))
        .and(path("/api/element-summary/2/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "history_past": [past_season(11111, "2014/15", 90)]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/element-summary/3/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("The game is being updated."))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/element-summary/4/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "history_past": [] })))
        .expect(0)
        .mount(&server)
        .await;

    // Snapshot, player info and positions each read bootstrap once
    Mock::given(method("GET"))
        .and(path("/api/bootstrap-static/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(bootstrap()))
        .expect(3)
        .mount(&server)
        .await;

    server
}

#[tokio::test]
async fn test_fetch_history_writes_both_files() {
    let server = mock_api().await;
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("data");

    let summary = handle_fetch_history(FetchHistoryParams {
        max_id: MaxId::new(10).unwrap(),
        data_dir: Some(data_dir.clone()),
        base_url: Some(format!("{}/api", server.uri())),
        delay: Duration::ZERO,
        verbose: true,
    })
    .await
    .unwrap();

    assert_eq!(summary.positions_path, data_dir.join("positions.csv"));
    assert_eq!(summary.history_path, data_dir.join("fpl_history.csv"));
    assert_eq!(summary.positions_rows, 4);

    let positions = read_positions(&summary.positions_path).unwrap();
    let tuples: Vec<(u8, String, String)> = positions
        .into_iter()
        .map(|p| (p.id.0, p.singular_name, p.plural_name))
        .collect();
    assert_eq!(
        tuples,
        vec![
            (1, "Goalkeeper".to_string(), "Goalkeepers".to_string()),
            (2, "Defender".to_string(), "Defenders".to_string()),
            (3, "Midfielder".to_string(), "Midfielders".to_string()),
            (4, "Forward".to_string(), "Forwards".to_string()),
        ]
    );

    let contents = std::fs::read_to_string(&summary.history_path).unwrap();
    assert_eq!(contents.lines().next().unwrap(), output_columns().join(","));

    let rows: Vec<HistoryRow> = read_table(&summary.history_path).unwrap();
    assert_eq!(rows.len(), summary.history_rows);

    // 3 past seasons + 2 current-season rows + 3 unplayed positions
    assert_eq!(rows.len(), 8);

    let azpi: Vec<&HistoryRow> = rows
        .iter()
        .filter(|r| r.player_id == Some(ElementCode(98745)))
        .collect();
    assert_eq!(azpi.len(), 3);
    assert!(azpi
        .iter()
        .all(|r| r.full_name.as_deref() == Some("Cesar Azpilicueta")
            && r.position.as_deref() == Some("Defender")));
    let current = azpi
        .iter()
        .find(|r| r.season_name.as_deref() == Some("2019/20"))
        .unwrap();
    assert_eq!(current.start_cost, Some(60));
    assert_eq!(current.end_cost, Some(60));
    assert_eq!(current.bonus_points, Some(210));

    let orphan = rows
        .iter()
        .find(|r| r.season_name.as_deref() == Some("2014/15"))
        .unwrap();
    assert_eq!(orphan.player_id, None);
    assert_eq!(orphan.full_name, None);
    assert_eq!(orphan.position, None);
    assert_eq!(orphan.bonus_points, Some(90));
}

#[tokio::test]
async fn test_fetch_history_fails_on_unreachable_reference_data() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/element-summary/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("nope"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/bootstrap-static/"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let result = handle_fetch_history(FetchHistoryParams {
        data_dir: Some(dir.path().to_path_buf()),
        base_url: Some(format!("{}/api", server.uri())),
        ..Default::default()
    })
    .await;

    assert!(matches!(result, Err(FplError::Http(_))));
    assert!(!dir.path().join("fpl_history.csv").exists());
}

#[tokio::test]
async fn test_fetch_history_rejects_bad_base_url() {
    let result = handle_fetch_history(FetchHistoryParams {
        base_url: Some("localhost:1234".to_string()),
        ..Default::default()
    })
    .await;

    assert!(matches!(result, Err(FplError::InvalidBaseUrl { .. })));
}

#[test]
fn test_resolve_from_options_and_env() {
    // Env vars are process-wide, so every case runs in this one test
    std::env::remove_var(DATA_DIR_ENV_VAR);
    std::env::remove_var(BASE_URL_ENV_VAR);

    assert_eq!(
        resolve_data_dir(Some(PathBuf::from("/tmp/explicit"))),
        PathBuf::from("/tmp/explicit")
    );
    assert_eq!(
        resolve_base_url(Some("http://mirror/api".to_string())),
        "http://mirror/api"
    );
    assert_eq!(
        resolve_base_url(None),
        "https://fantasy.premierleague.com/api"
    );

    std::env::set_var(DATA_DIR_ENV_VAR, "/tmp/from-env");
    std::env::set_var(BASE_URL_ENV_VAR, "http://env-mirror/api");
    assert_eq!(resolve_data_dir(None), PathBuf::from("/tmp/from-env"));
    assert_eq!(resolve_base_url(None), "http://env-mirror/api");

    // Option should take precedence
    assert_eq!(
        resolve_data_dir(Some(PathBuf::from("/tmp/explicit"))),
        PathBuf::from("/tmp/explicit")
    );

    // Empty values fall through to defaults
    std::env::set_var(DATA_DIR_ENV_VAR, "");
    std::env::set_var(BASE_URL_ENV_VAR, "");
    assert_ne!(resolve_data_dir(None), PathBuf::from(""));
    assert_eq!(
        resolve_base_url(None),
        "https://fantasy.premierleague.com/api"
    );

    std::env::remove_var(DATA_DIR_ENV_VAR);
    std::env::remove_var(BASE_URL_ENV_VAR);
}
