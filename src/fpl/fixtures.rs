//! Realistic FPL API payloads shared by the HTTP and history tests.

use serde_json::{json, Value};

pub fn history_past_entry(element_code: u32, season_name: &str) -> Value {
    json!({
        "season_name": season_name,
        "element_code": element_code,
        "start_cost": 55,
        "end_cost": 57,
        "total_points": 140,
        "minutes": 2980,
        "goals_scored": 4,
        "assists": 6,
        "clean_sheets": 12,
        "goals_conceded": 38,
        "own_goals": 0,
        "penalties_saved": 0,
        "penalties_missed": 0,
        "yellow_cards": 5,
        "red_cards": 0,
        "saves": 0,
        "bonus": 9,
        "bps": 612,
        "influence": "620.4",
        "creativity": "431.9",
        "threat": "288.0",
        "ict_index": "134.1"
    })
}

/// `element-summary/{id}/` body with one past season per label.
pub fn element_summary(element_code: u32, seasons: &[&str]) -> Value {
    let history_past: Vec<Value> = seasons
        .iter()
        .map(|season| history_past_entry(element_code, season))
        .collect();
    json!({
        "fixtures": [],
        "history": [],
        "history_past": history_past
    })
}

pub fn element(code: u32, element_type: u8, first: &str, second: &str, now_cost: i64) -> Value {
    json!({
        "id": code % 1000,
        "code": code,
        "element_type": element_type,
        "team_code": 14,
        "first_name": first,
        "second_name": second,
        "now_cost": now_cost,
        "selected_by_percent": "7.3",
        "total_points": 88,
        "minutes": 1620,
        "goals_scored": 3,
        "assists": 2,
        "clean_sheets": 6,
        "goals_conceded": 19,
        "own_goals": 0,
        "penalties_saved": 0,
        "penalties_missed": 0,
        "yellow_cards": 2,
        "red_cards": 0,
        "saves": 0,
        "bonus": 5,
        "bps": 301,
        "influence": "310.2",
        "creativity": "205.5",
        "threat": "190.0",
        "ict_index": "70.6"
    })
}

pub fn element_types() -> Value {
    json!([
        {
            "id": 1,
            "plural_name": "Goalkeepers",
            "plural_name_short": "GKP",
            "singular_name": "Goalkeeper",
            "singular_name_short": "GKP",
            "squad_select": 2,
            "squad_min_play": 1,
            "squad_max_play": 1,
            "ui_shirt_specific": true,
            "sub_positions_locked": [12],
            "element_count": 48
        },
        {
            "id": 2,
            "plural_name": "Defenders",
            "plural_name_short": "DEF",
            "singular_name": "Defender",
            "singular_name_short": "DEF",
            "squad_select": 5,
            "squad_min_play": 3,
            "squad_max_play": 5,
            "ui_shirt_specific": false,
            "sub_positions_locked": [],
            "element_count": 160
        },
        {
            "id": 3,
            "plural_name": "Midfielders",
            "plural_name_short": "MID",
            "singular_name": "Midfielder",
            "singular_name_short": "MID",
            "squad_select": 5,
            "squad_min_play": 2,
            "squad_max_play": 5,
            "ui_shirt_specific": false,
            "sub_positions_locked": [],
            "element_count": 201
        },
        {
            "id": 4,
            "plural_name": "Forwards",
            "plural_name_short": "FWD",
            "singular_name": "Forward",
            "singular_name_short": "FWD",
            "squad_select": 3,
            "squad_min_play": 1,
            "squad_max_play": 3,
            "ui_shirt_specific": false,
            "sub_positions_locked": [],
            "element_count": 71
        }
    ])
}

/// `bootstrap-static/` body with the given elements and the standard four
/// positions.
pub fn bootstrap(elements: Vec<Value>) -> Value {
    json!({
        "events": [],
        "teams": [],
        "elements": elements,
        "element_types": element_types()
    })
}
