use crate::cli::types::{ElementCode, PositionId};
use serde::{de::Error, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};


/// Season label given to rows built from the live bootstrap snapshot.
pub const CURRENT_SEASON_LABEL: &str = "2019/20";

/// The ICT fields and `selected_by_percent` arrive as decimal strings
/// (`"12.4"`), but numbers are accepted too.
fn de_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

fn de_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(D::Error::custom(format!(
            "expected string, number or null, got {other}"
        ))),
    }
}

/// Envelope of `element-summary/{id}/`. Only the past seasons are used.
#[derive(Debug, Clone, Deserialize)]
pub struct ElementSummary {
    #[serde(default)]
    pub history_past: Option<Vec<SeasonStats>>,
}

impl ElementSummary {
    pub fn into_history(self) -> Vec<SeasonStats> {
        self.history_past.unwrap_or_default()
    }
}

/// One season of a player's statistics.
///
/// Past seasons come from `history_past`; the current season is projected
/// from a bootstrap [`Element`]. Every field is optional so a past season
/// missing a stat still yields a row, with that cell left empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SeasonStats {
    pub season_name: Option<String>,
    pub element_code: Option<ElementCode>,
    pub start_cost: Option<i64>,
    pub end_cost: Option<i64>,
    pub total_points: Option<i64>,
    pub minutes: Option<i64>,
    pub goals_scored: Option<i64>,
    pub assists: Option<i64>,
    pub clean_sheets: Option<i64>,
    pub goals_conceded: Option<i64>,
    pub own_goals: Option<i64>,
    pub penalties_saved: Option<i64>,
    pub penalties_missed: Option<i64>,
    pub yellow_cards: Option<i64>,
    pub red_cards: Option<i64>,
    pub saves: Option<i64>,
    pub bonus: Option<i64>,
    pub bps: Option<i64>,
    #[serde(deserialize_with = "de_opt_text")]
    pub influence: Option<String>,
    #[serde(deserialize_with = "de_opt_text")]
    pub creativity: Option<String>,
    #[serde(deserialize_with = "de_opt_text")]
    pub threat: Option<String>,
    #[serde(deserialize_with = "de_opt_text")]
    pub ict_index: Option<String>,
}

impl SeasonStats {
    /// Current-season row for a bootstrap element. Both costs are the
    /// current price since the season is still running.
    pub fn from_current(element: &Element) -> Self {
        Self {
            season_name: Some(CURRENT_SEASON_LABEL.to_string()),
            element_code: Some(element.code),
            start_cost: Some(element.now_cost),
            end_cost: Some(element.now_cost),
            total_points: Some(element.total_points),
            minutes: Some(element.minutes),
            goals_scored: Some(element.goals_scored),
            assists: Some(element.assists),
            clean_sheets: Some(element.clean_sheets),
            goals_conceded: Some(element.goals_conceded),
            own_goals: Some(element.own_goals),
            penalties_saved: Some(element.penalties_saved),
            penalties_missed: Some(element.penalties_missed),
            yellow_cards: Some(element.yellow_cards),
            red_cards: Some(element.red_cards),
            saves: Some(element.saves),
            bonus: Some(element.bonus),
            bps: Some(element.bps),
            influence: Some(element.influence.clone()),
            creativity: Some(element.creativity.clone()),
            threat: Some(element.threat.clone()),
            ict_index: Some(element.ict_index.clone()),
        }
    }
}

/// A player as listed in bootstrap `elements`.
///
/// Fields are required: a payload missing any of them is a fault, not a row
/// with gaps.
#[derive(Debug, Clone, Deserialize)]
pub struct Element {
    pub code: ElementCode,
    pub element_type: PositionId,
    pub team_code: u32,
    pub first_name: String,
    pub second_name: String,
    pub now_cost: i64,
    #[serde(deserialize_with = "de_text")]
    pub selected_by_percent: String,
    pub total_points: i64,
    pub minutes: i64,
    pub goals_scored: i64,
    pub assists: i64,
    pub clean_sheets: i64,
    pub goals_conceded: i64,
    pub own_goals: i64,
    pub penalties_saved: i64,
    pub penalties_missed: i64,
    pub yellow_cards: i64,
    pub red_cards: i64,
    pub saves: i64,
    pub bonus: i64,
    pub bps: i64,
    #[serde(deserialize_with = "de_text")]
    pub influence: String,
    #[serde(deserialize_with = "de_text")]
    pub creativity: String,
    #[serde(deserialize_with = "de_text")]
    pub threat: String,
    #[serde(deserialize_with = "de_text")]
    pub ict_index: String,
}

/// Identity row for a current-season player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerInfoRecord {
    pub position_id: PositionId,
    pub player_id: ElementCode,
    pub team_id: u32,
    pub full_name: String,
    pub now_cost: i64,
    pub selected_by: String,
}

impl From<&Element> for PlayerInfoRecord {
    fn from(element: &Element) -> Self {
        Self {
            position_id: element.element_type,
            player_id: element.code,
            team_id: element.team_code,
            full_name: format!("{} {}", element.first_name, element.second_name),
            now_cost: element.now_cost,
            selected_by: element.selected_by_percent.clone(),
        }
    }
}

/// A position as listed in bootstrap `element_types`.
///
/// `fields` keeps every key of the entry, in API order, so `positions.csv`
/// carries the table as given. `id` and the two names are lifted out for the
/// join and the `position` column.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionRecord {
    pub id: PositionId,
    pub singular_name: String,
    pub plural_name: String,
    pub fields: Map<String, Value>,
}

#[derive(Deserialize)]
struct PositionKeys {
    id: PositionId,
    #[serde(deserialize_with = "de_text")]
    singular_name: String,
    #[serde(deserialize_with = "de_text")]
    plural_name: String,
}

impl PositionRecord {
    /// Build a record from one `element_types` object (or a `positions.csv`
    /// row read back into JSON values). `id`, `singular_name` and
    /// `plural_name` are required.
    pub fn from_fields(fields: Map<String, Value>) -> serde_json::Result<Self> {
        let keys: PositionKeys = serde_json::from_value(Value::Object(fields.clone()))?;
        Ok(Self {
            id: keys.id,
            singular_name: keys.singular_name,
            plural_name: keys.plural_name,
            fields,
        })
    }
}

impl<'de> Deserialize<'de> for PositionRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = Map::deserialize(deserializer)?;
        Self::from_fields(fields).map_err(D::Error::custom)
    }
}

/// `bootstrap-static/` read for its player list.
#[derive(Debug, Deserialize)]
pub struct ElementsEnvelope {
    pub elements: Vec<Element>,
}

/// `bootstrap-static/` read for its position table.
#[derive(Debug, Deserialize)]
pub struct ElementTypesEnvelope {
    pub element_types: Vec<PositionRecord>,
}
