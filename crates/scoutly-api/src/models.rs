// Entity DTOs and draft payloads.
//
// Entities are owned by the backend and treated as immutable snapshots:
// an edit sends a draft and replaces the local copy with the response.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{Display, EnumString};

use crate::id::EntityId;

// ── Players ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub position: String,
    #[serde(default)]
    pub current_club: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub height_cm: Option<u32>,
    #[serde(default)]
    pub weight_kg: Option<u32>,
    #[serde(default)]
    pub preferred_foot: Option<String>,
    #[serde(default)]
    pub secondary_positions: Option<Vec<String>>,
    #[serde(default)]
    pub market_value_eur: Option<u64>,
    #[serde(default)]
    pub overall_rating: Option<u8>,
    #[serde(default)]
    pub potential_rating: Option<u8>,
    #[serde(default)]
    pub scouting_notes: Option<String>,
    #[serde(default)]
    pub current_season_stats: Option<Value>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PreferredFoot {
    Left,
    Right,
    Both,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPlayer {
    pub name: String,
    pub position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_club: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_nationality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_foot: Option<PreferredFoot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_positions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_value_eur: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_wage_eur: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potential_rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scouting_notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_club: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_value_eur: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scouting_notes: Option<String>,
}

/// `GET /players/stats/summary` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatsSummary {
    pub overview: PlayerStatsOverview,
    #[serde(default)]
    pub position_breakdown: Vec<PositionCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStatsOverview {
    pub total_players: u64,
    pub total_nationalities: u64,
    pub total_clubs: u64,
    pub total_positions: u64,
    #[serde(default)]
    pub avg_market_value_eur: u64,
    #[serde(default)]
    pub max_market_value_eur: Option<u64>,
    #[serde(default)]
    pub min_market_value_eur: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionCount {
    pub position: String,
    pub count: u64,
}

// ── Coaches ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coach {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub current_club: Option<String>,
    #[serde(default)]
    pub current_role: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub preferred_formation: Option<String>,
    #[serde(default)]
    pub coaching_level: Option<String>,
    #[serde(default)]
    pub years_experience: Option<u32>,
    #[serde(default)]
    pub estimated_salary_eur: Option<u64>,
    #[serde(default)]
    pub tactical_style: Option<Value>,
    #[serde(default)]
    pub overall_rating: Option<u8>,
    #[serde(default)]
    pub scouting_notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CoachRole {
    HeadCoach,
    Assistant,
    YouthCoach,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CoachingLevel {
    Amateur,
    SemiPro,
    Professional,
    Elite,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCoach {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_club: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_role: Option<CoachRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_formation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coaching_level: Option<CoachingLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_experience: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_salary_eur: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scouting_notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoachUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_club: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_role: Option<CoachRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_formation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scouting_notes: Option<String>,
}

// ── Shortlists ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ShortlistKind {
    Player,
    Coach,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ShortlistPriority {
    Low,
    Medium,
    High,
    Urgent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shortlist {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: ShortlistKind,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub items_count: Option<u32>,
    #[serde(default)]
    pub items: Option<Vec<ShortlistItem>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortlistItem {
    pub id: EntityId,
    #[serde(default)]
    pub player_name: Option<String>,
    #[serde(default)]
    pub coach_name: Option<String>,
    pub status: String,
    pub priority: u8,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewShortlist {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ShortlistKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<ShortlistPriority>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShortlistUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<ShortlistPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_eur: Option<u64>,
}

/// Exactly one of `player_id` / `coach_id` should be set, matching the
/// shortlist's kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewShortlistItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coach_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// 1-5 stars.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_fee_eur: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wage_demands_eur: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShortlistItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scout_rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_fee_eur: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wage_demands_eur: Option<u64>,
}

// ── Reports ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ReportKind {
    PlayerScout,
    CoachAnalysis,
    ShortlistSummary,
    Comparison,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: EntityId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ReportKind,
    pub status: String,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub generated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub download_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReport {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ReportKind,
    pub parameters: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Map<String, Value>>,
}

/// `GET /reports/{id}/download` payload: a link, not the file itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDownload {
    pub download_url: String,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub expires_in: Option<String>,
}

// ── Users ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: EntityId,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub role: String,
    #[serde(default)]
    pub is_active: Option<bool>,
}
