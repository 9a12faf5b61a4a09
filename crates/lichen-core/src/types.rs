use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageContext {
    pub address: String,
    pub world_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldRecord {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub visit_count: Option<u64>,
    pub today_visit_count: Option<u64>,
    pub bookmark_count: Option<u64>,
    pub comment_count: Option<u64>,
    pub max_channel_count: Option<u32>,
    pub max_channel_users: Option<u32>,
    pub fps: Option<u32>,
    pub locked: Option<bool>,
    pub published: Option<bool>,
    pub staff_picked: Option<bool>,
    pub ranked: Option<bool>,
    pub removed: Option<bool>,
    pub disable_realtime: Option<bool>,
    pub blind_type: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub removed_at: Option<DateTime<Utc>>,
    pub blind_at: Option<DateTime<Utc>>,
    pub cheer: Option<CheerCount>,
    pub user: Option<WorldAuthor>,
    pub image: Option<WorldImage>,
    pub primary_map_image: Option<WorldImage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheerCount {
    pub total: Option<u64>,
    pub best: Option<u64>,
    pub good: Option<u64>,
    pub impressive: Option<u64>,
    pub fun: Option<u64>,
    pub amazing: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldAuthor {
    pub id: Option<String>,
    pub nickname: Option<String>,
    pub role: Option<String>,
    pub space_avatar_thumbnail: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldImage {
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnnotationKind {
    UpdateDate,
    StaffPicked,
    Ranked,
}

impl AnnotationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnnotationKind::UpdateDate => "update",
            AnnotationKind::StaffPicked => "staff-picked",
            AnnotationKind::Ranked => "ranked",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    AfterFirstMarker,
    AfterLastMarker,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub kind: AnnotationKind,
    pub text: String,
    pub color: Option<String>,
    pub placement: Placement,
    pub order: u8,
}
