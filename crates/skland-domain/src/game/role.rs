use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::Game;
use crate::shared::DomainError;

pub const UNKNOWN_ROLE: &str = "未知角色";
pub const UNKNOWN_CHANNEL: &str = "未知渠道";

/// One entry of the binding endpoint's `data.list`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BindingGroup {
    #[serde(default)]
    pub app_code: Option<String>,
    #[serde(default)]
    pub binding_list: Vec<Value>,
}

/// Arknights binding: a flat record
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArknightsRole {
    #[serde(default, deserialize_with = "lenient_string")]
    pub nick_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub channel_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub uid: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub channel_master_id: Option<String>,
}

/// Endfield binding: the playable character sits under `defaultRole`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndfieldRole {
    #[serde(default)]
    pub default_role: Option<EndfieldDefaultRole>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub channel_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub uid: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndfieldDefaultRole {
    #[serde(default, deserialize_with = "lenient_string")]
    pub nickname: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub role_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub server_id: Option<String>,
}

impl EndfieldRole {
    /// `(role_id, server_id)` when both are present and non-empty
    pub fn attendance_target(&self) -> Option<(&str, &str)> {
        let default_role = self.default_role.as_ref()?;
        let role_id = default_role.role_id.as_deref().filter(|s| !s.is_empty())?;
        let server_id = default_role.server_id.as_deref().filter(|s| !s.is_empty())?;
        Some((role_id, server_id))
    }
}

/// A bound in-game character, shaped per game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Arknights(ArknightsRole),
    Endfield(EndfieldRole),
}

impl Role {
    /// Decode one raw binding using the shape of `game`
    pub fn from_binding(game: Game, binding: Value) -> Result<Self, DomainError> {
        let role = match game {
            Game::Arknights => serde_json::from_value(binding).map(Role::Arknights),
            Game::Endfield => serde_json::from_value(binding).map(Role::Endfield),
        };
        role.map_err(|e| DomainError::Deserialization(format!("{} binding: {}", game, e)))
    }

    pub fn game(&self) -> Game {
        match self {
            Role::Arknights(_) => Game::Arknights,
            Role::Endfield(_) => Game::Endfield,
        }
    }

    pub fn display_name(&self) -> &str {
        let name = match self {
            Role::Arknights(role) => role.nick_name.as_deref(),
            Role::Endfield(role) => role
                .default_role
                .as_ref()
                .and_then(|d| d.nickname.as_deref()),
        };
        name.unwrap_or(UNKNOWN_ROLE)
    }

    pub fn channel(&self) -> &str {
        let channel = match self {
            Role::Arknights(role) => role.channel_name.as_deref(),
            Role::Endfield(role) => role.channel_name.as_deref(),
        };
        channel.unwrap_or(UNKNOWN_CHANNEL)
    }
}

/// Select the roles bound for `game`, flattened in server order.
///
/// Bindings that do not decode into the game's shape are skipped.
pub fn resolve_roles(game: Game, groups: Vec<BindingGroup>) -> Vec<Role> {
    groups
        .into_iter()
        .filter(|group| group.app_code.as_deref() == Some(game.app_code()))
        .flat_map(|group| group.binding_list)
        .filter_map(|binding| match Role::from_binding(game, binding) {
            Ok(role) => Some(role),
            Err(e) => {
                log::warn!("Skipping undecodable binding: {}", e);
                None
            }
        })
        .collect()
}

/// Accepts strings and numbers, treats `null` as absent
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}
