use serde::Deserialize;
use serde_json::Value;

pub const NO_REWARD_INFO: &str = "签到成功（无奖励信息）";
pub const UNRECOGNIZED_REWARDS: &str = "成功（未识别到奖励信息）";

const REWARD_SEPARATOR: &str = "、";

#[derive(Deserialize)]
struct ArknightsAward {
    resource: AwardResource,
    #[serde(default)]
    count: Option<Scalar>,
}

#[derive(Deserialize)]
struct AwardResource {
    name: String,
}

#[derive(Deserialize)]
struct AwardId {
    #[serde(default)]
    id: Option<Scalar>,
}

#[derive(Deserialize)]
struct ResourceInfo {
    name: String,
    #[serde(default)]
    count: Option<Scalar>,
}

/// Count or id the server sends either as a JSON number or as a string
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Number(serde_json::Number),
    Text(String),
}

impl Scalar {
    fn is_zero(&self) -> bool {
        match self {
            Scalar::Number(n) => n.as_u64() == Some(0),
            Scalar::Text(s) => s.is_empty(),
        }
    }

    fn into_text(self) -> String {
        match self {
            Scalar::Number(n) => n.to_string(),
            Scalar::Text(s) => s,
        }
    }
}

fn count_or_one(count: Option<Scalar>) -> String {
    count.map(Scalar::into_text).unwrap_or_else(|| "1".to_string())
}

fn joined(items: &[String]) -> String {
    format!("成功！获得：{}", items.join(REWARD_SEPARATOR))
}

/// Result text for a successful Arknights check-in.
///
/// `data.awards` absent or empty means the day carried no reward; a list
/// whose entries all fail to decode is reported as unrecognized.
pub fn arknights_reward_text(data: Option<&Value>) -> String {
    let awards = match data.and_then(|d| d.get("awards")).and_then(Value::as_array) {
        Some(awards) if !awards.is_empty() => awards,
        _ => return NO_REWARD_INFO.to_string(),
    };

    let items: Vec<String> = awards
        .iter()
        .filter_map(|award| ArknightsAward::deserialize(award).ok())
        .map(|award| {
            // A zero count from the server still means one item
            let count = award.count.filter(|c| !c.is_zero());
            format!("{}x{}", award.resource.name, count_or_one(count))
        })
        .collect();

    if items.is_empty() {
        UNRECOGNIZED_REWARDS.to_string()
    } else {
        joined(&items)
    }
}

/// Result text for a successful Endfield check-in.
///
/// Award ids in `data.awardIds` are resolved through `data.resourceInfoMap`.
pub fn endfield_reward_text(data: Option<&Value>) -> String {
    let award_ids = data
        .and_then(|d| d.get("awardIds"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();
    let resources = data
        .and_then(|d| d.get("resourceInfoMap"))
        .and_then(Value::as_object);

    let resources = match resources {
        Some(map) if !award_ids.is_empty() && !map.is_empty() => map,
        _ => return NO_REWARD_INFO.to_string(),
    };

    // Entries decode one by one; an unusable entry only drops itself
    let items: Vec<String> = award_ids
        .iter()
        .filter_map(|award| AwardId::deserialize(award).ok())
        .filter_map(|award| award.id)
        .filter_map(|id| resources.get(&id.into_text()))
        .filter_map(|info| ResourceInfo::deserialize(info).ok())
        .map(|info| format!("{}x{}", info.name, count_or_one(info.count)))
        .collect();

    if items.is_empty() {
        UNRECOGNIZED_REWARDS.to_string()
    } else {
        joined(&items)
    }
}
