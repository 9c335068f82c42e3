#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Info {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Documents in the wild write this as `1` as often as `"1.0.0"`.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "version_string"
    )]
    pub version: Option<String>,
}

fn version_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    let raw = <Option<Raw> as serde::Deserialize>::deserialize(deserializer)?;
    Ok(raw.map(|r| match r {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    }))
}
