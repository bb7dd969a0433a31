use serde::de::{Error, Unexpected};
use serde::{Deserialize, Deserializer};

/// Control ids are strings, but servers commonly hand out numeric ids. Integers are accepted and
/// kept in their decimal form.
pub fn deserialize_control_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Text(id) => Ok(id),
        RawId::Unsigned(id) => Ok(id.to_string()),
        RawId::Signed(id) => Ok(id.to_string()),
        RawId::Float(id) => Err(Error::invalid_value(Unexpected::Float(id), &"a string or integer control id")),
    }
}
