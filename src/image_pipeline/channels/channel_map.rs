use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::image_pipeline::channels::AsciiJsonFormatter;
use crate::image_pipeline::common::error::{Result, TaggerError};

/// Mapping from channel key to channel name, in source-document order.
///
/// JSON object keys are always strings, so numeric channel indices such as
/// `"0"` are kept verbatim. Values are not validated beyond being JSON;
/// numbers keep their source text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelMap(Map<String, Value>);

impl ChannelMap {
    /// Reads and parses the channel map document at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading channel map");

        let text = fs::read_to_string(path).map_err(|source| TaggerError::ChannelMapRead {
            path: path.to_path_buf(),
            source,
        })?;
        let value: Value =
            serde_json::from_str(&text).map_err(|source| TaggerError::ChannelMapParse {
                path: path.to_path_buf(),
                source,
            })?;

        match value {
            Value::Object(entries) => Ok(Self(entries)),
            _ => Err(TaggerError::ChannelMapNotObject(path.to_path_buf())),
        }
    }

    /// Parses a description string back into a channel map.
    ///
    /// Returns `None` when the text is not a JSON object.
    pub fn from_description(text: &str) -> Option<Self> {
        match serde_json::from_str(text).ok()? {
            Value::Object(entries) => Some(Self(entries)),
            _ => None,
        }
    }

    /// Serializes the map into the ASCII text written as image description.
    pub fn to_description(&self) -> Result<String> {
        let mut buffer = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, AsciiJsonFormatter);
        self.0
            .serialize(&mut serializer)
            .map_err(|e| TaggerError::EncodeError(format!("channel map: {e}")))?;
        String::from_utf8(buffer)
            .map_err(|e| TaggerError::EncodeError(format!("channel map: {e}")))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ChannelMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
