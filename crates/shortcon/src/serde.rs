//! Serde support: a collection serializes as a plain ordered map and
//! deserializes through the same validation as construction.

use indexmap::IndexMap;
use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::collection::{Constants, DEFAULT_LABEL};

impl<V: Serialize> Serialize for Constants<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Constants<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = IndexMap::<String, V>::deserialize(deserializer)?;
        Constants::from_map(DEFAULT_LABEL, map).map_err(D::Error::custom)
    }
}
