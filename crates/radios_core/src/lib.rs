mod models;
mod stream;

pub use crate::models::Station;
pub use crate::stream::{StreamKind, classify, is_stream_request};

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::BUILTIN_STATIONS;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("station at position {index} has an empty id")]
    EmptyStationId { index: usize },
    #[error("station '{id}' has an empty name")]
    EmptyStationName { id: String },
    #[error("station id '{id}' appears more than once")]
    DuplicateStationId { id: String },
    #[error("invalid station directory JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The immutable station list for the lifetime of the process.
///
/// Serializes as `{ "radios": [ ... ] }`, the exact document the frontend
/// fetches, so the same value backs the dev API endpoint, the generated
/// `radios.json` and the `--config` override file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Directory {
    radios: Vec<Station>,
}

impl Directory {
    /// Build the directory from the built-in station table, resolving each
    /// stream URL through `lookup` (an absent variable yields an empty URL).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let radios = BUILTIN_STATIONS
            .iter()
            .map(|builtin| Station {
                id: builtin.id.to_string(),
                name: builtin.name.to_string(),
                stream_url: lookup(builtin.stream_env).unwrap_or_default(),
                image: builtin.image.to_string(),
                color: builtin.color.to_string(),
            })
            .collect();
        Directory { radios }
    }

    /// Build the directory from the process environment.
    pub fn from_env() -> Self {
        let directory = Self::from_lookup(|key| std::env::var(key).ok());
        tracing::info!(
            "built station directory from environment ({} stations)",
            directory.len()
        );
        directory
    }

    /// Parse a directory from its JSON document form. Callers still need
    /// to run [`Directory::validate`] on the result.
    pub fn from_json_str(json: &str) -> Result<Self, DirectoryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the invariants the frontend relies on: every station has a
    /// non-empty name and a non-empty, unique id.
    pub fn validate(&self) -> Result<(), DirectoryError> {
        let mut seen = HashSet::new();
        for (index, station) in self.radios.iter().enumerate() {
            if station.id.is_empty() {
                return Err(DirectoryError::EmptyStationId { index });
            }
            if station.name.is_empty() {
                return Err(DirectoryError::EmptyStationName {
                    id: station.id.clone(),
                });
            }
            if !seen.insert(station.id.as_str()) {
                return Err(DirectoryError::DuplicateStationId {
                    id: station.id.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn stations(&self) -> &[Station] {
        &self.radios
    }

    pub fn get(&self, id: &str) -> Option<&Station> {
        self.radios.iter().find(|station| station.id == id)
    }

    pub fn len(&self) -> usize {
        self.radios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radios.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_directory_has_all_builtin_stations() {
        let directory = Directory::from_lookup(|_| None);
        assert_eq!(directory.len(), 6);
        assert!(directory.validate().is_ok());
        for station in directory.stations() {
            assert!(!station.id.is_empty());
            assert!(!station.name.is_empty());
            // No lookup hits means every station stays unconfigured
            assert_eq!(station.stream_kind(), None);
        }
    }

    #[test]
    fn test_lookup_fills_stream_urls() {
        let directory = Directory::from_lookup(lookup_from(&[
            ("CADENA_SER_URL", "https://x/ser.mp3"),
            ("RNE_RADIO3_URL", "https://x/radio3/master.m3u8"),
        ]));

        let ser = directory.get("cadena-ser").unwrap();
        assert_eq!(ser.stream_url, "https://x/ser.mp3");
        assert_eq!(ser.stream_kind(), Some(StreamKind::Progressive));

        let radio3 = directory.get("rne-radio3").unwrap();
        assert_eq!(radio3.stream_kind(), Some(StreamKind::Hls));

        // Unlisted variables leave their stations unconfigured
        assert_eq!(directory.get("radio-marca").unwrap().stream_url, "");
    }

    #[test]
    fn test_get_unknown_station() {
        let directory = Directory::from_lookup(|_| None);
        assert!(directory.get("radio-pirata").is_none());
    }

    #[test]
    fn test_document_shape() {
        let directory = Directory::from_lookup(lookup_from(&[(
            "RADIO_MARCA_URL",
            "https://x/marca.mp3",
        )]));

        let json = serde_json::to_value(&directory).unwrap();
        let radios = json["radios"].as_array().unwrap();
        assert_eq!(radios.len(), 6);
        assert_eq!(radios[5]["id"], "radio-marca");
        assert_eq!(radios[5]["streamUrl"], "https://x/marca.mp3");
    }

    #[test]
    fn test_parse_round_trips_generated_document() {
        let directory = Directory::from_lookup(|_| Some("https://x/live.mp3".to_string()));
        let json = serde_json::to_string_pretty(&directory).unwrap();

        let parsed = Directory::from_json_str(&json).unwrap();
        parsed.validate().unwrap();
        assert_eq!(parsed.len(), directory.len());
        assert_eq!(
            parsed.get("rne-radio5").unwrap().stream_url,
            "https://x/live.mp3"
        );
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let json = r##"{ "radios": [
            { "id": "a", "name": "A", "streamUrl": "", "image": "images/a.svg", "color": "#111111" },
            { "id": "a", "name": "Also A", "streamUrl": "", "image": "images/a.svg", "color": "#222222" }
        ] }"##;

        let directory = Directory::from_json_str(json).unwrap();
        match directory.validate() {
            Err(DirectoryError::DuplicateStationId { id }) => assert_eq!(id, "a"),
            other => panic!("expected DuplicateStationId, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_empty_id_and_name() {
        let empty_id = r##"{ "radios": [
            { "id": "", "name": "Ghost", "streamUrl": "", "image": "x.svg", "color": "#000000" }
        ] }"##;
        let directory = Directory::from_json_str(empty_id).unwrap();
        assert!(matches!(
            directory.validate(),
            Err(DirectoryError::EmptyStationId { index: 0 })
        ));

        let empty_name = r##"{ "radios": [
            { "id": "ghost", "name": "", "streamUrl": "", "image": "x.svg", "color": "#000000" }
        ] }"##;
        let directory = Directory::from_json_str(empty_name).unwrap();
        assert!(matches!(
            directory.validate(),
            Err(DirectoryError::EmptyStationName { id }) if id == "ghost"
        ));
    }

    #[test]
    fn test_parse_error_on_malformed_json() {
        assert!(matches!(
            Directory::from_json_str("{ not json"),
            Err(DirectoryError::Parse(_))
        ));
    }
}
