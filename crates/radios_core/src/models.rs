use serde::{Deserialize, Serialize};

use crate::stream::{self, StreamKind};

/// One radio station entry as the frontend consumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: String,
    pub name: String,
    /// Live stream URL (MP3 or HLS manifest). Empty when unconfigured.
    pub stream_url: String,
    /// Icon path relative to the site root
    pub image: String,
    /// CSS accent color for the station card
    pub color: String,
}

impl Station {
    /// Classify the configured stream URL, `None` when no URL is set.
    pub fn stream_kind(&self) -> Option<StreamKind> {
        stream::classify(&self.stream_url)
    }
}

/// Built-in station entry: everything but the stream URL, which comes
/// from the environment variable named in `stream_env`.
pub(crate) struct BuiltinStation {
    pub id: &'static str,
    pub name: &'static str,
    pub stream_env: &'static str,
    pub image: &'static str,
    pub color: &'static str,
}

pub(crate) const BUILTIN_STATIONS: [BuiltinStation; 6] = [
    BuiltinStation {
        id: "cadena-ser",
        name: "Cadena SER",
        stream_env: "CADENA_SER_URL",
        image: "images/cadena-ser.svg",
        color: "#e31837",
    },
    BuiltinStation {
        id: "rne-radio1",
        name: "RNE Radio 1",
        stream_env: "RNE_RADIO1_URL",
        image: "images/rne-radio1.svg",
        color: "#1a5f7a",
    },
    BuiltinStation {
        id: "rne-radio3",
        name: "RNE Radio 3",
        stream_env: "RNE_RADIO3_URL",
        image: "images/rne-radio3.svg",
        color: "#8b5cf6",
    },
    BuiltinStation {
        id: "rne-radio5",
        name: "RNE Radio 5",
        stream_env: "RNE_RADIO5_URL",
        image: "images/rne-radio5.svg",
        color: "#059669",
    },
    BuiltinStation {
        id: "rne-radioclasica",
        name: "Radio Clásica",
        stream_env: "RNE_RADIOCLASICA_URL",
        image: "images/rne-radioclasica.svg",
        color: "#b45309",
    },
    BuiltinStation {
        id: "radio-marca",
        name: "Radio Marca",
        stream_env: "RADIO_MARCA_URL",
        image: "images/radio-marca.svg",
        color: "#dc2626",
    },
];
