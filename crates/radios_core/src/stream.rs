//! Stream URL classification shared between the server, the site builder
//! and the service worker's caching rules.

/// How a station's stream URL should be played back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    /// HLS manifest, needs hls.js or native HLS support in the browser
    Hls,
    /// Progressive stream (MP3), assignable directly to an audio element
    Progressive,
}

/// Substrings that mark a request as live audio. The service worker never
/// caches these, and the site builder refuses assets matching them.
const STREAM_PATTERNS: [&str; 5] = [
    "livestream",
    ".mp3",
    ".m3u8",
    "akamaized",
    "streamtheworld",
];

/// Classify a stream URL. Empty URLs are unconfigured stations.
pub fn classify(url: &str) -> Option<StreamKind> {
    if url.is_empty() {
        None
    } else if url.contains(".m3u8") {
        Some(StreamKind::Hls)
    } else {
        Some(StreamKind::Progressive)
    }
}

/// Whether a URL, path or hostname looks like a live stream request.
pub fn is_stream_request(target: &str) -> bool {
    STREAM_PATTERNS
        .iter()
        .any(|pattern| target.contains(pattern))
}
