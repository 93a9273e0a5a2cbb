//! Static site builder: turns the asset tree plus a station directory into
//! a deployable `dist/` directory. The output is the same site the dev
//! server serves, with the station document materialized as `radios.json`
//! instead of an API endpoint.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use radios_core::{Directory, is_stream_request};
use thiserror::Error;

/// File name of the generated station document, fetched by the frontend
/// when no API endpoint is available.
pub const STATIONS_FILE: &str = "radios.json";

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("asset '{path}' matches a stream exclusion pattern and would never be served from the service worker cache")]
    StreamLikeAsset { path: PathBuf },
    #[error("failed to serialize the station document: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("{context} '{path}': {source}")]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SiteError {
    fn io(context: &'static str, path: &Path) -> impl FnOnce(io::Error) -> SiteError {
        let path = path.to_path_buf();
        move |source| SiteError::Io {
            context,
            path,
            source,
        }
    }
}

/// What a build produced, for the final log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub assets_copied: usize,
    pub stations: usize,
}

/// Copy the asset tree into `out_dir` and write the station document next
/// to it.
///
/// Any asset whose site-relative path matches a stream exclusion pattern
/// aborts the build: the service worker refuses to cache such paths, so the
/// deployed file could never be served offline and almost certainly does
/// not belong in the asset tree.
pub fn build_site(
    directory: &Directory,
    assets_dir: &Path,
    out_dir: &Path,
) -> Result<BuildSummary, SiteError> {
    fs::create_dir_all(out_dir).map_err(SiteError::io("failed to create output directory", out_dir))?;

    let assets_copied = copy_tree(assets_dir, out_dir, Path::new(""))?;

    let document = serde_json::to_string_pretty(directory)?;
    let stations_path = out_dir.join(STATIONS_FILE);
    fs::write(&stations_path, document)
        .map_err(SiteError::io("failed to write station document", &stations_path))?;

    tracing::info!(
        "site built: {} assets and {} stations in {}",
        assets_copied,
        directory.len(),
        out_dir.display()
    );

    Ok(BuildSummary {
        assets_copied,
        stations: directory.len(),
    })
}

fn copy_tree(src: &Path, dest: &Path, rel: &Path) -> Result<usize, SiteError> {
    let mut copied = 0;

    let entries = fs::read_dir(src).map_err(SiteError::io("failed to read asset directory", src))?;
    for entry in entries {
        let entry = entry.map_err(SiteError::io("failed to read asset directory", src))?;
        let src_path = entry.path();
        let rel_path = rel.join(entry.file_name());
        let dest_path = dest.join(entry.file_name());

        let file_type = entry
            .file_type()
            .map_err(SiteError::io("failed to stat asset", &src_path))?;

        if file_type.is_dir() {
            fs::create_dir_all(&dest_path)
                .map_err(SiteError::io("failed to create output directory", &dest_path))?;
            copied += copy_tree(&src_path, &dest_path, &rel_path)?;
        } else {
            if is_stream_request(&rel_path.to_string_lossy()) {
                return Err(SiteError::StreamLikeAsset { path: rel_path });
            }
            fs::copy(&src_path, &dest_path)
                .map_err(SiteError::io("failed to copy asset", &src_path))?;
            copied += 1;
        }
    }

    Ok(copied)
}
