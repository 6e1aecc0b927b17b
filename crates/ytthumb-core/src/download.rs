//! Save a thumbnail to disk.
//!
//! The image is fetched in full, written to `<name>.part` and renamed into
//! place, so a failed download never leaves a truncated `.jpg` behind.

use std::path::{Path, PathBuf};

use crate::error::{Result, ThumbError};
use crate::extract::VideoId;
use crate::fetch::{self, FetchOptions};
use crate::retry::FetchError;
use crate::thumbnail::ThumbnailDescriptor;

/// Suffix of the temp file used before the atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path.
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Outcome of one descriptor's download, independent of the others.
#[derive(Debug)]
pub struct DownloadOutcome {
    pub descriptor: ThumbnailDescriptor,
    pub result: Result<PathBuf>,
}

/// Downloads `descriptor` into `dir` as `youtube-thumbnail-{id}-{size}.jpg`
/// and returns the final path. A missing image is `ImageUnavailable`; any
/// other failure is `DownloadFailed`. Blocking.
pub fn download_thumbnail(
    descriptor: &ThumbnailDescriptor,
    id: &VideoId,
    dir: &Path,
    opts: &FetchOptions,
) -> Result<PathBuf> {
    let final_path = dir.join(descriptor.download_filename(id));
    let bytes = fetch::get(&descriptor.url, opts).map_err(|e| {
        let err = match e {
            FetchError::Http(status) if status == 404 || status == 410 => {
                ThumbError::ImageUnavailable {
                    url: descriptor.url.clone(),
                    status,
                }
            }
            other => ThumbError::DownloadFailed {
                url: descriptor.url.clone(),
                reason: other.to_string(),
            },
        };
        tracing::warn!(url = %descriptor.url, "download failed: {}", err);
        err
    })?;

    write_atomic(&final_path, &bytes).map_err(|e| {
        tracing::warn!(path = %final_path.display(), "could not save thumbnail: {}", e);
        ThumbError::DownloadFailed {
            url: descriptor.url.clone(),
            reason: e.to_string(),
        }
    })?;
    tracing::info!(
        url = %descriptor.url,
        path = %final_path.display(),
        bytes = bytes.len(),
        "thumbnail saved"
    );
    Ok(final_path)
}

fn write_atomic(final_path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = final_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let tp = temp_path(final_path);
    let written = std::fs::write(&tp, bytes).and_then(|()| std::fs::rename(&tp, final_path));
    if written.is_err() {
        let _ = std::fs::remove_file(&tp);
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_path_appends_part() {
        let p = temp_path(Path::new("/tmp/youtube-thumbnail-abc-120x90.jpg"));
        assert_eq!(
            p.to_string_lossy(),
            "/tmp/youtube-thumbnail-abc-120x90.jpg.part"
        );
    }

    #[test]
    fn write_atomic_creates_dirs_and_leaves_no_temp() {
        let dir = tempfile::tempdir().unwrap();
        let final_path = dir.path().join("sub").join("out.jpg");
        write_atomic(&final_path, b"jpeg").unwrap();
        assert_eq!(std::fs::read(&final_path).unwrap(), b"jpeg");
        assert!(!temp_path(&final_path).exists());
    }
}
