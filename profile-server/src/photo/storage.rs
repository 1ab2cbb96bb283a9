//! Filesystem side of photo storage

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::clock::Clock;
use super::{PhotoError, codec};

/// Upper bound on `-n` suffixes tried for one name at one root
const MAX_NAME_SUFFIX: u32 = 1000;

/// Writes and reads profile photos below an ordered list of search roots
///
/// Files are named `{image_dir}/{profile_code}-{unix_seconds}.png`. A name
/// that already exists gets a `-1`, `-2`, ... suffix; existing files are
/// never overwritten.
pub struct PhotoStore {
    roots: Vec<PathBuf>,
    image_dir: String,
    clock: Arc<dyn Clock>,
}

impl PhotoStore {
    pub fn new(roots: Vec<PathBuf>, image_dir: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        let image_dir = image_dir.into().trim_end_matches('/').to_string();
        Self {
            roots,
            image_dir,
            clock,
        }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    pub fn image_dir(&self) -> &str {
        &self.image_dir
    }

    /// Makes sure at least one root has the image directory.
    ///
    /// Returns the first existing image directory, or creates it under the
    /// last root when none exists yet.
    pub fn ensure_image_dir(&self) -> io::Result<PathBuf> {
        if let Some(existing) = self
            .roots
            .iter()
            .map(|root| root.join(&self.image_dir))
            .find(|dir| dir.is_dir())
        {
            return Ok(existing);
        }

        let last = self.roots.last().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "no photo search roots configured")
        })?;
        let dir = last.join(&self.image_dir);
        fs::create_dir_all(&dir)?;
        tracing::info!(path = %dir.display(), "Created photo directory");
        Ok(dir)
    }

    /// Decodes `data_uri`, stores it as PNG and returns the relative path.
    ///
    /// The PNG is fully encoded before any file is created, so a payload that
    /// fails to decode or encode leaves nothing on disk.
    pub fn store_from_data_uri(
        &self,
        profile_code: i64,
        data_uri: &str,
    ) -> Result<String, PhotoError> {
        let img = codec::decode_data_uri(data_uri)?;
        let png = codec::encode_png(&img).map_err(PhotoError::EncodeToFile)?;

        let stem = format!("{}-{}", profile_code, self.clock.unix_seconds());
        let mut last_err = None;

        for root in &self.roots {
            let (relative, full, file) = match self.create_unique(root, &stem) {
                Ok(created) => created,
                Err(e) => {
                    tracing::debug!(root = %root.display(), error = %e, "Photo root rejected");
                    last_err = Some(e);
                    continue;
                }
            };

            write_or_discard(file, &full, &png)?;
            tracing::info!(profile_code, path = %relative, bytes = png.len(), "Photo stored");
            return Ok(relative);
        }

        Err(PhotoError::CreateFile(last_err.unwrap_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "no photo search roots configured")
        })))
    }

    /// Reads a stored photo and returns it as a PNG data-URI.
    ///
    /// The file is decoded and re-encoded on every read, so a corrupt file is
    /// reported as a decode error even when it carries a PNG signature.
    pub fn load_as_data_uri(&self, relative_path: &str) -> Result<String, PhotoError> {
        if relative_path.is_empty() {
            return Err(PhotoError::EmptyPath);
        }

        let bytes = self.read_first(relative_path)?;
        let img = codec::decode_image(&bytes)?;
        let png = codec::encode_png(&img).map_err(PhotoError::Encode)?;
        Ok(codec::to_data_uri(&png))
    }

    /// Deletes a stored photo from the first root holding it.
    ///
    /// Best-effort: failures are logged and reported as `false`.
    pub fn remove(&self, relative_path: &str) -> bool {
        if relative_path.is_empty() {
            return false;
        }

        for root in &self.roots {
            let full = root.join(relative_path);
            if !full.is_file() {
                continue;
            }
            return match fs::remove_file(&full) {
                Ok(()) => {
                    tracing::info!(path = %relative_path, "Previous photo removed");
                    true
                }
                Err(e) => {
                    tracing::warn!(path = %relative_path, error = %e, "Failed to remove previous photo");
                    false
                }
            };
        }
        false
    }

    fn relative_name(&self, file_name: &str) -> String {
        if self.image_dir.is_empty() {
            file_name.to_string()
        } else {
            format!("{}/{}", self.image_dir, file_name)
        }
    }

    /// Exclusively creates `{stem}.png`, or the first free `{stem}-n.png`, at `root`
    fn create_unique(&self, root: &Path, stem: &str) -> io::Result<(String, PathBuf, File)> {
        for n in 0..=MAX_NAME_SUFFIX {
            let file_name = if n == 0 {
                format!("{stem}.png")
            } else {
                format!("{stem}-{n}.png")
            };
            let relative = self.relative_name(&file_name);
            let full = root.join(&relative);

            match OpenOptions::new().write(true).create_new(true).open(&full) {
                Ok(file) => return Ok((relative, full, file)),
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e),
            }
        }
        Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "no free file name for this second",
        ))
    }

    fn read_first(&self, relative_path: &str) -> Result<Vec<u8>, PhotoError> {
        let mut last_err = None;
        for root in &self.roots {
            match fs::read(root.join(relative_path)) {
                Ok(bytes) => return Ok(bytes),
                Err(e) => last_err = Some(e),
            }
        }
        Err(PhotoError::OpenFile(last_err.unwrap_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "no photo search roots configured")
        })))
    }
}

fn write_or_discard(mut file: File, full: &Path, png: &[u8]) -> Result<(), PhotoError> {
    let result = file.write_all(png).and_then(|()| file.flush());
    if let Err(e) = result {
        drop(file);
        if let Err(rm) = fs::remove_file(full) {
            tracing::warn!(error = %rm, "Failed to remove partially written photo");
        }
        return Err(PhotoError::WriteFile(e));
    }
    Ok(())
}
