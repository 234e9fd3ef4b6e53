use crate::error::FileError;
use derivative::Derivative;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const OCTET_STREAM: &str = "application/octet-stream";

/// Extensions offered by the file dialog's image filter.
pub const IMAGE_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "webp", "gif", "bmp", "tiff"];

/// The image the user picked. Cloning shares the bytes.
#[derive(Derivative, Clone)]
#[derivative(Debug)]
pub struct SelectedFile {
    name: String,
    path: Option<PathBuf>,
    mime: &'static str,
    #[derivative(Debug = "ignore")]
    bytes: Arc<[u8]>,
}

impl SelectedFile {
    pub fn from_path(path: &Path) -> Result<Self, FileError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| FileError::NoFileName(path.to_path_buf()))?;
        let bytes = fs::read(path)?;

        let mut file = Self::from_bytes(name, bytes);
        file.path = Some(path.to_path_buf());
        Ok(file)
    }

    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        let name = name.into();
        let mime = guess_mime(&name);
        Self {
            name,
            path: None,
            mime,
            bytes: bytes.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn mime(&self) -> &'static str {
        self.mime
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

fn guess_mime(name: &str) -> &'static str {
    let ext = match Path::new(name).extension().and_then(|e| e.to_str()) {
        Some(ext) => ext.to_lowercase(),
        None => return OCTET_STREAM,
    };

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        _ => OCTET_STREAM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_name_size_and_mime_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Road_07.JPG");
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(&[0xFF, 0xD8, 0xFF, 0xE0]).unwrap();

        let file = SelectedFile::from_path(&path).unwrap();
        assert_eq!(file.name(), "Road_07.JPG");
        assert_eq!(file.size(), 4);
        assert_eq!(file.mime(), "image/jpeg");
        assert_eq!(file.path(), Some(path.as_path()));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SelectedFile::from_path(&dir.path().join("gone.png")).unwrap_err();
        assert!(matches!(err, FileError::Io(_)));
    }

    #[test]
    fn unknown_extension_falls_back_to_octet_stream() {
        assert_eq!(SelectedFile::from_bytes("notes.txt", vec![1]).mime(), OCTET_STREAM);
        assert_eq!(SelectedFile::from_bytes("README", vec![1]).mime(), OCTET_STREAM);
    }
}
