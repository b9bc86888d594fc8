use std::path::PathBuf;

use anyhow::{Context, Result};
use log::error;

/// Where portfolio content comes from: a local content directory or a
/// remote base URL with the same layout (`texts/*.txt`, `images/*`).
#[derive(Debug, Clone)]
pub enum ContentSource {
    Dir(PathBuf),
    Remote(String),
}

impl ContentSource {
    /// Fetch a text file by name. Any failure is logged and collapses to an
    /// empty string; callers treat empty content as "nothing to show", never
    /// as a parse error.
    pub fn fetch_text(&self, name: &str) -> String {
        match self.read_text(name) {
            Ok(text) => text,
            Err(err) => {
                error!("failed to load {name}: {err:#}");
                String::new()
            }
        }
    }

    fn read_text(&self, name: &str) -> Result<String> {
        match self {
            Self::Dir(root) => {
                let path = root.join("texts").join(name);
                std::fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))
            }
            Self::Remote(base) => {
                let url = format!("{}/texts/{}", base.trim_end_matches('/'), name);
                let body = ureq::get(&url)
                    .call()
                    .with_context(|| format!("requesting {url}"))?
                    .body_mut()
                    .read_to_string()
                    .with_context(|| format!("reading body of {url}"))?;
                Ok(body)
            }
        }
    }

    /// Fetch raw image bytes by filename. Failures are logged and become
    /// `None`; the renderer shows a placeholder for those.
    pub fn fetch_image(&self, name: &str) -> Option<Vec<u8>> {
        match self.read_image(name) {
            Ok(bytes) => Some(bytes),
            Err(err) => {
                error!("failed to load image {name}: {err:#}");
                None
            }
        }
    }

    fn read_image(&self, name: &str) -> Result<Vec<u8>> {
        match self {
            Self::Dir(root) => {
                let path = root.join("images").join(name);
                std::fs::read(&path).with_context(|| format!("reading {}", path.display()))
            }
            Self::Remote(base) => {
                let url = format!("{}/images/{}", base.trim_end_matches('/'), name);
                let bytes = ureq::get(&url)
                    .call()
                    .with_context(|| format!("requesting {url}"))?
                    .body_mut()
                    .read_to_vec()
                    .with_context(|| format!("reading body of {url}"))?;
                Ok(bytes)
            }
        }
    }

    /// Local texts directory, when there is one to watch for live reload.
    pub fn watchable_dir(&self) -> Option<PathBuf> {
        match self {
            Self::Dir(root) => Some(root.join("texts")),
            Self::Remote(_) => None,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Dir(root) => root.display().to_string(),
            Self::Remote(base) => base.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_collapses_to_empty_text() {
        let dir = tempfile::tempdir().unwrap();
        let source = ContentSource::Dir(dir.path().to_path_buf());
        assert_eq!(source.fetch_text("projects.txt"), "");
    }

    #[test]
    fn local_text_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let texts = dir.path().join("texts");
        std::fs::create_dir_all(&texts).unwrap();
        std::fs::write(texts.join("gallery.txt"), "a.png\nb.png\n").unwrap();
        let source = ContentSource::Dir(dir.path().to_path_buf());
        assert_eq!(source.fetch_text("gallery.txt"), "a.png\nb.png\n");
    }

    #[test]
    fn missing_image_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let source = ContentSource::Dir(dir.path().to_path_buf());
        assert!(source.fetch_image("nope.png").is_none());
    }
}
