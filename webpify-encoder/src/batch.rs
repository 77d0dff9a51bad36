//! Directory and file-list batch driver

use crate::{BatchImageConverter, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use webpify_core::{source_extension_rank, webp_sibling, ConversionResult, Error, Outcome};

/// Runs the converter over a directory or an explicit list of files
#[derive(Debug, Clone, Default)]
pub struct BatchDriver {
    converter: BatchImageConverter,
    overwrite: bool,
}

impl BatchDriver {
    /// Creates a new driver around the given converter
    pub fn new(converter: BatchImageConverter) -> Self {
        Self {
            converter,
            overwrite: false,
        }
    }

    /// Replaces existing WebP files in [`BatchDriver::run_files`] instead
    /// of skipping them
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Lists the PNG and JPEG files directly inside `directory`
    ///
    /// Files are grouped by extension (png, jpg, jpeg) and sorted by name
    /// within each group.
    pub fn discover(directory: &Path) -> Result<Vec<PathBuf>> {
        if !directory.is_dir() {
            return Err(Error::DirectoryNotFound(directory.to_path_buf()).into());
        }

        let mut sources = Vec::new();
        for entry in fs::read_dir(directory)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if let Some(rank) = source_extension_rank(&path) {
                sources.push((rank, path));
            }
        }

        sources.sort_by(|(rank_a, a), (rank_b, b)| {
            rank_a.cmp(rank_b).then_with(|| a.file_name().cmp(&b.file_name()))
        });

        Ok(sources.into_iter().map(|(_, path)| path).collect())
    }

    /// Converts every source image in `directory`, skipping those that
    /// already have a WebP sibling
    ///
    /// A missing directory aborts the run before any file is touched.
    pub fn run(&self, directory: &Path) -> Result<Vec<ConversionResult>> {
        self.run_with(directory, |_| {})
    }

    /// Like [`BatchDriver::run`], calling `on_result` as each file finishes
    pub fn run_with<F>(&self, directory: &Path, mut on_result: F) -> Result<Vec<ConversionResult>>
    where
        F: FnMut(&ConversionResult),
    {
        let sources = Self::discover(directory)?;
        info!(
            directory = %directory.display(),
            files = sources.len(),
            "converting directory"
        );

        let results = sources
            .iter()
            .map(|source| {
                let result = self.process(source, false);
                on_result(&result);
                result
            })
            .collect();

        Ok(results)
    }

    /// Converts an explicit list of files in order
    ///
    /// Missing files produce a failed result and the remaining files are
    /// still processed.
    pub fn run_files<I, P>(&self, paths: I) -> Vec<ConversionResult>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.run_files_with(paths, |_| {})
    }

    /// Like [`BatchDriver::run_files`], calling `on_result` as each file
    /// finishes
    pub fn run_files_with<I, P, F>(&self, paths: I, mut on_result: F) -> Vec<ConversionResult>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
        F: FnMut(&ConversionResult),
    {
        paths
            .into_iter()
            .map(|path| {
                let result = self.process(path.as_ref(), self.overwrite);
                on_result(&result);
                result
            })
            .collect()
    }

    fn process(&self, source: &Path, overwrite: bool) -> ConversionResult {
        let destination = webp_sibling(source);

        if !overwrite && destination.exists() {
            debug!(destination = %destination.display(), "WebP already exists, skipping");
            return ConversionResult::new(source.to_path_buf(), destination, Outcome::Skipped);
        }

        self.converter.convert_to(source, &destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn test_discover_order_and_filter() {
        let dir = TempDir::new().unwrap();
        for name in ["b.jpeg", "z.png", "a.jpg", "a.png", "notes.txt", "c.webp", "D.PNG"] {
            touch(dir.path(), name);
        }
        fs::create_dir(dir.path().join("nested.png")).unwrap();

        let names: Vec<String> = BatchDriver::discover(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["D.PNG", "a.png", "z.png", "a.jpg", "b.jpeg"]);
    }

    #[test]
    fn test_discover_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("game logos");

        let err = BatchDriver::discover(&missing).unwrap_err();

        assert!(matches!(
            err,
            crate::Error::Core(Error::DirectoryNotFound(ref path)) if path == &missing
        ));
    }

    #[test]
    fn test_existing_webp_is_skipped() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "logo.png");
        fs::write(dir.path().join("logo.webp"), b"old").unwrap();

        let results = BatchDriver::default().run(dir.path()).unwrap();

        assert_eq!(results.len(), 1);
        assert!(results[0].is_skipped());
        assert_eq!(fs::read(dir.path().join("logo.webp")).unwrap(), b"old");
    }
}
