use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

/// Destinations of the two reports generated for one markup file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub flat: PathBuf,
    pub grouped: PathBuf,
}

impl OutputPaths {
    /// Derive report paths next to `input`.
    ///
    /// `source_suffix` is removed from the file name when present (as a whole
    /// suffix, not a character set), then each report suffix is appended.
    ///
    /// ```
    /// use std::path::Path;
    /// use fxids::core::OutputPaths;
    ///
    /// let paths = OutputPaths::derive(Path::new("ui/HomePage.fxml"), ".fxml", "IDs.txt", "IDsGrouped.txt").unwrap();
    /// assert_eq!(paths.flat, Path::new("ui/HomePageIDs.txt"));
    /// assert_eq!(paths.grouped, Path::new("ui/HomePageIDsGrouped.txt"));
    /// ```
    pub fn derive(
        input: &Path,
        source_suffix: &str,
        flat_suffix: &str,
        grouped_suffix: &str,
    ) -> Result<Self> {
        let Some(file_name) = input.file_name() else {
            bail!("Input path has no file name: {}", input.display());
        };
        let file_name = file_name.to_string_lossy();
        let stem = file_name
            .strip_suffix(source_suffix)
            .unwrap_or(&file_name);

        Ok(Self {
            flat: input.with_file_name(format!("{}{}", stem, flat_suffix)),
            grouped: input.with_file_name(format!("{}{}", stem, grouped_suffix)),
        })
    }
}
