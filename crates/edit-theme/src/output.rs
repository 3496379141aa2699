//! Writing theme pairs to an output directory.
//!
//! A full regeneration first removes every file with the theme extension
//! from the output directory, then writes `{name}-dark.{ext}` and
//! `{name}-light.{ext}` for each definition in order. Other files in the
//! directory are left alone.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, info_span};

use crate::builtin::ThemeDefinition;
use crate::error::{Result, ThemeError};
use crate::generator::{GeneratedTheme, Variant};
use crate::writer::write_theme;

/// Where and how theme files are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub out_dir: PathBuf,
    /// File extension without the dot.
    pub extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("themes"),
            extension: "ini".to_owned(),
        }
    }
}

impl OutputConfig {
    /// `{out_dir}/{name}-{dark|light}.{ext}`
    #[must_use]
    pub fn path_for(&self, name: &str, variant: Variant) -> PathBuf {
        self.out_dir
            .join(format!("{name}-{}.{}", variant.suffix(), self.extension))
    }
}

/// Display name of one variant: `christmas` → `Christmas Dark`.
#[must_use]
pub fn display_name(name: &str, variant: Variant) -> String {
    format!("{} {}", title_case(&name.replace('-', " ")), variant.label())
}

/// Upper-case every cased character that follows an uncased one and
/// lower-case the rest. Digits are uncased, so `1820s` becomes `1820S`.
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_cased = false;
    for c in s.chars() {
        let cased = c.is_lowercase() || c.is_uppercase();
        if cased && !prev_cased {
            out.extend(c.to_uppercase());
        } else if cased {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
        prev_cased = cased;
    }
    out
}

/// One variant that made it to disk.
#[derive(Debug, Clone)]
pub struct WrittenTheme {
    pub path: PathBuf,
    pub display_name: String,
    pub variant: Variant,
    pub generated: GeneratedTheme,
}

/// Generate both variants of `def` and write them under `config`.
///
/// The variants use independent generators, so a color may appear in both.
///
/// # Errors
///
/// Returns [`ThemeError::Io`] if either file cannot be written.
pub fn create_theme_pair(def: &ThemeDefinition, config: &OutputConfig) -> Result<[WrittenTheme; 2]> {
    let write = |variant: Variant| -> Result<WrittenTheme> {
        let generated = def.generate(variant);
        let path = config.path_for(def.name, variant);
        let display_name = display_name(def.name, variant);
        write_theme(&path, &display_name, &generated.colors)?;
        Ok(WrittenTheme {
            path,
            display_name,
            variant,
            generated,
        })
    };
    Ok([write(Variant::Dark)?, write(Variant::Light)?])
}

/// Remove every `*.{ext}` file directly inside the output directory.
///
/// A missing directory is not an error. Returns the number of files removed.
///
/// # Errors
///
/// Returns [`ThemeError::Io`] if the directory cannot be listed or a file
/// cannot be removed.
pub fn clean_output_dir(config: &OutputConfig) -> Result<usize> {
    let dir = &config.out_dir;
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(ThemeError::io("list", dir, e)),
    };

    let mut removed = 0;
    for entry in entries {
        let path = entry.map_err(|e| ThemeError::io("list", dir, e))?.path();
        if path.is_file() && has_extension(&path, &config.extension) {
            fs::remove_file(&path).map_err(|e| ThemeError::io("remove", &path, e))?;
            debug!(path = %path.display(), "removed stale theme");
            removed += 1;
        }
    }
    Ok(removed)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|ext| ext == extension)
}

/// Summary of a regeneration run.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub files_removed: usize,
    pub themes: Vec<WrittenTheme>,
}

impl GenerationReport {
    #[must_use]
    pub fn files_written(&self) -> usize {
        self.themes.len()
    }

    /// Roles across all variants that kept a duplicate color.
    #[must_use]
    pub fn exhausted(&self) -> u32 {
        self.themes.iter().map(|t| t.generated.stats.exhausted).sum()
    }
}

/// Clean the output directory, then write every definition's pair in order.
///
/// # Errors
///
/// Stops at the first [`ThemeError::Io`]; files written before the failure
/// stay on disk.
pub fn regenerate_all(defs: &[ThemeDefinition], config: &OutputConfig) -> Result<GenerationReport> {
    let files_removed = clean_output_dir(config)?;
    info!(
        dir = %config.out_dir.display(),
        removed = files_removed,
        "cleaned output directory"
    );

    let mut themes = Vec::with_capacity(defs.len() * 2);
    for def in defs {
        let _span = info_span!("theme", name = def.name).entered();
        let pair = create_theme_pair(def, config)?;
        info!(
            perturbations = pair[0].generated.stats.perturbations + pair[1].generated.stats.perturbations,
            "created theme pair"
        );
        themes.extend(pair);
    }

    Ok(GenerationReport {
        files_removed,
        themes,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
