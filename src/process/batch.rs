//! Directory-to-directory batch driver.
//!
//! Enumerates eligible files under a source root, mirrors each one to
//! the corresponding path under a destination root, and formats them
//! with a fresh per-file formatter. Existing destination files are
//! refused (created with `create_new`, so two workers can never race to
//! the same output path) and per-file failures are reported without
//! aborting the rest of the batch.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Context;
use glob::Pattern;
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::format::BraceStyle;
use crate::process::pipeline::format_file;
use crate::Result;

/// Source file extensions processed by default
pub const SOURCE_EXTENSIONS: &[&str] = &[
    "c", "h", "cc", "hh", "cpp", "hpp", "cxx", "hxx", "C", "H",
];

/// Options controlling file discovery and reporting
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Additional source file extensions (with or without leading dot)
    pub extensions: Vec<String>,
    /// Glob patterns for files/directories to skip
    pub exclude: Vec<String>,
    /// Suppress per-file progress output
    pub silent: bool,
}

/// One unit of work: a source file and its destination path
#[derive(Debug, Clone)]
pub struct FileJob {
    pub source: PathBuf,
    pub dest: PathBuf,
}

/// Outcome counts for a batch run
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchSummary {
    pub formatted: usize,
    pub errors: usize,
}

/// Check if a file has an eligible source extension.
/// Checks against both default extensions and any custom extensions provided.
fn is_source_file(path: &Path, custom_extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            if SOURCE_EXTENSIONS.contains(&ext) {
                return true;
            }
            for custom in custom_extensions {
                let custom_ext = custom.strip_prefix('.').unwrap_or(custom);
                if ext == custom_ext {
                    return true;
                }
            }
            false
        })
}

/// Check if a path matches any exclusion pattern
fn is_excluded(path: &Path, patterns: &[Pattern]) -> bool {
    if patterns.is_empty() {
        return false;
    }

    let path_str = path.to_string_lossy();

    for pattern in patterns {
        // Match against full path
        if pattern.matches(&path_str) {
            return true;
        }

        // Match against file name only
        if let Some(file_name) = path.file_name() {
            if pattern.matches(&file_name.to_string_lossy()) {
                return true;
            }
        }

        // Match against each path component (for directory patterns)
        for component in path.components() {
            if let std::path::Component::Normal(c) = component {
                if pattern.matches(&c.to_string_lossy()) {
                    return true;
                }
            }
        }
    }

    false
}

/// Enumerate eligible files under `source_root` and pair each with its
/// mirrored destination path under `dest_root`.
///
/// Files that do not match the configured extensions, or that match an
/// exclude pattern, are skipped.
#[must_use]
pub fn collect_jobs(source_root: &Path, dest_root: &Path, options: &BatchOptions) -> Vec<FileJob> {
    let exclude_patterns: Vec<Pattern> = options
        .exclude
        .iter()
        .filter_map(|p| Pattern::new(p).ok())
        .collect();

    let mut jobs = Vec::new();

    // WalkDir detects symlink loops when follow_links(true) and returns
    // errors for them; those entries are skipped via filter_map(ok).
    // max_depth bounds traversal in pathological directory structures.
    for entry in WalkDir::new(source_root)
        .follow_links(true)
        .max_depth(256)
        .into_iter()
        .filter_map(std::result::Result::ok)
    {
        let path = entry.path();
        if !path.is_file()
            || !is_source_file(path, &options.extensions)
            || is_excluded(path, &exclude_patterns)
        {
            continue;
        }
        let Ok(relative) = path.strip_prefix(source_root) else {
            continue;
        };
        jobs.push(FileJob {
            source: path.to_path_buf(),
            dest: dest_root.join(relative),
        });
    }

    jobs
}

/// Format one file into its destination path.
///
/// The destination is created with `create_new`: a pre-existing file is
/// an error, never silently overwritten.
pub fn process_job(job: &FileJob, style: &BraceStyle) -> Result<()> {
    if let Some(parent) = job.dest.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let input = File::open(&job.source)
        .with_context(|| format!("opening {}", job.source.display()))?;

    let dest = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&job.dest)
        .with_context(|| format!("creating {} (must not already exist)", job.dest.display()))?;

    let mut writer = BufWriter::new(dest);
    format_file(BufReader::new(input), &mut writer, style)
        .with_context(|| format!("formatting {}", job.source.display()))?;

    Ok(())
}

/// Run all jobs in parallel.
///
/// Each job gets its own formatter state, so jobs are independent; the
/// `create_new` destination open in [`process_job`] keeps two workers
/// from racing to the same output file. Failures are reported to stderr
/// and counted, and the remaining jobs continue.
pub fn run_batch(jobs: &[FileJob], style: &BraceStyle, options: &BatchOptions) -> BatchSummary {
    let success_count = AtomicUsize::new(0);
    let error_count = AtomicUsize::new(0);

    jobs.par_iter().for_each(|job| {
        if !options.silent {
            eprintln!("Formatting: {}", job.source.display());
        }
        match process_job(job, style) {
            Ok(()) => {
                success_count.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                error_count.fetch_add(1, Ordering::Relaxed);
                eprintln!("Error formatting {}: {e:#}", job.source.display());
            }
        }
    });

    BatchSummary {
        formatted: success_count.load(Ordering::Relaxed),
        errors: error_count.load(Ordering::Relaxed),
    }
}

/// Run all jobs one at a time, in discovery order
pub fn run_batch_sequential(
    jobs: &[FileJob],
    style: &BraceStyle,
    options: &BatchOptions,
) -> BatchSummary {
    let mut summary = BatchSummary::default();

    for job in jobs {
        if !options.silent {
            eprintln!("Formatting: {}", job.source.display());
        }
        match process_job(job, style) {
            Ok(()) => summary.formatted += 1,
            Err(e) => {
                summary.errors += 1;
                eprintln!("Error formatting {}: {e:#}", job.source.display());
            }
        }
    }

    summary
}
