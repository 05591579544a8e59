//! `build` command: write the page bundle.
//!
//! Produces `<out>/index.html` plus a copy of the public directory, which is
//! all a static host needs.

use std::fs;
use std::path::Path;

use crate::cli::args::BuildArgs;
use crate::cli::commands::load_portal_view;
use crate::error::Result;

/// Name of the rendered page inside the output directory.
pub const INDEX_FILE: &str = "index.html";

/// Execute `build`.
///
/// `quiet` suppresses the summary line on stderr.
///
/// # Errors
///
/// Returns an error if the portal file is invalid or the output cannot be
/// written.
pub fn run(args: &BuildArgs, quiet: bool) -> Result<()> {
    let portal = load_portal_view(&args.source)?;
    let page = portal.render();

    fs::create_dir_all(&args.out)?;

    // Public assets go first so the rendered page wins a name clash.
    let copied = copy_public(&args.public, &args.out)?;
    if args.public.join(INDEX_FILE).is_file() {
        tracing::warn!(
            dir = %args.public.display(),
            "public index.html is replaced by the rendered page"
        );
    }

    let index = args.out.join(INDEX_FILE);
    fs::write(&index, page)?;

    tracing::info!(
        page = %index.display(),
        cards = portal.cards().len(),
        assets = copied,
        "portal built"
    );
    if !quiet {
        eprintln!("Built {} ({copied} public assets)", index.display());
    }

    Ok(())
}

/// Recursively copy `public` into `out`. Returns the number of files copied.
///
/// A missing public directory copies nothing. When `out` lies inside
/// `public` it is skipped, and symlinked directories are not followed.
///
/// # Errors
///
/// Returns an I/O error if a file cannot be read or written.
pub fn copy_public(public: &Path, out: &Path) -> Result<usize> {
    if !public.is_dir() {
        tracing::debug!(dir = %public.display(), "no public directory");
        return Ok(0);
    }

    let out = fs::canonicalize(out)?;
    if fs::canonicalize(public)? == out {
        tracing::warn!(dir = %public.display(), "public and output directory are the same, nothing copied");
        return Ok(0);
    }

    copy_tree(public, &out, &out)
}

fn copy_tree(source_dir: &Path, target_dir: &Path, out: &Path) -> Result<usize> {
    let mut copied = 0;
    for entry in fs::read_dir(source_dir)? {
        let entry = entry?;
        let source = entry.path();
        let target = target_dir.join(entry.file_name());
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            if fs::canonicalize(&source)? == out {
                tracing::debug!(dir = %source.display(), "skipping output directory");
                continue;
            }
            fs::create_dir_all(&target)?;
            copied += copy_tree(&source, &target, out)?;
        } else if file_type.is_symlink() && !source.is_file() {
            tracing::warn!(path = %source.display(), "skipping symlink that is not a file");
        } else {
            fs::copy(&source, &target)?;
            copied += 1;
        }
    }

    Ok(copied)
}
