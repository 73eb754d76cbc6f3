use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::classify::{classify_file, ContentKind};
use crate::error::{FixerError, IoResultExt, Result};
use crate::observer::{CopyEvent, CopyObserver};
use crate::pattern::{clean_line, clean_os_name};
use crate::summary::CopySummary;

/// `path` with the id suffix stripped from its last component.
pub fn cleaned_path(path: &Path) -> PathBuf {
    match path.file_name() {
        Some(name) => path.with_file_name(clean_os_name(name)),
        None => path.to_path_buf(),
    }
}

/// Copy `source` into `target`, stripping Notion ids from every directory
/// name, file name and text line on the way.
///
/// The last component of `target` is cleaned too. Subdirectories are handled
/// before the files of the directory that contains them. The first error
/// aborts the copy and leaves whatever was already written in place.
pub fn copy_and_clean<O: CopyObserver + ?Sized>(
    source: &Path,
    target: &Path,
    observer: &mut O,
) -> Result<CopySummary> {
    let target = cleaned_path(target);
    observer.on_event(CopyEvent::EnteringDirectory {
        source,
        target: &target,
    });
    fs::create_dir_all(&target).at(&target)?;

    let mut summary = CopySummary {
        directories: 1,
        ..CopySummary::default()
    };

    let Entries {
        dirs,
        files,
        skipped,
    } = list_entries(source)?;

    for path in &skipped {
        observer.on_event(CopyEvent::EntrySkipped { path });
    }

    for dir in &dirs {
        let name = dir.file_name().unwrap_or_default();
        summary += copy_and_clean(dir, &target.join(name), observer)?;
    }

    for file in &files {
        let name = file.file_name().unwrap_or_default();
        let dest = target.join(clean_os_name(name));

        let kind = classify_file(file).at(file)?;
        match kind {
            ContentKind::Text => {
                rewrite_text(file, &dest)?;
                summary.text_files += 1;
            }
            ContentKind::Binary => {
                fs::copy(file, &dest).at(&dest)?;
                summary.binary_files += 1;
            }
        }

        observer.on_event(CopyEvent::FileCopied {
            source: file,
            target: &dest,
            kind,
        });
    }

    Ok(summary)
}

#[derive(Default)]
struct Entries {
    dirs: Vec<PathBuf>,
    files: Vec<PathBuf>,
    skipped: Vec<PathBuf>,
}

/// Immediate children of `dir`, in filesystem order.
fn list_entries(dir: &Path) -> Result<Entries> {
    let mut entries = Entries::default();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(dir).to_path_buf();
            FixerError::io(path, err.into())
        })?;

        let file_type = entry.file_type();
        let bucket = if file_type.is_dir() {
            &mut entries.dirs
        } else if file_type.is_file() {
            &mut entries.files
        } else {
            &mut entries.skipped
        };
        bucket.push(entry.into_path());
    }

    Ok(entries)
}

/// Rewrite a text file line by line. Lines end at `\n` (a preceding `\r` is
/// dropped) and are always written back with `\n`.
fn rewrite_text(source: &Path, target: &Path) -> Result<()> {
    let mut reader = BufReader::new(File::open(source).at(source)?);
    let mut writer = BufWriter::new(File::create(target).at(target)?);
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line).at(source)? == 0 {
            break;
        }
        writer.write_all(&clean_line(strip_line_ending(&line))).at(target)?;
        writer.write_all(b"\n").at(target)?;
    }

    writer.flush().at(target)
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
