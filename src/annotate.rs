use std::fs::{File, read_to_string};
use std::io::Write;
use std::path::Path;

use crate::alias::AliasMap;
use crate::git::AuthorLookup;
use crate::matcher;

/// Outcome of annotating one file.
#[derive(Debug)]
pub struct FileReport {
    /// Number of attribution blocks inserted (or, in a preview, the number
    /// that would be inserted).
    pub inserted: usize,
}

/// Transforms `lines`, inserting an attribution block above every matched,
/// not-yet-annotated declaration.
///
/// For each line whose trimmed text matches a declaration pattern, the
/// attribution query runs for exactly that line number and, on success,
/// three lines are inserted directly above:
///
/// ```text
/// /**
///  * @author <resolved name>
///  */
/// ```
///
/// The inserted lines carry no indentation. A failed query leaves the
/// line unannotated and processing continues. Lines that already carry an
/// annotation, either as a one-line `/** @author ... */` or as a block
/// directly above, are left untouched, so repeated runs insert nothing new.
///
/// # Parameters
///
/// * `lines` — The file's original lines.
/// * `file` — Path handed to the attribution query.
/// * `lookup` — The attribution query implementation.
/// * `aliases` — Alias map applied to each raw author token.
///
/// # Returns
///
/// * The transformed lines and the number of blocks inserted.
pub fn annotate_lines<L: AuthorLookup>(
    lines: &[String],
    file: &Path,
    lookup: &L,
    aliases: &AliasMap,
) -> (Vec<String>, usize) {
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut inserted = 0;

    for (index, line) in lines.iter().enumerate() {
        let trimmed = line.trim();

        // A hand-written one-line annotation; pass through untouched.
        if matcher::is_annotation_opener(trimmed) {
            out.push(line.clone());
            continue;
        }

        if matcher::is_declaration(trimmed) && !matcher::has_annotation_above(lines, index) {
            match lookup.author_for_line(file, index + 1) {
                Ok(raw) => {
                    let author = aliases.resolve(raw.trim());
                    out.push(String::from("/**"));
                    out.push(format!(" * @author {}", author));
                    out.push(String::from(" */"));
                    inserted += 1;
                }
                Err(_) => {
                    // No attribution produced; the line stays as-is.
                }
            }
        }

        out.push(line.clone());
    }

    (out, inserted)
}

/// Reads `path`, annotates its lines, and writes the result back in place.
///
/// The file is rewritten joined with `\n` and a single trailing newline.
/// No backup is kept and the write is not atomic.
///
/// # Parameters
///
/// * `path` — The file to rewrite.
/// * `lookup` — The attribution query implementation.
/// * `aliases` — Alias map applied to each raw author token.
///
/// # Returns
///
/// * `Ok(FileReport)` with the number of blocks inserted.
/// * `Err(String)` if the file could not be read or written.
pub fn process_file<L: AuthorLookup>(
    path: &Path,
    lookup: &L,
    aliases: &AliasMap,
) -> Result<FileReport, String> {
    let body = match read_to_string(path) {
        Ok(content) => content,
        Err(e) => return Err(format!("read failed: {}", e)),
    };

    let lines: Vec<String> = body.lines().map(|l| l.to_string()).collect();
    let (annotated, inserted) = annotate_lines(&lines, path, lookup, aliases);

    let transformed = annotated.join("\n") + "\n";

    let mut file = match File::create(path) {
        Ok(f) => f,
        Err(e) => return Err(format!("create failed: {}", e)),
    };

    match file.write_all(transformed.as_bytes()) {
        Ok(_) => Ok(FileReport { inserted }),
        Err(e) => Err(format!("write failed: {}", e)),
    }
}

/// Reads `path` and counts the blocks a run would insert, writing nothing.
///
/// Used by dry-run mode. The attribution query still runs per matched
/// line so the count reflects what an in-place run would actually do.
///
/// # Returns
///
/// * `Ok(FileReport)` with the would-be insert count.
/// * `Err(String)` if the file could not be read.
pub fn preview_file<L: AuthorLookup>(
    path: &Path,
    lookup: &L,
    aliases: &AliasMap,
) -> Result<FileReport, String> {
    let body = match read_to_string(path) {
        Ok(content) => content,
        Err(e) => return Err(format!("read failed: {}", e)),
    };

    let lines: Vec<String> = body.lines().map(|l| l.to_string()).collect();
    let (_, inserted) = annotate_lines(&lines, path, lookup, aliases);

    Ok(FileReport { inserted })
}
