use std::path::Path;
use std::process::{Command, Stdio};

/// Runs a command and returns its trimmed standard output on success,
/// or its standard error as an `Err` on failure.
///
/// This function executes the provided [`std::process::Command`] and:
/// - If the command exits with a zero status, its `stdout` is captured,
///   converted to UTF-8 (lossy), trimmed, and returned as `Ok(String)`.
/// - If the command exits non-zero, its `stderr` is captured,
///   converted to UTF-8 (lossy), trimmed, and returned as `Err(String)`.
/// - If the process fails to spawn, the I/O error message is returned as `Err(String)`.
///
/// # Parameters
///
/// * `cmd` — A fully configured [`std::process::Command`] ready to execute.
///
/// # Returns
///
/// * `Ok(String)` containing trimmed `stdout` if the command succeeded.
/// * `Err(String)` containing trimmed `stderr` or an I/O error message otherwise.
fn run_output(mut cmd: Command) -> Result<String, String> {
    let out_res = cmd.output();
    match out_res {
        Ok(out) => {
            if out.status.success() {
                Ok(String::from_utf8_lossy(&out.stdout).trim().to_string())
            } else {
                Err(String::from_utf8_lossy(&out.stderr).trim().to_string())
            }
        }
        Err(e) => Err(format!("{}", e)),
    }
}

/// Runs `git rev-parse <flag>` and returns its output as a trimmed string.
///
/// This is a convenience wrapper around `git rev-parse` used to query
/// repository metadata, typically the repository root via
/// `--show-toplevel`.
///
/// # Parameters
///
/// * `flag` — The argument to pass to `git rev-parse`, e.g. `--show-toplevel`.
///
/// # Returns
///
/// * `Ok(String)` containing the trimmed standard output if the command
///   completed successfully.
/// * `Err(String)` containing the trimmed standard error or an I/O error message
///   if the command failed.
///
/// # Examples
///
/// ```ignore
/// // Ignored because it depends on being inside a Git repository.
/// use git_author_annotate::git::rev_parse;
///
/// match rev_parse("--show-toplevel") {
///     Ok(path) => println!("Repository root: {}", path),
///     Err(err) => eprintln!("Git error: {}", err),
/// }
/// ```
pub fn rev_parse(flag: &str) -> Result<String, String> {
    let mut cmd = Command::new("git");
    cmd.arg("rev-parse").arg(flag);
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());
    run_output(cmd)
}

/// Queries `git blame` for a single line of `file` and returns the raw
/// author token.
///
/// Internally, this executes:
///
/// ```text
/// git blame -L <line>,<line> -- <file>
/// ```
///
/// and parses the author out of the first parenthesized segment of the
/// output (see [`parse_author_token`]). Standard error is captured but
/// only surfaces as the `Err` message; it is never printed.
///
/// # Parameters
///
/// * `file` — Path to the file, as known to the repository.
/// * `line` — 1-based line number to attribute.
///
/// # Returns
///
/// * `Ok(String)` containing the raw author token, unaliased.
/// * `Err(String)` if the command failed (file not tracked, line out of
///   range, `git` missing) or its output had no recognizable author.
///
/// # Examples
///
/// ```ignore
/// // Ignored because it requires a Git repository with history.
/// use git_author_annotate::git::blame_author;
/// use std::path::Path;
///
/// match blame_author(Path::new("src/App.tsx"), 3) {
///     Ok(author) => println!("Last touched by {}", author),
///     Err(err) => eprintln!("Blame failed: {}", err),
/// }
/// ```
pub fn blame_author(file: &Path, line: usize) -> Result<String, String> {
    let mut cmd = Command::new("git");
    cmd.arg("blame")
        .arg("-L")
        .arg(format!("{},{}", line, line))
        .arg("--")
        .arg(file);
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let out = run_output(cmd)?;
    match parse_author_token(&out) {
        Some(author) => Ok(author),
        None => Err(String::from("unrecognized blame output")),
    }
}

/// Extracts the author token from a line of `git blame` output.
///
/// A blame line looks like:
///
/// ```text
/// abc123 (jdoe 2024-01-01 10:00:00 +0000 3) export default function Foo() {}
/// ```
///
/// The first parenthesized segment holds the author followed by four
/// metadata fields (date, time, zone offset, line number). Those trailing
/// fields are dropped so multi-word author names survive intact. If the
/// segment has too few fields to carry the metadata, it is returned
/// whole; output without a parenthesized segment yields `None`.
pub(crate) fn parse_author_token(blame_line: &str) -> Option<String> {
    let open = blame_line.find('(')?;
    let rest = &blame_line[open + 1..];
    let close = rest.find(')')?;
    let segment = rest[..close].trim();

    let fields: Vec<&str> = segment.split_whitespace().collect();
    if fields.len() > 4 {
        Some(fields[..fields.len() - 4].join(" "))
    } else if fields.is_empty() {
        None
    } else {
        Some(segment.to_string())
    }
}

/// Abstraction over the per-line attribution query.
///
/// Implementors answer "who last touched this line of this file". This
/// trait enables testability by decoupling the annotation pipeline from a
/// live repository.
pub trait AuthorLookup {
    /// Returns the raw author token for `line` (1-based) of `file`.
    ///
    /// # Returns
    /// `Ok(String)` with the unaliased author token, or `Err(String)`
    /// describing why no attribution could be produced.
    fn author_for_line(&self, file: &Path, line: usize) -> Result<String, String>;
}

/// Production [`AuthorLookup`] backed by `git blame`.
pub struct GitBlame;

impl AuthorLookup for GitBlame {
    fn author_for_line(&self, file: &Path, line: usize) -> Result<String, String> {
        blame_author(file, line)
    }
}
