use crate::{alias::AliasMap, annotate, banner::print_banner, git, prompt, walker::SourceWalker};

use console::style;
use std::{
    env,
    path::{Path, PathBuf},
};

/// Options controlling a run, after flag parsing.
struct Options {
    root: String,
    aliases: String,
    yes: bool,
    dry_run: bool,
}

impl Options {
    fn defaults() -> Options {
        Options {
            root: String::from("src"),
            aliases: String::from("authors.map"),
            yes: false,
            dry_run: false,
        }
    }
}

/// Result of scanning the argument list.
enum ParsedArgs {
    Help,
    Version,
    Run(Options),
    Invalid(String),
}

/// Scans argv into [`ParsedArgs`]. `--help`/`--version` win over everything else.
fn parse_args(args: &[String]) -> ParsedArgs {
    if args.iter().any(|a| a == "--help" || a == "-h") {
        return ParsedArgs::Help;
    }
    if args.iter().any(|a| a == "--version" || a == "-V") {
        return ParsedArgs::Version;
    }

    let mut options = Options::defaults();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-y" | "--yes" => {
                options.yes = true;
            }
            "--dry-run" => {
                options.dry_run = true;
            }
            "--root" => match args.get(i + 1) {
                Some(v) => {
                    options.root = v.clone();
                    i += 1;
                }
                None => {
                    return ParsedArgs::Invalid(String::from("--root requires a directory"));
                }
            },
            "--aliases" => match args.get(i + 1) {
                Some(v) => {
                    options.aliases = v.clone();
                    i += 1;
                }
                None => {
                    return ParsedArgs::Invalid(String::from("--aliases requires a file path"));
                }
            },
            other => {
                return ParsedArgs::Invalid(format!("unrecognized argument: {}", other));
            }
        }
        i += 1;
    }

    ParsedArgs::Run(options)
}

/// Verifies git is available and the working directory is inside a repository.
fn verify_environment() -> Result<(), ()> {
    // Ensure `git` is available.
    match which::which("git") {
        Ok(_) => {}
        Err(_) => {
            eprintln!("{}", style("Error: `git` not found in PATH.").red().bold());
            return Err(());
        }
    }

    // Ensure we are inside a repository, otherwise every blame would fail.
    match git::rev_parse("--show-toplevel") {
        Ok(_) => Ok(()),
        Err(e) => {
            eprintln!(
                "{}",
                style(format!("Error: not inside a git repo ({})", e))
                    .red()
                    .bold()
            );
            Err(())
        }
    }
}

/// Processes each file in turn, printing progress and a final summary.
fn run_annotation(files: &[PathBuf], aliases: &AliasMap, dry_run: bool) -> Result<i32, ()> {
    let lookup = git::GitBlame;
    let mut total_inserted = 0;

    for file in files {
        let report = if dry_run {
            annotate::preview_file(file, &lookup, aliases)
        } else {
            annotate::process_file(file, &lookup, aliases)
        };

        match report {
            Ok(r) => {
                total_inserted += r.inserted;
                println!("Processed {}", file.display());
            }
            Err(e) => {
                eprintln!(
                    "{}",
                    style(format!("❌ Failed to process {}: {}", file.display(), e))
                        .red()
                        .bold()
                );
                return Err(());
            }
        }
    }

    let summary = if dry_run {
        format!(
            "✅ Dry run complete: would insert {} attribution blocks across {} files.",
            total_inserted,
            files.len()
        )
    } else {
        format!(
            "✅ Inserted {} attribution blocks across {} files.",
            total_inserted,
            files.len()
        )
    };
    println!("{}", style(summary).green().bold());

    Ok(0)
}

/// Prints usage information to stdout.
fn print_help() {
    println!(
        "\
git-author-annotate {}

Stamp `@author` attribution comments above function declarations,
derived from `git blame`.

USAGE:
    git-author-annotate [OPTIONS]

OPTIONS:
    -h, --help            Print help information
    -V, --version         Print version information
        --root <DIR>      Root directory to scan [default: src]
        --aliases <FILE>  Alias map file [default: authors.map]
    -y, --yes             Skip the confirmation prompt
        --dry-run         Scan and report without modifying any file

DESCRIPTION:
    This tool walks the root directory for .js/.jsx/.ts/.tsx files,
    recognizes function-declaration lines, asks `git blame` which author
    last touched each one, and inserts a `/** * @author ... */` block
    above it. Raw author names can be remapped through the alias file
    (`key=value` lines). Already-annotated declarations are skipped, so
    repeated runs are safe.",
        env!("CARGO_PKG_VERSION")
    );
}

/// Main CLI entry point for `git-author-annotate`.
///
/// This function:
/// 1. Parses CLI flags (`--root`, `--aliases`, `--yes`, `--dry-run`).
/// 2. Verifies that `git` is installed and that the current directory is
///    inside a git repository.
/// 3. Loads the alias map (an absent file is fine).
/// 4. Walks the root directory for annotatable source files.
/// 5. Displays an informational banner.
/// 6. Asks for confirmation before the in-place rewrite (skipped with
///    `--yes` or `--dry-run`).
/// 7. Annotates each file and prints a summary.
///
/// Returns `Ok(exit_code)` on success, or `Err(())` on error.
///
/// # Errors
///
/// Returns `Err(())` in the following cases:
/// - An unrecognized or incomplete flag is passed.
/// - `git` is not found in `PATH`.
/// - The current directory is not a git repository.
/// - The confirmation prompt fails.
/// - A file cannot be read or written back.
///
/// # Exit Codes
///
/// * `0` – Successful execution (including a declined confirmation and
///   an empty scan).
/// * Non-zero – Any failure along the way.
pub fn entry() -> Result<i32, ()> {
    // Parse command-line arguments.
    let args: Vec<String> = env::args().collect();

    let options = match parse_args(&args) {
        ParsedArgs::Help => {
            print_help();
            return Ok(0);
        }
        ParsedArgs::Version => {
            println!("git-author-annotate {}", env!("CARGO_PKG_VERSION"));
            return Ok(0);
        }
        ParsedArgs::Invalid(msg) => {
            eprintln!("{}", style(format!("Error: {}", msg)).red().bold());
            return Err(());
        }
        ParsedArgs::Run(options) => options,
    };

    // Verify environment before touching anything.
    verify_environment()?;

    // Load aliases; a missing file simply yields an empty map.
    let aliases = AliasMap::load(Path::new(&options.aliases));

    // Enumerate annotatable files.
    let files = SourceWalker::new(PathBuf::from(&options.root)).walk();
    if files.is_empty() {
        println!(
            "{}",
            style(format!("No source files found under `{}`.", options.root))
                .yellow()
                .bold()
        );
        return Ok(0);
    }

    // Show banner with instructions.
    print_banner(&options.root, files.len(), aliases.len(), options.dry_run);

    // Confirm before rewriting files in place.
    if !options.yes && !options.dry_run {
        let mut confirm_prompter = prompt::DialoguerConfirmPrompter;
        match prompt::confirm_rewrite(&mut confirm_prompter, files.len()) {
            Ok(true) => {}
            Ok(false) => {
                println!(
                    "{}",
                    style("Canceled by user. No changes made.").yellow().bold()
                );
                return Ok(0);
            }
            Err(e) => {
                eprintln!("{}", style(format!("Prompt error: {}", e)).red().bold());
                return Err(());
            }
        }
    }

    run_annotation(&files, &aliases, options.dry_run)
}
