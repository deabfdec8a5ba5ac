use console::{measure_text_width, style};
use std::iter;

/// Prints a decorative, colorized banner describing the annotation run.
///
/// The banner is dynamically sized to fit the widest **visible** line of
/// text, using [`console::measure_text_width`] to ignore ANSI color codes
/// when calculating padding. It is framed with Unicode box-drawing
/// characters (`╔═╗`, `║ ║`, `╚═╝`) and uses [`console::style`] for
/// coloring and bolding. Borders are styled independently from the inner
/// text so embedded color codes (e.g. the dry-run/in-place mode lines) do
/// not affect the color of the box edges.
///
/// # Parameters
///
/// * `root` – The directory being scanned.
/// * `file_count` – Number of source files the walker found.
/// * `alias_count` – Number of entries in the loaded alias map.
/// * `dry_run` – When `true`, the banner shows preview-mode instructions;
///   otherwise it warns about the in-place rewrite.
///
/// # Output
///
/// This function prints directly to standard output. It does not return
/// any value.
///
/// # Examples
///
/// ```no_run
/// use git_author_annotate::banner::print_banner;
///
/// fn main() {
///     print_banner("src", 42, 3, false);
/// }
/// ```
pub fn print_banner(root: &str, file_count: usize, alias_count: usize, dry_run: bool) {
    let lines = banner_lines(root, file_count, alias_count, dry_run);

    let max_width = lines
        .iter()
        .map(|l| measure_text_width(l)) // ignore ANSI in content
        .max()
        .unwrap_or(0)
        + 2;

    let border = "═".repeat(max_width);
    let top = style(format!("╔{}╗", border)).blue().bold();
    let bottom = style(format!("╚{}╝", border)).blue().bold();
    let left = style("║ ").blue().bold().to_string();
    let right = style("║").blue().bold().to_string();

    println!();
    println!("{top}");
    for line in lines {
        let visible = measure_text_width(&line);
        let pad = max_width - visible; // includes the one space after left border
        println!("{}{}{}{}", left, line, " ".repeat(pad - 1), right);
    }
    println!("{bottom}");
    println!();
}

/// Constructs the lines of text for the annotation banner.
///
/// Returns each banner line as a `String`, in display order: 1) title,
/// 2) mode instructions (dry-run/in-place), 3) scan summary, 4) steps.
/// Some lines carry ANSI styling; consumers needing width calculations
/// should measure **visible** width (e.g. with
/// `console::measure_text_width`) rather than `str::len()`.
fn banner_lines(root: &str, file_count: usize, alias_count: usize, dry_run: bool) -> Vec<String> {
    let top = ["Stamp @author attributions from git blame", ""]
        .into_iter()
        .map(|s| s.to_string());

    let mode = if dry_run {
        vec![
            style("Dry run: files will be scanned but not modified.")
                .yellow()
                .bold()
                .to_string(),
            style("(Drop --dry-run to write the annotations in place.)")
                .yellow()
                .to_string(),
        ]
    } else {
        vec![
            style("Files will be rewritten in place, with no backups.")
                .cyan()
                .bold()
                .to_string(),
            style("(Use --dry-run to preview without writing.)")
                .cyan()
                .to_string(),
        ]
    }
    .into_iter();

    let alias_line = if alias_count > 0 {
        format!("Alias map loaded with {} entries", alias_count)
    } else {
        String::from("No alias map found; raw author names will be used")
    };

    let bottom = iter::once(String::new())
        .chain(iter::once(format!(
            "Scanning {} source files under `{}`",
            file_count, root
        )))
        .chain(iter::once(alias_line))
        .chain(
            [
                "For every function declaration, this tool will:",
                "  1) Ask `git blame` which author last touched the line",
                "  2) Insert a `/** * @author ... */` block above it",
            ]
            .into_iter()
            .map(|s| s.to_string()),
        );

    top.chain(mode).chain(bottom).collect()
}
