//! Scaffold command (kata new)

use anyhow::{bail, Context, Result};
use colored::*;
use kata_config::ConfigLoader;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

const TEMPLATE: &str = include_str!("../../templates/solution.rs.tmpl");

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final", "macro",
    "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Arguments for the new command
#[derive(Debug, Clone)]
pub struct NewArgs {
    /// Problem name as it appears on the exercise site
    pub problem: String,
    /// Function identifier (derived from the problem name when absent)
    pub function: Option<String>,
    /// Output directory (kata.toml `scaffold.dir` or src/bin when absent)
    pub dir: Option<PathBuf>,
    /// Overwrite an existing solution file
    pub force: bool,
    /// Directory the command runs from
    pub cwd: PathBuf,
}

impl Default for NewArgs {
    fn default() -> Self {
        Self {
            problem: String::new(),
            function: None,
            dir: None,
            force: false,
            cwd: PathBuf::from("."),
        }
    }
}

/// Run the new command; returns the path of the written file
pub fn run(args: NewArgs) -> Result<PathBuf> {
    let problem = validate_problem_name(&args.problem)?;

    let stem = to_identifier(problem);
    if stem.is_empty() {
        bail!(
            "Problem name '{}' must contain at least one letter or digit",
            problem
        );
    }

    let function = match args.function {
        Some(function) => {
            validate_identifier(&function)?;
            function
        }
        None => stem.clone(),
    };

    let config = ConfigLoader::new()
        .load_from_directory(&args.cwd)
        .context("Failed to load kata.toml")?;

    let dir = match args.dir {
        Some(dir) => args.cwd.join(dir),
        None => config.scaffold_dir(&args.cwd),
    };
    let path = dir.join(format!("{}.rs", stem));

    if path.exists() && !args.force {
        bail!(
            "Solution already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    let source = render(problem, &function, config.project.author());
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    fs::write(&path, source).with_context(|| format!("Failed to write {}", path.display()))?;
    debug!(path = %path.display(), function = %function, "wrote solution scaffold");

    println!(
        "{} Created solution for '{}'",
        "✓".green().bold(),
        problem.bold()
    );
    println!("  Path: {}", path.display());
    println!("\nTo run it:");
    println!("  cargo run --bin {}", stem);

    Ok(path)
}

/// Fill the solution template
pub fn render(problem: &str, function: &str, author: Option<&str>) -> String {
    let author_line = match author {
        Some(author) => format!("//!\n//! Author: {}\n", author),
        None => String::new(),
    };
    TEMPLATE
        .replace("__AUTHOR_LINE__\n", &author_line)
        .replace(
            "\"--- Testing __PROBLEM_NAME__ ---\"",
            &format!("\"--- Testing {} ---\"", problem.escape_debug()),
        )
        .replace("__PROBLEM_NAME__", problem)
        .replace("__FUNCTION_NAME__", function)
}

/// Lower snake case identifier for a problem name.
///
/// `"Two Sum"`, `"two-sum"` and `"twoSum"` all become `two_sum`; a leading
/// digit gets a `p` prefix and keywords get a trailing underscore.
pub fn to_identifier(name: &str) -> String {
    let mut ident = String::new();
    let mut pending_sep = false;
    let mut prev: Option<char> = None;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            let camel_break = c.is_ascii_uppercase()
                && prev.is_some_and(|p| p.is_ascii_lowercase());
            if (pending_sep || camel_break) && !ident.is_empty() {
                ident.push('_');
            }
            pending_sep = false;
            ident.push(c.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
        prev = Some(c);
    }

    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, 'p');
    }
    if KEYWORDS.contains(&ident.as_str()) {
        ident.push('_');
    }
    ident
}

fn validate_problem_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        bail!("Problem name cannot be empty");
    }
    if name.chars().any(char::is_control) {
        bail!("Problem name cannot contain control characters");
    }
    Ok(name)
}

/// Check that `name` can be used as a Rust function name
pub fn validate_identifier(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };

    if !valid || name == "_" {
        bail!("Invalid function name '{}': not a Rust identifier", name);
    }
    if KEYWORDS.contains(&name) {
        bail!("Invalid function name '{}': reserved keyword", name);
    }
    Ok(())
}
