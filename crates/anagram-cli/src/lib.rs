// anagram-cli: shared utilities for the command-line tools.

use std::path::PathBuf;
use std::process;

use anagram_core::LanguageConfig;
use anagram_search::{AnagramHandle, Mode, Query, QueryOptions};

/// Dictionary file name looked up in each search directory.
pub const DICT_FILE: &str = "dict.dwg";

/// Environment variable naming a dictionary file or directory.
pub const DICT_PATH_ENV: &str = "ANAGRAM_DICT_PATH";

/// Search for the dictionary and create an AnagramHandle.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `ANAGRAM_DICT_PATH` environment variable
/// 3. `~/.anagram`
/// 4. System data directories
/// 5. Current working directory
///
/// Each entry may name the file itself or a directory holding `dict.dwg`.
pub fn load_handle(dict_path: Option<&str>) -> Result<AnagramHandle, String> {
    let search_paths = build_search_paths(dict_path);

    for candidate in &search_paths {
        let path = if candidate.is_file() {
            candidate.clone()
        } else {
            candidate.join(DICT_FILE)
        };
        if path.is_file() {
            let data = std::fs::read(&path)
                .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
            log::debug!("using dictionary {}", path.display());
            return AnagramHandle::from_bytes(&data, LanguageConfig::esperanto())
                .map_err(|e| format!("failed to load {}: {e}", path.display()));
        }
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        DICT_FILE,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of locations to search for the dictionary.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var(DICT_PATH_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".anagram"));
    }

    paths.push(PathBuf::from("/usr/local/share/anagram"));
    paths.push(PathBuf::from("/usr/share/anagram"));

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut dict_path = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--dict-path=") {
            dict_path = Some(val.to_string());
        } else if arg == "--dict-path" || arg == "-d" {
            match iter.next() {
                Some(val) => dict_path = Some(val.clone()),
                None => fatal(&format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (dict_path, remaining)
}

/// Query settings collected from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryArgs {
    pub options: QueryOptions,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    /// Positional arguments, joined into one letter string.
    pub letters: Vec<String>,
    pub verbose: bool,
}

impl QueryArgs {
    /// Build the query for `letters` with these settings.
    pub fn query(&self, letters: &str) -> Query {
        Query::new(letters)
            .with_options(self.options)
            .include(self.include.iter().cloned())
            .exclude(self.exclude.iter().cloned())
    }
}

/// Parse the query flags of the `anagram` tool.
///
/// Include and exclude flags may repeat and each value may hold several
/// space-separated words.
pub fn parse_query_args(args: &[String]) -> Result<QueryArgs, String> {
    let mut parsed = QueryArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag, Some(value.to_string())),
            _ => (arg.as_str(), None),
        };
        let mut value = || -> Result<String, String> {
            match &inline {
                Some(v) => Ok(v.clone()),
                None => iter
                    .next()
                    .cloned()
                    .ok_or_else(|| format!("{flag} requires a value")),
            }
        };

        match flag {
            "-w" | "--max-words" => parsed.options.max_words = parse_count(flag, &value()?)?,
            "--min" => parsed.options.min_letters = parse_count(flag, &value()?)?,
            "--max" => parsed.options.max_letters = parse_count(flag, &value()?)?,
            "-i" | "--include" => parsed
                .include
                .extend(value()?.split_whitespace().map(String::from)),
            "-x" | "--exclude" => parsed
                .exclude
                .extend(value()?.split_whitespace().map(String::from)),
            "-c" | "--candidates" => parsed.options.mode = Mode::Candidates,
            "-v" | "--verbose" => parsed.verbose = true,
            _ if flag.starts_with('-') && flag.len() > 1 => {
                return Err(format!("unknown option {flag}"));
            }
            _ => parsed.letters.push(arg.clone()),
        }
    }

    Ok(parsed)
}

fn parse_count(flag: &str, value: &str) -> Result<usize, String> {
    value
        .parse()
        .map_err(|_| format!("{flag} expects a non-negative number, got {value:?}"))
}

/// Route `log` output to stderr. `RUST_LOG` overrides the default level.
pub fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
