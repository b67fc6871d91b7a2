// anagram: Find phrases that use exactly the given letters.
//
// Letters come from the positional arguments (joined) or, when there are
// none, from stdin with one query per line. Results are printed one per
// line; stdin queries are separated by a blank line.
//
// Usage:
//   anagram [-d DICT_PATH] [OPTIONS] [LETTERS...]
//
// Options:
//   -d, --dict-path PATH   Dictionary file, or directory containing dict.dwg
//   -w, --max-words N      Most words per phrase (default 3)
//       --min N            Fewest letters per word (default 1)
//       --max N            Most letters per word (default 64)
//   -i, --include WORDS    Words every phrase must contain
//   -x, --exclude WORDS    Words that must not appear
//   -c, --candidates       List fitting words instead of phrases
//   -v, --verbose          Debug logging on stderr
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use anagram_cli::QueryArgs;
use anagram_search::AnagramHandle;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = anagram_cli::parse_dict_path(&args);

    if anagram_cli::wants_help(&args) {
        println!("anagram: Find phrases that use exactly the given letters.");
        println!();
        println!("Usage: anagram [-d DICT_PATH] [OPTIONS] [LETTERS...]");
        println!();
        println!("If LETTERS are given, solves them as one query.");
        println!("Otherwise reads queries from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary file, or directory containing dict.dwg");
        println!("  -w, --max-words N      Most words per phrase (default 3)");
        println!("      --min N            Fewest letters per word (default 1)");
        println!("      --max N            Most letters per word (default 64)");
        println!("  -i, --include WORDS    Words every phrase must contain");
        println!("  -x, --exclude WORDS    Words that must not appear");
        println!("  -c, --candidates       List fitting words instead of phrases");
        println!("  -v, --verbose          Debug logging on stderr");
        println!("  -h, --help             Print this help");
        return;
    }

    let parsed = anagram_cli::parse_query_args(&args).unwrap_or_else(|e| anagram_cli::fatal(&e));
    anagram_cli::init_logging(parsed.verbose);

    let handle = anagram_cli::load_handle(dict_path.as_deref())
        .unwrap_or_else(|e| anagram_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if parsed.letters.is_empty() {
        let stdin = io::stdin();
        let mut first = true;
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let letters = line.trim();
            if letters.is_empty() {
                continue;
            }
            if !first {
                let _ = writeln!(out);
            }
            first = false;
            if let Err(e) = solve(&handle, &parsed, letters, &mut out) {
                eprintln!("{letters}: {e}");
            }
        }
    } else {
        let letters = parsed.letters.join(" ");
        if let Err(e) = solve(&handle, &parsed, &letters, &mut out) {
            let _ = out.flush();
            anagram_cli::fatal(&e);
        }
    }
}

fn solve(
    handle: &AnagramHandle,
    parsed: &QueryArgs,
    letters: &str,
    out: &mut impl Write,
) -> Result<(), String> {
    let outcome = handle
        .solve(&parsed.query(letters))
        .map_err(|e| e.to_string())?;
    for result in &outcome.results {
        let _ = writeln!(out, "{result}");
    }
    if outcome.truncated {
        eprintln!("{letters}: stopped after {} results", outcome.results.len());
    }
    Ok(())
}
