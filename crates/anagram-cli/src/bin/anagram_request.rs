// anagram-request: Answer JSON anagram requests from stdin.
//
// Reads one JSON request per line, for example
//   {"vorto":"ŝipo kato","maksvortoj":2,"ekskluzivu":"kato"}
// and writes one JSON response per line:
//   {"statusCode":200,"results":["ŝipo tako"],"truncated":false}
//
// Malformed requests and unusable includes get status 400.
//
// Usage:
//   anagram-request [-d DICT_PATH] [--html]
//
// Options:
//   -d, --dict-path PATH   Dictionary file, or directory containing dict.dwg
//       --html             Print the results as an HTML fragment instead
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use anagram_search::request::{AnagramRequest, AnagramResponse, STATUS_BAD_REQUEST};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = anagram_cli::parse_dict_path(&args);

    if anagram_cli::wants_help(&args) {
        println!("anagram-request: Answer JSON anagram requests from stdin.");
        println!();
        println!("Usage: anagram-request [-d DICT_PATH] [--html]");
        println!();
        println!("Reads one JSON request per line and writes one JSON response per line.");
        println!("Request fields: vorto, inkluzivu, ekskluzivu, maksvortoj,");
        println!("maksliteroj, minliteroj, kandidatoj.");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary file, or directory containing dict.dwg");
        println!("      --html             Print the results as an HTML fragment instead");
        println!("  -h, --help             Print this help");
        return;
    }

    let html = args.iter().any(|a| a == "--html");
    anagram_cli::init_logging(false);

    let handle = anagram_cli::load_handle(dict_path.as_deref())
        .unwrap_or_else(|e| anagram_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<AnagramRequest>(&line) {
            Ok(request) => handle.request(&request),
            Err(e) => {
                log::warn!("malformed request: {e}");
                AnagramResponse {
                    status: STATUS_BAD_REQUEST,
                    results: Vec::new(),
                    error: Some(format!("malformed request: {e}")),
                    truncated: false,
                }
            }
        };

        if html {
            let _ = writeln!(out, "{}", response.html_body());
        } else {
            match serde_json::to_string(&response) {
                Ok(json) => {
                    let _ = writeln!(out, "{json}");
                }
                Err(e) => eprintln!("error encoding response: {e}"),
            }
        }
        let _ = out.flush();
    }
}
