/// Run mainline on a directory of HTML files and emit JSONL.
///
/// Usage:
///   cargo run --features serde --bin extract -- <html-dir>
///
/// Output (stdout): one JSON object per file: {"file": "...", "result": {...}}
/// Errors (stderr): {"file": "...", "error": "..."}
/// Summary (stderr): "Done: N ok, M errors"
use std::env;
use std::fs;
use std::path::Path;

use serde_json::json;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: extract <html-dir>");
        std::process::exit(1);
    }
    let html_dir = Path::new(&args[1]);

    let extractor = mainline::Extractor::default();

    let mut entries: Vec<_> = match fs::read_dir(html_dir) {
        Ok(dir) => dir
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|x| x == "html"))
            .collect(),
        Err(e) => {
            eprintln!("cannot read {}: {e}", html_dir.display());
            std::process::exit(1);
        }
    };
    entries.sort();

    let mut ok = 0usize;
    let mut errors = 0usize;

    for path in &entries {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let raw = match fs::read(path) {
            Ok(b) => b,
            Err(e) => {
                eprintln!("{}", json!({ "file": filename, "error": e.to_string() }));
                errors += 1;
                continue;
            }
        };

        let html = String::from_utf8_lossy(&raw);
        let url = format!("file://{}", path.display());
        let result = extractor.extract_html(&html, &url);

        println!("{}", json!({ "file": filename, "result": result }));
        ok += 1;
    }

    eprintln!("Done: {ok} ok, {errors} errors  (total {})", ok + errors);
}
