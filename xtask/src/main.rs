use camino::{Utf8Path, Utf8PathBuf};
use pathcode::RenderOptions;
use rayon::prelude::*;
use std::fs;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo xtask <command>");
        eprintln!("Commands:");
        eprintln!("  render <dir> [--minified]    Render every *.path file in <dir> to a sibling .kt file");
        std::process::exit(1);
    }

    match args[1].as_str() {
        "render" => {
            let Some(dir) = args.get(2) else {
                eprintln!("Usage: cargo xtask render <dir> [--minified]");
                std::process::exit(1);
            };
            let minified = args[3..].iter().any(|a| a == "--minified");
            render(Utf8Path::new(dir), minified);
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    }
}

fn path_files(dir: &Utf8Path) -> Vec<Utf8PathBuf> {
    let entries = match dir.read_dir_utf8() {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Failed to read {}: {}", dir, e);
            std::process::exit(1);
        }
    };
    let mut files: Vec<Utf8PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.extension() == Some("path"))
        .collect();
    files.sort();
    files
}

fn render(dir: &Utf8Path, minified: bool) {
    let options = RenderOptions {
        minified,
        ..RenderOptions::default()
    };
    let files = path_files(dir);

    // Paths are independent; each file is parsed and written on its own worker
    let results: Vec<(Utf8PathBuf, Result<(), String>)> = files
        .par_iter()
        .map(|file| (file.clone(), render_file(file, &options)))
        .collect();

    let mut failed = 0;
    for (file, result) in &results {
        match result {
            Ok(()) => eprintln!("rendered {}", file.with_extension("kt")),
            Err(e) => {
                failed += 1;
                eprintln!("failed {}: {}", file, e);
            }
        }
    }

    eprintln!("{} rendered, {} failed", results.len() - failed, failed);
    if failed > 0 {
        std::process::exit(1);
    }
}

fn render_file(file: &Utf8Path, options: &RenderOptions) -> Result<(), String> {
    let raw = fs::read_to_string(file).map_err(|e| e.to_string())?;
    let code = pathcode::path_to_code(raw.trim_end(), options).map_err(|e| format!("{:?}", e))?;
    fs::write(file.with_extension("kt"), code + "\n").map_err(|e| e.to_string())
}
