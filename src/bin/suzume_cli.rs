//! Command-line front end (§2.5): reads text, tokenizes it, and prints
//! one morpheme per line, grounded on `lindera-cli`'s read/tokenize/print
//! loop but using `clap`'s derive API instead of the teacher's
//! now-outdated builder API.

use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;
use suzume::{Analyzer, Morpheme};

#[derive(Parser)]
#[command(name = "suzume", version, about = "Japanese morphological analysis")]
struct Cli {
    /// User dictionary file (CSV/TSV). May be given multiple times.
    #[arg(short, long = "user-dict", value_name = "PATH")]
    user_dict: Vec<PathBuf>,

    /// Overrides SUZUME_DATA_DIR for this run.
    #[arg(short, long = "data-dir", value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Enables debug-level inflection and scorer logging.
    #[arg(long)]
    debug: bool,

    /// Emits one JSON object per morpheme instead of tab-separated text.
    #[arg(long)]
    json: bool,

    /// Input file. Reads from stdin, line by line, if omitted.
    #[arg(value_name = "INPUT_FILE")]
    input_file: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if cli.debug {
        std::env::set_var("SUZUME_DEBUG", "1");
    }
    if let Some(data_dir) = &cli.data_dir {
        std::env::set_var(suzume::dictionary::manager::DATA_DIR_ENV, data_dir);
    }

    let mut analyzer = Analyzer::new();
    if let Err(e) = analyzer.try_auto_load_core_dictionary() {
        eprintln!("warning: failed to auto-load core dictionary: {e}");
    }
    for path in &cli.user_dict {
        match analyzer.add_user_dictionary(path) {
            Ok(count) => log::info!("loaded {count} entries from {}", path.display()),
            Err(e) => {
                eprintln!("error: failed to load user dictionary {}: {e}", path.display());
                std::process::exit(1);
            }
        }
    }

    let lines: Box<dyn Iterator<Item = io::Result<String>>> = match &cli.input_file {
        Some(path) => match fs::read_to_string(path) {
            Ok(contents) => Box::new(contents.lines().map(|l| Ok(l.to_string())).collect::<Vec<_>>().into_iter()),
            Err(e) => {
                eprintln!("error: failed to read {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => Box::new(io::stdin().lock().lines()),
    };

    for line in lines {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("error: failed to read input: {e}");
                break;
            }
        };
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        match analyzer.analyze(text) {
            Ok(morphemes) => print_morphemes(&morphemes, cli.json),
            Err(e) => eprintln!("error: failed to analyze line: {e}"),
        }
    }
}

fn print_morphemes(morphemes: &[Morpheme], json: bool) {
    if json {
        for morpheme in morphemes {
            match serde_json::to_string(morpheme) {
                Ok(line) => println!("{line}"),
                Err(e) => eprintln!("error: failed to serialize morpheme: {e}"),
            }
        }
        return;
    }
    for morpheme in morphemes {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            morpheme.surface, morpheme.pos, morpheme.lemma, morpheme.reading, morpheme.conj_type
        );
    }
    println!("EOS");
}
