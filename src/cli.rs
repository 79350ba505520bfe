// src/cli.rs
use std::{env, error::Error, path::PathBuf, time::Duration};

use crate::{catalog, fetch, net::HttpSource, params::Params, progress::Progress, store};

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_cli()?;

    if params.list_books {
        for &(name, chapters) in catalog::BOOKS {
            println!("{},{}", name, chapters);
        }
        return Ok(());
    }

    let source = HttpSource::new()?;
    let mut progress = ConsoleProgress::default();

    let total = catalog::total_chapters(catalog::BOOKS) as u64;
    progress.log(&format!("Fetching {} chapters from labs.bible.org ...", total));
    progress.log(&format!(
        "Estimated time: ~{} minutes\n",
        total * params.pause.as_secs() / 60
    ));

    let summary = fetch::collect_verses(&source, catalog::BOOKS, params.pause, Some(&mut progress));

    store::write_verses(&params.out, &summary.verses)?;

    println!(
        "\nDone. {} total verses saved to {}",
        summary.verses.len(),
        params.out.display()
    );
    if !summary.errors.is_empty() {
        println!("\n{} error(s):", summary.errors.len());
        for e in &summary.errors {
            println!("  {}: {}", e.passage, e.cause);
        }
    }

    Ok(())
}

fn parse_cli() -> Result<Params, Box<dyn Error>> {
    let mut params = Params::new();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-o" | "--out" => {
                params.out = PathBuf::from(args.next().ok_or("Missing output path")?);
            }
            "--delay" => {
                let v: u64 = args.next().ok_or("Missing value for --delay")?.parse()?;
                params.pause = Duration::from_secs(v);
            }
            "--list-books" => params.list_books = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(params)
}

/// Prints one line per chapter. The counter tracks successes only;
/// failures print immediately but don't advance it.
#[derive(Default)]
pub struct ConsoleProgress {
    done: usize,
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_done(&mut self, passage: &str, verses: usize) {
        self.done += 1;
        println!("[{}/{}] {}: {} verses", self.done, self.total, passage, verses);
    }

    fn item_failed(&mut self, passage: &str, cause: &str) {
        println!("ERROR fetching {}: {}", passage, cause);
    }
}
