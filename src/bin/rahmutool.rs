use std::fs;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use rahmu_engine::{translate, Direction, ScriptTable};

#[derive(Parser)]
#[command(name = "rahmutool", about = "Rahmu script translation utility")]
struct Cli {
    /// Write a JSONL engine trace to this directory (trace builds only)
    #[arg(long, global = true, value_name = "DIR")]
    trace_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Dir {
    /// Rahmu script → Japanese kana
    ToKana,
    /// Japanese kana → Rahmu script
    ToRahmu,
}

impl From<Dir> for Direction {
    fn from(dir: Dir) -> Direction {
        match dir {
            Dir::ToKana => Direction::RahmuToKana,
            Dir::ToRahmu => Direction::KanaToRahmu,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Translate text given as an argument, or stdin when omitted
    Translate {
        /// Translation direction
        #[arg(value_enum)]
        direction: Dir,
        /// Text to translate (reads stdin when omitted)
        text: Option<String>,
        /// Output as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Translate a file line by line, recording results to JSONL
    Batch {
        /// Translation direction
        #[arg(value_enum)]
        direction: Dir,
        /// Path to the input file (one text per line)
        input_file: String,
        /// Path to the output JSONL file
        output_file: String,
    },

    /// Dump the correspondence table
    Table {
        /// Output as JSON instead of aligned text
        #[arg(long)]
        json: bool,
    },
}

/// One translated line (one per batch input line).
#[derive(Debug, Serialize)]
struct TranslationRecord<'a> {
    direction: Direction,
    input: &'a str,
    output: String,
}

fn read_stdin() -> String {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text).unwrap_or_else(|e| {
        eprintln!("Failed to read stdin: {}", e);
        process::exit(1);
    });
    text
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.trace_dir {
        rahmu_engine::trace_init::init_tracing(dir);
    }

    match cli.command {
        Command::Translate {
            direction,
            text,
            json,
        } => {
            let direction = Direction::from(direction);
            let input = text.unwrap_or_else(read_stdin);
            let output = translate(direction, &input);

            if json {
                let record = TranslationRecord {
                    direction,
                    input: &input,
                    output,
                };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&record).expect("JSON serialization failed")
                );
            } else {
                println!("{}", output);
            }
        }

        Command::Batch {
            direction,
            input_file,
            output_file,
        } => {
            let direction = Direction::from(direction);

            let file = fs::File::open(&input_file).unwrap_or_else(|e| {
                eprintln!("Failed to open input file {}: {}", input_file, e);
                process::exit(1);
            });
            let out = fs::File::create(&output_file).unwrap_or_else(|e| {
                eprintln!("Failed to create output file {}: {}", output_file, e);
                process::exit(1);
            });
            let mut writer = BufWriter::new(out);

            let mut count = 0usize;
            for line in BufReader::new(file).lines() {
                let line = line.unwrap_or_else(|e| {
                    eprintln!("Failed to read line: {}", e);
                    process::exit(1);
                });
                let record = TranslationRecord {
                    direction,
                    input: &line,
                    output: translate(direction, &line),
                };
                let json = serde_json::to_string(&record).expect("JSON serialization failed");
                writeln!(writer, "{}", json).unwrap_or_else(|e| {
                    eprintln!("Failed to write: {}", e);
                    process::exit(1);
                });
                count += 1;
            }

            eprintln!("Translated {} lines -> {}", count, output_file);
        }

        Command::Table { json } => {
            let pairs = ScriptTable::pairs();
            if json {
                let entries: Vec<_> = pairs
                    .iter()
                    .map(|&(rahmu, kana)| {
                        serde_json::json!({ "rahmu": rahmu, "kana": kana })
                    })
                    .collect();
                println!(
                    "{}",
                    serde_json::to_string_pretty(&entries).expect("JSON serialization failed")
                );
            } else {
                // Kana are double-width, so align on display width.
                let col = pairs
                    .iter()
                    .map(|&(rahmu, _)| rahmu.width())
                    .max()
                    .unwrap_or(0);
                for &(rahmu, kana) in pairs {
                    println!("{:col$}  {}", rahmu, kana, col = col);
                }
            }
        }
    }
}
