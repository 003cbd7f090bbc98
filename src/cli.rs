use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::event::EventDocument;
use crate::stats::Statistics;
use crate::Error;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Classify padel tournament class names into normalized series"
)]
pub struct Cli {
    /// Events JSON document to read (defaults to stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Where to write the normalized document (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log normalization statistics
    #[arg(long)]
    pub stats: bool,

    /// Pretty-print the output JSON
    #[arg(long)]
    pub pretty: bool,
}

impl Cli {
    /// Open the configured input and output and run the normalization.
    pub fn run(&self) -> Result<(), Error> {
        let reader: Box<dyn Read> = match &self.input {
            Some(path) => Box::new(BufReader::new(File::open(path)?)),
            None => Box::new(io::stdin().lock()),
        };
        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path)?)),
            None => Box::new(io::stdout().lock()),
        };

        process(reader, writer, self.pretty, self.stats)
    }
}

/// Read an events document, normalize it and write the result.
pub fn process<R: Read, W: Write>(
    reader: R,
    mut writer: W,
    pretty: bool,
    stats: bool,
) -> Result<(), Error> {
    let document: EventDocument = serde_json::from_reader(reader)?;
    log::info!("normalizing classes for {} events", document.events.len());

    let normalized = document.normalize();
    log::info!("total unique series: {}", normalized.series.len());

    if stats {
        Statistics::from_events(&normalized.events).log_summary();
    }

    if pretty {
        serde_json::to_writer_pretty(&mut writer, &normalized)?;
    } else {
        serde_json::to_writer(&mut writer, &normalized)?;
    }
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}
