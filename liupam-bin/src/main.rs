use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use gumdrop::Options;
use serde::Serialize;

use liupam::batch::{self, BatchReport};
use liupam::dictionary::Snapshot;
use liupam::ipa::{self, Dialect};
use liupam::syllabifier::record::PronunciationRecord;
use liupam::syllabifier::Syllabifier;

trait OutputWriter {
    fn write_record(&mut self, key: &str, record: &PronunciationRecord);
    fn finish(&mut self);
}

struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write_record(&mut self, key: &str, record: &PronunciationRecord) {
        let stressed = record
            .stressed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{}\t{}\t{}", key, record.syllables, stressed);
    }

    fn finish(&mut self) {}
}

#[derive(Serialize)]
struct JsonWriter {
    results: BTreeMap<String, PronunciationRecord>,
}

impl JsonWriter {
    pub fn new() -> JsonWriter {
        JsonWriter {
            results: BTreeMap::new(),
        }
    }
}

impl OutputWriter for JsonWriter {
    fn write_record(&mut self, key: &str, record: &PronunciationRecord) {
        self.results.insert(key.to_string(), record.clone());
    }

    fn finish(&mut self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap());
    }
}

#[derive(Debug, Options)]
struct Args {
    #[options(help = "print help message")]
    help: bool,

    #[options(command)]
    command: Option<Command>,
}

#[derive(Debug, Options)]
enum Command {
    #[options(help = "derive pronunciation records from transcriptions")]
    Syllabify(SyllabifyArgs),

    #[options(help = "rewrite lemmas to the bracketed stress-annotated form")]
    Annotate(AnnotateArgs),

    #[options(help = "print IPA for stored pronunciations")]
    Ipa(IpaArgs),
}

#[derive(Debug, Options)]
struct SyllabifyArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "JSON snapshot to be processed", required)]
    snapshot: PathBuf,

    #[options(no_short, long = "json", help = "output in JSON format")]
    use_json: bool,
}

#[derive(Debug, Options)]
struct AnnotateArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "JSON snapshot to be processed", required)]
    snapshot: PathBuf,
}

#[derive(Debug, Options)]
struct IpaArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "JSON snapshot to be processed", required)]
    snapshot: PathBuf,

    #[options(no_short, long = "reef", help = "use the reef dialect")]
    reef: bool,
}

fn load_snapshot(path: &Path) -> anyhow::Result<Snapshot> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

fn print_report(report: &BatchReport) {
    eprintln!(
        "accepted {}, multi-word {}, ambiguous {}, monosyllabic {}, malformed {}",
        report.accepted,
        report.multi_word,
        report.ambiguous_transcription,
        report.monosyllabic,
        report.malformed_transcription
    );
    for word in &report.flagged {
        eprintln!("flagged for review: {}", word);
    }
}

fn syllabify(args: SyllabifyArgs) -> anyhow::Result<()> {
    let snapshot = load_snapshot(&args.snapshot)?;
    let syllabifier = Syllabifier::new();
    let (records, report) = batch::derive_pronunciations(&snapshot, &syllabifier);

    let mut writer: Box<dyn OutputWriter> = if args.use_json {
        Box::new(JsonWriter::new())
    } else {
        Box::new(StdoutWriter)
    };

    let ordered: BTreeMap<&str, &PronunciationRecord> = records
        .iter()
        .map(|(key, record)| (key.as_str(), record))
        .collect();
    for (key, record) in ordered {
        writer.write_record(key, record);
    }
    writer.finish();

    print_report(&report);
    Ok(())
}

fn annotate(args: AnnotateArgs) -> anyhow::Result<()> {
    let snapshot = load_snapshot(&args.snapshot)?;
    let (updated, report) = batch::annotate_snapshot(snapshot);

    let ordered: BTreeMap<&str, _> = updated
        .iter()
        .map(|(key, entry)| (key.as_str(), entry))
        .collect();
    println!("{}", serde_json::to_string_pretty(&ordered)?);

    print_report(&report);
    Ok(())
}

fn print_ipa(args: IpaArgs) -> anyhow::Result<()> {
    let snapshot = load_snapshot(&args.snapshot)?;
    let dialect = if args.reef {
        Dialect::Reef
    } else {
        Dialect::Forest
    };

    let ordered: BTreeMap<&str, _> = snapshot
        .iter()
        .map(|(key, entry)| (key.as_str(), entry))
        .collect();
    for (key, entry) in ordered {
        let forms = match entry.pronunciation.as_deref() {
            Some(forms) => forms,
            None => continue,
        };
        for form in forms {
            println!("{}\t{}", key, ipa::generate(form, &entry.word_type, dialect));
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args = Args::parse_args_default_or_exit();

    match args.command {
        None => Ok(()),
        Some(Command::Syllabify(args)) => syllabify(args),
        Some(Command::Annotate(args)) => annotate(args),
        Some(Command::Ipa(args)) => print_ipa(args),
    }
}
