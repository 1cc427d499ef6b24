// src/cli.rs
// Terminal stand-in for the editor: set text goes to stdout, alerts to stderr.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};

use crate::config::consts::LOG_FILE;
use crate::config::options::{AppOptions, FormGuard, IdentityOptions};
use crate::core::net::HttpSource;
use crate::host::{AlertSink, NoPasteImport};
use crate::identity::{
    apply_identity, apply_regions, legacy_from_wide, wide_from_legacy, Gender, IdentityResolver,
    LoadedSave, PkmRecord, Regions, SaveTrainer, TrainerRecord,
};
use crate::sets::{import_and_report, MovesetImporter, SetTarget};

#[derive(Parser, Debug)]
#[command(name = "pkm_autofill", version, about = "Competitive set import and trainer auto-fill")]
pub struct Cli {
    /// Append logs to this file (default: stderr)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Log to .store/debug.log
    #[arg(long, global = true, conflicts_with = "log_file")]
    pub debug_log: bool,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch competitive sets for a species and print them as set text
    Sets(SetsArgs),
    /// Resolve the trainer identity from trainerdata.json / trainerdata.txt
    Trainer(TrainerArgs),
    /// Convert between TID/SID and the Gen 7 TID7/SID7 display form
    ConvertId {
        #[command(subcommand)]
        dir: ConvertDir,
    },
}

#[derive(Args, Debug)]
pub struct SetsArgs {
    /// Species display name, e.g. "Nidoran♂"
    pub species: String,
    #[arg(long)]
    pub form: Option<String>,
    /// Dex generation slug (sm, ss, ...)
    #[arg(long = "gen")]
    pub dex_gen: Option<String>,
    #[arg(long)]
    pub base_url: Option<String>,
    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
    /// Drop a "Mega" form qualifier instead of appending it
    #[arg(long)]
    pub skip_mega_marker: bool,
    /// Also write the set text to this file
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct TrainerArgs {
    /// Game id of the loaded save
    #[arg(long)]
    pub game: u32,
    /// Origin game of the record (used in "game" mode)
    #[arg(long)]
    pub origin_game: Option<u32>,
    /// Directory holding the sidecar files (default: next to the executable)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Loaded save's trainer, for auto mode: TID
    #[arg(long, requires = "save_ot")]
    pub save_tid: Option<u16>,
    #[arg(long, default_value_t = 0)]
    pub save_sid: u16,
    #[arg(long)]
    pub save_ot: Option<String>,
    /// 0 = male, 1 = female
    #[arg(long, default_value_t = 0)]
    pub save_gender: u8,

    /// Apply the identity to a record with this TID/SID/OT/PID and print the result
    #[arg(long, num_args = 4, value_names = ["TID", "SID", "OT", "PID"])]
    pub apply_to: Option<Vec<String>>,
    /// Record came out of the auto-legality pass
    #[arg(long)]
    pub legalized: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConvertDir {
    /// TID7 SID7 → TID SID
    Wide { tid7: u32, sid7: u32 },
    /// TID SID → TID7 SID7
    Legacy { tid: u16, sid: u16 },
}

struct StderrAlerts;
impl AlertSink for StderrAlerts {
    fn alert(&mut self, msg: &str) {
        eprintln!("{msg}\n");
    }
}

struct CliSave {
    game: u32,
    trainer: Option<SaveTrainer>,
}

impl LoadedSave for CliSave {
    fn game(&self) -> u32 {
        self.game
    }

    fn trainer(&self) -> Result<SaveTrainer, String> {
        self.trainer.clone().ok_or_else(|| s!("no save trainer given (--save-tid/--save-ot)"))
    }
}

/// Parse argv and run. Returns the process exit code.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let log_file = match (&cli.log_file, cli.debug_log) {
        (Some(p), _) => Some(p.clone()),
        (None, true) => Some(PathBuf::from(LOG_FILE)),
        (None, false) => None,
    };
    crate::log::init(log_file.as_deref(), level).wrap_err("could not open log file")?;

    match cli.command {
        Command::Sets(args) => run_sets(args),
        Command::Trainer(args) => run_trainer(args),
        Command::ConvertId { dir } => {
            match dir {
                ConvertDir::Wide { tid7, sid7 } => {
                    let (tid, sid) = legacy_from_wide(tid7, sid7);
                    println!("TID: {tid:05}\nSID: {sid:05}");
                }
                ConvertDir::Legacy { tid, sid } => {
                    let (tid7, sid7) = wide_from_legacy(tid, sid);
                    println!("TID7: {tid7:06}\nSID7: {sid7:04}");
                }
            }
            Ok(0)
        }
    }
}

fn run_sets(args: SetsArgs) -> Result<i32> {
    let mut opts = AppOptions::default().import;
    if let Some(g) = args.dex_gen { opts.dex_gen = g; }
    if let Some(u) = args.base_url { opts.base_url = u; }
    if let Some(t) = args.timeout { opts.timeout = Duration::from_secs(t); }
    if args.skip_mega_marker { opts.form_guard = FormGuard::SkipMarker; }

    let source = HttpSource::new(opts.timeout).wrap_err("could not set up HTTP client")?;
    let importer = MovesetImporter::new(&opts, &source);
    let target = SetTarget::new(&args.species, args.form.as_deref());

    let mut clipboard: Option<String> = None;
    let report = match import_and_report(&importer, &target, &mut clipboard, &mut StderrAlerts, &mut NoPasteImport) {
        Ok(r) => r,
        Err(_) => return Ok(1), // already reported
    };

    println!("{}", report.text);
    if let Some(path) = args.out {
        fs::write(&path, &report.text).wrap_err_with(|| format!("could not write {}", path.display()))?;
        logf!("sets: wrote {}", path.display());
    }
    Ok(0)
}

fn run_trainer(args: TrainerArgs) -> Result<i32> {
    let opts = match args.dir {
        Some(dir) => IdentityOptions::with_dir(dir),
        None => IdentityOptions::default(),
    };
    let save = CliSave {
        game: args.game,
        trainer: args.save_tid.map(|tid| SaveTrainer {
            tid,
            sid: args.save_sid,
            ot: args.save_ot.clone().unwrap_or_default(),
            gender: args.save_gender,
            regions: Regions::default(),
        }),
    };

    let mut alerts = StderrAlerts;
    let resolved = IdentityResolver::new(&opts).resolve(&save, args.origin_game, &mut alerts);
    println!("# source: {:?}, mode: {:?}, game: {}", resolved.source, resolved.mode, resolved.game);
    println!("{}", resolved.identity);
    let (tid7, sid7) = resolved.identity.wide();
    println!("# Gen 7: TID7 {tid7:06} / SID7 {sid7:04}");

    if let Some(fields) = args.apply_to {
        let [tid, sid, ot, pid] = fields.as_slice() else {
            return Ok(2);
        };
        let mut record = PkmRecord {
            tid: tid.parse::<u16>().wrap_err("record TID")?,
            sid: sid.parse::<u16>().wrap_err("record SID")?,
            ot_name: ot.clone(),
            ot_gender: Gender::Male,
            pid: parse_pid(pid)?,
            regions: None,
        };
        let outcome = apply_identity(&mut record, &resolved.identity, args.legalized);
        apply_regions(&mut record, &resolved.identity);
        println!("\n# apply: {outcome:?}");
        println!(
            "TID: {:05}\nSID: {:05}\nOT: {}\nGender: {}\nPID: {:08X}\nShiny: {}",
            record.tid,
            record.sid,
            record.ot_name,
            record.ot_gender.as_str(),
            record.pid,
            record.is_shiny()
        );
    }
    Ok(0)
}

/// Decimal, or hex with a 0x prefix.
fn parse_pid(s: &str) -> Result<u32> {
    let v = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse::<u32>(),
    };
    v.wrap_err_with(|| format!("record PID {s:?}"))
}
