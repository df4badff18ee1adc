//! Build and rank suits of armor from an armory file.
//!
//! Criteria are layered: built-in defaults, then `ARMORY_LIMIT`, then the armory
//! file's `weights`/`minStats`, then the build config file, then flags.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use armory_content::{ArmoryFile, ArmoryLoader, BuildConfig, ConfigLoader};
use armory_core::{
    Armor, Comparison, Criteria, NamedSuit, Ranking, Stat, Stats, SuitGenerator, Weights,
    compare, find_suit, find_unused, rank, validate_limit,
};
use clap::Parser;
use console::style;
use serde::Serialize;

use crate::config::CliConfig;

/// Build suits of armor and rank them by weighted stats
#[derive(Parser)]
pub struct Build {
    /// Armory file to read
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Maximum number of results to display [default: 5]
    #[arg(short, long, value_name = "NUM", allow_negative_numbers = true)]
    limit: Option<i64>,

    /// Declared suit to compare results against [default: first declared suit]
    #[arg(short, long, value_name = "SUIT")]
    compare: Option<String>,

    /// List the pieces not used in any displayed suit
    #[arg(short, long)]
    unused: bool,

    /// Weight of mobility
    #[arg(long, value_name = "WEIGHT", allow_negative_numbers = true)]
    mob: Option<f64>,
    /// Weight of resilience
    #[arg(long, value_name = "WEIGHT", allow_negative_numbers = true)]
    res: Option<f64>,
    /// Weight of recovery
    #[arg(long, value_name = "WEIGHT", allow_negative_numbers = true)]
    rec: Option<f64>,
    /// Weight of discipline
    #[arg(long, value_name = "WEIGHT", allow_negative_numbers = true)]
    dis: Option<f64>,
    /// Weight of intellect
    #[arg(long, value_name = "WEIGHT", allow_negative_numbers = true)]
    int: Option<f64>,
    /// Weight of strength
    #[arg(long = "str", value_name = "WEIGHT", allow_negative_numbers = true)]
    strength: Option<f64>,

    /// Minimum acceptable mobility
    #[arg(long, value_name = "VALUE", allow_negative_numbers = true)]
    min_mob: Option<i32>,
    /// Minimum acceptable resilience
    #[arg(long, value_name = "VALUE", allow_negative_numbers = true)]
    min_res: Option<i32>,
    /// Minimum acceptable recovery
    #[arg(long, value_name = "VALUE", allow_negative_numbers = true)]
    min_rec: Option<i32>,
    /// Minimum acceptable discipline
    #[arg(long, value_name = "VALUE", allow_negative_numbers = true)]
    min_dis: Option<i32>,
    /// Minimum acceptable intellect
    #[arg(long, value_name = "VALUE", allow_negative_numbers = true)]
    min_int: Option<i32>,
    /// Minimum acceptable strength
    #[arg(long, value_name = "VALUE", allow_negative_numbers = true)]
    min_str: Option<i32>,

    /// Build config file (TOML) [env: ARMORY_CONFIG]
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Plain-text report
    Text,
    /// Full JSON output
    Json,
}

impl Build {
    pub fn execute(self, env: &CliConfig) -> Result<()> {
        let armory = ArmoryLoader::load(&self.file)?;

        let file_config = match env.config_file(self.config.as_deref()) {
            Some(path) => ConfigLoader::load(&path)?,
            None => BuildConfig::default(),
        };
        let settings = file_config.overlay(&self.flags());
        let criteria = criteria_for(&armory, env.limit.as_deref(), &settings)?;
        tracing::info!(
            limit = criteria.limit,
            ordering = %criteria.weights.describe(),
            "building suits"
        );

        let name = self.file.display().to_string();
        let report = BuildReport::new(&name, &armory, &criteria, &settings)?;

        match self.format {
            OutputFormat::Text => write_text(&mut io::stdout().lock(), &report)?,
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&report)
                    .context("Failed to serialize report to JSON")?;
                println!("{}", json);
            }
        }
        Ok(())
    }

    /// Flag values as a config layer.
    fn flags(&self) -> BuildConfig {
        let mut flags = BuildConfig {
            limit: self.limit,
            compare: self.compare.clone(),
            unused: self.unused.then_some(true),
            ..BuildConfig::default()
        };
        let weights = [
            self.mob,
            self.res,
            self.rec,
            self.dis,
            self.int,
            self.strength,
        ];
        let minimums = [
            self.min_mob,
            self.min_res,
            self.min_rec,
            self.min_dis,
            self.min_int,
            self.min_str,
        ];
        for stat in Stat::all() {
            flags.weights.set(stat, weights[stat.as_index()]);
            flags.minimums.set(stat, minimums[stat.as_index()]);
        }
        flags
    }
}

/// Resolves the final criteria; every value is validated before the search starts.
fn criteria_for(
    armory: &ArmoryFile,
    env_limit: Option<&str>,
    settings: &BuildConfig,
) -> Result<Criteria> {
    let mut criteria = armory.criteria();
    if let Some(text) = env_limit {
        let limit = text
            .trim()
            .parse::<i64>()
            .with_context(|| format!("Invalid ARMORY_LIMIT: {text:?}"))?;
        criteria.limit = validate_limit(limit).context("Invalid ARMORY_LIMIT")?;
    }
    settings.apply(&mut criteria)?;
    Ok(criteria)
}

/// Everything the build command prints.
#[derive(Serialize)]
struct BuildReport<'a> {
    file: &'a str,
    suits: &'a [NamedSuit],
    possible: usize,
    acceptable: usize,
    ordering: String,
    weights: Weights,
    minimums: Stats,
    baseline: Option<&'a str>,
    results: Vec<ResultEntry<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unused: Option<Vec<&'a Armor>>,
}

#[derive(Serialize)]
struct ResultEntry<'a> {
    label: String,
    score: f64,
    totals: Stats,
    pieces: Vec<&'a Armor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comparison: Option<Comparison>,
}

impl<'a> BuildReport<'a> {
    fn new(
        file: &'a str,
        armory: &'a ArmoryFile,
        criteria: &Criteria,
        settings: &BuildConfig,
    ) -> Result<Self> {
        // The baseline is checked before any suit is generated.
        let baseline = match settings.compare.as_deref() {
            Some(name) => Some(find_suit(armory.suits(), name)?),
            None => armory.suits().first(),
        };

        let ranking: Ranking<'a> = rank(SuitGenerator::new(armory.catalog()), criteria);
        tracing::debug!(
            considered = ranking.considered,
            acceptable = ranking.acceptable,
            shown = ranking.results.len(),
            "ranked suits"
        );

        let unused = settings
            .show_unused()
            .then(|| find_unused(&ranking.results, armory.catalog()));

        let results = ranking
            .results
            .iter()
            .map(|ranked| ResultEntry {
                label: ranked.label(),
                score: ranked.score,
                totals: ranked.suit.stats(),
                pieces: ranked.suit.pieces().collect(),
                comparison: baseline.map(|suit| compare(&ranked.suit, &suit.suit())),
            })
            .collect();

        Ok(Self {
            file,
            suits: armory.suits(),
            possible: ranking.considered,
            acceptable: ranking.acceptable,
            ordering: criteria.weights.describe(),
            weights: criteria.weights,
            minimums: criteria.minimums,
            baseline: baseline.map(NamedSuit::name),
            results,
            unused,
        })
    }
}

fn write_suit_block(out: &mut impl Write, suit: &NamedSuit) -> io::Result<()> {
    writeln!(out, "{suit}")?;
    for piece in suit.suit().pieces() {
        writeln!(out, "  {piece}")?;
    }
    Ok(())
}

fn write_result(out: &mut impl Write, entry: &ResultEntry<'_>) -> io::Result<()> {
    let header = format!("{:<44} {}", entry.label, entry.totals.numbers());
    match &entry.comparison {
        Some(comparison) => {
            writeln!(out, "{header}  -- {}", comparison.total.numbers())?;
            for (piece, delta) in entry.pieces.iter().zip(&comparison.pieces) {
                writeln!(out, "  {piece}  -- {}", delta.numbers())?;
            }
        }
        None => {
            writeln!(out, "{header}")?;
            for piece in &entry.pieces {
                writeln!(out, "  {piece}")?;
            }
        }
    }
    Ok(())
}

fn write_text(out: &mut impl Write, report: &BuildReport<'_>) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{} {}:", style("Suits from").bold().cyan(), report.file)?;
    writeln!(out)?;
    for suit in report.suits {
        write_suit_block(out, suit)?;
        writeln!(out)?;
    }

    let label = |text: &str| style(text.to_string()).bold().cyan();
    writeln!(out, "{}  {}", label("Number of possible suits:"), report.possible)?;
    writeln!(out, "{} {}", label("Possible suits ordered by:"), report.ordering)?;
    writeln!(
        out,
        "{}  {}",
        label("Minimum acceptable stats:"),
        report.minimums.numbers()
    )?;
    writeln!(
        out,
        "{}    {}",
        label("Comparing against suit:"),
        report.baseline.unwrap_or("n/a")
    )?;
    writeln!(out)?;

    if report.results.is_empty() {
        writeln!(out, "{}", style("No acceptable suits found.").yellow())?;
    }
    for entry in &report.results {
        write_result(out, entry)?;
        writeln!(out)?;
    }

    if let Some(unused) = &report.unused
        && !unused.is_empty()
    {
        writeln!(out)?;
        writeln!(
            out,
            "The following pieces of armor are not used in any acceptable"
        )?;
        writeln!(out, "suit of armor according to the current criteria.")?;
        writeln!(out)?;
        for piece in unused {
            writeln!(out, "{piece}")?;
        }
    }
    Ok(())
}
