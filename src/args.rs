//! These structs provide the CLI interface for the tabi CLI.

use crate::model::{DayOption, ExpenseCategory, PaymentMethod};
use crate::translate::Direction;
use clap::{Parser, Subcommand};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

/// tabi: a trip companion for the Fukuoka 2025 trip.
///
/// Everything the trip needs in one binary: the fixed itinerary, a shared
/// expense ledger in yen, proximity checks against the saved architecture
/// spots, the live Open-Meteo forecast, a Google Translate shortcut, and
/// quick yen-to-TWD conversion.
///
/// The ledger lives in $TABI_HOME (default ~/tabi) and can be shared between
/// phones with `tabi expense export` / `tabi expense import`; relay the
/// exported text through any messaging app.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Record, list, summarize, export and import trip expenses.
    Expense(ExpenseArgs),
    /// List the saved spots or check how far away one is.
    Spot(SpotArgs),
    /// Show the day-by-day schedule.
    Itinerary(ItineraryArgs),
    /// Show flights, hotels and emergency contacts.
    Info,
    /// Show the live Fukuoka forecast (falls back to the planned one).
    Weather,
    /// Build a Google Translate link for some text.
    Translate(TranslateArgs),
    /// List the preset polite-Japanese phrases.
    Phrases,
    /// Convert whole yen to TWD at the configured rate.
    Convert(ConvertArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The directory where tabi data and configuration is held. Defaults to ~/tabi
    #[arg(long, env = "TABI_HOME", default_value_t = default_tabi_home())]
    tabi_home: DisplayPath,
}

impl Common {
    pub fn new(log_level: LevelFilter, tabi_home: PathBuf) -> Self {
        Self {
            log_level,
            tabi_home: tabi_home.into(),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn tabi_home(&self) -> &DisplayPath {
        &self.tabi_home
    }
}

#[derive(Debug, Parser, Clone)]
pub struct ExpenseArgs {
    #[command(subcommand)]
    action: ExpenseSubcommand,
}

impl ExpenseArgs {
    pub fn action(&self) -> &ExpenseSubcommand {
        &self.action
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum ExpenseSubcommand {
    /// Record a new expense at the front of the ledger.
    Add(AddArgs),
    /// Delete one expense by id. Asks for confirmation.
    Remove(RemoveArgs),
    /// List all recorded expenses, most recent first.
    List,
    /// Show the total and the per-category breakdown.
    Summary,
    /// Print the full ledger as JSON text for relaying to another device.
    Export,
    /// Replace this device's ledger with an export pasted on stdin or read
    /// from a file. Asks for confirmation because the replace is total.
    Import(ImportArgs),
}

/// Args for `tabi expense add`.
#[derive(Debug, Parser, Clone)]
pub struct AddArgs {
    /// What the money was spent on, e.g. "一蘭拉麵".
    title: String,

    /// The amount in whole yen.
    amount: String,

    /// Spending category.
    #[arg(long, value_enum, default_value_t = ExpenseCategory::Food)]
    category: ExpenseCategory,

    /// How it was paid.
    #[arg(long, value_enum, default_value_t = PaymentMethod::Cash)]
    payment: PaymentMethod,
}

impl AddArgs {
    pub fn new(
        title: impl Into<String>,
        amount: impl Into<String>,
        category: ExpenseCategory,
        payment: PaymentMethod,
    ) -> Self {
        Self {
            title: title.into(),
            amount: amount.into(),
            category,
            payment,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn category(&self) -> ExpenseCategory {
        self.category
    }

    pub fn payment(&self) -> PaymentMethod {
        self.payment
    }
}

/// Args for `tabi expense remove`.
#[derive(Debug, Parser, Clone)]
pub struct RemoveArgs {
    /// The id of the expense to delete (shown by `tabi expense list`).
    id: String,

    /// Skip the confirmation prompt.
    #[arg(long)]
    yes: bool,
}

impl RemoveArgs {
    pub fn new(id: impl Into<String>, yes: bool) -> Self {
        Self { id: id.into(), yes }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn yes(&self) -> bool {
        self.yes
    }
}

/// Args for `tabi expense import`.
#[derive(Debug, Parser, Clone)]
pub struct ImportArgs {
    /// Read the exported text from this file instead of stdin.
    #[arg(long, short = 'f')]
    file: Option<PathBuf>,

    /// Skip the confirmation prompt.
    #[arg(long)]
    yes: bool,
}

impl ImportArgs {
    pub fn new(file: Option<PathBuf>, yes: bool) -> Self {
        Self { file, yes }
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn yes(&self) -> bool {
        self.yes
    }
}

#[derive(Debug, Parser, Clone)]
pub struct SpotArgs {
    #[command(subcommand)]
    action: SpotSubcommand,
}

impl SpotArgs {
    pub fn action(&self) -> &SpotSubcommand {
        &self.action
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum SpotSubcommand {
    /// List the saved spots and their ids.
    List,
    /// Check the distance from the current position to one spot.
    Check(CheckArgs),
}

/// Args for `tabi spot check`.
#[derive(Debug, Parser, Clone)]
pub struct CheckArgs {
    /// The spot id (shown by `tabi spot list`).
    id: String,

    /// Current latitude in decimal degrees. When --lat/--lon are omitted the
    /// TABI_POSITION environment variable ("lat,lon") is consulted.
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Current longitude in decimal degrees.
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,
}

impl CheckArgs {
    pub fn new(id: impl Into<String>, lat: Option<f64>, lon: Option<f64>) -> Self {
        Self {
            id: id.into(),
            lat,
            lon,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn lat(&self) -> Option<f64> {
        self.lat
    }

    pub fn lon(&self) -> Option<f64> {
        self.lon
    }
}

/// Args for `tabi itinerary`.
#[derive(Debug, Parser, Clone)]
pub struct ItineraryArgs {
    /// Which plan to follow on the final day.
    #[arg(long, value_enum, default_value_t = DayOption::A)]
    option: DayOption,
}

impl ItineraryArgs {
    pub fn new(option: DayOption) -> Self {
        Self { option }
    }

    pub fn option(&self) -> DayOption {
        self.option
    }
}

/// Args for `tabi translate`.
#[derive(Debug, Parser, Clone)]
pub struct TranslateArgs {
    /// The text to translate.
    text: String,

    /// Translation direction: "ja-zh" or "zh-ja".
    #[arg(long, default_value_t = Direction::JaZh)]
    direction: Direction,
}

impl TranslateArgs {
    pub fn new(text: impl Into<String>, direction: Direction) -> Self {
        Self {
            text: text.into(),
            direction,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

/// Args for `tabi convert`.
#[derive(Debug, Parser, Clone)]
pub struct ConvertArgs {
    /// The amount in whole yen.
    jpy: u64,
}

impl ConvertArgs {
    pub fn new(jpy: u64) -> Self {
        Self { jpy }
    }

    pub fn jpy(&self) -> u64 {
        self.jpy
    }
}

fn default_tabi_home() -> DisplayPath {
    DisplayPath(match dirs::home_dir() {
        Some(home) => home.join("tabi"),
        None => {
            error!(
                "There was an error when trying to get your home directory. You can get around \
                this by providing --tabi-home or TABI_HOME instead of relying on the default \
                tabi home directory. If you continue using the program right now, you may have \
                problems!",
            );
            PathBuf::from("tabi")
        }
    })
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Deref for DisplayPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expense_add_parses_with_defaults() {
        let args = Args::parse_from([
            "tabi", "--tabi-home", "/tmp/t", "expense", "add", "拉麵", "1200",
        ]);
        match args.command() {
            Command::Expense(expense) => match expense.action() {
                ExpenseSubcommand::Add(add) => {
                    assert_eq!(add.title(), "拉麵");
                    assert_eq!(add.amount(), "1200");
                    assert_eq!(add.category(), ExpenseCategory::Food);
                    assert_eq!(add.payment(), PaymentMethod::Cash);
                }
                other => panic!("unexpected action {other:?}"),
            },
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn expense_add_accepts_category_and_payment() {
        let args = Args::parse_from([
            "tabi", "expense", "add", "計程車", "1500", "--category", "transport", "--payment",
            "card",
        ]);
        let Command::Expense(expense) = args.command() else {
            panic!("expected an expense command");
        };
        let ExpenseSubcommand::Add(add) = expense.action() else {
            panic!("expected an add action");
        };
        assert_eq!(add.category(), ExpenseCategory::Transport);
        assert_eq!(add.payment(), PaymentMethod::Card);
    }

    #[test]
    fn spot_check_accepts_coordinates() {
        let args = Args::parse_from([
            "tabi", "spot", "check", "spot-acros", "--lat", "33.59", "--lon", "130.40",
        ]);
        let Command::Spot(spot) = args.command() else {
            panic!("expected a spot command");
        };
        let SpotSubcommand::Check(check) = spot.action() else {
            panic!("expected a check action");
        };
        assert_eq!(check.id(), "spot-acros");
        assert_eq!(check.lat(), Some(33.59));
        assert_eq!(check.lon(), Some(130.40));
    }

    #[test]
    fn translate_direction_defaults_to_ja_zh() {
        let args = Args::parse_from(["tabi", "translate", "これはいくらですか"]);
        let Command::Translate(translate) = args.command() else {
            panic!("expected a translate command");
        };
        assert_eq!(translate.direction(), Direction::JaZh);
    }
}
