use std::path::PathBuf;

/// Spatially spread cell selection (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "cellpick", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Select k well-spread cells and write them as CSV
    Select(SelectArgs),

    /// Report the minimum pairwise distance of a set of cells
    Spread(SpreadArgs),
}

/// How candidate cells are grouped before selection.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ModeArg {
    /// k cells over the union of all regions
    #[default]
    Union,
    /// k cells from each region
    PerRegion,
    /// k cells from each label
    PerLabel,
    /// k random cells over the union of all regions
    Random,
}

#[derive(clap::Args, Debug)]
pub struct SelectArgs {
    /// Cell outlines (GeoJSON FeatureCollection)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub shapes: PathBuf,

    /// Active regions (GeoJSON FeatureCollection), defaults to every cell
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub regions: Option<PathBuf>,

    /// Number of cells to select (per group)
    #[arg(short)]
    pub k: usize,

    /// Grouping mode
    #[arg(short, long, value_enum, default_value_t = ModeArg::Union)]
    pub mode: ModeArg,

    /// Labels to select from in per-label mode, e.g. A,B
    #[arg(long, value_delimiter = ',')]
    pub labels: Option<Vec<String>>,

    /// Feature property holding the cell label
    #[arg(long, default_value = "label")]
    pub label_property: String,

    /// Random seed for random mode
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Multiply all coordinates by this factor
    #[arg(long, default_value_t = 1.0)]
    pub scale: f64,

    /// Output CSV file, defaults to "./selection.csv"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Warn when the selection's minimum distance falls below this
    #[arg(long, default_value_t = cellpick::CONTIGUITY_THRESHOLD)]
    pub threshold: f64,
}

#[derive(clap::Args, Debug)]
pub struct SpreadArgs {
    /// Cell outlines (GeoJSON FeatureCollection)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub shapes: PathBuf,

    /// Cells to check (1-based, e.g. 3,17,42), defaults to all
    #[arg(long, value_delimiter = ',')]
    pub ids: Option<Vec<usize>>,

    /// Multiply all coordinates by this factor
    #[arg(long, default_value_t = 1.0)]
    pub scale: f64,

    /// Report pairs closer than this
    #[arg(long, default_value_t = cellpick::CONTIGUITY_THRESHOLD)]
    pub threshold: f64,
}
