use anyhow::{ensure, Context, Result};
use cellpick::{pick, SelectionMode, Shape};
use tracing::warn;

use crate::{cli::{ModeArg, SelectArgs}, io};

pub fn run(_cli: &crate::cli::Cli, args: &SelectArgs) -> Result<()> {
    let out_path = &args.output.clone().unwrap_or("./selection.csv".into());
    ensure!(args.labels.is_none() || args.mode == ModeArg::PerLabel,
        "[select] --labels only applies to --mode per-label");

    println!("[select] loading cells from {}", args.shapes.display());
    let shapes = io::read_features(&args.shapes, &args.label_property, args.scale)?
        .into_iter()
        .map(|feature| Shape { polygon: feature.polygon, label: feature.label })
        .collect::<Vec<_>>();

    let regions = match &args.regions {
        Some(path) => {
            println!("[select] loading active regions from {}", path.display());
            io::read_features(path, &args.label_property, args.scale)?
                .into_iter()
                .map(|feature| feature.polygon)
                .collect()
        }
        None => Vec::new(),
    };

    let mode = match args.mode {
        ModeArg::Union => SelectionMode::UnionOfRegions,
        ModeArg::PerRegion => SelectionMode::PerRegion,
        ModeArg::PerLabel => SelectionMode::PerLabel { labels: args.labels.clone() },
        ModeArg::Random => SelectionMode::Random { seed: args.seed },
    };

    println!("[select] selecting k={} from {} cells in {} regions ({:?})",
        args.k, shapes.len(), regions.len(), args.mode);
    let pick = pick(&shapes, &regions, &mode, args.k).context("[select] Selection failed")?;

    for group in pick.groups() {
        let chosen = group.selection().len();
        if group.is_undersupplied() {
            println!("[select] {}: {chosen} of {} requested (only {} available)",
                group.name(), args.k, group.members().len());
        } else {
            println!("[select] {}: {chosen} selected", group.name());
        }
    }

    println!("[select] minimum pairwise distance {:.3}", pick.min_distance());
    if pick.is_possibly_contiguous(args.threshold) {
        warn!(min_distance = pick.min_distance(), threshold = args.threshold,
            "selection may contain contiguous or overlapping cells");
    }

    println!("[select] writing {} cells to {}", pick.selected().len(), out_path.display());
    io::write_selection_csv(&pick, out_path)?;

    Ok(())
}
