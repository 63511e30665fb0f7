use anyhow::{ensure, Result};
use cellpick::{closest_pair, contiguous_pairs, Polygon};

use crate::{cli::SpreadArgs, io};

pub fn run(_cli: &crate::cli::Cli, args: &SpreadArgs) -> Result<()> {
    println!("[spread] loading cells from {}", args.shapes.display());
    let polygons = io::read_features(&args.shapes, "label", args.scale)?
        .into_iter()
        .map(|feature| feature.polygon)
        .collect::<Vec<_>>();

    // 0-based positions of the checked cells in the file.
    let ids = match &args.ids {
        Some(ids) => {
            for &id in ids {
                ensure!((1..=polygons.len()).contains(&id),
                    "[spread] Cell id {id} out of range 1..={}", polygons.len());
            }
            ids.iter().map(|id| id - 1).collect()
        }
        None => (0..polygons.len()).collect::<Vec<_>>(),
    };
    let checked = ids.iter().map(|&i| &polygons[i]).collect::<Vec<&Polygon>>();

    let Some((a, b, distance)) = closest_pair(&checked) else {
        println!("[spread] fewer than two cells, minimum distance is infinite");
        return Ok(());
    };
    println!("[spread] minimum pairwise distance {distance:.3} between cells {} and {}",
        ids[a] + 1, ids[b] + 1);

    let pairs = contiguous_pairs(&checked, args.threshold);
    if pairs.is_empty() {
        println!("[spread] no pairs closer than {}", args.threshold);
    } else {
        println!("[spread] {} pairs closer than {} (possibly contiguous):", pairs.len(), args.threshold);
        for (i, j) in pairs {
            println!("[spread]   {} - {}", ids[i] + 1, ids[j] + 1);
        }
    }

    Ok(())
}
