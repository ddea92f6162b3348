//! Text-table output of scoring results.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use skua_fss::ScaleScore;
use skua_raster::EventSet;

use crate::error::IoError;

fn fmt_value(v: f64) -> String {
    if v.is_nan() {
        "nan".to_string()
    } else {
        format!("{v:.6}")
    }
}

/// Writes the multi-scale score table as `fss_<run>_<tt>h.txt` under `dir`,
/// one `scale fss` pair per line. Undefined scores are written as `nan`.
///
/// Returns the path of the written file.
///
/// # Errors
///
/// Returns [`IoError::Io`] on filesystem failures.
pub fn write_score_table(
    dir: &Path,
    run_id: &str,
    hours: u32,
    scores: &[ScaleScore],
) -> Result<PathBuf, IoError> {
    let path = dir.join(format!("fss_{run_id}_{hours:02}h.txt"));
    let mut out = BufWriter::new(File::create(&path)?);
    for s in scores {
        writeln!(out, "{} {}", s.scale, fmt_value(s.fss))?;
    }
    out.flush()?;
    info!(path = %path.display(), scales = scores.len(), "wrote score table");
    Ok(path)
}

/// Writes the sparse event set as `event_set_<run>_<tt>h.txt` under `dir`.
///
/// One record per line with six columns: cell index, center longitude,
/// center latitude, and the model, observed and overlap channels. Unset
/// channels are written as `nan`.
///
/// Returns the path of the written file.
///
/// # Errors
///
/// Returns [`IoError::Io`] on filesystem failures.
pub fn write_event_set(
    dir: &Path,
    run_id: &str,
    hours: u32,
    event_set: &EventSet,
) -> Result<PathBuf, IoError> {
    let path = dir.join(format!("event_set_{run_id}_{hours:02}h.txt"));
    let mut out = BufWriter::new(File::create(&path)?);
    for rec in event_set.records() {
        writeln!(
            out,
            "{} {:.6} {:.6} {} {} {}",
            rec.cell_index,
            rec.center_lon,
            rec.center_lat,
            fmt_value(rec.model.as_f64()),
            fmt_value(rec.observed.as_f64()),
            fmt_value(rec.overlap.as_f64()),
        )?;
    }
    out.flush()?;
    info!(path = %path.display(), records = event_set.len(), "wrote event set");
    Ok(path)
}
