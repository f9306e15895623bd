use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use log::debug;
use crate::{SimulationResult, State};

/// Path of snapshot number `index` inside `directory`: `<directory>/snp<index>.csv`.
pub fn snapshot_path(directory: &Path, index: usize) -> PathBuf {
    directory.join(format!("snp{}.csv", index))
}

/// Writes `q[0],p[0]` of a single trajectory, one file per call.
///
/// Indices start at zero and grow with every [TrajectoryWriter::write].
/// Existing files with the same name are overwritten.
pub struct TrajectoryWriter {
    directory: PathBuf,
    next_index: usize,
}

impl TrajectoryWriter {
    pub fn new(directory: &Path) -> Self {
        Self {
            directory: directory.to_path_buf(),
            next_index: 0,
        }
    }

    /// Index that the next written snapshot will get
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    /// Save first position and first momentum of `state`. No trailing newline.
    pub fn write(&mut self, state: &State) -> SimulationResult<PathBuf> {
        let path = snapshot_path(&self.directory, self.next_index);
        let mut file = BufWriter::new(File::create(&path)?);
        write!(file, "{},{}", state.q()[0], state.p()[0])?;
        file.flush()?;
        debug!("Trajectory snapshot {} saved to {}", self.next_index, path.to_string_lossy());
        self.next_index += 1;
        Ok(path)
    }
}

/// Writes one scalar per grid cell, a line per grid row.
pub struct GridWriter {
    directory: PathBuf,
}

impl GridWriter {
    pub fn new(directory: &Path) -> Self {
        Self {
            directory: directory.to_path_buf(),
        }
    }

    /// Save `rows` as snapshot `index`. Values in a row are separated by `", "`.
    pub fn write(&self, index: usize, rows: &[Vec<f64>]) -> SimulationResult<PathBuf> {
        let path = snapshot_path(&self.directory, index);
        let mut file = BufWriter::new(File::create(&path)?);
        for row in rows {
            let line = row.iter()
                .map(|value| value.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(file, "{}", line)?;
        }
        file.flush()?;
        debug!("Grid snapshot {} saved to {}", index, path.to_string_lossy());
        Ok(path)
    }
}

/// Read any snapshot file back as rows of numbers.
pub fn load_snapshot(path: &Path) -> SimulationResult<Vec<Vec<f64>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_path(path)?;
    let mut rows = vec![];
    for row in reader.deserialize::<Vec<f64>>() {
        rows.push(row?);
    }
    Ok(rows)
}
