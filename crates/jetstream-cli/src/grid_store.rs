//! Wind grid files on disk, one JSON document per date and pressure level.

use anyhow::Context;
use jetstream_core::WindGrid;
use std::fs;
use std::path::{Path, PathBuf};

/// A grid file found in the data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridFile {
    pub date: String,
    pub level_hpa: u32,
    pub path: PathBuf,
}

pub fn grid_path(data_dir: &Path, date: &str, level_hpa: u32) -> PathBuf {
    data_dir.join(format!("{date}_{level_hpa}.json"))
}

/// Load the grid for `date` at `level_hpa`, filling in metadata the file leaves out.
pub fn load_grid(data_dir: &Path, date: &str, level_hpa: u32) -> anyhow::Result<WindGrid> {
    let path = grid_path(data_dir, date, level_hpa);
    let json = fs::read_to_string(&path)
        .with_context(|| format!("no wind grid for {date} at {level_hpa} hPa ({})", path.display()))?;
    let grid = WindGrid::from_json(&json)
        .with_context(|| format!("malformed wind grid {}", path.display()))?;

    tracing::debug!(path = %path.display(), samples = grid.len(), "loaded wind grid");

    let date = grid.date().map(str::to_owned).unwrap_or_else(|| date.to_owned());
    let level = grid.level_hpa().unwrap_or(level_hpa);
    Ok(grid.with_metadata(Some(date), Some(level)))
}

/// Every `<date>_<level>.json` in `data_dir`, sorted by date then level.
pub fn list_grids(data_dir: &Path) -> anyhow::Result<Vec<GridFile>> {
    let entries = fs::read_dir(data_dir)
        .with_context(|| format!("cannot read data directory {}", data_dir.display()))?;

    let mut grids = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let Some(stem) = path
            .extension()
            .filter(|ext| *ext == "json")
            .and_then(|_| path.file_stem())
            .and_then(|s| s.to_str())
        else {
            continue;
        };
        match parse_stem(stem) {
            Some((date, level_hpa)) => grids.push(GridFile {
                date: date.to_owned(),
                level_hpa,
                path: path.clone(),
            }),
            None => tracing::debug!(path = %path.display(), "ignoring unrecognised file"),
        }
    }

    grids.sort_by(|a, b| a.date.cmp(&b.date).then(a.level_hpa.cmp(&b.level_hpa)));
    Ok(grids)
}

fn parse_stem(stem: &str) -> Option<(&str, u32)> {
    let (date, level) = stem.rsplit_once('_')?;
    chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    Some((date, level.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jetstream_core::GridSample;

    #[test]
    fn test_load_fills_metadata_from_name() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            grid_path(dir.path(), "2023-01-13", 250),
            r#"{"samples": [{"lat": 40, "lon": -10, "u": 3.0, "v": 4.0}]}"#,
        )
        .unwrap();

        let grid = load_grid(dir.path(), "2023-01-13", 250).unwrap();
        assert_eq!(grid.date(), Some("2023-01-13"));
        assert_eq!(grid.level_hpa(), Some(250));
        assert_eq!(grid.samples()[0].lon, 350);
    }

    #[test]
    fn test_missing_grid_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_grid(dir.path(), "2023-01-13", 200).unwrap_err();
        assert!(err.to_string().contains("2023-01-13"));
    }

    #[test]
    fn test_list_grids_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let grid = WindGrid::new(vec![GridSample { lat: 0, lon: 0, u: 1.0, v: 0.0 }]);
        let json = grid.to_json().unwrap();
        for name in ["2023-02-01_250.json", "2023-01-13_200.json", "2023-01-13_150.json"] {
            fs::write(dir.path().join(name), &json).unwrap();
        }
        fs::write(dir.path().join("notes.txt"), "x").unwrap();
        fs::write(dir.path().join("latest_250.json"), &json).unwrap();

        let found: Vec<_> = list_grids(dir.path())
            .unwrap()
            .into_iter()
            .map(|g| (g.date, g.level_hpa))
            .collect();
        assert_eq!(
            found,
            vec![
                ("2023-01-13".to_string(), 150),
                ("2023-01-13".to_string(), 200),
                ("2023-02-01".to_string(), 250),
            ]
        );
    }
}
