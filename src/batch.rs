//! # Batch Rendering
//!
//! Renders every ruler in a [`RulerConfig`] in parallel. Each ruler gets its
//! own matrix and buffers; the only shared state is the compile-time CRC table.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::config::{RulerConfig, RulerEntry};
use crate::error::Result;
use crate::png::compress::Compressor;

/// Outcome for one config entry.
#[derive(Debug)]
pub struct BatchResult {
    pub name: String,
    pub result: Result<PathBuf>,
}

fn render_entry(
    entry: &RulerEntry,
    compressor: &dyn Compressor,
    out_dir: &Path,
) -> Result<PathBuf> {
    let ruler = entry.to_ruler()?;
    let png = ruler.to_png(compressor)?;
    let path = out_dir.join(entry.output_name());
    png.write_file(&path)?;
    log::info!(
        "{}: {}x{} -> {}",
        entry.name,
        png.width(),
        png.height(),
        path.display()
    );
    Ok(path)
}

/// Render and write every ruler into `out_dir`, in config order.
///
/// A failing entry does not stop the others.
pub fn render_all(config: &RulerConfig, out_dir: &Path) -> Result<Vec<BatchResult>> {
    let compressor = config.compressor()?;
    let compressor = compressor.as_ref();

    Ok(config
        .rulers
        .par_iter()
        .map(|entry| BatchResult {
            name: entry.name.clone(),
            result: render_entry(entry, compressor, out_dir),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RulerError;
    use std::fs;

    #[test]
    fn test_render_all_isolates_failures() {
        let dir = std::env::temp_dir().join(format!("ruler-batch-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let config = RulerConfig::from_json(
            r##"{
                "rulers": [
                    { "name": "ok", "height": 24, "color": "#444", "pattern": "1000" },
                    { "name": "bad", "height": 24, "color": "#444", "pattern": "1000", "scale": 0 },
                    { "name": "ok2x", "height": 24, "color": "#444", "pattern": "1000", "scale": 2 }
                ]
            }"##,
        )
        .unwrap();

        let results = render_all(&config, &dir).unwrap();
        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["ok", "bad", "ok2x"]);

        assert_eq!(results[0].result.as_ref().unwrap(), &dir.join("ok.png"));
        assert!(matches!(
            results[1].result,
            Err(RulerError::InvalidGeometry(_))
        ));
        assert!(dir.join("ok2x.png").exists());

        fs::remove_dir_all(&dir).unwrap();
    }
}
