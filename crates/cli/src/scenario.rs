//! Scenario files: the two polygons (and optional viewport) as JSON.
//!
//! Format: `{"subject": [[x, y], ...], "clip": [[x, y], ...], "viewport": [w, h]}`
//! with `viewport` optional.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use stepclip::{Polygon, Vec2};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub subject: Vec<[f64; 2]>,
    pub clip: Vec<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<[f64; 2]>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let scenario: Scenario = serde_json::from_slice(&bytes)
            .with_context(|| format!("parsing scenario {}", path.display()))?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        ensure_parent(path)?;
        fs::write(path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))
    }

    /// Reject non-finite coordinates and non-positive viewports.
    pub fn validate(&self) -> Result<()> {
        for (name, pts) in [("subject", &self.subject), ("clip", &self.clip)] {
            if let Some(i) = pts.iter().position(|p| !p.iter().all(|c| c.is_finite())) {
                bail!("{name} point {i} has a non-finite coordinate");
            }
        }
        if let Some([w, h]) = self.viewport {
            if !(w > 0.0 && h > 0.0) {
                bail!("viewport must be positive, got {w} x {h}");
            }
        }
        Ok(())
    }

    pub fn subject_polygon(&self) -> Polygon {
        to_polygon(&self.subject)
    }

    pub fn clip_polygon(&self) -> Polygon {
        to_polygon(&self.clip)
    }

    pub fn from_polygons(subject: &Polygon, clip: &Polygon, viewport: Option<[f64; 2]>) -> Self {
        Self {
            subject: to_pairs(subject.points()),
            clip: to_pairs(clip.points()),
            viewport,
        }
    }
}

pub fn to_polygon(pts: &[[f64; 2]]) -> Polygon {
    Polygon::from_points(pts.iter().map(|&[x, y]| Vec2::new(x, y)).collect())
}

pub fn to_pairs(pts: &[Vec2<f64>]) -> Vec<[f64; 2]> {
    pts.iter().map(|p| [p.x, p.y]).collect()
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}
