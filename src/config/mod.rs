use nalgebra::Vector3;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::case::FormatKind;
use crate::error::{GenError, Result};
use crate::geometry::ThirdVertex;
use crate::sampler::{DEFAULT_ROTATIONS, TriangleSampler};

/// Placeholder substituted with the 1-based case index in file name templates
pub const INDEX_PLACEHOLDER: &str = "{index}";

fn default_test_template() -> String {
    "naive{index}.dat".to_string()
}
fn default_answer_template() -> String {
    "naive{index}.dat.ans".to_string()
}
fn default_rotations() -> usize {
    DEFAULT_ROTATIONS
}

/// Top-level generation config, read from JSON or TOML
#[derive(Debug, Deserialize, Clone)]
pub struct GenConfig {
    pub output_path: PathBuf,
    pub groups: Vec<GroupSpec>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub format: FormatKind,
    #[serde(default = "default_test_template")]
    pub test_template: String,
    #[serde(default = "default_answer_template")]
    pub answer_template: String,
}

/// Triangle count bounds, `min` inclusive and `max` exclusive
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct CountRange {
    pub min: usize,
    pub max: usize,
}

/// Per-axis bound on the random translation
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct HalfExtent {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl HalfExtent {
    pub fn to_vector(self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }
}

/// One batch of triangles written to a single test case
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GroupSpec {
    pub number: CountRange,
    pub mean: f64,
    pub std: f64,
    pub half: HalfExtent,
    #[serde(default = "default_rotations")]
    pub rotations: usize,
    #[serde(default)]
    pub third_vertex: ThirdVertex,
}

impl GroupSpec {
    pub fn new(number: CountRange, mean: f64, std: f64, half: HalfExtent) -> Self {
        Self {
            number,
            mean,
            std,
            half,
            rotations: DEFAULT_ROTATIONS,
            third_vertex: ThirdVertex::default(),
        }
    }

    /// Build the sampler for this group. `group` is the 1-based position
    /// used when reporting bad parameters.
    pub fn sampler(&self, group: usize) -> Result<TriangleSampler> {
        let sampler = TriangleSampler::new(self.mean, self.std, self.half.to_vector()).map_err(
            |e| match e {
                GenError::InvalidParameters(reason) => GenError::InvalidGroup { group, reason },
                other => other,
            },
        )?;
        Ok(sampler
            .with_rotations(self.rotations)
            .with_third_vertex(self.third_vertex))
    }

    fn validate(&self, group: usize) -> Result<()> {
        if self.number.min > self.number.max {
            return Err(GenError::InvalidGroup {
                group,
                reason: format!(
                    "number.min ({}) is greater than number.max ({})",
                    self.number.min, self.number.max
                ),
            });
        }
        self.sampler(group).map(|_| ())
    }
}

impl GenConfig {
    /// Read and validate a config file. `.toml` files are parsed as TOML,
    /// everything else as JSON.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(GenError::ConfigNotFound(path.to_path_buf()));
        }
        let contents = std::fs::read_to_string(path).map_err(|source| GenError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        let config = if is_toml {
            Self::from_toml_str(&contents)
        } else {
            Self::from_json_str(&contents)
        }
        .map_err(|message| GenError::ConfigParse {
            path: path.to_path_buf(),
            message,
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(contents: &str) -> std::result::Result<Self, String> {
        serde_json::from_str(contents).map_err(|e| e.to_string())
    }

    pub fn from_toml_str(contents: &str) -> std::result::Result<Self, String> {
        toml::from_str(contents).map_err(|e| e.to_string())
    }

    /// Check every group and both file name templates
    pub fn validate(&self) -> Result<()> {
        for template in [&self.test_template, &self.answer_template] {
            if !template.contains(INDEX_PLACEHOLDER) {
                return Err(GenError::InvalidTemplate(template.clone()));
            }
        }
        for (i, group) in self.groups.iter().enumerate() {
            group.validate(i + 1)?;
        }
        Ok(())
    }
}
