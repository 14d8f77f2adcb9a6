//! Runtime configuration of a demo run.

use crate::{demos::DemoKind, error::SandboxError};

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const CANVAS_ID: &str = "webgpuCanvas";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub demo: DemoKind,
    /// Overrides the demo's own MSAA sample count when set.
    pub sample_count: Option<u32>,
    pub width: u32,
    pub height: u32,
    /// Image under `assets/` for the textured cube. A generated arrow is
    /// used when unset.
    pub texture: Option<String>,
    /// Id of the canvas element the web build renders into.
    pub canvas_id: String,
}

impl Config {
    pub fn new(demo: DemoKind) -> Self {
        Self {
            demo,
            ..Default::default()
        }
    }

    pub fn sample_count(&self) -> u32 {
        self.sample_count
            .unwrap_or_else(|| self.demo.default_sample_count())
    }

    pub fn validate(&self) -> Result<(), SandboxError> {
        let samples = self.sample_count();
        if samples != 1 && samples != 4 {
            return Err(SandboxError::InvalidSampleCount(samples));
        }
        if self.width == 0 || self.height == 0 {
            return Err(SandboxError::InvalidSize(self.width, self.height));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            demo: DemoKind::default(),
            sample_count: None,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            texture: None,
            canvas_id: CANVAS_ID.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_count_follows_the_demo_unless_overridden() {
        assert_eq!(Config::new(DemoKind::TriangleMsaa).sample_count(), 4);
        assert_eq!(Config::new(DemoKind::Cube).sample_count(), 1);

        let config = Config {
            sample_count: Some(4),
            ..Config::new(DemoKind::Cube)
        };
        assert_eq!(config.sample_count(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_unsupported_sample_counts() {
        let config = Config {
            sample_count: Some(8),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SandboxError::InvalidSampleCount(8))
        ));
    }

    #[test]
    fn rejects_empty_windows() {
        let config = Config {
            width: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SandboxError::InvalidSize(0, 600))
        ));
    }
}
