//! Quadtree configuration

use crate::{QuadtreeError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a quadtree, fixed for the lifetime of the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Number of points a leaf holds before it is subdivided (default 4)
    pub max_points_per_node: usize,
    /// Depth at which leaves stop subdividing and keep every point they receive (default 20)
    pub max_depth: u32,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl Default for Config {
    fn default() -> Self {
        Self {
            max_points_per_node: 4,
            max_depth: 20,
        }
    }
}

impl Config {
    pub fn with_capacity(max_points_per_node: usize) -> Self {
        Self {
            max_points_per_node,
            ..Self::default()
        }
    }

    /// Check that the configuration can build a tree
    pub fn validate(&self) -> Result<()> {
        if self.max_points_per_node == 0 {
            return Err(QuadtreeError::InvalidConfig(
                "max_points_per_node must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.max_points_per_node, 4);
        assert_eq!(config.max_depth, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = Config::with_capacity(0);
        assert!(matches!(
            config.validate(),
            Err(QuadtreeError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_max_depth_zero_is_valid() {
        // A single leaf that never subdivides is a legal, if degenerate, tree
        let config = Config {
            max_points_per_node: 1,
            max_depth: 0,
        };
        assert!(config.validate().is_ok());
    }
}
