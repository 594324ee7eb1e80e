//! Configuration for planners and maps, loadable from TOML

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::{GridNode, GridPlanner, PlanningError, PlanningResult};
use crate::path_planning::{AStarConfig, AStarPlanner, DijkstraPlanner, Heuristic};
use crate::utils::OccupancyGrid;

/// Search algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Dijkstra,
    #[default]
    AStar,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Dijkstra => write!(f, "dijkstra"),
            Algorithm::AStar => write!(f, "astar"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = PlanningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" | "a_star" => Ok(Algorithm::AStar),
            other => Err(PlanningError::Config(format!(
                "unknown algorithm '{}', expected 'dijkstra' or 'astar'",
                other
            ))),
        }
    }
}

fn default_heuristic_weight() -> f64 {
    AStarConfig::default().heuristic_weight
}

/// Planner section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerSettings {
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Only used by A*
    #[serde(default = "default_heuristic_weight")]
    pub heuristic_weight: f64,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            heuristic_weight: default_heuristic_weight(),
        }
    }
}

impl PlannerSettings {
    pub fn build(&self) -> PlanningResult<Box<dyn GridPlanner>> {
        match self.algorithm {
            Algorithm::Dijkstra => Ok(Box::new(DijkstraPlanner::new())),
            Algorithm::AStar => {
                let config = AStarConfig { heuristic_weight: self.heuristic_weight };
                Ok(Box::new(AStarPlanner::new(config)?))
            }
        }
    }
}

/// Inclusive axis-aligned run of obstacle cells
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallConfig {
    pub from: GridNode,
    pub to: GridNode,
}

/// Map section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub width: i32,
    pub height: i32,
    pub start: GridNode,
    pub goal: GridNode,
    #[serde(default)]
    pub obstacles: Vec<GridNode>,
    #[serde(default)]
    pub walls: Vec<WallConfig>,
    #[serde(default)]
    pub heuristic: Heuristic,
}

impl MapConfig {
    pub fn build_grid(&self) -> PlanningResult<OccupancyGrid> {
        let mut grid =
            OccupancyGrid::new(self.width, self.height, self.start, self.goal, &self.obstacles)?;
        for wall in &self.walls {
            grid.add_wall(wall.from, wall.to)?;
        }
        Ok(grid.with_heuristic(self.heuristic))
    }
}

/// Top-level demo configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub planner: PlannerSettings,

    /// Falls back to [`OccupancyGrid::sample_map`] when absent
    #[serde(default)]
    pub map: Option<MapConfig>,
}

impl DemoConfig {
    pub fn from_toml_str(contents: &str) -> PlanningResult<Self> {
        basic_toml::from_str(contents).map_err(|e| PlanningError::Config(e.to_string()))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> PlanningResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn build_grid(&self) -> PlanningResult<OccupancyGrid> {
        match &self.map {
            Some(map) => map.build_grid(),
            None => Ok(OccupancyGrid::sample_map()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::GridQuery;

    const CONFIG: &str = r#"
[planner]
algorithm = "dijkstra"

[map]
width = 5
height = 5
start = { x = 0, y = 0 }
goal = { x = 4, y = 4 }
heuristic = "euclidean"
obstacles = [{ x = 4, y = 0 }]

[[map.walls]]
from = { x = 2, y = 1 }
to = { x = 2, y = 4 }
"#;

    #[test]
    fn test_parse_full_config() {
        let config = DemoConfig::from_toml_str(CONFIG).unwrap();
        assert_eq!(config.planner.algorithm, Algorithm::Dijkstra);
        assert_eq!(config.planner.heuristic_weight, 1.0);

        let grid = config.build_grid().unwrap();
        assert_eq!(grid.extents(), (5, 5));
        assert_eq!(grid.heuristic_kind(), Heuristic::Euclidean);
        assert_eq!(grid.obstacle_cells().len(), 5);

        let planner = config.planner.build().unwrap();
        assert_eq!(planner.name(), "Dijkstra");
        let path = planner.plan(&grid).unwrap().unwrap();
        assert!(path.contains(&GridNode::new(2, 0)));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = DemoConfig::from_toml_str("").unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.planner.algorithm, Algorithm::AStar);
        assert_eq!(config.build_grid().unwrap().extents(), (50, 50));
    }

    #[test]
    fn test_bad_config_is_reported() {
        let err = DemoConfig::from_toml_str("[planner]\nalgorithm = \"bfs\"\n").unwrap_err();
        assert!(matches!(err, PlanningError::Config(_)));

        let settings = PlannerSettings { algorithm: Algorithm::AStar, heuristic_weight: -2.0 };
        assert!(matches!(settings.build(), Err(PlanningError::InvalidParameter(_))));
    }

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!("Dijkstra".parse::<Algorithm>().unwrap(), Algorithm::Dijkstra);
        assert_eq!("a*".parse::<Algorithm>().unwrap(), Algorithm::AStar);
        assert!("bfs".parse::<Algorithm>().is_err());
        assert_eq!(Algorithm::AStar.to_string(), "astar");
    }
}
