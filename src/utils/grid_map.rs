// Occupancy grid map used as the planning problem

use itertools::iproduct;
use nalgebra::DMatrix;

use crate::common::{CellClass, GridNode, GridQuery, PlanningError, PlanningResult};
use crate::path_planning::heuristic::Heuristic;

/// Dense obstacle grid with a start and a goal cell
///
/// Cells are addressed `(x, y)` with `0 <= x < width` and `0 <= y < height`.
/// Start and goal are not checked here; planners reject bad placements.
#[derive(Debug, Clone, PartialEq)]
pub struct OccupancyGrid {
    obstacles: DMatrix<bool>,
    start: GridNode,
    goal: GridNode,
    heuristic: Heuristic,
}

impl OccupancyGrid {
    pub fn new(
        width: i32,
        height: i32,
        start: GridNode,
        goal: GridNode,
        obstacles: &[GridNode],
    ) -> PlanningResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(PlanningError::InvalidGrid(format!(
                "grid extents must be positive, got {}x{}",
                width, height
            )));
        }
        let mut grid = Self {
            obstacles: DMatrix::from_element(width as usize, height as usize, false),
            start,
            goal,
            heuristic: Heuristic::default(),
        };
        for cell in obstacles {
            grid.set_obstacle(*cell, true)?;
        }
        Ok(grid)
    }

    /// Parse a map drawn as text, one string per row (row index is `y`)
    ///
    /// `.` free, `#` obstacle, `S` start, `G` goal.
    pub fn from_rows(rows: &[&str]) -> PlanningResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        if height == 0 || width == 0 {
            return Err(PlanningError::InvalidGrid("map has no cells".to_string()));
        }

        let mut obstacles = Vec::new();
        let mut start = None;
        let mut goal = None;
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(PlanningError::InvalidGrid(format!(
                    "row {} has {} cells, expected {}",
                    y,
                    row.chars().count(),
                    width
                )));
            }
            for (x, ch) in row.chars().enumerate() {
                let cell = GridNode::new(x as i32, y as i32);
                match ch {
                    '.' => {}
                    '#' => obstacles.push(cell),
                    'S' if start.is_none() => start = Some(cell),
                    'G' if goal.is_none() => goal = Some(cell),
                    'S' | 'G' => {
                        return Err(PlanningError::InvalidGrid(format!(
                            "more than one '{}' in map",
                            ch
                        )))
                    }
                    other => {
                        return Err(PlanningError::InvalidGrid(format!(
                            "unknown map character '{}' at ({}, {})",
                            other, x, y
                        )))
                    }
                }
            }
        }

        let start = start.ok_or_else(|| PlanningError::InvalidGrid("map has no 'S'".to_string()))?;
        let goal = goal.ok_or_else(|| PlanningError::InvalidGrid("map has no 'G'".to_string()))?;
        Self::new(width as i32, height as i32, start, goal, &obstacles)
    }

    /// Build from a 0/1 occupancy matrix (row = y, column = x), each cell
    /// blown up to `scale x scale` grid cells
    pub fn from_matrix(
        matrix: &DMatrix<i32>,
        scale: usize,
        start: GridNode,
        goal: GridNode,
    ) -> PlanningResult<Self> {
        if scale < 1 {
            return Err(PlanningError::InvalidGrid("scale must be >= 1".to_string()));
        }
        let scaled = matrix.kronecker(&DMatrix::<i32>::repeat(scale, scale, 1));
        let obstacles: Vec<GridNode> = iproduct!(0..scaled.ncols(), 0..scaled.nrows())
            .filter(|&(x, y)| scaled[(y, x)] != 0)
            .map(|(x, y)| GridNode::new(x as i32, y as i32))
            .collect();
        Self::new(scaled.ncols() as i32, scaled.nrows() as i32, start, goal, &obstacles)
    }

    /// 50x50 bordered map split by two half-width walls
    pub fn sample_map() -> Self {
        let size = 50;
        let mut obstacles = Vec::new();
        for i in 0..size {
            obstacles.push(GridNode::new(0, i));
            obstacles.push(GridNode::new(i, 0));
            obstacles.push(GridNode::new(i, size - 1));
            obstacles.push(GridNode::new(size - 1, i));
        }
        for i in 0..26 {
            obstacles.push(GridNode::new(i, 15));
        }
        for i in 25..size {
            obstacles.push(GridNode::new(i, 35));
        }
        let mut grid = Self {
            obstacles: DMatrix::from_element(size as usize, size as usize, false),
            start: GridNode::new(5, 5),
            goal: GridNode::new(45, 45),
            heuristic: Heuristic::default(),
        };
        for cell in obstacles {
            grid.obstacles[(cell.x as usize, cell.y as usize)] = true;
        }
        grid
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn heuristic_kind(&self) -> Heuristic {
        self.heuristic
    }

    pub fn width(&self) -> i32 {
        self.obstacles.nrows() as i32
    }

    pub fn height(&self) -> i32 {
        self.obstacles.ncols() as i32
    }

    pub fn set_start(&mut self, start: GridNode) {
        self.start = start;
    }

    pub fn set_goal(&mut self, goal: GridNode) {
        self.goal = goal;
    }

    pub fn set_obstacle(&mut self, cell: GridNode, occupied: bool) -> PlanningResult<()> {
        if !self.in_bounds(cell.x, cell.y) {
            return Err(PlanningError::InvalidGrid(format!(
                "obstacle ({}, {}) outside {}x{} grid",
                cell.x,
                cell.y,
                self.width(),
                self.height()
            )));
        }
        self.obstacles[(cell.x as usize, cell.y as usize)] = occupied;
        Ok(())
    }

    /// Mark every cell of the inclusive axis-aligned segment `from..=to`
    pub fn add_wall(&mut self, from: GridNode, to: GridNode) -> PlanningResult<()> {
        if from.x != to.x && from.y != to.y {
            return Err(PlanningError::InvalidGrid(format!(
                "wall ({}, {})-({}, {}) is not axis-aligned",
                from.x, from.y, to.x, to.y
            )));
        }
        let (x0, x1) = (from.x.min(to.x), from.x.max(to.x));
        let (y0, y1) = (from.y.min(to.y), from.y.max(to.y));
        for (x, y) in iproduct!(x0..=x1, y0..=y1) {
            self.set_obstacle(GridNode::new(x, y), true)?;
        }
        Ok(())
    }

    pub fn is_obstacle(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.obstacles[(x as usize, y as usize)]
    }

    /// All obstacle cells, column by column
    pub fn obstacle_cells(&self) -> Vec<GridNode> {
        iproduct!(0..self.width(), 0..self.height())
            .filter(|&(x, y)| self.obstacles[(x as usize, y as usize)])
            .map(|(x, y)| GridNode::new(x, y))
            .collect()
    }
}

impl GridQuery for OccupancyGrid {
    fn classify(&self, x: i32, y: i32) -> CellClass {
        if self.is_obstacle(x, y) {
            CellClass::Obstacle
        } else if GridNode::new(x, y) == self.goal {
            CellClass::Goal
        } else {
            CellClass::Free
        }
    }

    fn start(&self) -> GridNode {
        self.start
    }

    fn goal(&self) -> GridNode {
        self.goal
    }

    fn extents(&self) -> (i32, i32) {
        (self.width(), self.height())
    }

    fn heuristic(&self, x: i32, y: i32) -> f64 {
        self.heuristic.estimate(GridNode::new(x, y), self.goal)
    }
}
