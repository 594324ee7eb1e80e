//! Visualization utilities for grid_search_planner
//!
//! `GridCanvas` collects the annotations a planner emits; `Visualizer`
//! draws a grid, those annotations and the final path with gnuplot.

use gnuplot::{AutoOption, AxesCommon, Caption, Color, Figure, LineWidth, PointSize, PointSymbol};

use crate::common::{GridAnnotator, GridNode, GridPath, GridQuery, PlanningError, PlanningResult};
use crate::utils::grid_map::OccupancyGrid;

/// Color palette for consistent styling
pub mod colors {
    pub const BLACK: &str = "#000000";
    pub const RED: &str = "#FF0000";
    pub const GREEN: &str = "#00FF00";
    pub const BLUE: &str = "#0000FF";
    pub const GRAY: &str = "#808080";

    // Semantic colors
    pub const OBSTACLE: &str = BLACK;
    pub const START: &str = GREEN;
    pub const GOAL: &str = BLUE;
    pub const PATH: &str = RED;
    pub const VISITED: &str = GRAY;
}

/// Style for path rendering
#[derive(Debug, Clone)]
pub struct PathStyle {
    pub color: String,
    pub line_width: f64,
    pub caption: String,
}

impl PathStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            line_width: 2.0,
            caption: caption.to_string(),
        }
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::new(colors::PATH, "Path")
    }
}

/// Annotation sink that remembers what the planner reported
#[derive(Debug, Clone, Default)]
pub struct GridCanvas {
    visited: Vec<GridNode>,
    path: Vec<GridNode>,
}

impl GridCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finalized cells in expansion order
    pub fn visited(&self) -> &[GridNode] {
        &self.visited
    }

    pub fn path(&self) -> &[GridNode] {
        &self.path
    }

    pub fn clear(&mut self) {
        self.visited.clear();
        self.path.clear();
    }
}

impl GridAnnotator for GridCanvas {
    fn mark_visited(&mut self, x: i32, y: i32) {
        self.visited.push(GridNode::new(x, y));
    }

    fn mark_path(&mut self, x: i32, y: i32) {
        self.path.push(GridNode::new(x, y));
    }
}

fn split_xy(cells: &[GridNode]) -> (Vec<f64>, Vec<f64>) {
    cells.iter().map(|c| (c.x as f64, c.y as f64)).unzip()
}

/// gnuplot figure for a planning result
pub struct Visualizer {
    figure: Figure,
    title: String,
    x_range: Option<(f64, f64)>,
    y_range: Option<(f64, f64)>,
}

impl Visualizer {
    pub fn new() -> Self {
        Self {
            figure: Figure::new(),
            title: String::new(),
            x_range: None,
            y_range: None,
        }
    }

    /// Figure showing obstacles, visited cells, path, start and goal
    pub fn from_result(
        grid: &OccupancyGrid,
        canvas: &GridCanvas,
        path: Option<&GridPath>,
        title: &str,
    ) -> Self {
        let mut vis = Self::new();
        vis.set_title(title);
        vis.fit_grid(grid);
        vis.plot_cells(&grid.obstacle_cells(), colors::OBSTACLE, "Obstacles", 1.0);
        vis.plot_cells(canvas.visited(), colors::VISITED, "Visited", 0.5);
        if let Some(path) = path {
            vis.plot_path(path, &PathStyle::default());
        }
        vis.plot_cells(&[grid.start()], colors::START, "Start", 1.5);
        vis.plot_cells(&[grid.goal()], colors::GOAL, "Goal", 1.5);
        vis
    }

    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.title = title.to_string();
        self
    }

    /// Fix both axis ranges to the grid extents
    pub fn fit_grid(&mut self, grid: &dyn GridQuery) -> &mut Self {
        let (width, height) = grid.extents();
        self.x_range = Some((-1.0, width as f64));
        self.y_range = Some((-1.0, height as f64));
        self
    }

    pub fn plot_cells(&mut self, cells: &[GridNode], color: &str, caption: &str, size: f64) -> &mut Self {
        if cells.is_empty() {
            return self;
        }
        let (x, y) = split_xy(cells);
        self.figure.axes2d()
            .points(&x, &y, &[
                Caption(caption),
                Color(color),
                PointSymbol('S'),
                PointSize(size),
            ]);
        self
    }

    pub fn plot_path(&mut self, path: &GridPath, style: &PathStyle) -> &mut Self {
        self.figure.axes2d()
            .lines(&path.x_coords(), &path.y_coords(), &[
                Caption(&style.caption),
                Color(&style.color),
                LineWidth(style.line_width),
            ]);
        self
    }

    /// Finalize and show the plot
    pub fn show(&mut self) -> PlanningResult<()> {
        self.apply_settings();
        self.figure
            .show()
            .map(|_| ())
            .map_err(|e| PlanningError::Visualization(e.to_string()))
    }

    /// Save plot to PNG file
    pub fn save_png(&mut self, path: &str, width: u32, height: u32) -> PlanningResult<()> {
        self.apply_settings();
        self.figure
            .save_to_png(path, width, height)
            .map_err(|e| PlanningError::Visualization(e.to_string()))
    }

    /// Save plot to SVG file
    pub fn save_svg(&mut self, path: &str, width: u32, height: u32) -> PlanningResult<()> {
        self.apply_settings();
        self.figure
            .save_to_svg(path, width, height)
            .map_err(|e| PlanningError::Visualization(e.to_string()))
    }

    fn apply_settings(&mut self) {
        let axes = self.figure.axes2d();

        if !self.title.is_empty() {
            axes.set_title(&self.title, &[]);
        }
        if let Some((min, max)) = self.x_range {
            axes.set_x_range(AutoOption::Fix(min), AutoOption::Fix(max));
        }
        if let Some((min, max)) = self.y_range {
            axes.set_y_range(AutoOption::Fix(min), AutoOption::Fix(max));
        }
        axes.set_aspect_ratio(AutoOption::Fix(1.0));
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}
