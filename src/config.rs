//! Tunables. Everything has a default; with the `serde` feature the struct can
//! also be filled from JSON passed in by the page.

use crate::game::Cell;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Pixel size of one grid cell.
    pub cell_size: u32,
    /// Upper bound for the canvas side in pixels.
    pub max_canvas: f64,
    /// Share of the viewport the canvas may take on each axis.
    pub viewport_fraction: f64,
    /// Tick period when the viewport is wider than `narrow_breakpoint`.
    pub tick_ms: f64,
    /// Tick period on narrow (phone) viewports.
    pub narrow_tick_ms: f64,
    pub narrow_breakpoint: f64,
    /// Render throttle; `None` draws on every animation frame.
    pub target_fps: Option<f64>,
    pub start: (i32, i32),
    pub storage_key: String,
    pub canvas_id: String,
    pub score_id: String,
    pub best_id: String,
    /// Ids of the on-screen up/down/left/right buttons, if the page has them.
    pub button_ids: [String; 4],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_size: 20,
            max_canvas: 400.0,
            viewport_fraction: 0.9,
            tick_ms: 100.0,
            narrow_tick_ms: 150.0,
            narrow_breakpoint: 600.0,
            target_fps: None,
            start: (10, 10),
            storage_key: "canvas-snake.best".to_string(),
            canvas_id: "gameCanvas".to_string(),
            score_id: "score".to_string(),
            best_id: "best".to_string(),
            button_ids: ["up", "down", "left", "right"].map(String::from),
        }
    }
}

impl GameConfig {
    /// Square canvas side for a viewport: the smallest of the scaled viewport
    /// axes and `max_canvas`, snapped down to whole cells, at least one cell.
    pub fn canvas_side(&self, viewport_w: f64, viewport_h: f64) -> u32 {
        let cell = self.cell_size.max(1);
        let raw = (viewport_w * self.viewport_fraction)
            .min(viewport_h * self.viewport_fraction)
            .min(self.max_canvas)
            .max(0.0);
        let snapped = (raw as u32 / cell) * cell;
        snapped.max(cell)
    }

    pub fn tick_interval_ms(&self, viewport_w: f64) -> f64 {
        if viewport_w > self.narrow_breakpoint {
            self.tick_ms
        } else {
            self.narrow_tick_ms
        }
    }

    pub fn start_cell(&self) -> Cell {
        Cell::from(self.start)
    }

    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_snaps_to_cells() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.canvas_side(1920.0, 1080.0), 400);
        // 0.9 * 375 = 337.5 -> 320
        assert_eq!(cfg.canvas_side(375.0, 812.0), 320);
        // height-limited
        assert_eq!(cfg.canvas_side(1000.0, 300.0), 260);
        assert_eq!(cfg.canvas_side(5.0, 5.0), 20);
        assert_eq!(cfg.canvas_side(0.0, 0.0), 20);
    }

    #[test]
    fn narrow_viewports_tick_slower() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.tick_interval_ms(1024.0), 100.0);
        assert_eq!(cfg.tick_interval_ms(600.0), 150.0);
        assert_eq!(cfg.tick_interval_ms(360.0), 150.0);
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = GameConfig::from_json(r#"{ "cell_size": 16, "target_fps": 30.0 }"#).unwrap();
        assert_eq!(cfg.cell_size, 16);
        assert_eq!(cfg.target_fps, Some(30.0));
        assert_eq!(cfg.max_canvas, 400.0);
        assert_eq!(cfg.canvas_id, "gameCanvas");
    }
}
