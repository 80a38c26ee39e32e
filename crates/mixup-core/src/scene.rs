//! Scene composition: three independent rows plus camera, light and floor.

use glam::Vec3;
use rand::Rng;
use std::time::Duration;

use crate::camera::Camera;
use crate::constants::{
    AMBIENT, CHARACTER_COUNT, FEATURED_X, HEADS_Y, LEGS_Y, LIGHT_DIR, ROW_PICK_HALF_HEIGHT,
    TORSOS_Y,
};
use crate::controller::ControllerConfig;
use crate::error::ConfigError;
use crate::row::{Row, RowKind, SlotTransform};

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub character_count: usize,
    pub controller: ControllerConfig,
    /// Row heights in [`RowKind::ALL`] order.
    pub row_heights: [f32; 3],
    pub row_pick_half_height: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            character_count: CHARACTER_COUNT,
            controller: ControllerConfig::default(),
            row_heights: [HEADS_Y, TORSOS_Y, LEGS_Y],
            row_pick_half_height: ROW_PICK_HALF_HEIGHT,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.character_count == 0 {
            return Err(ConfigError::NoCharacters);
        }
        self.controller.validate()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct DirectionalLight {
    /// Direction the light travels, normalized.
    pub direction: Vec3,
    pub ambient: f32,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            direction: LIGHT_DIR.normalize(),
            ambient: AMBIENT,
        }
    }
}

pub struct Scene {
    rows: [Row; 3],
    pick_half_height: f32,
    pub camera: Camera,
    pub light: DirectionalLight,
}

impl Scene {
    pub fn new(config: &SceneConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let [heads, torsos, legs] = RowKind::ALL;
        let row = |kind: RowKind| {
            Row::new(
                kind,
                config.row_heights[kind.index()],
                config.character_count,
                config.controller,
            )
        };
        let rows = [row(heads)?, row(torsos)?, row(legs)?];
        log::info!(
            "[scene] rows={} slots/row={} spacing={:.1} width={:.1}",
            rows.len(),
            config.character_count,
            config.controller.spacing,
            rows[0].layout().total_width()
        );
        Ok(Self {
            rows,
            pick_half_height: config.row_pick_half_height,
            camera: Camera::default(),
            light: DirectionalLight::default(),
        })
    }

    pub fn rows(&self) -> &[Row; 3] {
        &self.rows
    }

    pub fn row(&self, kind: RowKind) -> &Row {
        &self.rows[kind.index()]
    }

    pub fn row_mut(&mut self, kind: RowKind) -> &mut Row {
        &mut self.rows[kind.index()]
    }

    /// Row whose grab band contains `world_y`, nearest centre first.
    pub fn row_at_height(&self, world_y: f32) -> Option<RowKind> {
        self.rows
            .iter()
            .map(|r| (r.kind(), (r.y() - world_y).abs()))
            .filter(|&(_, dy)| dy <= self.pick_half_height)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(kind, _)| kind)
    }

    /// Forward a gesture update to one row's controller.
    pub fn drag(&mut self, kind: RowKind, delta_px: f32, active: bool) {
        let row = self.row_mut(kind);
        row.controller_mut().on_drag(delta_px, active);
        if !active {
            log::debug!(
                "[row] {} released at {:.2}, snapping to {:.2}",
                row.label(),
                row.offset(),
                row.controller().target()
            );
        }
    }

    /// Advance every row's settle animation.
    pub fn tick(&mut self, dt: Duration) {
        let mut any_rested = false;
        for row in &mut self.rows {
            if row.tick(dt) {
                any_rested = true;
                log::debug!("[row] {} settled at {:.1}", row.label(), row.offset());
            }
        }
        if any_rested {
            let [h, t, l] = self.combination();
            log::info!("[scene] combination heads=#{h} torsos=#{t} legs=#{l}");
        }
    }

    /// This frame's slot transforms for every row, top row first.
    pub fn transforms(&self, out: &mut Vec<SlotTransform>) {
        out.clear();
        for row in &self.rows {
            row.layout_into(out);
        }
    }

    /// Character index shown in the featured column of each row.
    pub fn combination(&self) -> [usize; 3] {
        std::array::from_fn(|i| self.rows[i].slot_nearest(FEATURED_X))
    }

    /// Settle every row onto a random slot.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        for row in &mut self.rows {
            let count = row.layout().len() as i32;
            let current = row.controller().target() / row.layout().spacing();
            let step = current.round() as i32 + rng.gen_range(1..=count);
            row.controller_mut().settle_to(step);
        }
        log::info!("[scene] shuffle");
    }

    /// Settle every row back onto its starting arrangement, taking the
    /// nearest full lap rather than unwinding every turn.
    pub fn reset(&mut self) {
        for row in &mut self.rows {
            let count = row.layout().len() as f32;
            let lap = row.controller().target() / (row.layout().spacing() * count);
            row.controller_mut().settle_to(lap.round() as i32 * count as i32);
        }
        log::info!("[scene] reset");
    }
}
