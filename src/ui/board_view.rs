//! Board canvas: grid, stones and pointer hit testing for any board size

use egui::{Align2, Color32, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{Board, Pos, Stone};

use super::theme::*;

/// Gap left between the canvas and the panel edge
const PANEL_PADDING: f32 = 20.0;
/// Distance of the coordinate labels from the canvas edge
const LABEL_INSET: f32 = 12.0;

/// Where the intersections of an `n x n` grid land on screen
#[derive(Debug, Clone, Copy, PartialEq)]
struct Geometry {
    /// Screen position of intersection (0, 0)
    origin: Pos2,
    /// Distance between neighbouring intersections
    pitch: f32,
    size: usize,
}

impl Geometry {
    /// Fit a `size` grid into `canvas`, leaving `BOARD_MARGIN` for labels
    fn fit(canvas: Rect, size: usize) -> Self {
        let span = canvas.width().min(canvas.height()) - 2.0 * BOARD_MARGIN;
        Self {
            origin: canvas.min + Vec2::splat(BOARD_MARGIN),
            pitch: span / (size.max(2) - 1) as f32,
            size,
        }
    }

    #[inline]
    fn far_edge(&self) -> f32 {
        (self.size - 1) as f32 * self.pitch
    }

    fn center(&self, pos: Pos) -> Pos2 {
        self.origin + Vec2::new(pos.col as f32, pos.row as f32) * self.pitch
    }

    fn stone_radius(&self) -> f32 {
        self.pitch * STONE_RADIUS_RATIO
    }

    /// Nearest intersection to `point`, if the point falls within half a
    /// pitch of the grid.
    fn hit(&self, point: Pos2) -> Option<Pos> {
        let snap = |v: f32| {
            let i = (v / self.pitch).round();
            (i >= 0.0 && (i as usize) < self.size).then_some(i as u8)
        };
        let rel = point - self.origin;
        Some(Pos::new(snap(rel.y)?, snap(rel.x)?))
    }
}

/// Fill, shadow and accent for one stone color
struct StoneLook {
    fill: Color32,
    shadow_alpha: u8,
    accent: Accent,
}

enum Accent {
    /// Small glint up and to the left
    Glint(Color32),
    /// Inner ring
    Ring(Color32),
}

fn look(stone: Stone) -> Option<StoneLook> {
    match stone {
        Stone::Black => Some(StoneLook {
            fill: BLACK_STONE,
            shadow_alpha: 60,
            accent: Accent::Glint(BLACK_STONE_HIGHLIGHT),
        }),
        Stone::White => Some(StoneLook {
            fill: WHITE_STONE,
            shadow_alpha: 40,
            accent: Accent::Ring(WHITE_STONE_SHADOW),
        }),
        Stone::Empty => None,
    }
}

/// Canvas state kept between frames for hit testing
pub struct BoardView {
    canvas: Rect,
    geometry: Geometry,
}

impl Default for BoardView {
    fn default() -> Self {
        let canvas = Rect::from_min_size(Pos2::ZERO, Vec2::splat(500.0));
        Self {
            canvas,
            geometry: Geometry::fit(canvas, crate::BOARD_SIZE),
        }
    }
}

impl BoardView {
    /// Paint `board` and return the cell clicked this frame, if it is
    /// empty and input is accepted.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        winning_line: Option<[Pos; 5]>,
        accept_input: bool,
    ) -> Option<Pos> {
        let room = ui.available_size();
        let side = room.x.min(room.y) - PANEL_PADDING;
        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::click());
        self.canvas = response.rect;
        self.geometry = Geometry::fit(self.canvas, board.size());

        painter.rect_filled(self.canvas, CornerRadius::same(4), BOARD_BG);
        self.paint_grid(&painter);
        self.paint_labels(&painter);
        for pos in board.positions() {
            self.paint_stone(&painter, pos, board.cell_at(pos));
        }
        if let Some(pos) = board.last_move() {
            painter.circle_filled(self.geometry.center(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
        }
        if let Some(line) = winning_line {
            self.paint_winning_line(&painter, &line);
        }

        if !accept_input {
            return None;
        }
        let target = self.geometry.hit(response.hover_pos()?)?;
        let playable = board.is_empty(target);
        let ghost = if playable {
            hover_stone(board.current_player())
        } else {
            hover_invalid()
        };
        painter.circle_filled(self.geometry.center(target), self.geometry.stone_radius(), ghost);

        (response.clicked() && playable).then_some(target)
    }

    fn paint_grid(&self, painter: &Painter) {
        let g = &self.geometry;
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let far = g.far_edge();
        for i in 0..g.size {
            let at = i as f32 * g.pitch;
            painter.line_segment([g.origin + Vec2::new(at, 0.0), g.origin + Vec2::new(at, far)], stroke);
            painter.line_segment([g.origin + Vec2::new(0.0, at), g.origin + Vec2::new(far, at)], stroke);
        }
        for pos in star_points(g.size) {
            painter.circle_filled(g.center(pos), STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Column letters top and bottom, row numbers on both sides with 1 at
    /// the bottom row
    fn paint_labels(&self, painter: &Painter) {
        let g = &self.geometry;
        let font = FontId::proportional(12.0);
        let (top, bottom) = (self.canvas.top() + LABEL_INSET, self.canvas.bottom() - LABEL_INSET);
        let (left, right) = (self.canvas.left() + LABEL_INSET, self.canvas.right() - LABEL_INSET);

        for i in 0..g.size {
            let cell = g.center(Pos::new(i as u8, i as u8));
            let letter = char::from(b'A' + i as u8).to_string();
            let number = (g.size - i).to_string();
            for (x, y, text) in [
                (cell.x, top, &letter),
                (cell.x, bottom, &letter),
                (left, cell.y, &number),
                (right, cell.y, &number),
            ] {
                painter.text(Pos2::new(x, y), Align2::CENTER_CENTER, text, font.clone(), GRID_LINE);
            }
        }
    }

    fn paint_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let Some(look) = look(stone) else {
            return;
        };
        let center = self.geometry.center(pos);
        let r = self.geometry.stone_radius();

        let shadow = Color32::from_rgba_unmultiplied(0, 0, 0, look.shadow_alpha);
        painter.circle_filled(center + Vec2::splat(2.0), r, shadow);
        painter.circle_filled(center, r, look.fill);
        match look.accent {
            Accent::Glint(color) => {
                painter.circle_filled(center - Vec2::splat(0.3 * r), 0.2 * r, color);
            }
            Accent::Ring(color) => {
                painter.circle_stroke(center, 0.85 * r, Stroke::new(0.1 * r, color));
            }
        }
    }

    fn paint_winning_line(&self, painter: &Painter, line: &[Pos; 5]) {
        let g = &self.geometry;
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);
        painter.line_segment([g.center(line[0]), g.center(line[4])], stroke);
        for &pos in line {
            painter.circle_stroke(g.center(pos), g.stone_radius() + 3.0, stroke);
        }
    }
}
