//! Board rendering for the desktop host

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{GameBoard, Grid, Pos, Side, Stone};

use super::theme::*;

/// What the board should highlight this frame
pub struct BoardOverlay {
    pub current_turn: Side,
    pub last_move: Option<Pos>,
    pub suggested_move: Option<Pos>,
    pub winning_line: Option<[Pos; 5]>,
    pub accepts_input: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    width: u8,
    height: u8,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
            width: 0,
            height: 0,
        }
    }
}

impl BoardView {
    /// Render the board and return click position if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Grid, overlay: &BoardOverlay) -> Option<Pos> {
        self.width = board.width();
        self.height = board.height();

        let available = ui.available_size();
        let lines = f32::from(self.width.max(self.height).max(2)) - 1.0;
        let side = available.x.min(available.y) - 20.0;
        self.cell_size = (side - 2.0 * BOARD_MARGIN) / lines;

        let size = Vec2::new(
            2.0 * BOARD_MARGIN + (f32::from(self.width) - 1.0) * self.cell_size,
            2.0 * BOARD_MARGIN + (f32::from(self.height) - 1.0) * self.cell_size,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, board);

        if let Some(pos) = overlay.last_move {
            self.draw_last_move_marker(&painter, pos);
        }
        if let Some(line) = overlay.winning_line {
            self.draw_winning_line(&painter, &line);
        }
        if let Some(pos) = overlay.suggested_move {
            self.draw_suggestion(&painter, pos, overlay.current_turn);
        }

        if !overlay.accepts_input {
            return None;
        }

        let board_pos = response.hover_pos().and_then(|p| self.screen_to_board(p))?;
        let is_valid = board.get(board_pos).is_empty();
        self.draw_hover_preview(&painter, board_pos, overlay.current_turn, is_valid);

        (response.clicked() && is_valid).then_some(board_pos)
    }

    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let right = BOARD_MARGIN + (f32::from(self.width) - 1.0) * self.cell_size;
        let bottom = BOARD_MARGIN + (f32::from(self.height) - 1.0) * self.cell_size;

        for x in 0..self.width {
            let offset = BOARD_MARGIN + f32::from(x) * self.cell_size;
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, bottom);
            painter.line_segment([start, end], stroke);
        }
        for y in 0..self.height {
            let offset = BOARD_MARGIN + f32::from(y) * self.cell_size;
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(right, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Centre point, plus the four 4-4 points on boards of 13 and up
    fn draw_star_points(&self, painter: &Painter) {
        for pos in star_points(self.width, self.height) {
            painter.circle_filled(self.board_to_screen(pos), STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Column letters along the top, row numbers down the left
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for x in 0..self.width {
            let label = column_label(x);
            let cx = self.board_rect.min.x + BOARD_MARGIN + f32::from(x) * self.cell_size;
            let pos = Pos2::new(cx, self.board_rect.min.y + BOARD_MARGIN * 0.4);
            painter.text(pos, egui::Align2::CENTER_CENTER, label, font.clone(), GRID_LINE);
        }
        for y in 0..self.height {
            let cy = self.board_rect.min.y + BOARD_MARGIN + f32::from(y) * self.cell_size;
            let pos = Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.4, cy);
            painter.text(pos, egui::Align2::CENTER_CENTER, format!("{}", y + 1), font.clone(), GRID_LINE);
        }
    }

    fn draw_stones(&self, painter: &Painter, board: &Grid) {
        for pos in board.positions() {
            if let Some(side) = board.get(pos).side() {
                self.draw_stone(painter, pos, side);
            }
        }
    }

    /// Draw a single stone with shadow and highlight
    fn draw_stone(&self, painter: &Painter, pos: Pos, side: Side) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match side {
            Side::Black => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 60));
                painter.circle_filled(center, radius, BLACK_STONE);
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, BLACK_STONE_HIGHLIGHT);
            }
            Side::White => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 40));
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_STONE_SHADOW));
            }
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 5]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            painter.line_segment([self.board_to_screen(pair[0]), self.board_to_screen(pair[1])], stroke);
        }
        let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
        for pos in line {
            painter.circle_stroke(self.board_to_screen(*pos), radius, stroke);
        }
    }

    fn draw_suggestion(&self, painter: &Painter, pos: Pos, turn: Side) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        painter.circle_filled(center, radius, ghost_color(turn, 100));

        let mark = match turn {
            Side::Black => WHITE_STONE,
            Side::White => BLACK_STONE,
        };
        painter.text(center, egui::Align2::CENTER_CENTER, "?", egui::FontId::proportional(14.0), mark);
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Side, is_valid: bool) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let color = if is_valid { ghost_color(turn, 80) } else { hover_invalid() };
        painter.circle_filled(center, radius, color);
    }

    /// Convert screen coordinates to board position
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = ((relative.x - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size).floor() as i32;
        let y = ((relative.y - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size).floor() as i32;

        let inside = x >= 0 && y >= 0 && x < i32::from(self.width) && y < i32::from(self.height);
        inside.then(|| Pos::new(x as u8, y as u8))
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + f32::from(pos.x) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + f32::from(pos.y) * self.cell_size;
        Pos2::new(x, y)
    }
}

/// Translucent stone of the given side
fn ghost_color(side: Side, alpha: u8) -> Color32 {
    match Stone::from(side) {
        Stone::Black => Color32::from_rgba_unmultiplied(20, 20, 20, alpha),
        _ => Color32::from_rgba_unmultiplied(240, 240, 240, alpha),
    }
}

/// A, B, ... Z, then AA, AB, ...
fn column_label(x: u8) -> String {
    let letter = |i: u8| char::from(b'A' + i);
    if x < 26 {
        letter(x).to_string()
    } else {
        format!("{}{}", letter(x / 26 - 1), letter(x % 26))
    }
}

fn star_points(width: u8, height: u8) -> Vec<Pos> {
    let mut points = vec![Pos::new(width / 2, height / 2)];
    if width >= 13 && height >= 13 {
        let (r, b) = (width - 4, height - 4);
        points.extend([Pos::new(3, 3), Pos::new(r, 3), Pos::new(3, b), Pos::new(r, b)]);
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_labels() {
        assert_eq!(column_label(0), "A");
        assert_eq!(column_label(25), "Z");
        assert_eq!(column_label(26), "AA");
        assert_eq!(column_label(27), "AB");
    }

    #[test]
    fn test_star_points() {
        assert_eq!(star_points(9, 9), vec![Pos::new(4, 4)]);
        let points = star_points(15, 15);
        assert_eq!(points.len(), 5);
        assert!(points.contains(&Pos::new(11, 11)));
    }

    #[test]
    fn test_screen_round_trip() {
        let view = BoardView {
            cell_size: 30.0,
            board_rect: Rect::from_min_size(Pos2::ZERO, Vec2::splat(500.0)),
            width: 15,
            height: 15,
        };
        let pos = Pos::new(3, 12);
        assert_eq!(view.screen_to_board(view.board_to_screen(pos)), Some(pos));
        assert_eq!(view.screen_to_board(Pos2::new(-50.0, 10.0)), None);
    }
}
