//! BlocksView: maps a blocks [`GameSnapshot`] into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested.

use crate::core::{shape_for, GameSnapshot, Phase};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
use crate::Viewport;

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_MIN_WIDTH: u16 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

pub struct BlocksView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for BlocksView {
    fn default() -> Self {
        // 2x1 roughly squares up terminal glyphs.
        Self::new(2, 1)
    }
}

/// Top-left corner of the well frame, in terminal cells.
#[derive(Debug, Clone, Copy)]
struct Origin {
    x: u16,
    y: u16,
}

impl BlocksView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the framed well.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let origin = Origin {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
                AnchorY::Top => 0,
            },
        };

        fb.fill_rect(
            origin.x + 1,
            origin.y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            CellStyle::new(Rgb::new(80, 80, 90), WELL_BG),
        );
        fb.draw_box(
            origin.x,
            origin.y,
            frame_w,
            frame_h,
            CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0)),
        );

        let grid = CellStyle::new(Rgb::new(90, 90, 100), WELL_BG).dim();
        for (y, row) in snap.board.iter().enumerate() {
            for (x, &id) in row.iter().enumerate() {
                match PieceKind::from_id(id) {
                    Some(kind) => self.draw_block(fb, origin, x as i8, y as i8, block_style(kind)),
                    None => self.fill_cell(fb, origin, x as i8, y as i8, '·', grid),
                }
            }
        }

        if let Some(active) = snap.active {
            if let Some(ghost_y) = snap.ghost_y {
                let ghost = CellStyle::new(Rgb::new(140, 140, 140), WELL_BG).dim();
                for (dx, dy) in active.shape.filled_cells() {
                    self.fill_cell(fb, origin, active.x + dx, ghost_y + dy, '░', ghost);
                }
            }
            for (x, y) in active.cells() {
                self.draw_block(fb, origin, x, y, block_style(active.kind));
            }
        }

        self.draw_side_panel(fb, snap, viewport, origin, frame_w);

        let overlay = if !snap.started {
            Some(("PRESS ENTER", None))
        } else if snap.phase == Phase::GameOver {
            Some(("GAME OVER", Some("R TO RESTART")))
        } else if snap.paused {
            Some(("PAUSED", None))
        } else {
            None
        };
        if let Some((title, hint)) = overlay {
            let mid = origin.y.saturating_add(frame_h / 2);
            draw_centered(fb, origin.x, frame_w, mid, title, true);
            if let Some(hint) = hint {
                draw_centered(fb, origin.x, frame_w, mid.saturating_add(1), hint, false);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Screen position of board cell `(x, y)`, or `None` outside the well
    fn cell_origin(&self, origin: Origin, x: i8, y: i8) -> Option<(u16, u16)> {
        if x < 0 || y < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((
            origin.x + 1 + x as u16 * self.cell_w,
            origin.y + 1 + y as u16 * self.cell_h,
        ))
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, origin: Origin, x: i8, y: i8, ch: char, style: CellStyle) {
        if let Some((px, py)) = self.cell_origin(origin, x, y) {
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
        }
    }

    /// `[]` in the piece colour, solid when one column wide
    fn draw_block(&self, fb: &mut FrameBuffer, origin: Origin, x: i8, y: i8, style: CellStyle) {
        if let Some((px, py)) = self.cell_origin(origin, x, y) {
            put_block(fb, px, py, self.cell_w, self.cell_h, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        origin: Origin,
        frame_w: u16,
    ) {
        let panel_x = origin.x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_WIDTH {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = origin.y;
        for (name, n) in [("SCORE", snap.score), ("LINES", snap.lines)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, n, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        let style = block_style(snap.next);
        for (dx, dy) in shape_for(snap.next).filled_cells() {
            let px = panel_x + dx as u16 * self.cell_w;
            put_block(fb, px, y + dy as u16, self.cell_w, 1, style);
        }
        y = y.saturating_add(5);

        if snap.games_over > 0 {
            fb.put_str(panel_x, y, "GAMES", label);
            fb.put_u32(panel_x, y + 1, snap.games_over, value);
        }
    }
}

fn put_block(fb: &mut FrameBuffer, px: u16, py: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 {
        fb.fill_rect(px, py, w, h, '█', style);
        return;
    }
    for dy in 0..h {
        fb.put_char(px, py + dy, '[', style);
        fb.fill_rect(px + 1, py + dy, w - 2, 1, ' ', style);
        fb.put_char(px + w - 1, py + dy, ']', style);
    }
}

fn draw_centered(fb: &mut FrameBuffer, x: u16, w: u16, y: u16, text: &str, bold: bool) {
    let text_w = text.chars().count() as u16;
    let cx = x.saturating_add(w.saturating_sub(text_w) / 2);
    let mut style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0));
    style.bold = bold;
    fb.put_str(cx, y, text, style);
}

fn block_style(kind: PieceKind) -> CellStyle {
    let fg = match kind {
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
    };
    CellStyle::new(fg, WELL_BG).bold()
}
