//! JumperView: scales the 800x600 jumper world onto the terminal.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::jumper::{JumperSnapshot, PlatformKind};
use crate::types::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::Viewport;

const SKY: Rgb = Rgb::new(12, 16, 32);

#[derive(Debug, Default)]
pub struct JumperView;

/// World-to-screen mapping for the area inside the border
#[derive(Debug, Clone, Copy)]
struct Scale {
    left: u16,
    top: u16,
    cols: u16,
    rows: u16,
}

impl Scale {
    fn col(&self, x: f32) -> i32 {
        self.left as i32 + (x / WORLD_WIDTH * self.cols as f32).floor() as i32
    }

    fn row(&self, y: f32) -> i32 {
        self.top as i32 + (y / WORLD_HEIGHT * self.rows as f32).floor() as i32
    }

    fn span(&self, w: f32) -> u16 {
        ((w / WORLD_WIDTH * self.cols as f32).round() as u16).max(1)
    }

    fn contains(&self, col: i32, row: i32) -> bool {
        col >= self.left as i32
            && row >= self.top as i32
            && col < (self.left + self.cols) as i32
            && row < (self.top + self.rows) as i32
    }
}

impl JumperView {
    pub fn render_into(&self, snap: &JumperSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));
        if viewport.width < 3 || viewport.height < 3 {
            return;
        }

        let scale = Scale {
            left: 1,
            top: 1,
            cols: viewport.width - 2,
            rows: viewport.height - 2,
        };
        fb.fill_rect(1, 1, scale.cols, scale.rows, ' ', CellStyle::new(SKY, SKY));
        fb.draw_box(0, 0, viewport.width, viewport.height, CellStyle::default());

        for p in &snap.platforms {
            let fg = match p.kind {
                PlatformKind::Normal => Rgb::new(100, 220, 120),
                PlatformKind::Spring => Rgb::new(80, 160, 255),
                PlatformKind::Broken => Rgb::new(180, 110, 60),
            };
            let mut style = CellStyle::new(fg, SKY).bold();
            if p.crumble.is_some() {
                style = style.dim();
            }
            let ch = if p.kind == PlatformKind::Broken { '╍' } else { '━' };
            let row = scale.row(p.y);
            let col = scale.col(p.x);
            for dx in 0..scale.span(p.width()) as i32 {
                if scale.contains(col + dx, row) {
                    fb.put_char((col + dx) as u16, row as u16, ch, style);
                }
            }
        }

        let player = &snap.player;
        let style = CellStyle::new(Rgb::new(240, 220, 80), SKY).bold();
        let col = scale.col(player.x);
        let bottom = scale.row(player.bottom() - 0.01);
        for dx in 0..scale.span(player.width()) as i32 {
            if scale.contains(col + dx, bottom) {
                fb.put_char((col + dx) as u16, bottom as u16, '█', style);
            }
        }

        let hud = CellStyle::new(Rgb::new(255, 255, 255), SKY).bold();
        let x = fb.put_str(2, 1, "SCORE ", hud);
        fb.put_u32(x, 1, snap.score, hud);

        if !snap.running {
            self.draw_start_screen(fb, snap, viewport);
        }
    }

    pub fn render(&self, snap: &JumperSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_start_screen(&self, fb: &mut FrameBuffer, snap: &JumperSnapshot, viewport: Viewport) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let mid = viewport.height / 2;

        let title = "PRESS ENTER TO JUMP";
        let x = viewport.width.saturating_sub(title.len() as u16) / 2;
        fb.put_str(x, mid, title, style);

        if let Some(outcome) = snap.last_outcome {
            let label = "LAST SCORE ";
            let x = viewport.width.saturating_sub(label.len() as u16 + 4) / 2;
            let x = fb.put_str(x, mid + 1, label, style);
            fb.put_u32(x, mid + 1, outcome.score, style);
        }
    }
}
