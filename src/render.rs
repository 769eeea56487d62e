use crate::field;
use crate::sim::Sim;
use crossterm::{
    cursor, execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{
        self, BeginSynchronizedUpdate, Clear, ClearType, DisableLineWrap, EnableLineWrap,
        EndSynchronizedUpdate, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use std::io::{self, Write};

/// Rows at the bottom reserved for the key reference and status line.
pub(crate) const HELP_ROWS: u16 = 4;

// Sampling window padding around the ring's bounding box.
const PAD_X: i32 = 10;
const PAD_Y: i32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Cell {
    pub(crate) ch: char,
    pub(crate) fg: Color,
    pub(crate) bold: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bold: false,
        }
    }
}

pub(crate) struct CellBuffer {
    pub(crate) w: u16,
    pub(crate) h: u16,
    pub(crate) cells: Vec<Cell>,
}

impl CellBuffer {
    fn new(w: u16, h: u16) -> Self {
        Self {
            w,
            h,
            cells: vec![Cell::default(); (w as usize) * (h as usize)],
        }
    }
    fn idx(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.w as usize) + (x as usize)
    }
    fn set(&mut self, x: u16, y: u16, c: Cell) {
        if x < self.w && y < self.h {
            let i = self.idx(x, y);
            self.cells[i] = c;
        }
    }
    fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }
}

pub(crate) struct Terminal {
    out: io::Stdout,
    pub(crate) cols: u16,
    pub(crate) rows: u16,
    prev: CellBuffer,
    cur: CellBuffer,
}

impl Terminal {
    pub(crate) fn begin() -> anyhow::Result<Self> {
        let mut out = io::stdout();
        execute!(
            out,
            EnterAlternateScreen,
            cursor::Hide,
            DisableLineWrap,
            Clear(ClearType::All)
        )?;
        terminal::enable_raw_mode()?;

        let (cols, rows) = terminal::size()?;
        Ok(Self {
            out,
            cols,
            rows,
            prev: CellBuffer::new(cols, rows),
            cur: CellBuffer::new(cols, rows),
        })
    }

    pub(crate) fn end(&mut self) -> anyhow::Result<()> {
        queue!(
            self.out,
            ResetColor,
            Clear(ClearType::All),
            cursor::Show,
            EnableLineWrap,
            LeaveAlternateScreen
        )?;
        self.out.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Flushes only cells that changed since the previous frame, with the
    /// foreground color and intensity attribute cached across the pass.
    pub(crate) fn present(&mut self) -> anyhow::Result<()> {
        queue!(self.out, BeginSynchronizedUpdate)?;

        let mut last_fg = None;
        let mut last_bold = false;

        for y in 0..self.rows {
            for x in 0..self.cols {
                let i = self.cur.idx(x, y);
                let c = self.cur.cells[i];
                if c == self.prev.cells[i] {
                    continue;
                }

                queue!(self.out, cursor::MoveTo(x, y))?;

                if c.bold != last_bold {
                    let attr = if c.bold {
                        Attribute::Bold
                    } else {
                        Attribute::NormalIntensity
                    };
                    queue!(self.out, SetAttribute(attr))?;
                    last_bold = c.bold;
                }
                if last_fg != Some(c.fg) {
                    queue!(self.out, SetForegroundColor(c.fg))?;
                    last_fg = Some(c.fg);
                }

                queue!(self.out, Print(c.ch))?;
            }
        }

        queue!(self.out, ResetColor, SetAttribute(Attribute::NormalIntensity))?;
        queue!(self.out, EndSynchronizedUpdate)?;
        self.out.flush()?;
        self.prev.cells.copy_from_slice(&self.cur.cells);
        Ok(())
    }
}

fn draw_text(buf: &mut CellBuffer, x: u16, y: u16, text: &str, fg: Color) {
    for (i, ch) in text.chars().enumerate() {
        buf.set(x + i as u16, y, Cell { ch, fg, bold: false });
    }
}

/// Samples the density field over the ring's padded bounding window and fills
/// the cell buffer, then lays the key reference and status line underneath.
pub(crate) fn draw_frame(term: &mut Terminal, sim: &Sim) {
    term.cur.clear();

    let field_h = term.rows.saturating_sub(HELP_ROWS) as i32;
    let field_w = term.cols as i32;
    if field_h > 0 && field_w > 0 {
        sample_field(term, sim, field_w, field_h);
    }

    let help_y = term.rows.saturating_sub(HELP_ROWS);
    let dim = Color::DarkGrey;
    draw_text(
        &mut term.cur,
        0,
        help_y,
        "WASD:Move E/C:Diag P/I:Pulse O:Oscil L/J/K:Rotate H/V:Squeeze +H/+V:Stretch U/Y/T/R:DirStretch",
        dim,
    );
    draw_text(
        &mut term.cur,
        0,
        help_y + 1,
        "B:Vibrate +B:Intense N:Wave SPC:Poke M:MultiPoke 1/2/3/4:Mode G:Grav F/+F:Wind +T:Turb",
        dim,
    );
    draw_text(
        &mut term.cur,
        0,
        help_y + 2,
        "C:Theme Z:Color X:Glow +Z:Hilite 0:Reset Q:Quit",
        dim,
    );

    let status = format!(
        "Mode:{} Theme:{} Env:{} Glow:{}",
        sim.force_mode.label(),
        sim.theme.label(),
        if sim.env.enabled { "ON" } else { "OFF" },
        if sim.show_glow { "ON" } else { "OFF" },
    );
    draw_text(&mut term.cur, 0, help_y + 3, &status, Color::Reset);
}

fn sample_field(term: &mut Terminal, sim: &Sim, field_w: i32, field_h: i32) {
    let mut min_x = f32::MAX;
    let mut max_x = f32::MIN;
    let mut min_y = f32::MAX;
    let mut max_y = f32::MIN;
    for p in &sim.blob.points {
        min_x = min_x.min(p.pos.x);
        max_x = max_x.max(p.pos.x);
        min_y = min_y.min(p.pos.y);
        max_y = max_y.max(p.pos.y);
    }
    let min_x = (min_x as i32 - PAD_X).clamp(0, field_w - 1);
    let max_x = (max_x as i32 + PAD_X).clamp(0, field_w - 1);
    let min_y = (min_y as i32 - PAD_Y).clamp(0, field_h - 1);
    let max_y = (max_y as i32 + PAD_Y).clamp(0, field_h - 1);

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let density = field::density_at(&sim.blob, sim.pulse, x as f32, y as f32);
            if density <= field::METABALL_THRESHOLD {
                continue;
            }
            let ch = field::glyph_for(density);
            let (fg, bold) = if sim.use_color {
                let highlight = field::highlight_at(&sim.blob, x as f32, y as f32);
                field::shade(
                    sim.theme,
                    density,
                    highlight,
                    sim.pulse,
                    sim.show_glow,
                    sim.show_highlights,
                )
            } else {
                (Color::Reset, false)
            };
            term.cur.set(x as u16, y as u16, Cell { ch, fg, bold });
        }
    }
}

/// Start screen shown before the loop begins; waits for any key elsewhere.
pub(crate) fn draw_splash(term: &mut Terminal) {
    term.cur.clear();
    let cx = term.cols / 2;
    let cy = term.rows / 2;
    let title = "Slime Blob Simulator";
    let prompt = "Press any key to start";
    draw_text(
        &mut term.cur,
        cx.saturating_sub(title.len() as u16 / 2),
        cy.saturating_sub(1),
        title,
        Color::Green,
    );
    draw_text(
        &mut term.cur,
        cx.saturating_sub(prompt.len() as u16 / 2),
        cy + 1,
        prompt,
        Color::DarkGrey,
    );
}
