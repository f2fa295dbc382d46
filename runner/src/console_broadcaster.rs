use std::io::Write;

use common::games::FrameBroadcaster;
use common::games::snake::{Cell, GameSnapshot, Grid, Palette, Rgb};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const RESET: &str = "\x1b[0m";

/// Draws each frame as a character grid on stdout, one cell per two columns.
pub struct ConsoleBroadcaster {
    grid: Grid,
    palette: Palette,
    clear_screen: bool,
    use_colors: bool,
}

impl ConsoleBroadcaster {
    pub fn new(grid: Grid, palette: Palette, clear_screen: bool, use_colors: bool) -> Self {
        Self {
            grid,
            palette,
            clear_screen,
            use_colors,
        }
    }

    pub fn render(&self, snapshot: &GameSnapshot) -> String {
        let columns = self.grid.columns().max(0) as usize;
        let rows = self.grid.rows().max(0) as usize;
        let mut cells = vec![Glyph::Empty; columns * rows];

        let mut place = |x: i32, y: i32, glyph: Glyph| {
            let cell = Cell::new(x, y);
            if self.grid.is_aligned(&cell) {
                let column = (x / self.grid.cell_size()) as usize;
                let row = (y / self.grid.cell_size()) as usize;
                cells[row * columns + column] = glyph;
            }
        };

        place(snapshot.food.x, snapshot.food.y, Glyph::Food);
        // Tail first so the head wins where segments overlap.
        for (index, segment) in snapshot.snake.iter().enumerate().rev() {
            let glyph = if index == 0 { Glyph::Head } else { Glyph::Body };
            place(segment.x, segment.y, glyph);
        }

        let mut out = String::new();
        if self.clear_screen {
            out.push_str(CLEAR_SCREEN);
        }
        out.push_str(&format!(
            "Score:{}  Direction: {}\n",
            snapshot.score, snapshot.direction
        ));

        for row in cells.chunks(columns.max(1)) {
            for glyph in row {
                out.push_str(&self.paint(*glyph));
            }
            out.push('\n');
        }

        if snapshot.is_game_over() {
            out.push_str("GAME OVER");
            if let Some(reason) = snapshot.game_over_reason {
                out.push_str(&format!(": snake {}", reason));
            }
            out.push_str(" - Press R or Click to Restart\n");
        }
        out
    }

    fn paint(&self, glyph: Glyph) -> String {
        let text = glyph.text();
        if !self.use_colors {
            return text.to_string();
        }
        let background = match glyph {
            Glyph::Empty => self.palette.background,
            Glyph::Food => self.palette.food,
            Glyph::Head | Glyph::Body => self.palette.snake,
        };
        format!("{}{}{}", ansi_background(background), text, RESET)
    }
}

impl FrameBroadcaster for ConsoleBroadcaster {
    async fn broadcast_frame(&self, snapshot: GameSnapshot) {
        let frame = self.render(&snapshot);
        let mut stdout = std::io::stdout().lock();
        let _ = stdout.write_all(frame.as_bytes());
        let _ = stdout.flush();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Glyph {
    Empty,
    Food,
    Head,
    Body,
}

impl Glyph {
    fn text(&self) -> &'static str {
        match self {
            Glyph::Empty => " .",
            Glyph::Food => " *",
            Glyph::Head => " @",
            Glyph::Body => " o",
        }
    }
}

fn ansi_background(color: Rgb) -> String {
    format!("\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
}
