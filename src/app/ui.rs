//! Drawing for each screen.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine};
use ratatui::widgets::{Block, BorderType, Paragraph, Widget};
use ratatui::Frame;

use super::{App, Screen, SnakeScreen, TicTacToeScreen};
use crate::catalog::{games, CatalogView};
use crate::games::tictactoe::{Board, Mark};
use crate::render::{Rgb, Surface};

const ACCENT: Color = Color::Rgb(255, 220, 80);
const DIM: Color = Color::Rgb(120, 120, 140);
const WIN: Color = Color::Red;

pub(super) fn draw(frame: &mut Frame, app: &App) {
    let [header, body, footer] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    frame.render_widget(
        Line::from(vec![
            Span::styled(" Game Portal ", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
            Span::styled(app.route().path(), Style::default().fg(DIM)),
        ]),
        header,
    );

    let help = match app.screen() {
        Screen::Catalog(view) => {
            draw_catalog(frame, body, view);
            "↑/↓ select · Enter play · q quit"
        }
        Screen::Snake(screen) => {
            draw_snake(frame, body, screen);
            "←↑↓→ steer · Space start · Esc back"
        }
        Screen::TicTacToe(screen) => {
            draw_tictactoe(frame, body, screen);
            "1-9 or arrows+Enter play · r restart · Esc back"
        }
    };
    frame.render_widget(Line::styled(help, Style::default().fg(DIM)).centered(), footer);
}

/// A `width` x `height` rectangle centered in `area`, clipped to it.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

// =============================================================================
// Catalog
// =============================================================================

fn draw_catalog(frame: &mut Frame, area: Rect, view: &CatalogView) {
    let tile_height = 5;
    let list = centered(area, 48, tile_height * games().len() as u16);
    let rows = Layout::vertical(vec![Constraint::Length(tile_height); games().len()]).split(list);

    for (i, (game, row)) in games().iter().zip(rows.iter()).enumerate() {
        let selected = i == view.selected_index();
        let block = Block::bordered()
            .border_type(if selected { BorderType::Double } else { BorderType::Rounded })
            .border_style(Style::default().fg(if selected { ACCENT } else { DIM }))
            .title(Span::styled(game.title, Style::default().add_modifier(Modifier::BOLD)));

        let mut lines = vec![Line::from(game.description)];
        if selected {
            lines.push(Line::styled("▶ Enter to play", Style::default().fg(ACCENT)));
        }
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center).block(block), *row);
    }
}

// =============================================================================
// Snake
// =============================================================================

/// Samples a surface once per grid cell; each cell becomes two terminal
/// columns so the playfield keeps its aspect ratio.
struct SurfaceView<'a> {
    surface: &'a Surface,
    cell_size: u32,
}

impl SurfaceView<'_> {
    fn size(&self) -> (u16, u16) {
        let columns = self.surface.width() / self.cell_size;
        let rows = self.surface.height() / self.cell_size;
        let clamp = |n: u32| u16::try_from(n).unwrap_or(u16::MAX);
        (clamp(columns.saturating_mul(2)), clamp(rows))
    }
}

impl Widget for SurfaceView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (width, height) = self.size();
        let half = self.cell_size / 2;

        for row in 0..height.min(area.height) {
            for col in 0..(width / 2).min(area.width / 2) {
                let x = col as u32 * self.cell_size + half;
                let y = row as u32 * self.cell_size + half;
                let Rgb(r, g, b) = self.surface.pixel(x, y).unwrap_or_default();
                let style = Style::default().fg(Color::Rgb(r, g, b));

                for dx in 0..2 {
                    if let Some(cell) = buf.cell_mut((area.x + col * 2 + dx, area.y + row)) {
                        cell.set_symbol("█").set_style(style);
                    }
                }
            }
        }
    }
}

fn draw_snake(frame: &mut Frame, area: Rect, screen: &SnakeScreen) {
    let game = &screen.game;
    let view = SurfaceView {
        surface: &screen.surface,
        cell_size: game.config().cell_size,
    };
    let (width, height) = view.size();

    let [status, field, notice] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(height.saturating_add(2)),
        Constraint::Length(2),
    ])
    .areas(centered(area, width.saturating_add(2), height.saturating_add(5)));

    frame.render_widget(
        Line::from(vec![
            Span::styled("Snake", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!("   Score: {}", game.score())),
        ])
        .centered(),
        status,
    );

    let block = Block::bordered().border_type(BorderType::Plain);
    let inner = block.inner(field);
    frame.render_widget(block, field);
    frame.render_widget(view, inner);

    let mut lines = Vec::new();
    if let Some(text) = &screen.notice {
        lines.push(Line::styled(text.clone(), Style::default().fg(WIN).add_modifier(Modifier::BOLD)));
    }
    if !game.is_running() {
        lines.push(Line::styled("Press Space to start", Style::default().fg(ACCENT)));
    }
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), notice);
}

// =============================================================================
// Tic-Tac-Toe
// =============================================================================

fn draw_tictactoe(frame: &mut Frame, area: Rect, screen: &TicTacToeScreen) {
    let game = &screen.game;
    let [status, board] = Layout::vertical([Constraint::Length(2), Constraint::Length(17)])
        .areas(centered(area, 40, 19));

    frame.render_widget(
        Paragraph::new(vec![
            Line::styled("Tic Tac Toe", Style::default().add_modifier(Modifier::BOLD)),
            Line::from(game.status()),
        ])
        .alignment(Alignment::Center),
        status,
    );

    // Canvas y grows upward; board space y grows downward
    let flip = |y: f64| 3.0 - y;
    let win_line = game.win_line();

    let canvas = Canvas::default()
        .block(Block::bordered().border_type(BorderType::Rounded))
        .marker(Marker::Braille)
        .x_bounds([0.0, 3.0])
        .y_bounds([0.0, 3.0])
        .paint(|ctx| {
            for k in [1.0, 2.0] {
                ctx.draw(&CanvasLine::new(k, 0.0, k, 3.0, DIM));
                ctx.draw(&CanvasLine::new(0.0, k, 3.0, k, DIM));
            }

            for index in 0..Board::CELLS {
                let x = (index % 3) as f64 + 0.4;
                let y = flip((index / 3) as f64 + 0.5);
                let glyph = match game.board().get(index) {
                    Some(Mark::X) => "X",
                    Some(Mark::O) => "O",
                    None => "·",
                };
                let mut style = Style::default().fg(if game.is_winning_cell(index) { WIN } else { Color::White });
                if index == screen.cursor && !game.is_over() {
                    style = style.bg(Color::DarkGray);
                }
                ctx.print(x, y, Span::styled(glyph, style.add_modifier(Modifier::BOLD)));
            }

            if let Some(line) = win_line {
                let ((x0, y0), (x1, y1)) = line.segment();
                ctx.layer();
                ctx.draw(&CanvasLine::new(x0, flip(y0), x1, flip(y1), WIN));
            }
        });
    frame.render_widget(canvas, board);
}
