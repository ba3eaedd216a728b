//! Draws a snapshot into a terminal frame.
//!
//! The world is sampled once per terminal cell at the cell's center, using
//! the same masks the collision test uses, so what looks like a hit is one.

use crate::bird::BirdShape;
use crate::core::error::DeathCause;
use crate::core::simulation::{Phase, Snapshot};
use crate::sprite::SpriteSheet;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Width in world pixels of one stripe of the ground texture.
const GROUND_STRIPE: f64 = 24.0;

/// What occupies one sampled world point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Sky,
    Bird,
    Pipe,
    GroundLight,
    GroundDark,
}

impl Cell {
    fn span(self) -> Span<'static> {
        match self {
            Self::Sky => Span::styled(" ", Style::default().bg(Color::Rgb(112, 197, 206))),
            Self::Bird => Span::styled(
                "█",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Self::Pipe => Span::styled("█", Style::default().fg(Color::Green)),
            Self::GroundLight => Span::styled("▓", Style::default().fg(Color::Rgb(222, 216, 149))),
            Self::GroundDark => Span::styled("▒", Style::default().fg(Color::Rgb(196, 172, 98))),
        }
    }
}

/// Classify the world point `(wx, wy)`.
pub fn sample(snapshot: &Snapshot, bird: &BirdShape, sprites: &SpriteSheet, wx: f64, wy: f64) -> Cell {
    let (px, py) = (wx.floor() as i32, wy.floor() as i32);

    if bird.mask.get(px - bird.x, py - bird.y) {
        return Cell::Bird;
    }

    for o in &snapshot.obstacles {
        let ox = o.x.round() as i32;
        if sprites.pipe_top().get(px - ox, py - o.top.round() as i32)
            || sprites.pipe_bottom().get(px - ox, py - o.bottom.round() as i32)
        {
            return Cell::Pipe;
        }
    }

    let ground = &snapshot.ground;
    if wy >= ground.y && wy < ground.y + sprites.ground_height() as f64 {
        // Stripe phase follows whichever tile covers this column.
        let tile = ground
            .tiles
            .iter()
            .copied()
            .find(|&t| wx >= t && wx < t + ground.width)
            .unwrap_or(ground.tiles[0]);
        let phase = (wx - tile).rem_euclid(GROUND_STRIPE * 2.0);
        return if phase < GROUND_STRIPE {
            Cell::GroundLight
        } else {
            Cell::GroundDark
        };
    }

    Cell::Sky
}

/// Render the play field plus score line.
pub fn render_scene(
    frame: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    sprites: &SpriteSheet,
    world: (u32, u32),
) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Flappy ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(1)])
        .split(inner);

    render_play_area(frame, chunks[0], snapshot, sprites, world);
    render_status_line(frame, chunks[1], snapshot);

    if let Phase::Terminal(cause) = snapshot.phase {
        render_game_over(frame, chunks[0], cause, snapshot.score);
    }
}

fn render_play_area(
    frame: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    sprites: &SpriteSheet,
    world: (u32, u32),
) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let x_scale = world.0 as f64 / width as f64;
    let y_scale = world.1 as f64 / height as f64;
    let bird = snapshot.bird.shape(sprites);

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let wy = (row as f64 + 0.5) * y_scale;
        let spans: Vec<Span> = (0..width)
            .map(|col| {
                let wx = (col as f64 + 0.5) * x_scale;
                sample(snapshot, &bird, sprites, wx, wy).span()
            })
            .collect();
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);

    // Score sits over the sky in the top-right corner.
    let score = format!(" Score: {} ", snapshot.score);
    let score_width = (score.chars().count() as u16).min(area.width);
    frame.render_widget(
        Paragraph::new(Span::styled(
            score,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Rect::new(
            area.x + area.width - score_width,
            area.y,
            score_width,
            1,
        ),
    );
}

fn render_status_line(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let status = match snapshot.phase {
        Phase::Running => Line::from(vec![
            Span::styled("[Space/Up]", Style::default().fg(Color::White)),
            Span::styled(" Flap  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Esc/q]", Style::default().fg(Color::White)),
            Span::styled(" Quit", Style::default().fg(Color::DarkGray)),
        ]),
        Phase::Terminal(_) => Line::from(Span::styled(
            "[Press any key]",
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(status).alignment(Alignment::Center), area);
}

fn render_game_over(frame: &mut Frame, area: Rect, cause: DeathCause, score: u32) {
    let height = 6u16.min(area.height);
    let width = 34u16.min(area.width);
    let popup = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines = vec![
        Line::from(Span::styled(
            "CRASH!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(cause.to_string(), Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(Span::styled(
            format!("Final score: {}", score),
            Style::default().fg(Color::Yellow),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::core::simulation::{Simulation, TickInput};
    use crate::sprite::Mask;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn sim() -> Simulation {
        let sprites = Arc::new(SpriteSheet::procedural());
        let mut sim = Simulation::empty(GameConfig::default(), sprites).unwrap();
        sim.obstacles_mut().push_with_height(300.0, 100.0);
        sim
    }

    #[test]
    fn test_sample_classifies_entities() {
        let sim = sim();
        let snap = sim.snapshot();
        let sprites = sim.sprites();
        let bird = snap.bird.shape(sprites);

        // Body center of the bird.
        assert_eq!(sample(&snap, &bird, sprites, 262.0, 275.0), Cell::Bird);
        // Inside the top pipe, above the gap.
        assert_eq!(sample(&snap, &bird, sprites, 350.0, 50.0), Cell::Pipe);
        // Inside the gap.
        assert_eq!(sample(&snap, &bird, sprites, 350.0, 200.0), Cell::Sky);
        // Ground strip.
        assert!(matches!(
            sample(&snap, &bird, sprites, 10.0, 760.0),
            Cell::GroundLight | Cell::GroundDark
        ));
    }

    #[test]
    fn test_ground_stripes_alternate() {
        let sim = sim();
        let snap = sim.snapshot();
        let sprites = sim.sprites();
        let bird = snap.bird.shape(sprites);
        assert_eq!(sample(&snap, &bird, sprites, 10.0, 760.0), Cell::GroundLight);
        assert_eq!(sample(&snap, &bird, sprites, 30.0, 760.0), Cell::GroundDark);
    }

    #[test]
    fn test_ground_strip_is_one_tile_tall() {
        let frame = Mask::from_fn(4, 4, |_, _| true);
        let pipe = Mask::from_fn(4, 20, |_, _| true);
        let sprites = SpriteSheet::new(vec![frame.clone(), frame.clone(), frame], pipe, 10, 4).unwrap();
        let sim = Simulation::empty(GameConfig::default(), Arc::new(sprites)).unwrap();
        let snap = sim.snapshot();
        let sprites = sim.sprites();
        let bird = snap.bird.shape(sprites);

        assert_ne!(sample(&snap, &bird, sprites, 5.0, 732.0), Cell::Sky);
        assert_eq!(sample(&snap, &bird, sprites, 5.0, 740.0), Cell::Sky);
    }

    #[test]
    fn test_render_shows_score_and_crash() {
        let sprites = Arc::new(SpriteSheet::procedural());
        let mut sim = Simulation::empty(GameConfig::default(), sprites).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        while !sim.is_over() {
            sim.tick(TickInput::IDLE, &mut rng).unwrap();
        }
        let snap = sim.snapshot();

        let mut terminal = Terminal::new(TestBackend::new(60, 40)).unwrap();
        terminal
            .draw(|f| render_scene(f, f.size(), &snap, sim.sprites(), (500, 800)))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Score: 0"));
        assert!(text.contains("CRASH!"));
    }
}
