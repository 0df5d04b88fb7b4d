use cca_lib::{Status, World};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, BeginSynchronizedUpdate, ClearType, EndSynchronizedUpdate, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use log::debug;
use std::{
    io::{self, Stdout, Write},
    time::{Duration, Instant},
};

/// Restores the terminal when dropped.
struct TermGuard {
    out: Stdout,
}

impl TermGuard {
    fn new() -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, cursor::Hide, cursor::MoveTo(0, 0))?;
        Ok(TermGuard { out })
    }
}

impl Drop for TermGuard {
    fn drop(&mut self) {
        let _ = execute!(self.out, ResetColor, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RunStatus {
    Running,
    Paused,
    /// The grid stopped changing.
    Stable,
    /// Reached the requested number of generations.
    Finished,
}

struct WorldWindow {
    status: RunStatus,
    /// The generation to stop at.
    target: u64,
    start_time: Option<Instant>,
    timing: Duration,
    guard: TermGuard,
}

impl WorldWindow {
    fn new(target: u64) -> io::Result<Self> {
        Ok(WorldWindow {
            status: RunStatus::Paused,
            target,
            start_time: None,
            timing: Duration::default(),
            guard: TermGuard::new()?,
        })
    }

    fn elapsed(&self) -> Duration {
        match self.start_time {
            Some(instant) => self.timing + instant.elapsed(),
            None => self.timing,
        }
    }

    fn status_str(&self) -> String {
        match self.status {
            RunStatus::Running => {
                String::from("Running... Press [space] to pause, [q] to quit.")
            }
            RunStatus::Paused => {
                String::from("Paused. Press [space] to resume, [n] to step, [q] to quit.")
            }
            RunStatus::Stable => String::from("The world is stable. Press [q] to quit."),
            RunStatus::Finished => {
                format!("Reached generation {}. Press [q] to quit.", self.target)
            }
        }
    }

    fn update(&mut self, world: &World) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let top = format!(
            "Gen: {}  Changed: {}  Time: {:.2?}",
            world.generation(),
            world.changes(),
            self.elapsed()
        );
        let bottom = self.status_str();
        let out = &mut self.guard.out;

        queue!(out, BeginSynchronizedUpdate)?;
        draw_bar(out, 0, cols, &top)?;

        // Two columns per cell, so that cells look square.
        let view_cols = (cols / 2) as usize;
        let view_rows = rows.saturating_sub(2) as usize;
        let cycle = world.cycle();
        for (y, row) in world.grid().rows().take(view_rows).enumerate() {
            queue!(out, cursor::MoveTo(0, y as u16 + 1))?;
            let mut last = None;
            for &state in row.iter().take(view_cols) {
                let color = cycle.color(state);
                if last != Some(color) {
                    queue!(
                        out,
                        SetBackgroundColor(Color::Rgb {
                            r: color.r,
                            g: color.g,
                            b: color.b,
                        })
                    )?;
                    last = Some(color);
                }
                queue!(out, Print("  "))?;
            }
            queue!(out, ResetColor, terminal::Clear(ClearType::UntilNewLine))?;
        }

        draw_bar(out, rows.saturating_sub(1), cols, &bottom)?;
        queue!(out, EndSynchronizedUpdate)?;
        out.flush()
    }

    fn resize(&mut self, world: &World) -> io::Result<()> {
        queue!(self.guard.out, terminal::Clear(ClearType::All))?;
        self.update(world)
    }

    fn quit(&mut self) -> io::Result<bool> {
        let (cols, rows) = terminal::size()?;
        let out = &mut self.guard.out;
        draw_bar(out, rows.saturating_sub(1), cols, "Are you sure to quit? [Y/n]")?;
        out.flush()?;
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(matches!(
                        key.code,
                        KeyCode::Char('Y') | KeyCode::Char('y') | KeyCode::Enter
                    ));
                }
            }
        }
    }

    fn pause(&mut self) {
        self.status = RunStatus::Paused;
        if let Some(instant) = self.start_time.take() {
            self.timing += instant.elapsed();
        }
    }

    fn start(&mut self) {
        self.status = RunStatus::Running;
        self.start_time = Some(Instant::now());
    }

    fn finish(&mut self, status: RunStatus) {
        self.pause();
        self.status = status;
    }

    /// Advances the world by one generation, and stops running when
    /// the world is stable or the target is reached.
    fn advance(&mut self, world: &mut World) {
        let status = world.step();
        if let Some(end) = end_status(status, world.generation(), self.target) {
            self.finish(end);
        }
    }
}

/// Whether a run ends after a step, whether it was running or single-stepped.
fn end_status(status: Status, generation: u64, target: u64) -> Option<RunStatus> {
    if status == Status::Stable {
        Some(RunStatus::Stable)
    } else if generation >= target {
        Some(RunStatus::Finished)
    } else {
        None
    }
}

/// Draws a black-on-white bar on a whole row.
fn draw_bar(out: &mut Stdout, row: u16, cols: u16, text: &str) -> io::Result<()> {
    let cols = cols as usize;
    let text: String = format!("{:<width$}", text, width = cols)
        .chars()
        .take(cols)
        .collect();
    queue!(
        out,
        cursor::MoveTo(0, row),
        SetForegroundColor(Color::Black),
        SetBackgroundColor(Color::White),
        Print(text),
        ResetColor
    )
}

/// Runs the world in the terminal for at most `generations` generations,
/// waiting `delay` between two generations.
pub(crate) fn run_with_tui(
    world: &mut World,
    generations: u64,
    delay: Duration,
) -> io::Result<()> {
    let target = world.generation().saturating_add(generations);
    let mut window = WorldWindow::new(target)?;
    if generations == 0 {
        window.finish(RunStatus::Finished);
    } else {
        window.start();
    }
    window.update(world)?;

    loop {
        let event = if window.status == RunStatus::Running {
            if event::poll(delay)? {
                Some(event::read()?)
            } else {
                None
            }
        } else {
            Some(event::read()?)
        };

        match event {
            Some(Event::Key(key)) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') => match window.status {
                    RunStatus::Running | RunStatus::Paused => {
                        window.pause();
                        window.update(world)?;
                        if window.quit()? {
                            break;
                        } else {
                            window.update(world)?;
                        }
                    }
                    _ => break,
                },
                KeyCode::Char(' ') | KeyCode::Enter => match window.status {
                    RunStatus::Running => {
                        window.pause();
                        window.update(world)?;
                    }
                    RunStatus::Paused => {
                        window.start();
                        window.update(world)?;
                    }
                    _ => (),
                },
                KeyCode::Right | KeyCode::Char('n') if window.status == RunStatus::Paused => {
                    window.advance(world);
                    window.update(world)?;
                }
                _ => (),
            },
            Some(Event::Resize(..)) => window.resize(world)?,
            Some(_) => (),
            None => {
                window.advance(world);
                window.update(world)?;
            }
        }
    }

    debug!(
        "Left the TUI at generation {} after {:.2?}",
        world.generation(),
        window.elapsed()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_of_run() {
        assert_eq!(end_status(Status::Evolving, 3, 5), None);
        assert_eq!(end_status(Status::Evolving, 5, 5), Some(RunStatus::Finished));
        assert_eq!(end_status(Status::Evolving, 6, 5), Some(RunStatus::Finished));
        assert_eq!(end_status(Status::Stable, 2, 5), Some(RunStatus::Stable));
        assert_eq!(end_status(Status::Stable, 5, 5), Some(RunStatus::Stable));
    }
}
