use std::{
    io::{self, stdout, Stdout, Write},
    thread,
    time::Duration,
};

use crossterm as ct;
use ct::{
    cursor::MoveToColumn,
    style::Print,
    terminal::{Clear, ClearType},
};
use log::warn;

use crate::env::State;

/// Receives the agent's position after every reset and transition
///
/// Presenters only observe. Training never depends on what they do or how long
/// they take.
pub trait Presenter {
    fn on_step(&mut self, state: State, episode: u32, step: usize);
}

/// A presenter that draws nothing
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn on_step(&mut self, _state: State, _episode: u32, _step: usize) {}
}

/// Draw the world as a single line of text
///
/// A cell state renders each cell as `-`, the agent as `o` and the goal as `T`.
/// The terminal state renders a summary of the finished episode instead, with
/// episodes counted from 1.
pub fn render_line(state: State, size: usize, episode: u32, step: usize) -> String {
    match state {
        State::Cell(pos) => (0..size)
            .map(|i| {
                if i == pos {
                    'o'
                } else if i == size - 1 {
                    'T'
                } else {
                    '-'
                }
            })
            .collect(),
        State::Terminal => format!(
            "Episode: [{}]: total steps spending: [{}]",
            episode + 1,
            step
        ),
    }
}

/// Redraws the world in place on one terminal line and paces training so it can be watched
pub struct ConsolePresenter<W: Write = Stdout> {
    out: W,
    size: usize,
    fresh_time: Duration,
    episode_pause: Duration,
}

impl ConsolePresenter<Stdout> {
    /// Draw to stdout
    pub fn stdout(size: usize, fresh_time: Duration, episode_pause: Duration) -> Self {
        Self::new(stdout(), size, fresh_time, episode_pause)
    }
}

impl<W: Write> ConsolePresenter<W> {
    /// ### Parameters
    /// - `size` - Number of cells in the world
    /// - `fresh_time` - Pause after drawing a cell state
    /// - `episode_pause` - Pause after drawing an episode summary
    pub fn new(out: W, size: usize, fresh_time: Duration, episode_pause: Duration) -> Self {
        Self {
            out,
            size,
            fresh_time,
            episode_pause,
        }
    }

    /// Consume the presenter, returning the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, line: &str) -> io::Result<()> {
        ct::queue!(
            self.out,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(line)
        )?;
        self.out.flush()
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn on_step(&mut self, state: State, episode: u32, step: usize) {
        let line = render_line(state, self.size, episode, step);
        if let Err(e) = self.draw(&line) {
            warn!("Failed to draw state {state}: {e}");
        }

        let pause = match state {
            State::Cell(_) => self.fresh_time,
            State::Terminal => self.episode_pause,
        };
        if !pause.is_zero() {
            thread::sleep(pause);
        }
    }
}
