//! ConsolePresenter: line-oriented play over any reader/writer pair.
//!
//! The maze is printed with the text channel of each display token (a glyph,
//! optionally wrapped in its SGR color). Input is read as whitespace-separated
//! tokens; the first character of each token is forwarded to the engine and the
//! maze is printed again.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::debug;

use crate::core::{render, MazeEngine, RenderFrame};
use crate::types::PlayState;

pub const SOLVED_MESSAGE: &str = "Congratulations! You solved the maze!";

/// Write the text channel of `frame`, one line per maze row.
pub fn write_frame<W: Write>(out: &mut W, frame: &RenderFrame, color: bool) -> io::Result<()> {
    for row in 0..frame.rows() {
        for token in frame.row(row).unwrap_or_default() {
            match token.text_color().sgr() {
                Some(code) if color => write!(out, "\x1b[{}m{}\x1b[0m", code, token.glyph())?,
                _ => write!(out, "{}", token.glyph())?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

pub struct ConsolePresenter<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> ConsolePresenter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            color: true,
        }
    }

    /// Toggle SGR color codes (off for pipes and tests).
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn print_maze(&mut self, engine: &MazeEngine) -> Result<()> {
        write_frame(&mut self.output, &render(engine), self.color)?;
        writeln!(self.output, "Moves: {}", engine.moves())?;
        self.output.flush()?;
        Ok(())
    }

    /// Play until the maze ends or input runs out.
    ///
    /// Returns the engine state at the end; `Playing` means the input closed first.
    pub fn run(&mut self, engine: &mut MazeEngine) -> Result<PlayState> {
        self.print_maze(engine)?;

        let mut line = String::new();
        'play: while !engine.state().is_terminal() {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!(moves = engine.moves(), "console input closed");
                break;
            }
            for token in line.split_whitespace() {
                let Some(symbol) = token.chars().next() else {
                    continue;
                };
                let outcome = engine.input(symbol);
                self.print_maze(engine)?;
                if outcome.is_terminal() {
                    break 'play;
                }
            }
        }

        let state = engine.state();
        match state {
            PlayState::Solved => writeln!(self.output, "{}", SOLVED_MESSAGE)?,
            PlayState::DeclaredUnsolvable => {
                if let Err(err) = engine.check_solvable() {
                    writeln!(self.output, "{}", err)?;
                }
            }
            PlayState::Playing => {
                writeln!(self.output, "Maze left unsolved after {} moves.", engine.moves())?
            }
        }
        self.output.flush()?;
        Ok(state)
    }
}
