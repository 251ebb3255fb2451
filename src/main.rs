// This file is part of the kingrace library.
// Copyright (C) 2026 The kingrace developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! Two players at one terminal.

use std::io::{self, BufRead, Write};

use kingrace::Game;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Prompts for one square. `None` once stdin is closed.
fn prompt(
    input: &mut impl BufRead,
    out: &mut impl Write,
    text: &str,
) -> io::Result<Option<String>> {
    write!(out, "{text} ")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut game = Game::new();
    info!("new game");
    writeln!(out, "{}", game.board())?;

    while !game.game_state().is_finished() {
        let side = game.turn().upper_name();
        let from_prompt = format!("{side}'s turn. Enter 'from' square:");
        let Some(from) = prompt(&mut input, &mut out, &from_prompt)? else {
            break;
        };
        let to_prompt = format!("{side}'s turn. Enter 'to' square:");
        let Some(to) = prompt(&mut input, &mut out, &to_prompt)? else {
            break;
        };

        match game.play(&from, &to) {
            Ok(()) => writeln!(out, "{}", game.board())?,
            Err(err) => writeln!(out, "Invalid move: {err}. Try again.")?,
        }
    }

    writeln!(out, "Game over. Final state: {}", game.game_state())?;
    Ok(())
}
