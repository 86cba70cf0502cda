/*
   Copyright (C) 2026 l5yth

   Licensed under the Apache License, Version 2.0 (the "License");
   you may not use this file except in compliance with the License.
   You may obtain a copy of the License at

       http://www.apache.org/licenses/LICENSE-2.0

   Unless required by applicable law or agreed to in writing, software
   distributed under the License is distributed on an "AS IS" BASIS,
   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
   See the License for the specific language governing permissions and
   limitations under the License.
*/

//! Runtime TUI orchestration.
//!
//! Responsibilities are split across submodules:
//! - `input`: key translation into shell commands
//! - `render`: frame rendering for the display, keypad, and footer
//! - `state`: pure status text helpers

pub mod input;
pub mod render;
pub mod state;

#[cfg(not(test))]
use anyhow::Context;
use anyhow::Result;
#[cfg(not(test))]
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
#[cfg(not(test))]
use ratatui::prelude::*;
#[cfg(not(test))]
use std::{env, io, time::Duration};

#[cfg(not(test))]
use crate::{
    cli::{parse_args, usage, version_text},
    display::TextDisplay,
    engine::Calculator,
    keypad::{KEYPAD, step_selection},
};

#[cfg(not(test))]
use self::{
    input::{UiCommand, map_key},
    render::draw_frame,
    state::{error_status_text, idle_status_text},
};

#[cfg(not(test))]
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("enable_raw_mode failed")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("EnterAlternateScreen failed")?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

#[cfg(not(test))]
fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
    Ok(())
}

/// Run the interactive terminal UI.
#[cfg(not(test))]
pub fn run() -> Result<()> {
    let config = parse_args(env::args())?;
    if config.show_version {
        println!("{}", version_text());
        return Ok(());
    }
    if config.show_help {
        println!("{}", usage());
        return Ok(());
    }

    let mut terminal = setup_terminal()?;

    // The one calculator instance for the process lifetime, owned here and
    // passed down by reference.
    let mut calculator = Calculator::new(TextDisplay::default());
    let mut selected = (0usize, 0usize);
    let mut status_line = idle_status_text(calculator.phase());

    let res = (|| -> Result<()> {
        loop {
            terminal.draw(|f| {
                draw_frame(f, calculator.sink().block(), selected, &status_line);
            })?;

            if event::poll(Duration::from_millis(50))?
                && let Event::Key(k) = event::read()?
                && k.kind == KeyEventKind::Press
                && let Some(cmd) = map_key(k.code)
            {
                match cmd {
                    UiCommand::Quit => break,
                    UiCommand::Move(direction) => {
                        selected = step_selection(selected, direction);
                    }
                    UiCommand::PressSelected => {
                        let event = KEYPAD[selected.0][selected.1].event;
                        status_line = match calculator.handle(event) {
                            Ok(()) => idle_status_text(calculator.phase()),
                            Err(e) => error_status_text(&e),
                        };
                    }
                    UiCommand::Press(event) => {
                        status_line = match calculator.handle(event) {
                            Ok(()) => idle_status_text(calculator.phase()),
                            Err(e) => error_status_text(&e),
                        };
                    }
                }
            }
        }
        Ok(())
    })();

    restore_terminal(terminal)?;
    res
}

/// Test-build runner stub for the TUI runtime module.
#[cfg(test)]
pub fn run() -> Result<()> {
    Ok(())
}
