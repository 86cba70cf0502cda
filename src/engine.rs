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

//! The two-operand calculator state machine.
//!
//! One pending operator, one running accumulator, a four-line sliding display
//! buffer. Events come in from the shell as a closed [`CalcEvent`] set; every
//! committed mutation synchronously re-renders through the owned
//! [`DisplaySink`].

use crate::display::DisplaySink;

/// Number of lines in the sliding display buffer.
pub const LINE_COUNT: usize = 4;

/// Binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Glyph shown on the operator line of the display.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "x",
            Self::Divide => "/",
        }
    }
}

/// Where the calculator sits in the enter/enter/result cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Collecting digits of the first operand.
    EnteringFirst,
    /// Collecting digits of the second operand.
    EnteringSecond,
    /// The result line is on screen; the next advance starts over.
    ShowingResult,
}

/// One discrete input event from the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcEvent {
    /// A digit 0-9 was pressed.
    Digit(u8),
    /// An operator button was pressed.
    Operator(Operator),
    /// The equals button was pressed.
    Equals,
    /// The clear button was pressed.
    Clear,
}

/// Failure modes of a single calculator step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    InvalidOperand { text: String },
    DivisionByZero,
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOperand { text } if text.is_empty() => {
                write!(f, "invalid operand: (empty)")
            }
            Self::InvalidOperand { text } => write!(f, "invalid operand: {text}"),
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for CalcError {}

/// Render an accumulator value; integral results drop the fractional part.
pub fn format_result(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

fn parse_operand(text: &str) -> Result<i64, CalcError> {
    text.parse::<i64>().map_err(|_| CalcError::InvalidOperand {
        text: text.to_string(),
    })
}

/// The calculator state machine.
///
/// Owns its display sink and calls [`DisplaySink::render`] after every
/// committed mutation. A failed [`Calculator::advance`] leaves all state
/// untouched.
#[derive(Debug)]
pub struct Calculator<S: DisplaySink> {
    lines: Vec<String>,
    pending: Option<Operator>,
    accumulator: f64,
    phase: Phase,
    sink: S,
}

impl<S: DisplaySink> Calculator<S> {
    /// Create a calculator with an empty four-line buffer and render once.
    pub fn new(sink: S) -> Self {
        let mut calc = Self {
            lines: vec![String::new(); LINE_COUNT],
            pending: None,
            accumulator: 0.0,
            phase: Phase::EnteringFirst,
            sink,
        };
        calc.render();
        calc
    }

    /// Current display lines, oldest first. Always [`LINE_COUNT`] long.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Running accumulator value.
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Currently pending operator, if any.
    pub fn pending(&self) -> Option<Operator> {
        self.pending
    }

    /// Borrow the display sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Dispatch one shell event.
    ///
    /// Operator presses pair selection with an immediate advance, matching
    /// the button wiring: equals and operator buttons both move the cycle
    /// forward.
    pub fn handle(&mut self, event: CalcEvent) -> Result<(), CalcError> {
        match event {
            CalcEvent::Digit(d) => {
                self.append_digit(d);
                Ok(())
            }
            CalcEvent::Operator(op) => {
                self.select_operator(op);
                self.advance()
            }
            CalcEvent::Equals => self.advance(),
            CalcEvent::Clear => {
                self.clear();
                Ok(())
            }
        }
    }

    /// Append a digit to the current input line. Valid in any phase.
    pub fn append_digit(&mut self, digit: u8) {
        if let Some(line) = self.lines.last_mut() {
            line.push_str(&(digit % 10).to_string());
        }
        self.render();
    }

    /// Store the pending operator. Phase is unchanged until the next advance.
    pub fn select_operator(&mut self, op: Operator) {
        self.pending = Some(op);
    }

    /// Move the cycle one step forward.
    ///
    /// EnteringFirst captures the first operand and writes the operator
    /// glyph; EnteringSecond computes the result; ShowingResult resets for
    /// the next calculation. Parse failures and division by zero abort the
    /// step without touching any state.
    pub fn advance(&mut self) -> Result<(), CalcError> {
        match self.phase {
            Phase::EnteringFirst => {
                let first = parse_operand(self.current_line())?;
                self.accumulator = first as f64;
                self.phase = Phase::EnteringSecond;
                self.new_line();
                if let Some(op) = self.pending
                    && let Some(line) = self.lines.last_mut()
                {
                    line.push_str(op.glyph());
                }
                self.new_line();
                self.render();
            }
            Phase::EnteringSecond => {
                let second = parse_operand(self.current_line())?;
                if self.pending == Some(Operator::Divide) && second == 0 {
                    return Err(CalcError::DivisionByZero);
                }
                match self.pending {
                    Some(Operator::Add) => self.accumulator += second as f64,
                    Some(Operator::Subtract) => self.accumulator -= second as f64,
                    Some(Operator::Multiply) => self.accumulator *= second as f64,
                    Some(Operator::Divide) => self.accumulator /= second as f64,
                    None => {}
                }
                self.phase = Phase::ShowingResult;
                self.new_line();
                let result = format_result(self.accumulator);
                if let Some(line) = self.lines.last_mut() {
                    line.push_str(&result);
                }
                self.render();
            }
            Phase::ShowingResult => {
                // Start the next calculation from scratch. Carrying the
                // accumulator and operator over would make the next entry
                // silently compute against stale state.
                self.reset();
            }
        }
        Ok(())
    }

    /// Reset accumulator, operator, phase, and buffer to the initial state.
    pub fn clear(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.accumulator = 0.0;
        self.pending = None;
        self.phase = Phase::EnteringFirst;
        self.lines = vec![String::new(); LINE_COUNT];
        self.render();
    }

    fn current_line(&self) -> &str {
        self.lines.last().map(String::as_str).unwrap_or_default()
    }

    /// Slide the window: drop the oldest line, append a fresh one.
    fn new_line(&mut self) {
        self.lines.remove(0);
        self.lines.push(String::new());
    }

    fn render(&mut self) {
        self.sink.render(&self.lines);
    }
}
