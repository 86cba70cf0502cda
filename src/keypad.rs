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

//! The on-screen keypad grid and selection movement.

use crate::engine::{CalcEvent, Operator};

/// Keypad grid height.
pub const GRID_ROWS: usize = 4;
/// Keypad grid width.
pub const GRID_COLS: usize = 4;

/// One keypad button: its label and the event it fires.
#[derive(Debug, Clone, Copy)]
pub struct KeypadButton {
    /// Text rendered on the button.
    pub label: &'static str,
    /// Event delivered to the calculator when pressed.
    pub event: CalcEvent,
}

const fn digit(label: &'static str, d: u8) -> KeypadButton {
    KeypadButton {
        label,
        event: CalcEvent::Digit(d),
    }
}

const fn operator(label: &'static str, op: Operator) -> KeypadButton {
    KeypadButton {
        label,
        event: CalcEvent::Operator(op),
    }
}

/// Button layout, row-major.
pub const KEYPAD: [[KeypadButton; GRID_COLS]; GRID_ROWS] = [
    [
        digit("1", 1),
        digit("2", 2),
        digit("3", 3),
        KeypadButton {
            label: "CLR",
            event: CalcEvent::Clear,
        },
    ],
    [
        digit("4", 4),
        digit("5", 5),
        digit("6", 6),
        operator("+", Operator::Add),
    ],
    [
        digit("7", 7),
        digit("8", 8),
        digit("9", 9),
        operator("-", Operator::Subtract),
    ],
    [
        digit("0", 0),
        operator("x", Operator::Multiply),
        operator("/", Operator::Divide),
        KeypadButton {
            label: "=",
            event: CalcEvent::Equals,
        },
    ],
];

/// Direction of a selection move on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Move the selection one cell, clamped at the grid edges.
pub fn step_selection((row, col): (usize, usize), direction: Direction) -> (usize, usize) {
    match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => (std::cmp::min(row + 1, GRID_ROWS - 1), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, std::cmp::min(col + 1, GRID_COLS - 1)),
    }
}
