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

//! Key-event translation into shell commands.

use crossterm::event::KeyCode;

use crate::engine::{CalcEvent, Operator};
use crate::keypad::Direction;

/// High-level UI command mapped from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    Quit,
    /// Deliver a calculator event directly, bypassing the keypad selection.
    Press(CalcEvent),
    /// Move the keypad selection.
    Move(Direction),
    /// Press the currently selected keypad button.
    PressSelected,
}

/// Translate a key press to a UI command.
pub fn map_key(key: KeyCode) -> Option<UiCommand> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(UiCommand::Quit),
        KeyCode::Char(c @ '0'..='9') => {
            let digit = c.to_digit(10)? as u8;
            Some(UiCommand::Press(CalcEvent::Digit(digit)))
        }
        KeyCode::Char('+') => Some(UiCommand::Press(CalcEvent::Operator(Operator::Add))),
        KeyCode::Char('-') => Some(UiCommand::Press(CalcEvent::Operator(Operator::Subtract))),
        KeyCode::Char('x') | KeyCode::Char('*') => {
            Some(UiCommand::Press(CalcEvent::Operator(Operator::Multiply)))
        }
        KeyCode::Char('/') => Some(UiCommand::Press(CalcEvent::Operator(Operator::Divide))),
        KeyCode::Char('=') => Some(UiCommand::Press(CalcEvent::Equals)),
        KeyCode::Char('c') => Some(UiCommand::Press(CalcEvent::Clear)),
        KeyCode::Up => Some(UiCommand::Move(Direction::Up)),
        KeyCode::Down => Some(UiCommand::Move(Direction::Down)),
        KeyCode::Left => Some(UiCommand::Move(Direction::Left)),
        KeyCode::Right => Some(UiCommand::Move(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(UiCommand::PressSelected),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_key_maps_digits_to_digit_events() {
        for (key, digit) in [('0', 0), ('5', 5), ('9', 9)] {
            assert_eq!(
                map_key(KeyCode::Char(key)),
                Some(UiCommand::Press(CalcEvent::Digit(digit)))
            );
        }
    }

    #[test]
    fn map_key_maps_operators_equals_and_clear() {
        assert_eq!(
            map_key(KeyCode::Char('+')),
            Some(UiCommand::Press(CalcEvent::Operator(Operator::Add)))
        );
        assert_eq!(
            map_key(KeyCode::Char('-')),
            Some(UiCommand::Press(CalcEvent::Operator(Operator::Subtract)))
        );
        assert_eq!(
            map_key(KeyCode::Char('x')),
            Some(UiCommand::Press(CalcEvent::Operator(Operator::Multiply)))
        );
        assert_eq!(
            map_key(KeyCode::Char('*')),
            Some(UiCommand::Press(CalcEvent::Operator(Operator::Multiply)))
        );
        assert_eq!(
            map_key(KeyCode::Char('/')),
            Some(UiCommand::Press(CalcEvent::Operator(Operator::Divide)))
        );
        assert_eq!(
            map_key(KeyCode::Char('=')),
            Some(UiCommand::Press(CalcEvent::Equals))
        );
        assert_eq!(
            map_key(KeyCode::Char('c')),
            Some(UiCommand::Press(CalcEvent::Clear))
        );
    }

    #[test]
    fn map_key_maps_navigation_and_activation() {
        assert_eq!(map_key(KeyCode::Up), Some(UiCommand::Move(Direction::Up)));
        assert_eq!(
            map_key(KeyCode::Down),
            Some(UiCommand::Move(Direction::Down))
        );
        assert_eq!(
            map_key(KeyCode::Left),
            Some(UiCommand::Move(Direction::Left))
        );
        assert_eq!(
            map_key(KeyCode::Right),
            Some(UiCommand::Move(Direction::Right))
        );
        assert_eq!(map_key(KeyCode::Enter), Some(UiCommand::PressSelected));
        assert_eq!(map_key(KeyCode::Char(' ')), Some(UiCommand::PressSelected));
    }

    #[test]
    fn map_key_maps_quit_and_ignores_unknown_keys() {
        assert_eq!(map_key(KeyCode::Char('q')), Some(UiCommand::Quit));
        assert_eq!(map_key(KeyCode::Esc), Some(UiCommand::Quit));
        assert_eq!(map_key(KeyCode::Char('z')), None);
        assert_eq!(map_key(KeyCode::Tab), None);
    }
}
