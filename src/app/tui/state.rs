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

//! Small state helpers for footer status text generation.

use crate::engine::{CalcError, Phase};

const KEY_HINTS: &str = "0-9: digits | + - x /: operator | =: equals | c: clear | q: quit";

/// Short label for the current phase.
pub fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::EnteringFirst => "first operand",
        Phase::EnteringSecond => "second operand",
        Phase::ShowingResult => "result",
    }
}

/// Footer text for normal operation.
pub fn idle_status_text(phase: Phase) -> String {
    format!("{} | {KEY_HINTS}", phase_label(phase))
}

/// Footer text after a failed calculator step.
pub fn error_status_text(error: &CalcError) -> String {
    format!("error: {error} | {KEY_HINTS}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_status_text_names_the_phase() {
        assert!(idle_status_text(Phase::EnteringFirst).starts_with("first operand"));
        assert!(idle_status_text(Phase::EnteringSecond).starts_with("second operand"));
        assert!(idle_status_text(Phase::ShowingResult).starts_with("result"));
    }

    #[test]
    fn idle_status_text_lists_key_hints() {
        let s = idle_status_text(Phase::EnteringFirst);
        assert!(s.contains("q: quit"));
        assert!(s.contains("c: clear"));
    }

    #[test]
    fn error_status_text_mentions_the_error() {
        let s = error_status_text(&CalcError::DivisionByZero);
        assert!(s.contains("error: division by zero"));
        assert!(s.contains("q: quit"));
    }
}
