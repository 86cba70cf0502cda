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

//! The display sink the state machine renders into.

/// Join display lines into one renderable block.
///
/// Lines keep their order and are separated by `\n` with no trailing
/// separator after the last line.
pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n")
}

/// Sink for the calculator's line buffer.
///
/// Called synchronously after every committed mutation; implementations hold
/// whatever the screen needs for the next frame.
pub trait DisplaySink {
    /// Receive the current lines, oldest first.
    fn render(&mut self, lines: &[String]);
}

/// Plain-text sink storing the joined block for the frame drawer.
#[derive(Debug, Default)]
pub struct TextDisplay {
    block: String,
}

impl TextDisplay {
    /// The most recently rendered block.
    pub fn block(&self) -> &str {
        &self.block
    }
}

impl DisplaySink for TextDisplay {
    fn render(&mut self, lines: &[String]) {
        self.block = join_lines(lines);
    }
}
