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

//! Four-function calculator in a terminal UI.
//!
//! The crate splits into a deterministic core and a thin shell:
//! - `engine`: the two-operand calculator state machine
//! - `display`: the line-buffer sink rendered by the shell
//! - `keypad`: the on-screen button grid model
//! - `cli`: command-line parsing and usage text
//! - `app`: the terminal runtime driving the whole thing

pub mod app;
pub mod cli;
pub mod display;
pub mod engine;
pub mod keypad;
