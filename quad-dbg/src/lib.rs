//! Debugging aids drawn straight on top of the game with macroquad:
//! * [ScreenCons] -- a `log` sink that keeps the latest lines on screen
//! * [ScreenDump] and [dump!] -- a per-frame list of watched values
//! * [CommandCenter] -- a one-line command prompt

mod cmd;
mod screencon;
mod screendump;
mod screentext;

pub use cmd::*;
pub use screencon::*;
pub use screendump::*;
