//! A single-screen breakout game. The whole session lives in
//! [game::GameWorld], which gets driven by `lib_game::App`.

pub mod game;
