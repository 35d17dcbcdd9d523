pub mod app;
mod board;
mod button;
mod cell;
mod game;
