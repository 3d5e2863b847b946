//! Hexweave - true hexagonal grid layout and hex geometry for board views

pub mod board;
pub mod cell;
pub mod core;
pub mod hex;
pub mod layout;
pub mod render;
