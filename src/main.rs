//! Hexweave - Entry Point
//!
//! Lays out a configured hex grid for a given container size and prints the
//! resulting cell rectangles, hexagon vertices and centres.
//!
//! Usage:
//!   cargo run -- --preset battle --width 408 --height 534 --count 36

use clap::{Parser, ValueEnum};
use hexweave::board::HexBoard;
use hexweave::core::config::{load_preset, load_view_config, ViewConfig};
use hexweave::core::error::Result;
use hexweave::core::types::{Frame, Insets, Point, Point2D, Rect, Size};
use hexweave::render::{paint_hex, DrawList, HexAppearance};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Text,
}

/// Print the layout of a true hex grid
#[derive(Parser, Debug)]
#[command(name = "hexweave")]
#[command(about = "Lay out a true hex grid and print cell geometry")]
struct Args {
    /// View config file (TOML)
    #[arg(long, conflicts_with = "preset")]
    config: Option<PathBuf>,

    /// Named preset from data/grids/
    #[arg(long)]
    preset: Option<String>,

    /// Container width in pixels
    #[arg(long, default_value_t = 408)]
    width: i32,

    /// Container height in pixels
    #[arg(long, default_value_t = 534)]
    height: i32,

    /// Number of cells to lay out
    #[arg(long, default_value_t = 36)]
    count: usize,

    /// Uniform inset on every side of the container
    #[arg(long, default_value_t = 0)]
    inset: i32,

    /// Mark this cell index as selected
    #[arg(long)]
    select: Option<usize>,

    /// Include each cell's draw list in JSON output
    #[arg(long)]
    draw: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Serialize)]
struct CellReport {
    index: usize,
    rect: Rect,
    vertices: [Point2D; 6],
    center: Point,
    selected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    draw: Option<DrawList>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hexweave=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match (&args.config, &args.preset) {
        (Some(path), _) => load_view_config(path)?,
        (None, Some(name)) => load_preset(name)?,
        (None, None) => ViewConfig::default(),
    };
    tracing::info!(grid = ?config.grid, "Using grid");

    let mut board = HexBoard::from_config(&config);
    for i in 0..args.count {
        board.push(i);
    }
    if let Some(index) = args.select {
        match board.cell_mut(index) {
            Some(cell) => cell.select(),
            None => tracing::warn!(index, count = args.count, "Selected cell does not exist"),
        }
    }

    let frame = Frame::new(Size::new(args.width, args.height), Insets::uniform(args.inset));
    board.relayout(frame);

    let appearance = HexAppearance::default();
    let reports: Vec<CellReport> = board
        .cells()
        .iter()
        .enumerate()
        .map(|(index, cell)| CellReport {
            index,
            rect: cell.bounds(),
            vertices: *cell.shape().vertices(),
            center: cell.find_center(),
            selected: cell.is_selected(),
            draw: args
                .draw
                .then(|| paint_hex(cell, &appearance, board.render_config())),
        })
        .collect();

    match args.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        Format::Text => {
            if let Some(m) = board.metrics() {
                println!(
                    "{} rows x {} cols, cell {}x{}, indent {}, gap {}",
                    m.rows, m.cols, m.comp_width, m.comp_height, m.row_indent, m.vgap
                );
            }
            for r in &reports {
                println!(
                    "{:>4}  rect ({}, {}, {}x{})  center ({}, {}){}",
                    r.index,
                    r.rect.x,
                    r.rect.y,
                    r.rect.width,
                    r.rect.height,
                    r.center.x,
                    r.center.y,
                    if r.selected { "  *" } else { "" }
                );
            }
        }
    }

    Ok(())
}
