pub mod config;
pub mod error;
pub mod types;

pub use config::{load_preset, load_view_config, RenderConfig, ViewConfig};
pub use error::{HexError, Result};
pub use types::{Frame, Insets, Point, Point2D, Rect, Size};
