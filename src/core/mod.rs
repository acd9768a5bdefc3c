pub mod bar;
pub mod dataset;
pub mod doughnut;
pub mod line;
pub mod palette;
pub mod scale;
pub mod surface;
pub mod text;
pub mod types;

pub use bar::{BarLayout, BarOrientation, BarRow, layout_bars};
pub use dataset::{ChartEntry, Dataset, parse_entries_json};
pub use doughnut::{DoughnutGeometry, Segment, project_doughnut};
pub use line::{LineLayout, PlotPoint, TickLabel, layout_line};
pub use palette::{EntryStatus, PALETTE_SIZE, palette_color, pick_color};
pub use scale::LinearScale;
pub use surface::{SurfaceMetrics, SurfaceRequest};
pub use text::{ellipsize, estimate_text_width, format_value};
pub use types::Viewport;
