mod engine;
mod engine_config;
mod frame_builder;

pub use engine::ChartEngine;
pub use engine_config::{ChartEngineConfig, ChartKind, DEFAULT_FONT_SIZE_PX};
pub use frame_builder::{
    build_bar_frame, build_doughnut_frame, build_line_frame, tooltip_content_for,
};
