mod model;
mod persistence;

pub use model::{DividerConfig, IndicatorConfig, StripConfig, TextConfig, UnderlineConfig};
pub use persistence::{config_base_dir, load_config, load_session, save_config, save_session};
