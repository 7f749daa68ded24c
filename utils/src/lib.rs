//! Shared numeric and rendering helpers for the workspace.

mod fixed_point;
mod render;
mod series;

pub use fixed_point::from_fixed_point;
pub use render::{
    format_bps, format_delta, format_money, format_pct, format_pct_opt, format_price, utc_stamp,
    NO_DATA,
};
pub use series::{window_average, window_delta, Delta, SeriesPoint};
