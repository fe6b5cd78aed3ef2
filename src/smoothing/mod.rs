//! Signal smoothing vignettes.
//!
//! Two smoothing routines:
//!
//! - **EMA**: exponential moving average with a fixed smoothing factor
//! - **Savitzky–Golay**: 5-point quadratic least-squares smoothing

pub mod ema;
pub mod savgol;

pub use ema::{ema_series, ema_update};
pub use savgol::savgol_smooth;

/// Default EMA smoothing factor used by the demo data.
pub const DEFAULT_SMOOTHING: f64 = 0.1;
