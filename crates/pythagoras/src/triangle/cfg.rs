//! Tolerance defaults for the right-angle checks.
//!
//! Policy
//! - A single fixed absolute tolerance. Callers with very large sides should
//!   pass their own via the `_eps` variants or `TriangleCfg`, since an
//!   absolute slack of 1e-9 is below the f64 spacing past roughly 1e7.

/// Absolute slack for `|sqrt(a² + b²) − c| < eps` in the right-angle checks.
pub const RIGHT_EPS: f64 = 1e-9;
