//! Features layer - one module per API resource

pub mod schools;
