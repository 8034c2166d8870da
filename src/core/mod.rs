/// Field separator validation.
pub mod delimiter;

/// Writer seam and batch writing.
pub mod item;

/// Safety switches and line terminators.
pub mod policy;

/// Quoting decision and quoted field encoding.
pub mod quoting;

/// Leading character neutralization.
pub mod sanitize;
