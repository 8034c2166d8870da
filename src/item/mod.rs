/// This module provides the safe CSV writer.
pub mod csv;
