//! Property-based tests for post-processing and parameter sampling

mod postprocess;
