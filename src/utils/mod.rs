mod helpers;

pub use helpers::{column_letter, default_output_path, html_escape};
