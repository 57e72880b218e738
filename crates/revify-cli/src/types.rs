use std::path::PathBuf;

use revify_core::ClassifiedBatch;
use revify_model::LabelStyle;

#[derive(Debug)]
pub struct BatchResult {
    pub input: PathBuf,
    /// Written CSV, `None` on dry runs.
    pub output: Option<PathBuf>,
    pub label_style: LabelStyle,
    pub batch: ClassifiedBatch,
}
