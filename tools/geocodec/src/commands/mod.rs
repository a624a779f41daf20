pub mod classify;
pub mod decode;
pub mod encode;

/// Field name under which single values are pushed through the pipeline.
const VALUE_FIELD: &str = "value";
