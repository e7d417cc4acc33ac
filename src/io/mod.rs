pub mod csv;

pub use self::csv::{add_bias_column, load_dataset, read_dataset, Dataset, LoadOptions};
