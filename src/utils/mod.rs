mod fs;
mod hash;

pub use fs::{DATE_FORMAT, format_date, modified_date, relative_name};
pub use hash::{HashResult, compute_file_hash};
