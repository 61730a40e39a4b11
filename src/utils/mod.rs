pub mod environment;
pub mod paths;

pub use environment::{DEFAULT_PAGE_SIZE, DataPaths, get_data_dir, get_page_size};
pub use paths::{open_validated_file, read_file_bytes, validate_file_size, validate_folder_name};
