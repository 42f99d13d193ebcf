mod csv_directory_repository;
mod traits;

pub use csv_directory_repository::CsvDirectoryRepository;
pub use traits::DirectoryRepository;
