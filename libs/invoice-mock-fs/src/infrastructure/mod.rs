//! Infrastructure implementations of the domain ports

mod fs_repository;

pub use fs_repository::FsFixtureRepository;
