pub mod identity_repository;
