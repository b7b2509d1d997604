//! Concrete repository implementations.

pub mod activity;
pub mod file;
pub mod user;

pub use activity::ActivityRepository;
pub use file::FileRepository;
pub use user::UserRepository;
