pub mod service;

pub use service::ActivityService;
