//! Port traits (interfaces) for dependency injection

pub mod storage;

pub use storage::{
    AdvisoryStore, CourseStore, DeviceStore, MarketStore, ProductStore, SchemeStore, Storage,
    TaskStore, UserStore, WeatherStore,
};
