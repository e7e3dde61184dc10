//! Storage traits for the dashboard entities
//!
//! Every lookup returns `Ok(None)` for an unknown identifier. `Err` is
//! reserved for failures of the backend itself.

use crate::Result;
use agrosakhi_types::{
    Advisory, Course, Device, DeviceHistory, DevicePatch, EntityId, InsertAdvisory, InsertCourse,
    InsertDevice, InsertProduct, InsertScheme, InsertTask, InsertUser, InsertWeather, MarketInfo,
    Product, Scheme, Task, TaskPatch, User, UserPatch, Weather,
};
use async_trait::async_trait;

/// User store
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get_user(&self, id: EntityId) -> Result<Option<User>>;
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    /// Does not check username uniqueness.
    async fn create_user(&self, user: InsertUser) -> Result<User>;
    /// Create the user unless the username is taken, atomically.
    /// `Ok(None)` means the username already exists.
    async fn register_user(&self, user: InsertUser) -> Result<Option<User>>;
    async fn update_user(&self, id: EntityId, patch: UserPatch) -> Result<Option<User>>;
}

/// Device store
#[async_trait]
pub trait DeviceStore: Send + Sync {
    /// Devices owned by `user_id`, in insertion order
    async fn get_devices(&self, user_id: EntityId) -> Result<Vec<Device>>;
    async fn get_device(&self, id: EntityId) -> Result<Option<Device>>;
    async fn create_device(&self, device: InsertDevice) -> Result<Device>;
    async fn update_device(&self, id: EntityId, patch: DevicePatch) -> Result<Option<Device>>;
    async fn get_device_history(&self, device_id: EntityId) -> Result<Option<DeviceHistory>>;
}

/// Task store
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Tasks owned by `user_id`, in insertion order
    async fn get_tasks(&self, user_id: EntityId) -> Result<Vec<Task>>;
    async fn get_task(&self, id: EntityId) -> Result<Option<Task>>;
    async fn create_task(&self, task: InsertTask) -> Result<Task>;
    async fn update_task(&self, id: EntityId, patch: TaskPatch) -> Result<Option<Task>>;
    /// Moves a pending task to completed. Tasks in any other status are
    /// returned unchanged.
    async fn start_task(&self, id: EntityId) -> Result<Option<Task>>;
}

/// Weather store (single record)
#[async_trait]
pub trait WeatherStore: Send + Sync {
    async fn get_weather(&self) -> Result<Option<Weather>>;
    async fn update_weather(&self, weather: InsertWeather) -> Result<Weather>;
}

/// Advisory store
#[async_trait]
pub trait AdvisoryStore: Send + Sync {
    async fn get_advisories(&self) -> Result<Vec<Advisory>>;
    async fn get_advisory(&self, id: EntityId) -> Result<Option<Advisory>>;
    async fn create_advisory(&self, advisory: InsertAdvisory) -> Result<Advisory>;
}

/// Course store
#[async_trait]
pub trait CourseStore: Send + Sync {
    async fn get_courses(&self) -> Result<Vec<Course>>;
    async fn get_course(&self, id: EntityId) -> Result<Option<Course>>;
    /// The first course inserted, regardless of progress
    async fn get_current_course(&self) -> Result<Option<Course>>;
    async fn create_course(&self, course: InsertCourse) -> Result<Course>;
}

/// Market summary
#[async_trait]
pub trait MarketStore: Send + Sync {
    async fn get_market_info(&self) -> Result<Option<MarketInfo>>;
}

/// Product store
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn get_products(&self) -> Result<Vec<Product>>;
    async fn get_product(&self, id: EntityId) -> Result<Option<Product>>;
    async fn create_product(&self, product: InsertProduct) -> Result<Product>;
}

/// Scheme store
#[async_trait]
pub trait SchemeStore: Send + Sync {
    async fn get_schemes(&self) -> Result<Vec<Scheme>>;
    async fn get_scheme(&self, id: EntityId) -> Result<Option<Scheme>>;
    async fn create_scheme(&self, scheme: InsertScheme) -> Result<Scheme>;
}

/// Everything the HTTP layer needs from a backend
pub trait Storage:
    UserStore
    + DeviceStore
    + TaskStore
    + WeatherStore
    + AdvisoryStore
    + CourseStore
    + MarketStore
    + ProductStore
    + SchemeStore
{
}

impl<T> Storage for T where
    T: UserStore
        + DeviceStore
        + TaskStore
        + WeatherStore
        + AdvisoryStore
        + CourseStore
        + MarketStore
        + ProductStore
        + SchemeStore
{
}
