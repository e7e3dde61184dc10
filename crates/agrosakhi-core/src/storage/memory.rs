//! In-memory storage engine

use super::seed;
use super::table::Table;
use crate::ports::{
    AdvisoryStore, CourseStore, DeviceStore, MarketStore, ProductStore, SchemeStore, TaskStore,
    UserStore, WeatherStore,
};
use crate::Result;
use agrosakhi_types::{
    Advisory, Course, Device, DeviceHistory, DevicePatch, EntityId, InsertAdvisory, InsertCourse,
    InsertDevice, InsertProduct, InsertScheme, InsertTask, InsertUser, InsertWeather, MarketInfo,
    Product, Scheme, Task, TaskPatch, TaskStatus, User, UserPatch, Weather, WEATHER_ID,
};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Process-local store for every dashboard entity. Nothing survives a restart.
pub struct MemStorage {
    pub(crate) users: Table<User>,
    pub(crate) devices: Table<Device>,
    pub(crate) tasks: Table<Task>,
    pub(crate) weather: RwLock<Option<Weather>>,
    pub(crate) advisories: Table<Advisory>,
    pub(crate) courses: Table<Course>,
    pub(crate) products: Table<Product>,
    pub(crate) schemes: Table<Scheme>,
}

impl MemStorage {
    /// Empty store with every id counter at 1
    pub fn new() -> Self {
        Self {
            users: Table::new(),
            devices: Table::new(),
            tasks: Table::new(),
            weather: RwLock::new(None),
            advisories: Table::new(),
            courses: Table::new(),
            products: Table::new(),
            schemes: Table::new(),
        }
    }

    /// Store pre-loaded with the fixed demo dataset
    pub fn seeded() -> Result<Self> {
        let mut storage = Self::new();
        seed::populate(&mut storage)?;
        info!("Loaded demo dataset into in-memory storage");
        Ok(storage)
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemStorage {
    async fn get_user(&self, id: EntityId) -> Result<Option<User>> {
        Ok(self.users.get(id).await)
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self.users.find(|user| user.username == username).await)
    }

    async fn create_user(&self, user: InsertUser) -> Result<User> {
        let user = self.users.create(user).await?;
        info!(id = user.id, username = %user.username, "Created user");
        Ok(user)
    }

    async fn register_user(&self, user: InsertUser) -> Result<Option<User>> {
        let username = user.username.clone();
        let created = self
            .users
            .create_unless(|existing| existing.username == username, user)
            .await?;
        match &created {
            Some(user) => info!(id = user.id, username = %user.username, "Registered user"),
            None => debug!(username = %username, "Username already taken"),
        }
        Ok(created)
    }

    async fn update_user(&self, id: EntityId, patch: UserPatch) -> Result<Option<User>> {
        debug!(id, "Updating user");
        Ok(self.users.update(id, |user| patch.apply_to(user)).await)
    }
}

#[async_trait]
impl DeviceStore for MemStorage {
    async fn get_devices(&self, user_id: EntityId) -> Result<Vec<Device>> {
        Ok(self.devices.filter(|device| device.user_id == user_id).await)
    }

    async fn get_device(&self, id: EntityId) -> Result<Option<Device>> {
        Ok(self.devices.get(id).await)
    }

    async fn create_device(&self, device: InsertDevice) -> Result<Device> {
        let device = self.devices.create(device).await?;
        info!(id = device.id, user_id = device.user_id, kind = %device.kind, "Created device");
        Ok(device)
    }

    async fn update_device(&self, id: EntityId, patch: DevicePatch) -> Result<Option<Device>> {
        debug!(id, "Updating device");
        Ok(self.devices.update(id, |device| patch.apply_to(device)).await)
    }

    async fn get_device_history(&self, device_id: EntityId) -> Result<Option<DeviceHistory>> {
        // Readings are not retained between updates yet, so history is empty.
        Ok(self
            .devices
            .get(device_id)
            .await
            .map(|device| DeviceHistory {
                device_id: device.id,
                history: Vec::new(),
            }))
    }
}

#[async_trait]
impl TaskStore for MemStorage {
    async fn get_tasks(&self, user_id: EntityId) -> Result<Vec<Task>> {
        Ok(self.tasks.filter(|task| task.user_id == user_id).await)
    }

    async fn get_task(&self, id: EntityId) -> Result<Option<Task>> {
        Ok(self.tasks.get(id).await)
    }

    async fn create_task(&self, task: InsertTask) -> Result<Task> {
        let task = self.tasks.create(task).await?;
        info!(id = task.id, user_id = task.user_id, status = %task.status, "Created task");
        Ok(task)
    }

    async fn update_task(&self, id: EntityId, patch: TaskPatch) -> Result<Option<Task>> {
        debug!(id, "Updating task");
        Ok(self.tasks.update(id, |task| patch.apply_to(task)).await)
    }

    async fn start_task(&self, id: EntityId) -> Result<Option<Task>> {
        let task = self
            .tasks
            .update(id, |task| {
                if task.status.is_pending() {
                    TaskPatch::status(TaskStatus::Completed).apply_to(task);
                    info!(id, "Task started and marked completed");
                } else {
                    debug!(id, status = %task.status, "Task is not pending, leaving as is");
                }
            })
            .await;
        Ok(task)
    }
}

#[async_trait]
impl WeatherStore for MemStorage {
    async fn get_weather(&self) -> Result<Option<Weather>> {
        Ok(self.weather.read().await.clone())
    }

    async fn update_weather(&self, weather: InsertWeather) -> Result<Weather> {
        let weather = Weather {
            id: WEATHER_ID,
            temperature: weather.temperature,
            condition: weather.condition,
            humidity: weather.humidity,
            wind: weather.wind,
            rainfall: weather.rainfall,
            alert: weather.alert,
            updated: weather.updated,
            created_at: Utc::now(),
        };
        *self.weather.write().await = Some(weather.clone());
        info!(condition = %weather.condition, "Replaced weather record");
        Ok(weather)
    }
}

#[async_trait]
impl AdvisoryStore for MemStorage {
    async fn get_advisories(&self) -> Result<Vec<Advisory>> {
        Ok(self.advisories.list().await)
    }

    async fn get_advisory(&self, id: EntityId) -> Result<Option<Advisory>> {
        Ok(self.advisories.get(id).await)
    }

    async fn create_advisory(&self, advisory: InsertAdvisory) -> Result<Advisory> {
        let advisory = self.advisories.create(advisory).await?;
        info!(id = advisory.id, "Created advisory");
        Ok(advisory)
    }
}

#[async_trait]
impl CourseStore for MemStorage {
    async fn get_courses(&self) -> Result<Vec<Course>> {
        Ok(self.courses.list().await)
    }

    async fn get_course(&self, id: EntityId) -> Result<Option<Course>> {
        Ok(self.courses.get(id).await)
    }

    async fn get_current_course(&self) -> Result<Option<Course>> {
        Ok(self.courses.first().await)
    }

    async fn create_course(&self, course: InsertCourse) -> Result<Course> {
        let course = self.courses.create(course).await?;
        info!(id = course.id, "Created course");
        Ok(course)
    }
}

#[async_trait]
impl MarketStore for MemStorage {
    async fn get_market_info(&self) -> Result<Option<MarketInfo>> {
        Ok(Some(seed::market_info()))
    }
}

#[async_trait]
impl ProductStore for MemStorage {
    async fn get_products(&self) -> Result<Vec<Product>> {
        Ok(self.products.list().await)
    }

    async fn get_product(&self, id: EntityId) -> Result<Option<Product>> {
        Ok(self.products.get(id).await)
    }

    async fn create_product(&self, product: InsertProduct) -> Result<Product> {
        let product = self.products.create(product).await?;
        info!(id = product.id, "Created product");
        Ok(product)
    }
}

#[async_trait]
impl SchemeStore for MemStorage {
    async fn get_schemes(&self) -> Result<Vec<Scheme>> {
        Ok(self.schemes.list().await)
    }

    async fn get_scheme(&self, id: EntityId) -> Result<Option<Scheme>> {
        Ok(self.schemes.get(id).await)
    }

    async fn create_scheme(&self, scheme: InsertScheme) -> Result<Scheme> {
        let scheme = self.schemes.create(scheme).await?;
        info!(id = scheme.id, "Created scheme");
        Ok(scheme)
    }
}
