//! How each dashboard record is built from its insert shape

use super::table::Entity;
use agrosakhi_types::{
    Advisory, Course, Device, EntityId, InsertAdvisory, InsertCourse, InsertDevice, InsertProduct,
    InsertScheme, InsertTask, InsertUser, Product, Scheme, Task, User,
};
use chrono::{DateTime, Utc};

impl Entity for User {
    type Insert = InsertUser;
    const TABLE: &'static str = "users";

    /// New accounts always start at level 1 with empty counters.
    fn materialize(id: EntityId, created_at: DateTime<Utc>, insert: InsertUser) -> Self {
        Self {
            id,
            username: insert.username,
            password: insert.password,
            location: insert.location,
            level: 1,
            points: 0,
            total_harvest: 0,
            total_earnings: 0,
            completed_courses: 0,
            created_at,
        }
    }

    fn id(&self) -> EntityId {
        self.id
    }
}

impl Entity for Device {
    type Insert = InsertDevice;
    const TABLE: &'static str = "devices";

    fn materialize(id: EntityId, created_at: DateTime<Utc>, insert: InsertDevice) -> Self {
        Self {
            id,
            user_id: insert.user_id,
            name: insert.name,
            kind: insert.kind,
            status: insert.status,
            battery_level: insert.battery_level,
            soil_moisture: insert.soil_moisture,
            temperature: insert.temperature,
            humidity: insert.humidity,
            soil_ph: insert.soil_ph,
            pest_level: insert.pest_level,
            location: insert.location,
            last_update: None,
            created_at,
        }
    }

    fn id(&self) -> EntityId {
        self.id
    }
}

impl Entity for Task {
    type Insert = InsertTask;
    const TABLE: &'static str = "tasks";

    fn materialize(id: EntityId, created_at: DateTime<Utc>, insert: InsertTask) -> Self {
        Self {
            id,
            user_id: insert.user_id,
            title: insert.title,
            description: insert.description,
            status: insert.status,
            time: insert.time,
            has_video: insert.has_video,
            created_at,
        }
    }

    fn id(&self) -> EntityId {
        self.id
    }
}

impl Entity for Advisory {
    type Insert = InsertAdvisory;
    const TABLE: &'static str = "advisories";

    fn materialize(id: EntityId, created_at: DateTime<Utc>, insert: InsertAdvisory) -> Self {
        Self {
            id,
            title: insert.title,
            description: insert.description,
            kind: insert.kind,
            has_video: insert.has_video,
            created_at,
        }
    }

    fn id(&self) -> EntityId {
        self.id
    }
}

impl Entity for Course {
    type Insert = InsertCourse;
    const TABLE: &'static str = "courses";

    fn materialize(id: EntityId, created_at: DateTime<Utc>, insert: InsertCourse) -> Self {
        Self {
            id,
            title: insert.title,
            description: insert.description,
            level: insert.level,
            progress: insert.progress.clamp(0, 100),
            lessons: insert.lessons,
            icon: insert.icon,
            created_at,
        }
    }

    fn id(&self) -> EntityId {
        self.id
    }
}

impl Entity for Product {
    type Insert = InsertProduct;
    const TABLE: &'static str = "products";

    fn materialize(id: EntityId, created_at: DateTime<Utc>, insert: InsertProduct) -> Self {
        Self {
            id,
            name: insert.name,
            description: insert.description,
            price: insert.price,
            created_at,
        }
    }

    fn id(&self) -> EntityId {
        self.id
    }
}

impl Entity for Scheme {
    type Insert = InsertScheme;
    const TABLE: &'static str = "schemes";

    fn materialize(id: EntityId, created_at: DateTime<Utc>, insert: InsertScheme) -> Self {
        Self {
            id,
            title: insert.title,
            description: insert.description,
            status: insert.status,
            status_text: insert.status_text,
            created_at,
        }
    }

    fn id(&self) -> EntityId {
        self.id
    }
}
