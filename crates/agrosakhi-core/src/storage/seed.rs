//! Fixed demo dataset loaded at startup
//!
//! The values are deterministic so every restart begins from the same state.
//! Rows go through the regular id counters, so later creates continue after
//! the seeded ids.

use super::memory::MemStorage;
use crate::Result;
use agrosakhi_types::{
    Advisory, AdvisoryKind, Course, Device, DeviceKind, GroupSale, MarketInfo, Product, Scheme,
    SchemeStatus, Task, TaskStatus, User, Weather, WEATHER_ID,
};
use chrono::Utc;

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

pub(crate) fn populate(storage: &mut MemStorage) -> Result<()> {
    let user = storage.users.push(|id, created_at| User {
        id,
        username: "सुनीता देवी".to_string(),
        password: "password123".to_string(),
        location: text("राजस्थान, भारत"),
        level: 2,
        points: 125,
        total_harvest: 1250,
        total_earnings: 72500,
        completed_courses: 8,
        created_at,
    })?;

    storage.devices.push(|id, created_at| Device {
        id,
        user_id: user.id,
        name: "AgroSakhi Band™".to_string(),
        kind: DeviceKind::Band,
        status: "connected".to_string(),
        battery_level: text("85%"),
        soil_moisture: text("42%"),
        temperature: text("32°C"),
        humidity: text("68%"),
        soil_ph: text(""),
        pest_level: text(""),
        location: text(""),
        last_update: text("10:45 AM"),
        created_at,
    })?;
    storage.devices.push(|id, created_at| Device {
        id,
        user_id: user.id,
        name: "SakhiSense™ स्टेशन".to_string(),
        kind: DeviceKind::Station,
        status: "online".to_string(),
        battery_level: text(""),
        soil_moisture: text("45%"),
        temperature: text("34°C"),
        humidity: text("65%"),
        soil_ph: text("6.5"),
        pest_level: text("कम"),
        location: text("दक्षिण खेत"),
        last_update: text("11:15 AM"),
        created_at,
    })?;

    let tasks = [
        (
            "धान के फसल में खाद डालना",
            "सुबह 7:00 बजे से धान के फसल में खाद डालें",
            TaskStatus::Completed,
            "सुबह 7:00",
            false,
        ),
        (
            "खेत की सिंचाई करें",
            "दोपहर में खेत की सिंचाई करें",
            TaskStatus::Pending,
            "दोपहर 2:00",
            false,
        ),
        (
            "कीट नियंत्रण सप्ताह की शुरुआत",
            "कीट नियंत्रण के लिए आवश्यक उपाय करें",
            TaskStatus::Important,
            "आज शाम",
            true,
        ),
    ];
    for (title, description, status, time, has_video) in tasks {
        storage.tasks.push(|id, created_at| Task {
            id,
            user_id: user.id,
            title: title.to_string(),
            description: text(description),
            status,
            time: text(time),
            has_video,
            created_at,
        })?;
    }

    *storage.weather.get_mut() = Some(Weather {
        id: WEATHER_ID,
        temperature: "32°C".to_string(),
        condition: "साफ आसमान".to_string(),
        humidity: "65%".to_string(),
        wind: "12 km/h".to_string(),
        rainfall: "0%".to_string(),
        alert: text("अगले 3 दिनों में वर्षा की संभावना है। फसलों की कटाई में जल्दी करें।"),
        updated: "30 मिनट पहले".to_string(),
        created_at: Utc::now(),
    });

    let advisories = [
        (
            "धान के पौधे स्वस्थ दिख रहे हैं",
            "आपकी फसल अच्छी तरह से बढ़ रही है। अगले 3 दिनों में वर्षा के पूर्वानुमान के कारण, अभी अतिरिक्त सिंचाई की आवश्यकता नहीं है।",
            AdvisoryKind::Positive,
            false,
        ),
        (
            "कीट चेतावनी: ब्राउन प्लांट हॉपर",
            "आसपास के क्षेत्रों में बढ़ रहे है। निवारक उपाय के लिए नीम आधारित स्प्रे का उपयोग करें। SakhiShakti अकादमी पर वीडियो देखें।",
            AdvisoryKind::Warning,
            true,
        ),
    ];
    for (title, description, kind, has_video) in advisories {
        storage.advisories.push(|id, created_at| Advisory {
            id,
            title: title.to_string(),
            description: description.to_string(),
            kind,
            has_video,
            created_at,
        })?;
    }

    let courses = [
        (
            "आज का पाठ: संतुलित फसल उर्वरक",
            "फसलों के लिए सही मात्रा में उर्वरक का उपयोग कैसे करें। वीडियो देखकर 20 अंक कमाएं।",
            2,
            65,
            12,
            "eco",
        ),
        (
            "जैविक कीट नियंत्रण",
            "जैविक तरीकों से कीट नियंत्रण कैसे करें",
            2,
            30,
            8,
            "pest_control",
        ),
        (
            "फसल चक्र और मिट्टी का स्वास्थ्य",
            "फसल चक्र का उपयोग करके मिट्टी के स्वास्थ्य को बनाए रखें",
            1,
            20,
            10,
            "cyclone",
        ),
        (
            "मौसम आधारित खेती",
            "मौसम पूर्वानुमान के आधार पर कृषि निर्णय लेना",
            3,
            10,
            6,
            "cloudy_snowing",
        ),
    ];
    for (title, description, level, progress, lessons, icon) in courses {
        storage.courses.push(|id, created_at| Course {
            id,
            title: title.to_string(),
            description: description.to_string(),
            level,
            progress,
            lessons,
            icon: text(icon),
            created_at,
        })?;
    }

    let products = [
        ("धान", "उच्च गुणवत्ता वाला बासमती धान", "24"),
        ("गेहूं", "जैविक तरीके से उगाया गया गेहूं", "18"),
        ("दाल", "मसूर दाल, उच्च प्रोटीन वाली", "32"),
        ("सब्जियां", "ताजी हरी सब्जियां, बिना रसायन के उगाई गई", "15"),
    ];
    for (name, description, price) in products {
        storage.products.push(|id, created_at| Product {
            id,
            name: name.to_string(),
            description: description.to_string(),
            price: price.to_string(),
            created_at,
        })?;
    }

    let schemes = [
        (
            "प्रधानमंत्री किसान सम्मान निधि",
            "किसानों को प्रति वर्ष ₹6,000 की आर्थिक सहायता प्रदान की जाती है।",
            SchemeStatus::Open,
            "आवेदन खुला",
        ),
        (
            "किसान क्रेडिट कार्ड",
            "कम ब्याज दर पर किसानों को ऋण प्रदान करने की योजना।",
            SchemeStatus::Eligible,
            "पात्र",
        ),
    ];
    for (title, description, status, status_text) in schemes {
        storage.schemes.push(|id, created_at| Scheme {
            id,
            title: title.to_string(),
            description: description.to_string(),
            status,
            status_text: status_text.to_string(),
            created_at,
        })?;
    }

    Ok(())
}

/// Market summary card. Not stored; synthesized on every read.
pub fn market_info() -> MarketInfo {
    MarketInfo {
        last_sale: "₹ 45,280".to_string(),
        current_product: "धान: 280 kg".to_string(),
        price: "22".to_string(),
        group_sale: GroupSale {
            title: "महिला किसान संघ की सामूहिक बिक्री".to_string(),
            description: "अपने संघ के साथ मिलकर 2000 किलो धान की सामूहिक बिक्री करके 8% अधिक कीमत प्राप्त करें।".to_string(),
            participated: 12,
            total: 15,
        },
    }
}
