//! Voice assistant and AI advisory service
//!
//! Answers come from a language model when one is configured. Without one, or
//! when the model call fails, canned bilingual answers are returned. Image,
//! soil, weather and market analyses are simulated.

use super::llm::LanguageModel;
use agrosakhi_core::{
    CropQueryResponse, ForecastDay, ImageAnalysis, Language, MarketForecast, PriceTrend,
    Recommendation, SoilAnalysis, SoilMetrics, TemperatureRange, VoiceResponse, WeatherPrediction,
};
use chrono::{Duration, NaiveDate};
use rand::Rng;
use tracing::warn;

pub const DEFAULT_FORECAST_DAYS: u32 = 7;
pub const MAX_FORECAST_DAYS: u32 = 14;

const SYSTEM_PROMPT: &str = "You are AgroSakhi, a farming assistant for women farmers in rural India. \
Answer briefly and practically.";

const IMAGE_FINDINGS: [(&str, f64); 3] = [
    (
        "आपके धान के खेत में झोंका रोग के लक्षण दिखाई दे रहे हैं। नाइट्रोजन उर्वरक की मात्रा कम करें और ट्राइसाइक्लाज़ोल का छिड़काव करें।",
        0.89,
    ),
    (
        "आपकी फसल स्वस्थ दिख रही है। पानी की नियमित आपूर्ति बनाए रखें और संतुलित उर्वरक का प्रयोग करें। अगले 15 दिनों में कीट नियंत्रण पर ध्यान दें।",
        0.95,
    ),
    (
        "फसल में जल प्रबंधन की कमी दिखाई दे रही है। सिंचाई की आवृत्ति बढ़ाएं और खेत में अधिक पानी भरें। धान की इस किस्म को अधिक जल की आवश्यकता होती है।",
        0.78,
    ),
];

const CONDITIONS: [&str; 4] = ["साफ आसमान", "आंशिक बादल", "बारिश", "गरज के साथ बारिश"];

pub struct Assistant {
    llm: Option<LanguageModel>,
}

impl Assistant {
    pub fn new(llm: Option<LanguageModel>) -> Self {
        Self { llm }
    }

    /// Assistant that only ever gives the canned answers
    pub fn offline() -> Self {
        Self { llm: None }
    }

    pub async fn voice(&self, transcript: &str, language: Language) -> VoiceResponse {
        let response = match self.ask(transcript, language).await {
            Some(answer) => answer,
            None => canned_voice_answer(language).to_string(),
        };

        VoiceResponse {
            response,
            recommendations: vec![
                Recommendation::Task {
                    title: "उर्वरक खरीदने के लिए बाजार जाएँ".to_string(),
                },
                Recommendation::Weather {
                    alert: "वर्षा से पहले उर्वरक का प्रयोग करें".to_string(),
                },
            ],
        }
    }

    pub async fn crop_query(&self, transcript: &str, language: Language) -> CropQueryResponse {
        let canned = canned_crop_answer(language);
        match self.ask(transcript, language).await {
            Some(response) => CropQueryResponse {
                response,
                suggested_actions: canned.suggested_actions,
            },
            None => canned,
        }
    }

    async fn ask(&self, transcript: &str, language: Language) -> Option<String> {
        let llm = self.llm.as_ref()?;
        if transcript.trim().is_empty() {
            return None;
        }

        let system = match language {
            Language::Hi => format!("{SYSTEM_PROMPT} Reply in Hindi."),
            Language::En => format!("{SYSTEM_PROMPT} Reply in English."),
        };
        match llm.complete(&system, transcript).await {
            Ok(answer) => Some(answer),
            Err(e) => {
                warn!(model = llm.model(), "Language model call failed, using canned answer: {}", e);
                None
            }
        }
    }
}

fn canned_voice_answer(language: Language) -> &'static str {
    match language {
        Language::Hi => "आपके धान के लिए NPK 15-15-15 उर्वरक की सिफारिश की जाती है। प्रति एकड़ 50 किलो का उपयोग करें।",
        Language::En => "For your rice crop, NPK 15-15-15 fertilizer is recommended. Use 50 kg per acre.",
    }
}

fn canned_crop_answer(language: Language) -> CropQueryResponse {
    let (response, actions): (&str, [&str; 3]) = match language {
        Language::Hi => (
            "आपके धान की फसल के लिए, इस समय नाइट्रोजन युक्त उर्वरक का प्रयोग करना उचित होगा। खेत में पानी का स्तर 5 सेंटीमीटर बनाए रखें और नियमित रूप से कीट नियंत्रण की जांच करें।",
            [
                "यूरिया उर्वरक का छिड़काव करें",
                "खेत में पानी का स्तर बढ़ाएं",
                "कीट नियंत्रण के लिए निगरानी बढ़ाएं",
            ],
        ),
        Language::En => (
            "For your rice crop, it would be appropriate to apply nitrogen-based fertilizer at this time. Maintain a water level of 5 cm in the field and regularly check for pest control.",
            [
                "Apply urea fertilizer",
                "Increase water level in the field",
                "Increase monitoring for pest control",
            ],
        ),
    };

    CropQueryResponse {
        response: response.to_string(),
        suggested_actions: actions.iter().map(|a| a.to_string()).collect(),
    }
}

/// One of three simulated findings, chosen uniformly
pub fn analyze_image<R: Rng>(rng: &mut R) -> ImageAnalysis {
    let (result, confidence) = IMAGE_FINDINGS[rng.gen_range(0..IMAGE_FINDINGS.len())];
    ImageAnalysis {
        result: result.to_string(),
        confidence,
    }
}

pub fn analyze_soil() -> SoilAnalysis {
    SoilAnalysis {
        result: "मिट्टी में नाइट्रोजन की मात्रा कम है। फॉस्फोरस और पोटैशियम पर्याप्त मात्रा में है। जैविक पदार्थों की मात्रा बढ़ाने के लिए हरी खाद का प्रयोग करें।".to_string(),
        metrics: SoilMetrics {
            nitrogen: 0.32,
            phosphorus: 0.68,
            potassium: 0.72,
            ph: 6.8,
            organic: 0.41,
        },
    }
}

/// Simulated daily forecast starting at `start`. `days` defaults to a week
/// and is capped at two weeks.
pub fn predict_weather<R: Rng>(
    rng: &mut R,
    start: NaiveDate,
    days: Option<u32>,
) -> WeatherPrediction {
    let days = days
        .unwrap_or(DEFAULT_FORECAST_DAYS)
        .min(MAX_FORECAST_DAYS);

    let forecast = (0..days)
        .map(|offset| {
            let date = start + Duration::days(i64::from(offset));
            ForecastDay {
                date: date.format("%Y-%m-%d").to_string(),
                temperature: TemperatureRange {
                    min: rng.gen_range(24..=26),
                    max: rng.gen_range(30..=34),
                },
                condition: CONDITIONS[rng.gen_range(0..CONDITIONS.len())].to_string(),
                rainfall: if rng.gen_bool(0.3) {
                    rng.gen_range(0..=50)
                } else {
                    0
                },
                humidity: rng.gen_range(60..90),
            }
        })
        .collect();

    WeatherPrediction {
        forecast,
        advisories: vec![
            "अगले 3 दिनों में बारिश की संभावना है, फसल संरक्षण के लिए तैयारी करें।".to_string(),
            "उच्च तापमान के दिनों में सिंचाई सुबह या शाम को करें।".to_string(),
        ],
    }
}

/// Simulated price outlook for `crop`, in rupees per quintal
pub fn forecast_market<R: Rng>(rng: &mut R, crop: &str) -> MarketForecast {
    let current_price = 1800 + rng.gen_range(0..500);
    let forecasted_price = current_price + rng.gen_range(0..300) - 150;
    let trend = PriceTrend::between(current_price, forecasted_price);
    let recommendation = match trend {
        PriceTrend::Up => "वर्तमान में बिक्री न करें, मूल्य वृद्धि की प्रवृत्ति दिख रही है। 3-4 सप्ताह प्रतीक्षा करें।",
        PriceTrend::Down => "जल्द से जल्द बाजार में बिक्री की सलाह दी जाती है, क्योंकि मूल्य में गिरावट की संभावना है।",
        PriceTrend::Stable => "बाजार स्थिर है, अपनी आवश्यकताओं के अनुसार बिक्री का निर्णय लें।",
    };
    tracing::debug!(crop, current_price, forecasted_price, "Simulated market forecast");

    MarketForecast {
        current_price,
        forecasted_price,
        recommendation: recommendation.to_string(),
        trend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use axum::{routing::post, Json, Router};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::{json, Value};
    use tokio::net::TcpListener;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    fn online(base_url: String) -> Assistant {
        let config = ServerConfig {
            openai_api_key: Some("sk-test".to_string()),
            openai_base_url: base_url,
            ai_timeout_secs: 5,
            ..Default::default()
        };
        Assistant::new(LanguageModel::from_config(&config).unwrap())
    }

    /// Chat-completions endpoint that answers with "model: <user prompt>"
    async fn spawn_model() -> String {
        let app = Router::new().route(
            "/v1/chat/completions",
            post(|Json(request): Json<Value>| async move {
                let prompt = request["messages"][1]["content"].as_str().unwrap_or_default();
                Json(json!({
                    "choices": [{"message": {"role": "assistant", "content": format!("model: {prompt}")}}]
                }))
            }),
        );
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await });
        format!("http://{addr}/v1")
    }

    /// Base URL of a port nothing listens on
    async fn unreachable_model() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}/v1")
    }

    #[tokio::test]
    async fn test_offline_voice_uses_canned_answer() {
        let assistant = Assistant::offline();
        let hi = assistant.voice("खाद कब डालें?", Language::Hi).await;
        let en = assistant.voice("When to fertilize?", Language::En).await;

        assert!(hi.response.contains("NPK 15-15-15"));
        assert!(en.response.starts_with("For your rice crop"));
        assert_eq!(hi.recommendations.len(), 2);
    }

    #[tokio::test]
    async fn test_offline_crop_query() {
        let answer = Assistant::offline().crop_query("pests?", Language::En).await;
        assert_eq!(answer.suggested_actions.len(), 3);
        assert_eq!(answer.suggested_actions[0], "Apply urea fertilizer");
    }

    #[tokio::test]
    async fn test_model_reply_replaces_canned_voice_answer() {
        let assistant = online(spawn_model().await);
        let answer = assistant.voice("When to fertilize?", Language::En).await;

        assert_eq!(answer.response, "model: When to fertilize?");
        assert!(matches!(answer.recommendations[0], Recommendation::Task { .. }));
        assert!(matches!(answer.recommendations[1], Recommendation::Weather { .. }));
    }

    #[tokio::test]
    async fn test_model_reply_keeps_suggested_actions() {
        let assistant = online(spawn_model().await);
        let answer = assistant.crop_query("pests?", Language::En).await;

        assert_eq!(answer.response, "model: pests?");
        assert_eq!(
            answer.suggested_actions,
            canned_crop_answer(Language::En).suggested_actions
        );
    }

    #[tokio::test]
    async fn test_blank_transcript_skips_model() {
        let assistant = online(spawn_model().await);
        let answer = assistant.voice("   ", Language::En).await;
        assert_eq!(answer.response, canned_voice_answer(Language::En));
    }

    #[tokio::test]
    async fn test_unreachable_model_falls_back_to_canned_answer() {
        let assistant = online(unreachable_model().await);

        let voice = assistant.voice("x", Language::En).await;
        assert_eq!(voice.response, canned_voice_answer(Language::En));
        assert_eq!(voice.recommendations.len(), 2);

        let crop = assistant.crop_query("x", Language::Hi).await;
        assert_eq!(crop, canned_crop_answer(Language::Hi));
    }

    #[test]
    fn test_image_analysis_is_one_of_known_findings() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let analysis = analyze_image(&mut rng);
            assert!(IMAGE_FINDINGS
                .iter()
                .any(|(r, c)| *r == analysis.result && *c == analysis.confidence));
        }
    }

    #[test]
    fn test_forecast_ranges_and_dates() {
        let mut rng = StdRng::seed_from_u64(42);
        let prediction = predict_weather(&mut rng, start(), Some(5));

        assert_eq!(prediction.forecast.len(), 5);
        assert_eq!(prediction.forecast[0].date, "2024-06-30");
        assert_eq!(prediction.forecast[1].date, "2024-07-01");
        for day in &prediction.forecast {
            assert!((24..=26).contains(&day.temperature.min));
            assert!((30..=34).contains(&day.temperature.max));
            assert!(day.rainfall <= 50);
            assert!((60..90).contains(&day.humidity));
            assert!(CONDITIONS.contains(&day.condition.as_str()));
        }
        assert_eq!(prediction.advisories.len(), 2);
    }

    #[test]
    fn test_forecast_days_default_and_cap() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(predict_weather(&mut rng, start(), None).forecast.len(), 7);
        assert_eq!(predict_weather(&mut rng, start(), Some(90)).forecast.len(), 14);
        assert!(predict_weather(&mut rng, start(), Some(0)).forecast.is_empty());
    }

    #[test]
    fn test_market_forecast_trend_matches_prices() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let forecast = forecast_market(&mut rng, "धान");
            assert!((1800..2300).contains(&forecast.current_price));
            assert!((forecast.forecasted_price - forecast.current_price).abs() <= 150);
            assert_eq!(
                forecast.trend,
                PriceTrend::between(forecast.current_price, forecast.forecasted_price)
            );
        }
    }

    #[test]
    fn test_soil_metrics() {
        let soil = analyze_soil();
        assert_eq!(soil.metrics.ph, 6.8);
    }
}
