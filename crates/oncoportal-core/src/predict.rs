//! Demo risk scoring.
//!
//! A fixed threshold formula over four tumor features stands in for a real
//! model: each feature past its threshold contributes a fixed weight, the
//! summed score is clamped to [0, 100], and anything above 50 is called
//! malignant. There is no inference here and no claim of accuracy.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::{NewReport, RecordStatus, ReportType};

/// Risk scoring errors.
#[derive(Error, Debug)]
pub enum PredictError {
    #[error("invalid value for {feature}: {value} (must be a non-negative number)")]
    InvalidFeature { feature: &'static str, value: f64 },
}

/// The four numeric features the formula reads. Field names match the
/// diagnostic form fields (and the Wisconsin breast cancer dataset).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PredictionInput {
    pub radius_mean: f64,
    pub texture_mean: f64,
    pub area_mean: f64,
    pub concavity_mean: f64,
}

/// Predicted class.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Outcome {
    Benign,
    Malignant,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Benign => write!(f, "Benign"),
            Outcome::Malignant => write!(f, "Malignant"),
        }
    }
}

/// Risk level band derived from the score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RiskLevel {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RiskLevel::VeryLow => "Very Low",
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::VeryHigh => "Very High",
        };
        write!(f, "{}", label)
    }
}

/// A completed prediction. Serialized camelCase because it is embedded
/// verbatim as the `aiData` payload of saved reports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub prediction: Outcome,
    /// Confidence percentage; higher the further the score is from 50
    pub confidence: u32,
    pub risk_level: RiskLevel,
    pub recommendation: String,
    /// Clamped threshold score in [0, 100]
    pub risk_score: u32,
    /// The input features, echoed back for the record
    pub features: PredictionInput,
}

impl PredictionResult {
    /// Package this result as a report ready for the record store, the way
    /// the "save prediction" action does: type `ai-prediction`, status
    /// `critical` when malignant, full payload embedded.
    pub fn to_report(&self) -> NewReport {
        NewReport {
            patient_id: "ai-prediction".into(),
            patient_name: "AI Prediction".into(),
            report_type: ReportType::AiPrediction,
            report_date: chrono::Utc::now().format("%Y-%m-%d").to_string(),
            findings: format!(
                "AI Prediction: {} ({}% confidence)",
                self.prediction, self.confidence
            ),
            recommendations: self.recommendation.clone(),
            status: match self.prediction {
                Outcome::Malignant => RecordStatus::Critical,
                Outcome::Benign => RecordStatus::Active,
            },
            ai_data: Some(self.clone()),
        }
    }
}

/// The fixed-threshold risk model.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskModel;

impl RiskModel {
    pub fn new() -> Self {
        Self
    }

    /// Score an input. Fails only on non-finite or negative features;
    /// validation of anything richer belongs to the form layer.
    pub fn predict(&self, input: &PredictionInput) -> Result<PredictionResult, PredictError> {
        validate_feature("radius_mean", input.radius_mean)?;
        validate_feature("texture_mean", input.texture_mean)?;
        validate_feature("area_mean", input.area_mean)?;
        validate_feature("concavity_mean", input.concavity_mean)?;

        let mut score: u32 = 0;
        if input.radius_mean > 15.0 {
            score += 20;
        }
        if input.texture_mean > 20.0 {
            score += 15;
        }
        if input.area_mean > 700.0 {
            score += 25;
        }
        if input.concavity_mean > 0.1 {
            score += 30;
        }
        let score = score.min(100);

        let prediction = if score > 50 {
            Outcome::Malignant
        } else {
            Outcome::Benign
        };
        // Extreme scores get higher confidence
        let confidence = score.abs_diff(50) * 2;
        let risk_level = risk_level(score);
        let recommendation = recommendation(prediction, score).to_string();

        debug!(score, %prediction, "risk score computed");

        Ok(PredictionResult {
            prediction,
            confidence,
            risk_level,
            recommendation,
            risk_score: score,
            features: *input,
        })
    }
}

fn validate_feature(feature: &'static str, value: f64) -> Result<(), PredictError> {
    if !value.is_finite() || value < 0.0 {
        return Err(PredictError::InvalidFeature { feature, value });
    }
    Ok(())
}

fn risk_level(score: u32) -> RiskLevel {
    match score {
        0..=19 => RiskLevel::VeryLow,
        20..=39 => RiskLevel::Low,
        40..=59 => RiskLevel::Medium,
        60..=79 => RiskLevel::High,
        _ => RiskLevel::VeryHigh,
    }
}

fn recommendation(prediction: Outcome, score: u32) -> &'static str {
    match prediction {
        Outcome::Malignant => {
            if score > 80 {
                "Immediate biopsy and treatment recommended"
            } else if score > 60 {
                "Biopsy recommended, schedule follow-up"
            } else {
                "Further testing recommended"
            }
        }
        Outcome::Benign => {
            if score < 20 {
                "Regular monitoring, no immediate concerns"
            } else if score < 40 {
                "Continue regular check-ups"
            } else {
                "Monitor closely, consider additional tests"
            }
        }
    }
}

/// Demo benign feature vector (the "load sample data" fixture).
pub fn benign_sample() -> PredictionInput {
    PredictionInput {
        radius_mean: 12.46,
        texture_mean: 24.04,
        area_mean: 475.9,
        concavity_mean: 0.04556,
    }
}

/// Demo malignant feature vector.
pub fn malignant_sample() -> PredictionInput {
    PredictionInput {
        radius_mean: 17.99,
        texture_mean: 10.38,
        area_mean: 1001.0,
        concavity_mean: 0.3001,
    }
}
