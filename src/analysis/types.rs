use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub svm_confidence: f64,
    pub rf_confidence: f64,
    pub cnn_confidence: f64,
}

/// Body of a successful `/analyze` response, kept exactly as the service sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub final_prediction: String,
    pub confidence_score: f64,
    pub breakdown: Breakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_service_body_with_extra_fields() {
        let body = r#"{
            "final_prediction": "pothole",
            "confidence_score": 0.91,
            "model_version": "ensemble-7",
            "breakdown": {
                "svm_confidence": 0.8,
                "rf_confidence": 0.85,
                "cnn_confidence": 0.97
            }
        }"#;

        let result: AnalysisResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.final_prediction, "pothole");
        assert_eq!(result.breakdown.cnn_confidence, 0.97);
    }

    #[test]
    fn missing_breakdown_is_rejected() {
        let body = r#"{ "final_prediction": "crack", "confidence_score": 0.5 }"#;
        assert!(serde_json::from_str::<AnalysisResult>(body).is_err());
    }
}
