//! gRPC server implementation.

use std::collections::BTreeSet;
use std::sync::Arc;

use tonic::{Request, Response, Status};
use triage_engine::{RankConfig, TriageEngine};

use crate::proto::{
    triage_service_server::TriageService, AnalyzeRequest, AnalyzeResponse,
    ExtractSymptomsRequest, ExtractSymptomsResponse, FollowupPlan, RankDiseasesRequest,
    RankDiseasesResponse, RankedMatch, RiskTier as ProtoRiskTier, SpecialistRecommendation,
    VitalsAssessment,
};

/// Triage gRPC server.
#[derive(Clone)]
pub struct TriageServer {
    engine: Arc<TriageEngine>,
}

impl TriageServer {
    /// Creates a new server around the given engine.
    pub fn new(engine: TriageEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Returns a reference to the engine.
    pub fn engine(&self) -> &TriageEngine {
        &self.engine
    }

    /// Convert internal risk tier to proto RiskTier
    fn to_proto_tier(tier: triage_types::RiskTier) -> ProtoRiskTier {
        match tier {
            triage_types::RiskTier::Low => ProtoRiskTier::Low,
            triage_types::RiskTier::Moderate => ProtoRiskTier::Moderate,
            triage_types::RiskTier::High => ProtoRiskTier::High,
        }
    }

    /// Convert internal ranked match to proto RankedMatch
    fn to_proto_match(m: &triage_types::RankedMatch) -> RankedMatch {
        RankedMatch {
            disease: m.disease.clone(),
            score: m.score as u32,
            coverage: m.coverage,
            matched_symptoms: m.matched.iter().cloned().collect(),
        }
    }

    /// Convert internal vitals assessment to proto VitalsAssessment
    fn to_proto_vitals(assessment: &triage_types::VitalsAssessment) -> VitalsAssessment {
        VitalsAssessment {
            tier: Self::to_proto_tier(assessment.tier) as i32,
            issues: assessment.issues.clone(),
        }
    }

    /// Convert internal recommendation to proto SpecialistRecommendation
    fn to_proto_recommendation(
        rec: &triage_types::SpecialistRecommendation,
    ) -> SpecialistRecommendation {
        SpecialistRecommendation {
            disease: rec.disease.clone().unwrap_or_default(),
            specialities: rec.specialities.clone(),
        }
    }

    /// Convert internal follow-up plan to proto FollowupPlan
    fn to_proto_followup(plan: &triage_types::FollowupPlan) -> FollowupPlan {
        FollowupPlan {
            date: plan.date.format("%Y-%m-%d").to_string(),
            message: plan.message.clone(),
        }
    }
}

#[tonic::async_trait]
impl TriageService for TriageServer {
    async fn analyze(
        &self,
        request: Request<AnalyzeRequest>,
    ) -> Result<Response<AnalyzeResponse>, Status> {
        let req = request.into_inner();

        let report = self.engine.analyze(
            &req.symptom_text,
            &req.blood_pressure,
            &req.heart_rate,
            &req.temperature,
        );

        Ok(Response::new(AnalyzeResponse {
            symptoms: report.symptoms.iter().cloned().collect(),
            vitals: Some(Self::to_proto_vitals(&report.vitals)),
            symptom_risk: Self::to_proto_tier(report.symptom_risk) as i32,
            matches: report.ranked.iter().map(Self::to_proto_match).collect(),
            recommendation: Some(Self::to_proto_recommendation(&report.recommendation)),
            followup: Some(Self::to_proto_followup(&report.followup)),
            care_tips: report.care_tips,
            explanations: report.explanations,
        }))
    }

    async fn extract_symptoms(
        &self,
        request: Request<ExtractSymptomsRequest>,
    ) -> Result<Response<ExtractSymptomsResponse>, Status> {
        let text = request.into_inner().text;

        let symptoms = self.engine.kb().extract_symptoms(&text);

        Ok(Response::new(ExtractSymptomsResponse {
            symptoms: symptoms.into_iter().collect(),
        }))
    }

    async fn rank_diseases(
        &self,
        request: Request<RankDiseasesRequest>,
    ) -> Result<Response<RankDiseasesResponse>, Status> {
        let req = request.into_inner();

        let symptoms: BTreeSet<String> = req
            .symptoms
            .into_iter()
            .map(|s| s.trim().to_lowercase())
            .collect();
        let config = RankConfig::with_min_score((req.min_score as usize).max(1));

        let ranked = self.engine.kb().rank_diseases(&symptoms, &config);

        Ok(Response::new(RankDiseasesResponse {
            matches: ranked.iter().map(Self::to_proto_match).collect(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> TriageServer {
        TriageServer::new(TriageEngine::with_builtin_kb())
    }

    #[test]
    fn test_tier_conversion() {
        assert_eq!(
            TriageServer::to_proto_tier(triage_types::RiskTier::Low),
            ProtoRiskTier::Low
        );
        assert_eq!(
            TriageServer::to_proto_tier(triage_types::RiskTier::High),
            ProtoRiskTier::High
        );
    }

    #[test]
    fn test_recommendation_conversion_none_disease() {
        let rec = triage_types::SpecialistRecommendation::general_physician();
        let proto = TriageServer::to_proto_recommendation(&rec);
        assert_eq!(proto.disease, "");
        assert_eq!(proto.specialities, vec!["General Physician".to_string()]);
    }

    #[tokio::test]
    async fn test_analyze_roundtrip() {
        let response = server()
            .analyze(Request::new(AnalyzeRequest {
                symptom_text: "fever with chills and body ache".to_string(),
                blood_pressure: "120/80".to_string(),
                heart_rate: "76".to_string(),
                temperature: "38.4".to_string(),
            }))
            .await
            .unwrap()
            .into_inner();

        assert_eq!(response.matches[0].disease, "Viral Fever");
        assert_eq!(response.symptom_risk, ProtoRiskTier::Moderate as i32);
        let vitals = response.vitals.unwrap();
        assert_eq!(vitals.issues.len(), 3);
    }

    #[tokio::test]
    async fn test_rank_diseases_clamps_min_score() {
        let response = server()
            .rank_diseases(Request::new(RankDiseasesRequest {
                symptoms: vec!["Fever".to_string(), " chills ".to_string()],
                min_score: 0,
            }))
            .await
            .unwrap()
            .into_inner();

        assert!(!response.matches.is_empty());
        assert!(response.matches.iter().all(|m| m.score >= 1));
    }

    #[tokio::test]
    async fn test_extract_symptoms_empty_text() {
        let response = server()
            .extract_symptoms(Request::new(ExtractSymptomsRequest {
                text: "   ".to_string(),
            }))
            .await
            .unwrap()
            .into_inner();

        assert!(response.symptoms.is_empty());
    }
}
