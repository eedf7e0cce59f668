use contracts::usecases::u603_cost_optimization::{
    ApplyCostOptimizationRequest, ApplyCostOptimizationResponse, CostOptimizationPreview,
};
use gloo_net::http::Request;

const API_BASE: &str = "/api/u603";

/// Предпросмотр оптимизации стоимости по спецификации
pub async fn get_preview(bom_id: &str) -> Result<CostOptimizationPreview, String> {
    let url = format!("{}/{}/preview", API_BASE, bom_id);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Применить оптимизацию: создать вариант с выбранными заменами
pub async fn apply(
    req: ApplyCostOptimizationRequest,
) -> Result<ApplyCostOptimizationResponse, String> {
    let url = format!("{}/apply", API_BASE);

    let response = Request::post(&url)
        .json(&req)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
