use contracts::domain::a002_brand::aggregate::Brand;
use contracts::usecases::u602_brand_swap::{
    ApplyBrandSwapRequest, ApplyBrandSwapResponse, BrandSwapPreview, BrandSwapPreviewRequest,
};
use gloo_net::http::Request;

const API_BASE: &str = "/api/u602";

/// Список брендов
pub async fn list_brands() -> Result<Vec<Brand>, String> {
    let response = Request::get("/api/brand")
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

/// Предпросмотр замены бренда
pub async fn get_preview(req: BrandSwapPreviewRequest) -> Result<BrandSwapPreview, String> {
    let url = format!("{}/preview", API_BASE);

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

/// Применить замену бренда
pub async fn apply(req: ApplyBrandSwapRequest) -> Result<ApplyBrandSwapResponse, String> {
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
