use crate::shared::api_utils::api_url;
use contracts::domain::a002_brand::aggregate::Brand;
use contracts::domain::a003_bom_template::aggregate::BomTemplate;
use contracts::usecases::u601_bom_from_template::{
    CreateBomRequest, CreateBomResponse, TemplatePreview, TemplatePreviewRequest,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, RequestInit, RequestMode, Response};

/// API клиент для UseCase u601
async fn fetch_json(url: &str, opts: &RequestInit, json_body: bool) -> Result<JsValue, String> {
    let window = window().ok_or("No window object")?;

    let request = web_sys::Request::new_with_str_and_init(url, opts)
        .map_err(|e| format!("Failed to create request: {:?}", e))?;

    if json_body {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| format!("Failed to set header: {:?}", e))?;
    }

    let response_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("Fetch failed: {:?}", e))?;

    let response: Response = response_value.dyn_into().map_err(|_| "Not a Response")?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    wasm_bindgen_futures::JsFuture::from(
        response
            .json()
            .map_err(|e| format!("Failed to parse JSON: {:?}", e))?,
    )
    .await
    .map_err(|e| format!("Failed to get JSON: {:?}", e))
}

fn get_opts() -> RequestInit {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    opts
}

fn post_opts(body: &str) -> RequestInit {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(body));
    opts
}

/// Список шаблонов спецификаций
pub async fn get_templates() -> Result<Vec<BomTemplate>, String> {
    let json = fetch_json(&api_url("/api/bom_template"), &get_opts(), false).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

/// Список брендов
pub async fn get_brands() -> Result<Vec<Brand>, String> {
    let json = fetch_json(&api_url("/api/brand"), &get_opts(), false).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

/// Список производимых товаров (кандидаты на выпуск)
pub async fn get_producible_products(
) -> Result<Vec<contracts::domain::a001_product::aggregate::Product>, String> {
    let json = fetch_json(&api_url("/api/product?producible=true"), &get_opts(), false).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

/// Предпросмотр спецификации по шаблону
pub async fn get_preview(request: TemplatePreviewRequest) -> Result<TemplatePreview, String> {
    let body = serde_json::to_string(&request).map_err(|e| e.to_string())?;
    let json = fetch_json(&api_url("/api/u601/preview"), &post_opts(&body), true).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

/// Создать спецификацию из шаблона
pub async fn create_bom(request: CreateBomRequest) -> Result<CreateBomResponse, String> {
    let body = serde_json::to_string(&request).map_err(|e| e.to_string())?;
    let json = fetch_json(&api_url("/api/u601/create"), &post_opts(&body), true).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}
