use contracts::domain::a004_bom::aggregate::Bom;
use gloo_net::http::Request;

const API_BASE: &str = "/api/bom";

/// Список спецификаций с необязательным поиском по коду и названию
pub async fn list_boms(search: &str) -> Result<Vec<Bom>, String> {
    let url = if search.is_empty() {
        API_BASE.to_string()
    } else {
        format!("{}?search={}", API_BASE, urlencoding::encode(search))
    };

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

/// Получить спецификацию по ID
pub async fn get_bom(id: &str) -> Result<Bom, String> {
    let url = format!("{}/{}", API_BASE, id);

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
