use gloo_net::http::Request;
use web_sys::window;
use shared::constants::{CRATE_CONTENT_ENDPOINT, OPEN_CRATE_ENDPOINT, OWNED_CRATES_ENDPOINT};
use shared::reel::ReelItem;
use shared::shared_crate_store::{
    CrateContentResponse, CrateInfo, OpenCrateRequest, OpenCrateResponse, OwnedCratesResponse,
};

use crate::config::get_api_base_url;

// Get auth token from storage
pub fn get_auth_token() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item("token").ok().flatten())
        .or_else(|| window()
            .and_then(|w| w.session_storage().ok().flatten())
            .and_then(|s| s.get_item("token").ok().flatten()))
}

fn bearer() -> String {
    format!("Bearer {}", get_auth_token().unwrap_or_default())
}

/// The crates the demo falls back to when the store API is
/// unreachable, matching the external store's catalog shape.
pub fn demo_crates() -> Vec<CrateInfo> {
    vec![
        CrateInfo {
            guid: "crate-1".to_string(),
            name: "X20 Bundle Crate".to_string(),
            price: "100 SHOTS".to_string(),
            item_count: 5,
        },
        CrateInfo {
            guid: "crate-2".to_string(),
            name: "Vanity Crate".to_string(),
            price: "50 SHOTS".to_string(),
            item_count: 3,
        },
    ]
}

pub fn demo_crate_content(crate_guid: &str) -> Vec<ReelItem> {
    let weapon = |id: &str, label: &str, rarity: u8| ReelItem {
        id: id.to_string(),
        label: label.to_string(),
        rarity,
        item_type: "Assault Rifle".to_string(),
        image: None,
    };
    match crate_guid {
        "crate-2" => vec![
            weapon("vanity_spray", "Victory Spray", 4),
            weapon("vanity_charm", "Lucky Charm", 3),
            weapon("vanity_finish", "Gold Finish", 2),
        ],
        _ => vec![
            weapon("x20_alpha_mafia", "Mafia's Fortune", 1),
            weapon("x20_alpha_havogator", "Havogator", 4),
            weapon("x20_alpha_cold_spike", "Cold Spike", 3),
            weapon("x20_alpha_cursed", "Cursed", 2),
            weapon("x20_alpha_common", "Standard Issue", 5),
        ],
    }
}

pub async fn fetch_owned_crates() -> Result<Vec<CrateInfo>, String> {
    match Request::get(&format!("{}{}", get_api_base_url(), OWNED_CRATES_ENDPOINT))
        .header("Authorization", &bearer())
        .send()
        .await
    {
        Ok(response) => {
            if response.ok() {
                match response.json::<OwnedCratesResponse>().await {
                    Ok(data) => Ok(data.crates),
                    Err(e) => Err(format!("Error parsing crates response: {:?}", e)),
                }
            } else {
                Err(format!("Error status: {}", response.status()))
            }
        }
        Err(e) => Err(format!("Network error: {:?}", e)),
    }
}

pub async fn fetch_crate_content(crate_guid: &str) -> Result<Vec<ReelItem>, String> {
    let url = format!(
        "{}{}?crate={}",
        get_api_base_url(),
        CRATE_CONTENT_ENDPOINT,
        crate_guid
    );
    match Request::get(&url).header("Authorization", &bearer()).send().await {
        Ok(response) => {
            if response.ok() {
                match response.json::<CrateContentResponse>().await {
                    Ok(data) => Ok(data.items),
                    Err(e) => Err(format!("Error parsing content response: {:?}", e)),
                }
            } else {
                Err(format!("Error status: {}", response.status()))
            }
        }
        Err(e) => Err(format!("Network error: {:?}", e)),
    }
}

/// Asks the external API to open a crate. The server owns the reward
/// odds; the response carries the single chosen reward.
pub async fn open_crate(crate_guid: &str) -> Result<OpenCrateResponse, String> {
    let request = OpenCrateRequest {
        crate_guid: crate_guid.to_string(),
        timestamp: js_sys::Date::now() as u64,
    };
    let request = Request::post(&format!("{}{}", get_api_base_url(), OPEN_CRATE_ENDPOINT))
        .header("Content-Type", "application/json")
        .header("Authorization", &bearer())
        .json(&request)
        .map_err(|e| format!("Failed to build request: {:?}", e))?;

    match request.send().await {
        Ok(response) => {
            if response.ok() {
                response
                    .json::<OpenCrateResponse>()
                    .await
                    .map_err(|e| format!("Error parsing open response: {:?}", e))
            } else {
                Err(format!("Error status: {}", response.status()))
            }
        }
        Err(e) => Err(format!("Network error: {:?}", e)),
    }
}
