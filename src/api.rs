//! Backend API Wrappers
//!
//! Typed bindings to the JSON endpoints, organized by domain. Mutating
//! requests carry the anti-forgery token in the `X-CSRFToken` header, read
//! from the hidden form field or the session cookie.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::JsCast;

use crate::models::{
    AddOutcome, BatchAddOutcome, BatchMoveOutcome, BatchRemoveOutcome, BatchUpdateOutcome,
    CatalogCategory, Container, ContainerDetail, DeleteOutcome, MoveOutcome, QuantityChange,
    UpdateOutcome,
};

const CSRF_HEADER: &str = "X-CSRFToken";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("{0}")]
    Api(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Application failures come back as a 200 body with an `error` field.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

// ========================
// Transport
// ========================

fn csrf_token() -> Option<String> {
    let document = web_sys::window()?.document()?;
    if let Ok(Some(field)) = document.query_selector("input[name=csrfmiddlewaretoken]") {
        if let Some(input) = field.dyn_ref::<web_sys::HtmlInputElement>() {
            let value = input.value();
            if !value.is_empty() {
                return Some(value);
            }
        }
    }
    read_cookie(&document, "csrftoken")
}

fn read_cookie(document: &web_sys::Document, name: &str) -> Option<String> {
    let cookies = document.dyn_ref::<web_sys::HtmlDocument>()?.cookie().ok()?;
    cookies.split(';').map(str::trim).find_map(|pair| {
        pair.strip_prefix(name)
            .and_then(|rest| rest.strip_prefix('='))
            .map(str::to_string)
    })
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    let mut builder = Request::post(url);
    if let Some(token) = csrf_token() {
        builder = builder.header(CSRF_HEADER, &token);
    }
    let response = builder
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if status != 200 {
        return Err(ApiError::Status(status));
    }
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    parse_body(&text)
}

fn parse_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    if let Ok(body) = serde_json::from_str::<ErrorBody>(text) {
        return Err(ApiError::Api(body.error));
    }
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

// ========================
// Reads
// ========================

pub async fn list_containers() -> Result<Vec<Container>, ApiError> {
    get_json("/api/containers/").await
}

pub async fn container_detail(container_id: u32) -> Result<ContainerDetail, ApiError> {
    get_json(&format!("/api/containers/{container_id}/items/")).await
}

pub async fn catalog() -> Result<Vec<CatalogCategory>, ApiError> {
    get_json("/api/catalog/").await
}

// ========================
// Item mutations
// ========================

#[derive(Serialize)]
struct MoveArgs {
    item_id: u32,
    container_id: u32,
    quantity: u32,
    expiration_date: Option<String>,
}

pub async fn move_item(
    item_id: u32,
    container_id: u32,
    quantity: u32,
    expiration_date: Option<String>,
) -> Result<MoveOutcome, ApiError> {
    let args = MoveArgs {
        item_id,
        container_id,
        quantity,
        expiration_date,
    };
    post_json("/api/items/move/", &args).await
}

#[derive(Serialize)]
struct UpdateArgs {
    item_id: u32,
    expiration_date: Option<String>,
    quantity: u32,
}

pub async fn update_item(
    item_id: u32,
    expiration_date: Option<String>,
    quantity: u32,
) -> Result<UpdateOutcome, ApiError> {
    let args = UpdateArgs {
        item_id,
        expiration_date,
        quantity,
    };
    post_json("/api/items/update/", &args).await
}

#[derive(Serialize)]
struct DeleteArgs {
    item_id: u32,
    add_to_shopping: bool,
}

pub async fn delete_item(item_id: u32, add_to_shopping: bool) -> Result<DeleteOutcome, ApiError> {
    let args = DeleteArgs {
        item_id,
        add_to_shopping,
    };
    post_json("/api/items/delete/", &args).await
}

#[derive(Serialize)]
struct BatchUpdateArgs {
    changes: Vec<QuantityChange>,
}

pub async fn batch_update_quantities(
    changes: Vec<QuantityChange>,
) -> Result<BatchUpdateOutcome, ApiError> {
    post_json("/api/items/batch-update/", &BatchUpdateArgs { changes }).await
}

#[derive(Serialize)]
struct BatchMoveArgs {
    item_ids: Vec<u32>,
    container_id: u32,
}

pub async fn batch_move_items(
    item_ids: Vec<u32>,
    container_id: u32,
) -> Result<BatchMoveOutcome, ApiError> {
    let args = BatchMoveArgs {
        item_ids,
        container_id,
    };
    post_json("/api/items/batch-move/", &args).await
}

#[derive(Serialize)]
struct BatchRemoveArgs {
    item_ids: Vec<u32>,
    add_to_shopping: bool,
}

pub async fn batch_remove_items(
    item_ids: Vec<u32>,
    add_to_shopping: bool,
) -> Result<BatchRemoveOutcome, ApiError> {
    let args = BatchRemoveArgs {
        item_ids,
        add_to_shopping,
    };
    post_json("/api/items/batch-remove/", &args).await
}

// ========================
// Catalog mutations
// ========================

#[derive(Serialize)]
struct BatchAddArgs {
    food_ids: Vec<u32>,
}

pub async fn batch_add_to_shopping(food_ids: Vec<u32>) -> Result<BatchAddOutcome, ApiError> {
    post_json("/api/catalog/batch-add/", &BatchAddArgs { food_ids }).await
}

#[derive(Serialize)]
struct AddArgs {
    food_id: u32,
    container_id: u32,
    quantity: u32,
}

pub async fn add_to_container(
    food_id: u32,
    container_id: u32,
    quantity: u32,
) -> Result<AddOutcome, ApiError> {
    let args = AddArgs {
        food_id,
        container_id,
        quantity,
    };
    post_json("/api/catalog/add/", &args).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MoveOutcome;

    #[test]
    fn error_body_beats_success_parsing() {
        let result: Result<MoveOutcome, ApiError> =
            parse_body(r#"{"error":"Item not found"}"#);
        match result {
            Err(ApiError::Api(message)) => assert_eq!(message, "Item not found"),
            other => panic!("expected application error, got {other:?}"),
        }
    }

    #[test]
    fn success_body_decodes() {
        let outcome: MoveOutcome =
            parse_body(r#"{"success":true,"message":"Moved Bananas","shopping_count":4}"#)
                .unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.message, "Moved Bananas");
        assert_eq!(outcome.shopping_count, 4);
    }

    #[test]
    fn garbage_body_is_a_decode_error() {
        let result: Result<MoveOutcome, ApiError> = parse_body("<html>not json</html>");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn unknown_response_fields_are_ignored() {
        let outcome: crate::models::AddOutcome = parse_body(
            r#"{"success":true,"message":"ok","created":false,"new_quantity":3,"extra":"field"}"#,
        )
        .unwrap();
        assert!(!outcome.created);
        assert_eq!(outcome.new_quantity, 3);
    }
}
