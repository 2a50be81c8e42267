use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::use_cases::add_items::{AddItemsParams, AddItemsUseCase};
use business::domain::cart::use_cases::delete::{DeleteCartParams, DeleteCartUseCase};
use business::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use business::domain::cart::use_cases::remove_items::{RemoveItemsParams, RemoveItemsUseCase};
use business::domain::shared::value_objects::UserId;

use crate::api::cart::dto::{AddItemsRequest, CartResponse, DeleteCartRequest, RemoveItemsRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_use_case: Arc<dyn GetCartUseCase>,
    add_items_use_case: Arc<dyn AddItemsUseCase>,
    remove_items_use_case: Arc<dyn RemoveItemsUseCase>,
    delete_use_case: Arc<dyn DeleteCartUseCase>,
}

impl CartApi {
    pub fn new(
        get_use_case: Arc<dyn GetCartUseCase>,
        add_items_use_case: Arc<dyn AddItemsUseCase>,
        remove_items_use_case: Arc<dyn RemoveItemsUseCase>,
        delete_use_case: Arc<dyn DeleteCartUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_items_use_case,
            remove_items_use_case,
            delete_use_case,
        }
    }
}

/// Shopping cart API
///
/// Endpoints for reading and mutating a user's cart.
#[OpenApi]
impl CartApi {
    /// Get a cart
    ///
    /// Returns the stored items. 404 when nothing was ever stored for the user
    /// (or the cart was deleted); an emptied cart returns 200 with no items.
    #[oai(path = "/cart/:user_id", method = "get", tag = "ApiTags::Cart")]
    async fn get(&self, user_id: Path<String>) -> GetCartResponse {
        let params = GetCartParams {
            user_id: UserId::new(user_id.0),
        };

        match self.get_use_case.execute(params).await {
            Ok(cart) => GetCartResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetCartResponse::BadRequest(json),
                    404 => GetCartResponse::NotFound(json),
                    503 => GetCartResponse::ServiceUnavailable(json),
                    _ => GetCartResponse::InternalError(json),
                }
            }
        }
    }

    /// Add items to a cart
    ///
    /// Quantities of SKUs already in the cart are increased; new SKUs are
    /// appended in request order. Creates the cart if needed.
    #[oai(path = "/add-item", method = "post", tag = "ApiTags::Cart")]
    async fn add_items(&self, body: Json<AddItemsRequest>) -> MutateCartResponse {
        let params = AddItemsParams {
            user_id: UserId::new(body.0.user_id),
            items: body.0.items.into_iter().map(Into::into).collect(),
        };

        match self.add_items_use_case.execute(params).await {
            Ok(cart) => MutateCartResponse::Ok(Json(cart.into())),
            Err(err) => MutateCartResponse::from_error(err.into_error_response()),
        }
    }

    /// Remove items from a cart
    ///
    /// Decrements the listed SKUs (or drops them when `RemoveAll` is set).
    /// Lines reaching zero are removed; the cart itself is kept.
    #[oai(path = "/remove-item", method = "post", tag = "ApiTags::Cart")]
    async fn remove_items(&self, body: Json<RemoveItemsRequest>) -> MutateCartResponse {
        let params = RemoveItemsParams {
            user_id: UserId::new(body.0.user_id),
            items: body.0.items.into_iter().map(Into::into).collect(),
            remove_all: body.0.remove_all,
        };

        match self.remove_items_use_case.execute(params).await {
            Ok(cart) => MutateCartResponse::Ok(Json(cart.into())),
            Err(err) => MutateCartResponse::from_error(err.into_error_response()),
        }
    }

    /// Delete a cart
    ///
    /// Removes the whole cart record. Deleting a missing cart succeeds.
    #[oai(path = "/delete", method = "post", tag = "ApiTags::Cart")]
    async fn delete(&self, body: Json<DeleteCartRequest>) -> DeleteCartResponse {
        let params = DeleteCartParams {
            user_id: UserId::new(body.0.user_id),
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteCartResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => DeleteCartResponse::BadRequest(json),
                    503 => DeleteCartResponse::ServiceUnavailable(json),
                    _ => DeleteCartResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum MutateCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

impl MutateCartResponse {
    fn from_error((status, json): (poem::http::StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            400 => MutateCartResponse::BadRequest(json),
            503 => MutateCartResponse::ServiceUnavailable(json),
            _ => MutateCartResponse::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteCartResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}
