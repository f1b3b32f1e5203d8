//! Item request HTTP handlers.
//!
//! ```text
//! POST /requests               {"description":"Need a ladder"}
//! GET  /requests
//! GET  /requests/all
//! GET  /requests/{requestId}
//! ```

use actix_web::{get, post, web};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, ItemRequest, ItemRequestDetails, RequestAnswer, RequestId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::sharer::SharerUserId;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, positive_id, require_text};

/// Request payload for posting an item request.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct NewItemRequestBody {
    /// What the requestor is looking for.
    #[schema(example = "Need a ladder for the weekend")]
    pub description: Option<String>,
}

/// Item listed in answer to a request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestAnswerBody {
    /// Answering item.
    pub id: i64,
    /// Item name.
    pub name: String,
    /// Item owner.
    pub owner_id: i64,
}

impl From<RequestAnswer> for RequestAnswerBody {
    fn from(value: RequestAnswer) -> Self {
        Self {
            id: value.id.get(),
            name: value.name,
            owner_id: value.owner_id.get(),
        }
    }
}

/// Item request response payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequestBody {
    /// Request identifier.
    pub id: i64,
    /// What the requestor is looking for.
    pub description: String,
    /// Posting user.
    pub requestor_id: i64,
    /// Time the request was posted.
    pub created: NaiveDateTime,
    /// Items listed in answer.
    pub items: Vec<RequestAnswerBody>,
}

impl From<ItemRequest> for ItemRequestBody {
    fn from(value: ItemRequest) -> Self {
        Self {
            id: value.id.get(),
            description: value.description,
            requestor_id: value.requestor_id.get(),
            created: value.created,
            items: Vec::new(),
        }
    }
}

impl From<ItemRequestDetails> for ItemRequestBody {
    fn from(value: ItemRequestDetails) -> Self {
        Self {
            items: value.items.into_iter().map(RequestAnswerBody::from).collect(),
            ..Self::from(value.request)
        }
    }
}

fn request_list(requests: Vec<ItemRequestDetails>) -> web::Json<Vec<ItemRequestBody>> {
    web::Json(requests.into_iter().map(ItemRequestBody::from).collect())
}

/// Post a request for an item the caller wants to borrow.
#[utoipa::path(
    post,
    path = "/requests",
    request_body = NewItemRequestBody,
    params(("X-Sharer-User-Id" = i64, Header, description = "Requestor")),
    responses(
        (status = 200, description = "Request stored", body = ItemRequestBody),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "User not found", body = Error)
    ),
    tags = ["requests"],
    operation_id = "addRequest"
)]
#[post("/requests")]
pub async fn add_request(
    state: web::Data<HttpState>,
    sharer: SharerUserId,
    payload: web::Json<NewItemRequestBody>,
) -> ApiResult<web::Json<ItemRequestBody>> {
    let description = require_text(
        payload.into_inner().description,
        FieldName::new("description"),
    )?;
    let request = state
        .requests
        .add_request(sharer.user_id(), description)
        .await?;
    Ok(web::Json(request.into()))
}

/// Requests made by the caller, newest first.
#[utoipa::path(
    get,
    path = "/requests",
    params(("X-Sharer-User-Id" = i64, Header, description = "Requestor")),
    responses(
        (status = 200, description = "Own requests with answers", body = [ItemRequestBody]),
        (status = 404, description = "User not found", body = Error)
    ),
    tags = ["requests"],
    operation_id = "getUserRequests"
)]
#[get("/requests")]
pub async fn get_user_requests(
    state: web::Data<HttpState>,
    sharer: SharerUserId,
) -> ApiResult<web::Json<Vec<ItemRequestBody>>> {
    let requests = state
        .requests_query
        .get_user_requests(sharer.user_id())
        .await?;
    Ok(request_list(requests))
}

/// Every request, newest first.
#[utoipa::path(
    get,
    path = "/requests/all",
    responses(
        (status = 200, description = "All requests with answers", body = [ItemRequestBody])
    ),
    tags = ["requests"],
    operation_id = "getAllRequests"
)]
#[get("/requests/all")]
pub async fn get_all_requests(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<ItemRequestBody>>> {
    let requests = state.requests_query.get_all_requests().await?;
    Ok(request_list(requests))
}

/// One request with the items answering it.
#[utoipa::path(
    get,
    path = "/requests/{requestId}",
    params(("requestId" = i64, Path, description = "Request identifier")),
    responses(
        (status = 200, description = "Request with answers", body = ItemRequestBody),
        (status = 404, description = "Request not found", body = Error)
    ),
    tags = ["requests"],
    operation_id = "getRequest"
)]
#[get("/requests/{request_id}")]
pub async fn get_request(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<ItemRequestBody>> {
    let request_id = positive_id(path.into_inner(), FieldName::new("requestId"))?;
    let details = state
        .requests_query
        .get_request(RequestId::new(request_id))
        .await?;
    Ok(web::Json(details.into()))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use chrono::NaiveDate;
    use mockall::predicate::eq;
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::{ItemId, UserId};
    use crate::inbound::http::sharer::SHARER_USER_ID_HEADER;
    use crate::inbound::http::test_utils::MockPorts;

    fn created() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 2, 14)
            .and_then(|date| date.and_hms_opt(9, 0, 0))
            .expect("valid timestamp")
    }

    fn ladder_request() -> ItemRequest {
        ItemRequest {
            id: RequestId::new(6),
            description: "Need a ladder".to_owned(),
            requestor_id: UserId::new(1),
            created: created(),
        }
    }

    #[rstest]
    #[actix_web::test]
    async fn all_route_is_not_a_request_id() {
        let mut ports = MockPorts::default();
        ports.requests_query.expect_get_request().times(0);
        ports.requests_query.expect_get_all_requests().return_once(|| {
            Ok(vec![ItemRequestDetails {
                request: ladder_request(),
                items: vec![RequestAnswer {
                    id: ItemId::new(3),
                    name: "Ladder".to_owned(),
                    owner_id: UserId::new(2),
                }],
            }])
        });
        let app = actix_test::init_service(ports.into_app()).await;
        let request = actix_test::TestRequest::get().uri("/requests/all").to_request();

        let body: Value = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(
            body,
            json!([{
                "id": 6,
                "description": "Need a ladder",
                "requestorId": 1,
                "created": "2026-02-14T09:00:00",
                "items": [{"id": 3, "name": "Ladder", "ownerId": 2}],
            }])
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn add_request_passes_description() {
        let mut ports = MockPorts::default();
        ports
            .requests
            .expect_add_request()
            .with(eq(UserId::new(1)), eq("Need a ladder".to_owned()))
            .return_once(|_, _| Ok(ladder_request()));
        let app = actix_test::init_service(ports.into_app()).await;
        let request = actix_test::TestRequest::post()
            .uri("/requests")
            .insert_header((SHARER_USER_ID_HEADER, "1"))
            .set_json(json!({"description": "Need a ladder"}))
            .to_request();

        let body: Value = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(body.get("items"), Some(&json!([])));
    }

    #[rstest]
    #[actix_web::test]
    async fn blank_description_is_rejected() {
        let mut ports = MockPorts::default();
        ports.requests.expect_add_request().times(0);
        let app = actix_test::init_service(ports.into_app()).await;
        let request = actix_test::TestRequest::post()
            .uri("/requests")
            .insert_header((SHARER_USER_ID_HEADER, "1"))
            .set_json(json!({"description": ""}))
            .to_request();

        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
