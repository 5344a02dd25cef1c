use axum::{extract::Query, http::header::CONTENT_TYPE, response::IntoResponse};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::server::service::payment::PaymentService;

/// Tag for grouping mock payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payment";

const JSONP_CONTENT_TYPE: &str = "application/javascript; charset=utf-8";

/// Raw query pairs in request order. Decoding into pairs cannot fail, so the mock
/// endpoints have no rejection path even for repeated keys.
type QueryPairs = Vec<(String, String)>;

/// First value sent for `key`, if any.
fn first(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.clone())
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaymentMethodsParams {
    /// JSONP callback function name
    pub callback: Option<String>,
    pub public_key: Option<String>,
    pub account_id: Option<String>,
    pub list_id: Option<String>,
}

impl PaymentMethodsParams {
    fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            callback: first(pairs, "callback"),
            public_key: first(pairs, "public_key"),
            account_id: first(pairs, "account_id"),
            list_id: first(pairs, "list_id"),
        }
    }
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TokenParams {
    /// JSONP callback function name
    pub callback: Option<String>,
    #[serde(rename = "_card[payer_id]")]
    pub payer_id: Option<String>,
    #[serde(rename = "_card[method]")]
    pub method: Option<String>,
}

impl TokenParams {
    fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            callback: first(pairs, "callback"),
            payer_id: first(pairs, "_card[payer_id]"),
            method: first(pairs, "_card[method]"),
        }
    }
}

/// Mock gateway payment method list.
///
/// Repeated query keys resolve to their first value.
#[utoipa::path(
    get,
    path = "/payments-api/4.0/service.payment",
    tag = PAYMENT_TAG,
    params(PaymentMethodsParams),
    responses(
        (status = 200, description = "JSONP payment method list", content_type = "application/javascript", body = String)
    ),
)]
pub async fn payment_methods(Query(pairs): Query<QueryPairs>) -> impl IntoResponse {
    let params = PaymentMethodsParams::from_pairs(&pairs);

    tracing::debug!(
        "Payment method list requested (public_key: {:?}, account_id: {:?}, list_id: {:?})",
        params.public_key,
        params.account_id,
        params.list_id
    );

    let body = PaymentService::payment_methods(params.callback.as_deref());

    ([(CONTENT_TYPE, JSONP_CONTENT_TYPE)], body)
}

/// Mock gateway card tokenization, always approved with a fresh token.
#[utoipa::path(
    get,
    path = "/payments-api/4.0/service.token",
    tag = PAYMENT_TAG,
    params(TokenParams),
    responses(
        (status = 200, description = "JSONP tokenization result", content_type = "application/javascript", body = String)
    ),
)]
pub async fn payment_token(Query(pairs): Query<QueryPairs>) -> impl IntoResponse {
    let params = TokenParams::from_pairs(&pairs);
    let token = Uuid::new_v4().to_string();

    let body = PaymentService::token(
        params.callback.as_deref(),
        params.payer_id.as_deref(),
        params.method.as_deref(),
        &token,
    );

    ([(CONTENT_TYPE, JSONP_CONTENT_TYPE)], body)
}
