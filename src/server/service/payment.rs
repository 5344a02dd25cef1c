//! Mock responses for a third-party payment gateway's JSONP API.
//!
//! Both endpoints are stateless text templates: the caller-supplied `callback` name wraps
//! a JavaScript literal. Values the client omitted are rendered as `undefined`, which is
//! what the gateway's browser SDK expects to see for missing fields.

/// Rendered in place of any query value the client did not send.
const UNDEFINED: &str = "undefined";

/// Payment methods offered by the mock gateway, in the order the gateway lists them.
const PAYMENT_METHODS: [(u32, &str); 18] = [
    (11, "MASTERCARD"),
    (99, "TEST_CREDIT_CARD"),
    (44, "VISA"),
    (22, "DINERS"),
    (12, "AMEX"),
    (45, "VISA_DEBIT"),
    (34, "OTHERS_CASH"),
    (23, "CODENSA"),
    (36, "BANK_REFERENCED"),
    (25, "PSE"),
    (37, "EFECTY"),
    (26, "ACH_DEBIT"),
    (27, "CASH_ON_DELIVERY"),
    (733, "BNPL"),
    (40, "CMR"),
    (41, "MASTERPASS"),
    (43, "MASTERCARD_DEBIT"),
    (32, "LENDING_INSTALLMENTS"),
];

pub struct PaymentService;

impl PaymentService {
    /// Renders the payment method list wrapped in `callback(...)`.
    ///
    /// Every entry, including the last, is followed by a comma.
    pub fn payment_methods(callback: Option<&str>) -> String {
        let entries: String = PAYMENT_METHODS
            .iter()
            .map(|(id, name)| format!("{{id:{}, name:'{}'}},", id, name))
            .collect();

        format!("{}([{}])", callback.unwrap_or(UNDEFINED), entries)
    }

    /// Renders an approved tokenization result wrapped in `callback(...)`.
    ///
    /// # Arguments
    /// - `callback` - JSONP function name
    /// - `payer_id` - Echoed from `_card[payer_id]`
    /// - `method` - Echoed from `_card[method]`
    /// - `token` - Freshly generated token identifier
    pub fn token(
        callback: Option<&str>,
        payer_id: Option<&str>,
        method: Option<&str>,
        token: &str,
    ) -> String {
        format!(
            "{callback}({{\n    \"token\": \"{token}\",\n    \"name\": \"APPROVED\",\n    \"payer_id\": \"{payer_id}\",\n    \"method\": \"{method}\",\n    \"document\": \"null\"\n  }})",
            callback = callback.unwrap_or(UNDEFINED),
            token = token,
            payer_id = payer_id.unwrap_or(UNDEFINED),
            method = method.unwrap_or(UNDEFINED),
        )
    }
}
