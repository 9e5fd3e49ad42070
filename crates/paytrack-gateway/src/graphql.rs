use axum::http::StatusCode;
use paytrack_core::{PaymentError, PaymentId};
use paytrack_platform::{
    CreatePaymentInput, GetContractPaymentsInput, GetPaymentsInput, UpdatePaymentInput,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tracing::{debug, warn};

use crate::api::PaymentApi;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest {
    #[serde(default)]
    pub operation_name: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub variables: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphqlResponse {
    pub data: Value,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphqlError>,
}

impl GraphqlResponse {
    fn data(operation: &str, value: Value) -> Self {
        let mut data = Map::new();
        data.insert(operation.to_string(), value);

        Self {
            data: Value::Object(data),
            errors: Vec::new(),
        }
    }

    fn error(message: String) -> Self {
        Self {
            data: Value::Null,
            errors: vec![GraphqlError { message }],
        }
    }
}

pub async fn execute(api: &PaymentApi, request: GraphqlRequest) -> (StatusCode, GraphqlResponse) {
    let Some(operation) = resolve_operation(&request) else {
        return (
            StatusCode::BAD_REQUEST,
            GraphqlResponse::error("operationName or query is required".to_string()),
        );
    };

    let variables = request.variables.unwrap_or_default();

    debug!(operation = %operation, "executing operation");
    match dispatch(api, &operation, &variables).await {
        Ok(value) => (StatusCode::OK, GraphqlResponse::data(&operation, value)),
        Err((status, message)) => {
            warn!(operation = %operation, "operation failed: {message}");
            (status, GraphqlResponse::error(message))
        }
    }
}

async fn dispatch(
    api: &PaymentApi,
    operation: &str,
    variables: &Map<String, Value>,
) -> Result<Value, (StatusCode, String)> {
    let output = match operation {
        "createPayment" => {
            let payment: CreatePaymentInput = variable(variables, "payment")?;
            json!(api.create_payment(payment).await)
        }
        "updatePayment" => {
            let update: UpdatePaymentInput = variable(variables, "update")?;
            let payment = api.update_payment(update).await.map_err(payment_error)?;
            json!(payment)
        }
        "deletePayment" => {
            let id: PaymentId = variable(variables, "id")?;
            let payment = api.delete_payment(id).await.map_err(payment_error)?;
            json!(payment)
        }
        "payments" => {
            let filters: GetPaymentsInput = variable(variables, "filters")?;
            json!(api.payments(filters).await)
        }
        "contractPayments" => {
            let filters: GetContractPaymentsInput = variable(variables, "filters")?;
            let summary = api.contract_payments(filters).await.map_err(payment_error)?;
            json!(summary)
        }
        _ => {
            return Err(invalid_request(format!(
                "unsupported operation '{operation}'"
            )));
        }
    };

    Ok(output)
}

fn resolve_operation(request: &GraphqlRequest) -> Option<String> {
    request
        .operation_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .or_else(|| request.query.as_deref().and_then(root_field))
        .map(str::to_string)
}

fn root_field(query: &str) -> Option<&str> {
    // Variable definitions may hold object defaults, so skip them first.
    let body = match (query.find('('), query.find('{')) {
        (Some(open), Some(brace)) if open < brace => &query[closing_paren(query, open)? + 1..],
        _ => query,
    };
    let selection = body[body.find('{')? + 1..].trim_start();
    let end = selection
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(selection.len());

    (end > 0).then(|| &selection[..end])
}

fn closing_paren(query: &str, open: usize) -> Option<usize> {
    let mut depth = 0_usize;
    for (index, c) in query[open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + index);
                }
            }
            _ => {}
        }
    }

    None
}

fn variable<T: DeserializeOwned>(
    variables: &Map<String, Value>,
    name: &str,
) -> Result<T, (StatusCode, String)> {
    let value = variables
        .get(name)
        .cloned()
        .ok_or_else(|| invalid_request(format!("variable '${name}' is required")))?;

    serde_json::from_value(value)
        .map_err(|err| invalid_request(format!("variable '${name}' is invalid: {err}")))
}

fn payment_error(err: PaymentError) -> (StatusCode, String) {
    (StatusCode::OK, err.to_string())
}

fn invalid_request(err: impl std::fmt::Display) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, err.to_string())
}
