//! Lambda entry point answering JSON valuation requests
//!
//! An empty body values the base case. Otherwise the body carries the
//! inputs, an optional WACC build-up (which overrides the discount rate),
//! and optional sweep parameters to include a sensitivity grid.

use lambda_http::{run, service_fn, Body, Request, Response};
use lambda_runtime::Error;
use serde::Deserialize;
use serde_json::json;

use dcf_valuation::{
    DcfInputs, SensitivityGrid, SweepParams, ValuationEngine, WaccComponents,
};

#[derive(Debug, Default, Deserialize)]
struct ValuationRequest {
    #[serde(default)]
    inputs: DcfInputs,

    /// When present, the discount rate is derived from these components
    #[serde(default)]
    wacc_components: Option<WaccComponents>,

    /// When present, a sensitivity grid is included in the response
    #[serde(default)]
    sensitivity: Option<SweepParams>,
}

async fn handle(event: Request) -> Result<Response<Body>, Error> {
    let request: ValuationRequest = match event.body() {
        Body::Empty => ValuationRequest::default(),
        Body::Text(text) => match serde_json::from_str(text) {
            Ok(request) => request,
            Err(err) => return bad_request(&err.to_string()),
        },
        Body::Binary(bytes) => match serde_json::from_slice(bytes) {
            Ok(request) => request,
            Err(err) => return bad_request(&err.to_string()),
        },
    };

    let mut inputs = request.inputs;
    if let Some(components) = &request.wacc_components {
        inputs.discount_rate = components.wacc();
    }

    let result = match ValuationEngine::new(inputs.clone()).value() {
        Ok(result) => result,
        Err(err) => return bad_request(&err.to_string()),
    };

    let grid = request
        .sensitivity
        .as_ref()
        .map(|params| SensitivityGrid::sweep_around(&inputs, params));

    let body = json!({
        "valuation": result,
        "sensitivity": grid,
    });

    Ok(Response::builder()
        .status(200)
        .header("content-type", "application/json")
        .body(Body::Text(body.to_string()))?)
}

fn bad_request(message: &str) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(400)
        .header("content-type", "application/json")
        .body(Body::Text(json!({ "error": message }).to_string()))?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handle)).await
}
