//! Print the OpenAPI document as JSON.

use std::process::ExitCode;

use tripline::doc::ApiDoc;
use utoipa::OpenApi;

fn main() -> ExitCode {
    match ApiDoc::openapi().to_pretty_json() {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("failed to serialise OpenAPI document: {err}");
            ExitCode::FAILURE
        }
    }
}
