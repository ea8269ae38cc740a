use serde::Deserialize;

/// Request body for `POST /planet`. Both keys are required.
#[derive(Debug, Deserialize)]
pub struct CreatePlanetRequest {
    pub planet_name: String,
    pub population: i64,
}
