use crate::config::BSFConfig;
use serde::{Deserialize, Serialize};
use truckpack::io::ext_repr::{ExtScenario, ExtSolution};

/// Everything written to the solution file: the scenario, its solution and the configuration used.
#[derive(Serialize, Deserialize, Clone)]
pub struct BSFOutput {
    #[serde(flatten)]
    pub scenario: ExtScenario,
    pub solution: ExtSolution,
    pub config: BSFConfig,
}
