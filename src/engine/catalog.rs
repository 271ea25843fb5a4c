use crate::model::error::GameError;
use crate::model::scenario::{choice, Scenario, Step};

/* =========================
   Scenario catalog
   ========================= */

// Every scenario follows the project lifecycle:
// Discovery -> Quality -> Metadata/Lineage -> Compliance/Access -> Scaling.

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "AI Purchase Order Assistant",
        steps: &[
            Step {
                prompt: "Step 1 - Discovery: how do you source supplier/master data for the project?",
                choices: &[
                    choice("Collect Excel exports from procurement teams (fast, fragmented)", 2, 1, -2, -1),
                    choice("Expose ERP supplier APIs via IT (structured, work to integrate)", -1, -1, 1, 1),
                    choice("Invest in a supplier master-data platform (MDM) for reuse", -3, -3, 3, 2),
                ],
            },
            Step {
                prompt: "Step 2 - Quality: duplicates & missing fields are discovered. What is your approach?",
                choices: &[
                    choice("Ask users to correct records manually (ad-hoc)", 2, 1, -2, -1),
                    choice("Automate validation rules at ingestion (pipelines)", -1, -1, 2, 1),
                    choice("Launch MDM deduplication and data stewardship program", -3, -2, 3, 2),
                ],
            },
            Step {
                prompt: "Step 3 - Metadata & lineage: AI team struggles to interpret fields. What do you do?",
                choices: &[
                    choice("Document ad-hoc in Confluence (manual)", 0, -1, 1, 0),
                    choice("Create a simple data catalog with field definitions", -1, -1, 2, 1),
                    choice("Deploy catalog with lineage & glossary integrated with tools", -2, -2, 3, 2),
                ],
            },
            Step {
                prompt: "Step 4 - Access & security: who should access supplier data and how?",
                choices: &[
                    choice("Share spreadsheets across teams (open access)", 1, 2, -3, -1),
                    choice("Use SharePoint with coarse permissions", 0, -1, 1, 0),
                    choice("Implement RBAC & audit logging in platform", -1, -2, 3, 2),
                ],
            },
            Step {
                prompt: "Step 5 - Scaling: pilot succeeded - what's your roll-out strategy?",
                choices: &[
                    choice("Leave it as a POC in one business unit", 1, 0, -2, -2),
                    choice("Expand step-by-step with light governance", -1, -1, 1, 1),
                    choice("Design enterprise roadmap with standard pipelines & cost control", -3, -3, 3, 3),
                ],
            },
        ],
    },
    Scenario {
        name: "Predictive Maintenance with IoT Data",
        steps: &[
            Step {
                prompt: "Step 1 - Discovery: plants log data in many formats. How do you onboard data?",
                choices: &[
                    choice("Collect CSV exports from each plant (quick but siloed)", 3, 0, -2, -2),
                    choice("Connect to SCADA/edge via APIs (reliable streams)", -1, -1, 2, 1),
                    choice("Centralize in an IoT data lake with schemas (future-proof)", -3, -2, 3, 2),
                ],
            },
            Step {
                prompt: "Step 2 - Quality: sensors show noise, missing values. What approach?",
                choices: &[
                    choice("Let data scientists clean case-by-case", 3, 0, -2, -2),
                    choice("Implement anomaly detection and auto-corrections", -1, -1, 2, 1),
                    choice("Build full validation pipelines and monitoring", -3, -2, 3, 2),
                ],
            },
            Step {
                prompt: "Step 3 - Lineage & explainability: maintenance teams ask where predictions come from. You should:",
                choices: &[
                    choice("Rely on engineers' tacit knowledge", 1, 0, -3, -1),
                    choice("Document transformations in Git/Confluence", 0, -1, 1, 0),
                    choice("Deploy metadata catalog with lineage & dashboards", -2, -2, 3, 2),
                ],
            },
            Step {
                prompt: "Step 4 - Compliance (AI Act): predictive maintenance may be high risk. You:",
                choices: &[
                    choice("Defer compliance work until after launch", 1, 2, -2, -1),
                    choice("Document decisions, add explainability tools", -1, -1, 2, 0),
                    choice("Set governance, audits and continuous controls", -3, -2, 3, 1),
                ],
            },
            Step {
                prompt: "Step 5 - Scaling: pilot shows value. Rollout plan?",
                choices: &[
                    choice("Keep one-off models per plant", 2, 2, -2, -3),
                    choice("Standardize processes and share best-practices", -1, -1, 2, 1),
                    choice("Build central platform with reusable models & governance", -3, -3, 3, 3),
                ],
            },
        ],
    },
    Scenario {
        name: "GenAI Chatbot for Customers",
        steps: &[
            Step {
                prompt: "Step 1 - Discovery & prep: content is in many formats and links broken. What do you do?",
                choices: &[
                    choice("Skip cleaning, rely on embeddings (fast)", 3, 0, -2, -2),
                    choice("Standardize formats and fix links (practical)", -1, -1, 2, 1),
                    choice("Tag content with metadata and lineage in a catalog", -3, -2, 3, 2),
                ],
            },
            Step {
                prompt: "Step 2 - Context for LLM: managers ask for source visibility. You choose:",
                choices: &[
                    choice("Deploy black-box LLM with no citations", 3, 0, -3, -2),
                    choice("Use RAG with source citations", -1, -1, 2, 1),
                    choice("Train domain LLM + audit trail/dashboards", -3, -2, 3, 2),
                ],
            },
            Step {
                prompt: "Step 3 - Access control: some docs are sensitive. You:",
                choices: &[
                    choice("Make bot public with no restrictions", 1, 0, -3, -2),
                    choice("Maintain internal & external bots separately", 0, 0, 1, -1),
                    choice("Integrate with SSO and RBAC for granular access", -2, -2, 3, 2),
                ],
            },
            Step {
                prompt: "Step 4 - Monitoring & quality: how to limit hallucinations?",
                choices: &[
                    choice("Rely on users to report bad answers", 2, 0, -3, -2),
                    choice("Set up automated QA & human-in-the-loop review", -1, -1, 2, 1),
                    choice("Implement continuous evaluation + SLAs + retraining pipeline", -3, -2, 3, 2),
                ],
            },
            Step {
                prompt: "Step 5 - Scaling: leadership requests a company-wide rollout. You:",
                choices: &[
                    choice("Keep it for customer support only", 1, -2, -2, 0),
                    choice("Extend to sales and partners with light governance", -1, -1, 1, 1),
                    choice("Integrate into enterprise portals with strict governance", -3, -3, 3, 3),
                ],
            },
        ],
    },
];

// Empty scenarios or steps cannot be defined.
const _: () = {
    let mut i = 0;
    while i < SCENARIOS.len() {
        let steps = SCENARIOS[i].steps;
        assert!(!steps.is_empty(), "scenario without steps");
        let mut j = 0;
        while j < steps.len() {
            assert!(!steps[j].choices.is_empty(), "step without choices");
            j += 1;
        }
        i += 1;
    }
};

pub fn all() -> &'static [Scenario] {
    SCENARIOS
}

pub fn names() -> impl Iterator<Item = &'static str> {
    all().iter().map(|s| s.name)
}

/// Exact-name lookup. Unknown names are an input error, never a fallback.
pub fn find(name: &str) -> Result<&'static Scenario, GameError> {
    SCENARIOS
        .iter()
        .find(|s| s.name == name)
        .ok_or_else(|| GameError::UnknownScenario(name.to_string()))
}
