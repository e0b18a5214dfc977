use serde::{Deserialize, Serialize};

/// The fifteen-field note record extracted from one transcript.
///
/// Every field is required and opaque text. A missing or `null` field makes the
/// whole response malformed; nothing is defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub year_round_employees: String,
    pub seasonal_employees: String,
    pub number_of_clients: String,
    pub estimated_revenue: String,
    pub firm_industry: String,
    pub current_software: String,
    pub decision_maker: String,
    pub buying_timeline: String,
    pub next_steps: String,
    pub what_resonated: String,
    pub objections: String,
    pub pain_points: String,
    pub notes: String,
    pub likelihood_to_close: String,
    pub how_they_found_us: String,
}

/// Static description of one record field: wire key, table label, schema hint.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// All record fields in display order.
pub const ANALYSIS_FIELDS: [FieldSpec; 15] = [
    FieldSpec {
        key: "yearRoundEmployees",
        label: "Number of year-round employees",
        description: "Number of permanent employees. Pure number only.",
    },
    FieldSpec {
        key: "seasonalEmployees",
        label: "Number of seasonal employees",
        description: "Number of seasonal employees. Pure number only.",
    },
    FieldSpec {
        key: "numberOfClients",
        label: "Number of clients",
        description: "Number of clients. Pure number only.",
    },
    FieldSpec {
        key: "estimatedRevenue",
        label: "Estimated revenue per year",
        description: "Estimated revenue. Pure number only, no formatting.",
    },
    FieldSpec {
        key: "firmIndustry",
        label: "Firm industry",
        description: "The industry of the firm.",
    },
    FieldSpec {
        key: "currentSoftware",
        label: "Current software used and purpose",
        description: "Software currently used and its purpose. Use bullets if multiple.",
    },
    FieldSpec {
        key: "decisionMaker",
        label: "Decision maker",
        description: "Who is the decision maker.",
    },
    FieldSpec {
        key: "buyingTimeline",
        label: "Buying timeline",
        description: "When they plan to buy.",
    },
    FieldSpec {
        key: "nextSteps",
        label: "Next steps",
        description: "Next steps and meeting time. Write as a task for myself.",
    },
    FieldSpec {
        key: "whatResonated",
        label: "What resonated with the firm",
        description: "What features solved their problems.",
    },
    FieldSpec {
        key: "objections",
        label: "Objections",
        description: "Real objections mentioned. Use bullets if multiple.",
    },
    FieldSpec {
        key: "painPoints",
        label: "Pain points",
        description: "Problems and negative impacts. Use bullets.",
    },
    FieldSpec {
        key: "notes",
        label: "Notes",
        description: "Interesting facts, location, urgency, competitors. Ignore the sales rep's words.",
    },
    FieldSpec {
        key: "likelihoodToClose",
        label: "Likelihood to close",
        description: "Score out of 10 (e.g. '5/10').",
    },
    FieldSpec {
        key: "howTheyFoundUs",
        label: "How they found us",
        description: "How they found the product.",
    },
];

/// One rendered table row, ready for a view to display and copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
}

impl AnalysisRecord {
    /// Looks a field up by its wire key.
    pub fn value(&self, key: &str) -> Option<&str> {
        let value = match key {
            "yearRoundEmployees" => &self.year_round_employees,
            "seasonalEmployees" => &self.seasonal_employees,
            "numberOfClients" => &self.number_of_clients,
            "estimatedRevenue" => &self.estimated_revenue,
            "firmIndustry" => &self.firm_industry,
            "currentSoftware" => &self.current_software,
            "decisionMaker" => &self.decision_maker,
            "buyingTimeline" => &self.buying_timeline,
            "nextSteps" => &self.next_steps,
            "whatResonated" => &self.what_resonated,
            "objections" => &self.objections,
            "painPoints" => &self.pain_points,
            "notes" => &self.notes,
            "likelihoodToClose" => &self.likelihood_to_close,
            "howTheyFoundUs" => &self.how_they_found_us,
            _ => return None,
        };
        Some(value)
    }

    /// The record as labelled table rows, in display order.
    pub fn rows(&self) -> Vec<TableRow> {
        ANALYSIS_FIELDS
            .iter()
            .map(|field| TableRow {
                key: field.key,
                label: field.label,
                value: self.value(field.key).unwrap_or_default().to_string(),
            })
            .collect()
    }
}

/// A complete, valid extraction response body.
#[cfg(test)]
pub(crate) fn sample_json() -> serde_json::Value {
    use serde_json::json;

    json!({
        "yearRoundEmployees": "4",
        "seasonalEmployees": "2",
        "numberOfClients": "350",
        "estimatedRevenue": "380000",
        "firmIndustry": "Tax preparation",
        "currentSoftware": "- Drake for returns\n- Excel for tracking",
        "decisionMaker": "Maria, the owner",
        "buyingTimeline": "Before next tax season",
        "nextSteps": "I need to send the proposal by Friday",
        "whatResonated": "Client portal and e-signatures",
        "objections": "- Price\n- Migration effort",
        "painPoints": "- Chasing documents by email",
        "notes": "Based in Ohio, looking at a competitor too",
        "likelihoodToClose": "7/10",
        "howTheyFoundUs": "Google search"
    })
}
