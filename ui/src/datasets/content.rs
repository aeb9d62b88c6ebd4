//! Page content for the overview, experiment design and summary views.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatCard {
    pub value: String,
    pub title: String,
    pub subtitle: String,
    pub tone: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LabeledValue {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GpuStatus {
    pub temperature: String,
    pub utilisation: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FocusArea {
    pub icon: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MatrixCell {
    pub count: u32,
    pub label: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LengthShare {
    pub length: String,
    pub count: u32,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Phase {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Finding {
    pub icon: String,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Overview {
    pub stats: Vec<StatCard>,
    pub config: Vec<LabeledValue>,
    pub gpu: GpuStatus,
    pub focus: Vec<FocusArea>,
    pub test_matrix: Vec<MatrixCell>,
    pub length_distribution: Vec<LengthShare>,
    pub phases: Vec<Phase>,
    pub findings: Vec<Finding>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Objective {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoundPlan {
    pub round: String,
    pub title: String,
    pub tests: Vec<String>,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Variables {
    pub independent: Vec<String>,
    pub dependent: Vec<String>,
    pub controlled: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AttackMode {
    pub mode: String,
    pub name: String,
    pub description: String,
    pub command: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TestDesign {
    pub round: String,
    pub focus: String,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Charset {
    pub symbol: String,
    pub description: String,
    pub example: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MaskExample {
    pub mask: String,
    pub parts: Vec<String>,
    pub keyspace: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Flag {
    pub param: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Workload {
    pub flag: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Optimization {
    pub title: String,
    pub description: String,
    pub impact: String,
    pub limitation: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Design {
    pub objectives: Vec<Objective>,
    pub rounds: Vec<RoundPlan>,
    pub variables: Variables,
    pub attack_mode: AttackMode,
    pub test_designs: Vec<TestDesign>,
    pub charsets: Vec<Charset>,
    pub mask_examples: Vec<MaskExample>,
    pub system: Vec<LabeledValue>,
    pub flags: Vec<Flag>,
    pub workloads: Vec<Workload>,
    pub optimizations: Vec<Optimization>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KeyFinding {
    pub title: String,
    pub stat: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Recommendation {
    pub level: String,
    pub tone: String,
    pub length: String,
    pub time: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Practice {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Conclusion {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Findings {
    pub key_findings: Vec<KeyFinding>,
    pub recommendations: Vec<Recommendation>,
    pub practices: Vec<Practice>,
    pub conclusions: Vec<Conclusion>,
    pub final_recommendation: String,
}
