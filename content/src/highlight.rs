use crate::section::Section;

// a project outcome card; clicking it jumps to the section backing the claim
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HighlightRecord {
    pub title: &'static str,
    pub context: &'static str,
    pub impact: &'static str,
    pub target: Section,
}

pub const HIGHLIGHTS: &[HighlightRecord] = &[
    HighlightRecord {
        title: "CI/CD Modernization",
        context: "Rebuilt delivery pipelines across 5 environments.",
        impact: "+40% release velocity and 50% faster deployment time.",
        target: Section::Experience,
    },
    HighlightRecord {
        title: "Reliability Engineering",
        context: "Platform hardening and observability maturity.",
        impact: "99.99% uptime with 35% MTTR reduction.",
        target: Section::Experience,
    },
    HighlightRecord {
        title: "Kubernetes Scale",
        context: "Container platform growth and traffic resilience.",
        impact: "Supported 3x traffic growth without latency degradation.",
        target: Section::Skills,
    },
    HighlightRecord {
        title: "AI in DevOps",
        context: "Multi-agent orchestration for engineering workflows.",
        impact: "200% throughput and 45% manual triage reduction.",
        target: Section::Projects,
    },
];
