// the tool icons shown in the tech stack grid and the skills spotlight
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TechRecord {
    pub label: &'static str,
    pub color: &'static str,
    pub achievements: &'static [&'static str],
}

impl TechRecord {
    /// Two-letter monogram rendered in place of a brand icon.
    pub fn monogram(&self) -> String {
        self.label
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .take(2)
            .collect()
    }

    // hex colour with an alpha suffix, e.g. "#326CE566"
    pub fn tint(&self, alpha: &str) -> String {
        format!("{}{}", self.color, alpha)
    }
}

pub const TECH_STACK: &[TechRecord] = &[
    TechRecord {
        label: "Kubernetes",
        color: "#326CE5",
        achievements: &[
            "Deployed and administered Kubernetes clusters for scalable microservices.",
            "Enabled 3x traffic growth without latency degradation.",
            "Stabilized platform operations across large production estates.",
        ],
    },
    TechRecord {
        label: "Docker",
        color: "#0DB7ED",
        achievements: &[
            "Automated build and deployment workflows with Dockerized services.",
            "Reduced deployment time by 50% through container-first releases.",
            "Improved environment consistency across multiple delivery stages.",
        ],
    },
    TechRecord {
        label: "Jenkins",
        color: "#D24939",
        achievements: &[
            "Designed and optimized CI/CD pipelines across 5 environments.",
            "Increased release frequency by 40% with reliable automation gates.",
            "Improved deployment reliability and reduced manual errors.",
        ],
    },
    TechRecord {
        label: "Terraform",
        color: "#7B42BC",
        achievements: &[
            "Standardized infrastructure provisioning with repeatable automation patterns.",
            "Improved infra consistency and rollout confidence for platform changes.",
            "Supported faster environment setup for delivery and testing teams.",
        ],
    },
    TechRecord {
        label: "AWS/Cloud",
        color: "#FF9900",
        achievements: &[
            "Managed cloud infrastructure and platform resources at scale.",
            "Optimized infrastructure utilization for 30% cloud cost reduction.",
            "Improved reliability posture with production-focused operations.",
        ],
    },
    TechRecord {
        label: "Linux",
        color: "#64748B",
        achievements: &[
            "Managed 100+ production Linux servers with hardening and compliance.",
            "Sustained 99.99% uptime for mission-critical services.",
            "Led patching, security baseline, and operational stability practices.",
        ],
    },
    TechRecord {
        label: "Prometheus",
        color: "#E6522C",
        achievements: &[
            "Implemented observability for proactive monitoring and alerting.",
            "Improved incident visibility and early failure detection.",
            "Contributed to 35% MTTR reduction with better telemetry coverage.",
        ],
    },
    TechRecord {
        label: "Grafana",
        color: "#F46800",
        achievements: &[
            "Built actionable dashboards for platform and service health.",
            "Accelerated root-cause analysis through high-signal visualization.",
            "Improved decision speed during incident response windows.",
        ],
    },
    TechRecord {
        label: "Python",
        color: "#3776AB",
        achievements: &[
            "Developed modular AI agents for task automation and orchestration.",
            "Built evaluation pipelines reaching 95% test coverage across edge cases.",
            "Improved response consistency by 18% through structured benchmarking.",
        ],
    },
    TechRecord {
        label: "Git",
        color: "#F1502F",
        achievements: &[
            "Enabled controlled release workflows with CI-integrated versioning.",
            "Supported collaborative delivery across infra and application teams.",
            "Improved change traceability for operational and project workstreams.",
        ],
    },
];

pub fn find_tech(label: &str) -> Option<&'static TechRecord> {
    TECH_STACK.iter().find(|t| t.label == label)
}
