#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExperienceMetric {
    pub label: &'static str,
    pub value: &'static str,
}

// one employer on the timeline
//
// bullets are ordered most important first, since the timeline cards and the
// spotlight only show a prefix of them until expanded
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExperienceRecord {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub location: Option<&'static str>,
    pub summary: &'static str,
    pub highlights: &'static [&'static str],
    pub metrics: &'static [ExperienceMetric],
    pub bullets: &'static [&'static str],
}

impl ExperienceRecord {
    pub fn is_collapsible(&self, preview: usize) -> bool {
        self.bullets.len() > preview
    }

    /// The bullets shown for the record given its expansion state.
    pub fn visible_bullets(&self, preview: usize, expanded: bool) -> &'static [&'static str] {
        if expanded {
            self.bullets
        } else {
            &self.bullets[..preview.min(self.bullets.len())]
        }
    }
}

pub const EXPERIENCE: &[ExperienceRecord] = &[
    ExperienceRecord {
        company: "Walmart Global Tech",
        role: "Senior System Engineer III",
        period: "Nov 2020 - Present",
        location: Some("Chennai"),
        summary: "Scaled enterprise DevOps and platform reliability across high-traffic, cloud-native systems with measurable delivery and uptime improvements.",
        highlights: &[
            "CI/CD modernization across 5 environments",
            "100+ Linux servers and large Kubernetes footprint",
            "AI agents integrated into production DevOps workflows",
            "End-to-end observability and incident acceleration",
        ],
        metrics: &[
            ExperienceMetric { label: "Release Velocity", value: "+40%" },
            ExperienceMetric { label: "Deployment Time", value: "-50%" },
            ExperienceMetric { label: "MTTR", value: "-35%" },
            ExperienceMetric { label: "Task Throughput", value: "+200%" },
        ],
        bullets: &[
            "Designed and optimized CI/CD workflows using Jenkins, increasing release frequency by 40% and improving deployment reliability across 5 environments.",
            "Automated build, deployment, and configuration workflows using Bash scripting, Ansible, and Docker, reducing manual operational effort by ~60% and cutting deployment time by 50%.",
            "Managed and maintained Linux production servers, achieving 99.99% uptime and ensuring compliance with security standards.",
            "Deployed and administered Kubernetes clusters, enabling scalable containerized microservices and supporting 3x traffic growth without degradation in latency.",
            "Implemented observability stack using Prometheus, Grafana, and Splunk, reducing MTTR by 35% and improving early incident detection rates.",
            "Managed OneOps cloud infrastructure, optimizing platform resources and configurations to reduce cloud costs by 30%.",
            "Performed log file analysis, root cause investigations, and capacity planning to ensure data integrity and support RTO and RPO objectives for critical services.",
            "Designed and developed modular AI agents capable of task automation, decision-based execution, and workflow orchestration for a 3x productivity improvement in targeted tasks.",
            "Built a multi-agent orchestration framework enabling agent-to-agent communication and tool integration (APIs, CLI, cloud services), increasing task throughput by 200%.",
            "Developed a structured Agent Evaluation Framework measuring accuracy, latency, hallucination rate, task completion score, and reliability across edge cases with 95% test coverage.",
            "Implemented benchmarking pipelines for prompt optimization and output consistency validation, improving model response consistency by 18%.",
            "Integrated AI agents into DevOps workflows for log summarization, incident diagnostics, release note generation, and infrastructure documentation, reducing manual triage time by 45%.",
            "Architected a prototype Super Agent system with persistent memory, RAG knowledge, tool execution, and guardrail monitoring for end-to-end automation.",
        ],
    },
    ExperienceRecord {
        company: "Cognizant Technology Solutions",
        role: "System Engineer",
        period: "Aug 2017 - Nov 2020",
        location: None,
        summary: "Built a strong reliability foundation through Linux hardening, automation, and operational runbook discipline in production infrastructure.",
        highlights: &[
            "Linux hardening and patch lifecycle ownership",
            "Automated routine maintenance and backups",
            "Proactive monitoring and issue prevention",
            "L2/L3 support for critical incidents",
        ],
        metrics: &[
            ExperienceMetric { label: "Role Scope", value: "L2/L3" },
            ExperienceMetric { label: "Core Focus", value: "Linux Ops" },
            ExperienceMetric { label: "Delivery Mode", value: "Automation" },
            ExperienceMetric { label: "Outcome", value: "Stability" },
        ],
        bullets: &[
            "Administered and hardened Linux servers for production environments, implementing security best practices, patch management, and compliance controls.",
            "Automated system backups, user account management, and routine maintenance using Bash scripting to improve operational efficiency.",
            "Monitored infrastructure using Prometheus, Grafana, and open source monitoring tools, proactively troubleshooting performance issues.",
            "Provided L2/L3 technical support for hardware, software, and OS-level incidents.",
            "Improved system stability and recovery readiness through disciplined runbooks and maintenance processes.",
        ],
    },
    ExperienceRecord {
        company: "DREAMSPLUS CONSULTING PVT LTD",
        role: "Technical Support Executive",
        period: "May 2016 - Apr 2017",
        location: None,
        summary: "Delivered frontline infrastructure and security operations, strengthening workstation, firewall, and communication reliability for business teams.",
        highlights: &[
            "Email and network security administration",
            "Firewall and workstation operational support",
            "Customer-facing service responsiveness",
            "Rapid issue handling in fast-paced environments",
        ],
        metrics: &[
            ExperienceMetric { label: "Domain", value: "IT Support" },
            ExperienceMetric { label: "Focus", value: "Security" },
            ExperienceMetric { label: "Environment", value: "Ops Desk" },
            ExperienceMetric { label: "Strength", value: "Response" },
        ],
        bullets: &[
            "Maintained email and network security systems, ensuring high availability, data protection, and uninterrupted communication.",
            "Administered network workstations and firewalls, strengthening organizational security posture and reducing vulnerability exposure.",
            "Delivered front-office interfaces and data provisioning services, improving responsiveness and service quality for customer-facing operations.",
            "Supported core IT operations and incident response workflows in a fast-paced service environment.",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncates_until_expanded() {
        let walmart = &EXPERIENCE[0];
        assert!(walmart.is_collapsible(4));
        assert_eq!(walmart.visible_bullets(4, false).len(), 4);
        assert_eq!(walmart.visible_bullets(4, true).len(), walmart.bullets.len());
    }

    #[test]
    fn short_records_are_not_collapsible() {
        let dreamsplus = &EXPERIENCE[2];
        assert!(!dreamsplus.is_collapsible(4));
        assert_eq!(dreamsplus.visible_bullets(10, false).len(), 4);
    }
}
