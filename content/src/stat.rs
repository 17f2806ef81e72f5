#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatRecord {
    pub label: &'static str,
    pub end: f64,
    pub suffix: &'static str,
    pub decimals: usize,
    pub subtext: &'static str,
}

impl StatRecord {
    /// The final value of the counter, e.g. "99.99%" or "100+".
    pub fn display(&self) -> String {
        format!("{:.*}{}", self.decimals, self.end, self.suffix)
    }
}

pub const STATS: &[StatRecord] = &[
    StatRecord {
        label: "Servers Managed",
        end: 100.0,
        suffix: "+",
        decimals: 0,
        subtext: "Production Linux estate",
    },
    StatRecord {
        label: "Clusters Operated",
        end: 100.0,
        suffix: "+",
        decimals: 0,
        subtext: "Kubernetes and platform clusters",
    },
    StatRecord {
        label: "Production Uptime",
        end: 99.99,
        suffix: "%",
        decimals: 2,
        subtext: "Mission-critical reliability",
    },
    StatRecord {
        label: "MTTR Reduction",
        end: 35.0,
        suffix: "%",
        decimals: 0,
        subtext: "Faster incident recovery",
    },
    StatRecord {
        label: "Release Velocity",
        end: 40.0,
        suffix: "%",
        decimals: 0,
        subtext: "CI/CD modernization outcome",
    },
    StatRecord {
        label: "Task Throughput",
        end: 200.0,
        suffix: "%",
        decimals: 0,
        subtext: "AI-driven workflow acceleration",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_honours_decimals() {
        assert_eq!(STATS[0].display(), "100+");
        assert_eq!(STATS[2].display(), "99.99%");
    }
}
