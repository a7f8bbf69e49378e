//! Synthetic telemetry types.
//!
//! Everything the console displays comes from a [`DashboardSnapshot`]
//! produced by the [`feed::MockFeed`]. Snapshots are plain values: the
//! feed owns the evolving state, views only ever read the latest copy
//! held by the app.

pub mod feed;

use chrono::{DateTime, Local};

/// Headline counters shown on the dashboard metric cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    /// Number of provisioned agents.
    pub total_agents: u32,
    /// Concurrently active sessions.
    pub active_sessions: u32,
    /// Spend accumulated today, in dollars.
    pub cost_today: f64,
    /// Tokens generated today.
    pub tokens_today: u64,
    /// Protocols completed today.
    pub tasks_completed_today: u32,
}

/// Memory usage sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryUsage {
    /// Used memory in MiB.
    pub used_mb: u64,
    /// Total memory in MiB.
    pub total_mb: u64,
    /// Used percentage, 0-100.
    pub percent: u8,
}

/// Host vital signs backing the gauge cluster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemHealth {
    /// CPU load percentage.
    pub cpu: f64,
    /// Memory usage sample.
    pub memory: MemoryUsage,
    /// Disk usage percentage, 0-100.
    pub disk_percent: u8,
}

/// Lifecycle state of a fleet agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentStatus {
    /// Actively reasoning over a task.
    Thinking,
    /// Waiting for work.
    Idle,
    /// Not reachable.
    Offline,
    /// Failed and needs attention.
    Error,
    /// Executing tool calls.
    Working,
}

impl AgentStatus {
    /// Lowercase label shown next to the status dot.
    pub fn label(self) -> &'static str {
        match self {
            AgentStatus::Thinking => "thinking",
            AgentStatus::Idle => "idle",
            AgentStatus::Offline => "offline",
            AgentStatus::Error => "error",
            AgentStatus::Working => "working",
        }
    }

    /// Whether the agent is currently consuming context.
    pub fn is_busy(self) -> bool {
        matches!(self, AgentStatus::Thinking | AgentStatus::Working)
    }
}

/// Percentage split of an agent's context window.
///
/// The four shares are display percentages; they sum to 100 in the
/// synthetic data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextBreakdown {
    /// System prompt share.
    pub system: u8,
    /// User history share.
    pub user: u8,
    /// Retrieved document share.
    pub rag: u8,
    /// Generated output share.
    pub output: u8,
}

/// A single fleet agent as shown on the roster.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentInfo {
    /// Stable identifier.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Role line, e.g. `ARCHITECT (CTO)`.
    pub role: &'static str,
    /// Backing model label.
    pub model: &'static str,
    /// Current lifecycle state.
    pub status: AgentStatus,
    /// One-line description of the current task.
    pub task: &'static str,
    /// Context window used, in thousands of tokens.
    pub context_used: u32,
    /// Context window size, in thousands of tokens.
    pub context_total: u32,
    /// Context composition.
    pub breakdown: ContextBreakdown,
    /// Installed capabilities.
    pub tools: &'static [&'static str],
}

/// Publishing channel for a scheduled content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostChannel {
    /// Long-form professional post.
    LinkedIn,
    /// Short-form post.
    Twitter,
    /// Blog article.
    Blog,
}

impl PostChannel {
    /// Short tag rendered in the calendar cell.
    pub fn tag(self) -> &'static str {
        match self {
            PostChannel::LinkedIn => "in",
            PostChannel::Twitter => "tw",
            PostChannel::Blog => "bl",
        }
    }
}

/// Workflow state of a scheduled content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostStatus {
    /// Published.
    Done,
    /// Queued for publishing.
    Scheduled,
    /// Being written.
    Draft,
    /// Not yet started.
    Idea,
}

/// One entry of the content calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialPost {
    /// Day of month, 1-based.
    pub day: u8,
    /// Short title.
    pub title: &'static str,
    /// Publishing channel.
    pub channel: PostChannel,
    /// Workflow state.
    pub status: PostStatus,
}

/// Per-model efficiency sample for the model battle chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelMetric {
    /// Model label.
    pub model: &'static str,
    /// Tasks completed.
    pub tasks: u64,
    /// Spend in dollars.
    pub cost: f64,
    /// Tasks-per-dollar score, 0-100.
    pub efficiency: u8,
}

/// One point of the hourly token consumption series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPoint {
    /// Hour of day, 0-23.
    pub hour: u8,
    /// Tokens consumed in that hour.
    pub tokens: u64,
}

/// Complete telemetry snapshot consumed by the views.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    /// When the snapshot was produced.
    pub generated_at: DateTime<Local>,
    /// Headline counters.
    pub stats: Stats,
    /// Host vital signs.
    pub health: SystemHealth,
    /// Fleet roster.
    pub agents: Vec<AgentInfo>,
    /// Content calendar entries.
    pub social_queue: Vec<SocialPost>,
    /// Model battle samples.
    pub model_metrics: Vec<ModelMetric>,
    /// Hourly token series, oldest first.
    pub token_series: Vec<ChartPoint>,
}

/// Workflow column of the mission protocol board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolStatus {
    /// Not started.
    Backlog,
    /// In progress.
    Active,
    /// Awaiting validation.
    Validation,
}

impl ProtocolStatus {
    /// Column header label.
    pub fn label(self) -> &'static str {
        match self {
            ProtocolStatus::Backlog => "BACKLOG",
            ProtocolStatus::Active => "ACTIVE",
            ProtocolStatus::Validation => "VALIDATION",
        }
    }
}

/// Priority band of a mission protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    /// Default band.
    Std,
    /// Elevated band.
    High,
    /// Drop-everything band.
    Critical,
}

impl Priority {
    /// Short label rendered on the card.
    pub fn label(self) -> &'static str {
        match self {
            Priority::Std => "STD",
            Priority::High => "HIGH",
            Priority::Critical => "CRIT",
        }
    }
}

/// One mission protocol card on the task board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Protocol {
    /// Ticket identifier, e.g. `MP-101`.
    pub id: &'static str,
    /// Card title.
    pub title: &'static str,
    /// Work category.
    pub kind: &'static str,
    /// Board column.
    pub status: ProtocolStatus,
    /// Priority band.
    pub priority: Priority,
    /// Owning agent.
    pub assignee: &'static str,
    /// Free-form tags.
    pub tags: &'static [&'static str],
    /// Human due label, e.g. `2h`.
    pub due: &'static str,
    /// Completion percentage, 0-100.
    pub progress: u8,
    /// Ids of protocols this one depends on.
    pub dependencies: &'static [&'static str],
}

/// The static mission protocol board.
pub const PROTOCOLS: &[Protocol] = &[
    Protocol {
        id: "MP-101",
        title: "Optimize API Gateway Routes",
        kind: "Optimization",
        status: ProtocolStatus::Active,
        priority: Priority::High,
        assignee: "CTO",
        tags: &["Backend"],
        due: "2h",
        progress: 65,
        dependencies: &[],
    },
    Protocol {
        id: "MP-102",
        title: "Scrape Competitor Pricing",
        kind: "Feature",
        status: ProtocolStatus::Backlog,
        priority: Priority::Std,
        assignee: "GROWTH",
        tags: &["Data"],
        due: "1d",
        progress: 0,
        dependencies: &[],
    },
    Protocol {
        id: "MP-103",
        title: "Fix Billing Webhook Payload",
        kind: "Bug",
        status: ProtocolStatus::Active,
        priority: Priority::Critical,
        assignee: "OPS",
        tags: &["Stripe"],
        due: "30m",
        progress: 90,
        dependencies: &[],
    },
    Protocol {
        id: "MP-105",
        title: "Vector Search v2",
        kind: "Feature",
        status: ProtocolStatus::Validation,
        priority: Priority::High,
        assignee: "CTO",
        tags: &["AI"],
        due: "4h",
        progress: 100,
        dependencies: &["MP-101"],
    },
    Protocol {
        id: "MP-107",
        title: "Resolve Auth Token Expiry",
        kind: "Bug",
        status: ProtocolStatus::Validation,
        priority: Priority::High,
        assignee: "SYS",
        tags: &["Auth"],
        due: "1h",
        progress: 100,
        dependencies: &[],
    },
];

/// Protocols currently in the given board column, in declaration order.
pub fn protocols_in(status: ProtocolStatus) -> Vec<&'static Protocol> {
    PROTOCOLS.iter().filter(|p| p.status == status).collect()
}
