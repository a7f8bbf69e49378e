//! Mock telemetry feed.
//!
//! Produces [`DashboardSnapshot`] values on demand. The feed starts from
//! a fixed baseline (also the fallback shown before the first refresh)
//! and applies bounded jitter on every refresh so the console reads as
//! live: counters drift upward, agents flip between idle and thinking,
//! context usage creeps towards the window size.
//!
//! Refreshes are driven from the app's tick timer; the feed itself owns
//! no timer and no thread.

use crate::data::{
    AgentInfo, AgentStatus, ChartPoint, ContextBreakdown, DashboardSnapshot, MemoryUsage,
    ModelMetric, PostChannel, PostStatus, SocialPost, Stats, SystemHealth,
};
use chrono::{Local, Timelike};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Probability that an agent flips between idle and busy on a refresh.
const STATUS_FLIP_CHANCE: f64 = 0.15;

/// Hours of token history kept in the chart series.
const SERIES_HOURS: u8 = 7;

/// Stateful generator of synthetic telemetry snapshots.
pub struct MockFeed {
    rng: StdRng,
    current: DashboardSnapshot,
}

impl MockFeed {
    /// Creates a feed seeded from OS entropy, holding the baseline
    /// snapshot as its current value.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Creates a feed with a fixed seed. Refresh sequences are then
    /// fully deterministic, which the tests rely on.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: StdRng) -> Self {
        let current = baseline(&mut rng);
        Self { rng, current }
    }

    /// The most recently produced snapshot.
    pub fn snapshot(&self) -> &DashboardSnapshot {
        &self.current
    }

    /// Advances the synthetic state one step and returns the new
    /// snapshot.
    pub fn refresh(&mut self) -> &DashboardSnapshot {
        let rng = &mut self.rng;
        let prev = &mut self.current;

        prev.generated_at = Local::now();

        prev.stats.active_sessions = 14 + rng.gen_range(0..5);
        prev.stats.tokens_today += rng.gen_range(0..500);
        prev.stats.cost_today += rng.gen::<f64>() * 0.001;

        prev.health.cpu = 2.0 + rng.gen::<f64>() * 4.0;
        prev.health.memory.percent = 40 + rng.gen_range(0..10);

        for agent in &mut prev.agents {
            if rng.gen_bool(STATUS_FLIP_CHANCE) {
                agent.status = match agent.status {
                    s if s.is_busy() => AgentStatus::Idle,
                    AgentStatus::Idle => AgentStatus::Thinking,
                    other => other,
                };
            }
            if agent.status.is_busy() {
                agent.context_used =
                    (agent.context_used + rng.gen_range(0..5)).min(agent.context_total);
            }
        }

        for metric in &mut prev.model_metrics {
            metric.tasks += rng.gen_range(0..2);
            metric.cost += rng.gen::<f64>() * 0.0001;
        }

        prev.token_series = token_series(rng);

        tracing::debug!(
            sessions = prev.stats.active_sessions,
            tokens = prev.stats.tokens_today,
            "telemetry refreshed"
        );
        &self.current
    }
}

impl Default for MockFeed {
    fn default() -> Self {
        Self::new()
    }
}

/// The fixed baseline snapshot shown before the first refresh.
fn baseline(rng: &mut StdRng) -> DashboardSnapshot {
    DashboardSnapshot {
        generated_at: Local::now(),
        stats: Stats {
            total_agents: 3,
            active_sessions: 14,
            cost_today: 0.4129,
            tokens_today: 190_292,
            tasks_completed_today: 12,
        },
        health: SystemHealth {
            cpu: 2.3,
            memory: MemoryUsage {
                used_mb: 3458,
                total_mb: 8192,
                percent: 42,
            },
            disk_percent: 84,
        },
        agents: roster(),
        social_queue: social_queue(),
        model_metrics: model_metrics(),
        token_series: token_series(rng),
    }
}

/// The fixed fleet roster.
fn roster() -> Vec<AgentInfo> {
    vec![
        AgentInfo {
            id: "agent-01",
            name: "CTO_Core_v4",
            role: "ARCHITECT (CTO)",
            model: "Gemini 1.5 Pro",
            status: AgentStatus::Thinking,
            task: "Optimizing API Gateway routes",
            context_used: 45,
            context_total: 128,
            breakdown: ContextBreakdown {
                system: 20,
                user: 15,
                rag: 45,
                output: 20,
            },
            tools: &["Kubectl", "AWS SDK", "Postgres", "Vercel CLI"],
        },
        AgentInfo {
            id: "agent-02",
            name: "Growth_Engine_01",
            role: "GROWTH (CMO)",
            model: "Gemini 1.5 Flash",
            status: AgentStatus::Idle,
            task: "Waiting for social queue",
            context_used: 12,
            context_total: 64,
            breakdown: ContextBreakdown {
                system: 40,
                user: 10,
                rag: 40,
                output: 10,
            },
            tools: &["Twitter API", "LinkedIn API", "DALL-E", "Google Trends"],
        },
        AgentInfo {
            id: "agent-03",
            name: "Ops_Manager_X",
            role: "OPERATIONS (COO)",
            model: "DeepSeek-V3",
            status: AgentStatus::Error,
            task: "Connection timeout on port 5432",
            context_used: 88,
            context_total: 128,
            breakdown: ContextBreakdown {
                system: 10,
                user: 30,
                rag: 50,
                output: 10,
            },
            tools: &["Stripe API", "Quickbooks", "Slack Webhook", "SendGrid"],
        },
    ]
}

/// The fixed content calendar.
fn social_queue() -> Vec<SocialPost> {
    vec![
        SocialPost {
            day: 2,
            title: "Launch Post",
            channel: PostChannel::LinkedIn,
            status: PostStatus::Done,
        },
        SocialPost {
            day: 5,
            title: "Feature Teaser",
            channel: PostChannel::Twitter,
            status: PostStatus::Done,
        },
        SocialPost {
            day: 12,
            title: "Case Study: Alpha",
            channel: PostChannel::Blog,
            status: PostStatus::Scheduled,
        },
        SocialPost {
            day: 15,
            title: "Meme Monday",
            channel: PostChannel::Twitter,
            status: PostStatus::Draft,
        },
        SocialPost {
            day: 22,
            title: "Product Update v2",
            channel: PostChannel::LinkedIn,
            status: PostStatus::Draft,
        },
    ]
}

/// The fixed model battle baseline.
fn model_metrics() -> Vec<ModelMetric> {
    vec![
        ModelMetric {
            model: "Gemini 1.5 Flash",
            tasks: 1420,
            cost: 0.12,
            efficiency: 95,
        },
        ModelMetric {
            model: "Gemini 1.5 Pro",
            tasks: 340,
            cost: 0.21,
            efficiency: 65,
        },
        ModelMetric {
            model: "DeepSeek-V3",
            tasks: 850,
            cost: 0.08,
            efficiency: 88,
        },
        ModelMetric {
            model: "GPT-4o",
            tasks: 120,
            cost: 0.35,
            efficiency: 30,
        },
    ]
}

/// Hourly token series for the trailing window, oldest first.
fn token_series(rng: &mut StdRng) -> Vec<ChartPoint> {
    let now_hour = Local::now().hour() as i32;
    (0..SERIES_HOURS)
        .rev()
        .map(|offset| {
            let hour = (now_hour - offset as i32).rem_euclid(24) as u8;
            ChartPoint {
                hour,
                tokens: 25_000 + rng.gen_range(0..15_000),
            }
        })
        .collect()
}
