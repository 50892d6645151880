use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::insights::LiveReport;
use crate::modules::metrics_calc::MoodTrend;
use crate::modules::overview::WellnessSnapshot;

const GREETING: &str = "Hello! I'm your Health Assistant with real-time data analysis \
capabilities. I continuously monitor your digital wellness patterns and provide \
personalized insights. How can I help optimize your screen time today?";

const OPENING_SUGGESTIONS: [&str; 4] = [
    "Analyze my real-time patterns",
    "Show current risk factors",
    "Generate improvement plan",
    "Monitor my progress",
];

const FOLLOW_UP_SUGGESTIONS: [&str; 4] = [
    "Show detailed analysis",
    "Create action plan",
    "Monitor progress",
    "Update recommendations",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub suggestions: Vec<String>,
}

/// One canned response: keyword predicates plus the template that renders it.
/// Rules are evaluated in order, first match wins.
struct ResponseRule {
    keywords: &'static [&'static str],
    render: fn(&WellnessSnapshot, &LiveReport) -> String,
}

const RULES: [ResponseRule; 4] = [
    ResponseRule {
        keywords: &["real-time", "current", "now"],
        render: render_real_time,
    },
    ResponseRule {
        keywords: &["risk", "alert"],
        render: render_risk_assessment,
    },
    ResponseRule {
        keywords: &["progress", "monitor"],
        render: render_progress,
    },
    ResponseRule {
        keywords: &["improve", "plan"],
        render: render_improvement_plan,
    },
];

/// Pick the first rule whose keyword appears in the lowercased input and
/// render its template. No rule matching falls back to the general block.
pub fn respond(input: &str, snapshot: &WellnessSnapshot, report: &LiveReport) -> String {
    let lower = input.to_lowercase();
    for rule in &RULES {
        if rule.keywords.iter().any(|keyword| lower.contains(keyword)) {
            return (rule.render)(snapshot, report);
        }
    }
    render_general(snapshot, report)
}

/// Chat history for one assistant session, seeded with the greeting.
#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        let mut transcript = Transcript {
            messages: Vec::new(),
            next_id: 1,
        };
        transcript.push(Role::Assistant, GREETING.to_string(), &OPENING_SUGGESTIONS);
        transcript
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Record the user's message and the assistant's scripted reply.
    /// Returns the reply.
    pub fn ask(
        &mut self,
        input: &str,
        snapshot: &WellnessSnapshot,
        report: &LiveReport,
    ) -> &ChatMessage {
        self.push(Role::User, input.to_string(), &[]);
        let reply = respond(input, snapshot, report);
        log::debug!("assistant reply selected for input: {}", input);
        self.push(Role::Assistant, reply, &FOLLOW_UP_SUGGESTIONS)
    }

    fn push(&mut self, role: Role, content: String, suggestions: &[&str]) -> &ChatMessage {
        let message = ChatMessage {
            id: self.next_id,
            role,
            content,
            timestamp: Utc::now(),
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
        };
        self.next_id += 1;
        self.messages.push(message);
        self.messages.last().expect("message just pushed")
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

fn trend_label(trend: MoodTrend) -> &'static str {
    match trend {
        MoodTrend::Improving => "Improving",
        MoodTrend::Declining => "Declining",
        MoodTrend::Stable => "Stable",
    }
}

fn bullets_or(lines: &[String], fallback: &str) -> String {
    if lines.is_empty() {
        format!("- {}", fallback)
    } else {
        lines
            .iter()
            .map(|line| format!("- {}", line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn render_real_time(snapshot: &WellnessSnapshot, report: &LiveReport) -> String {
    let suggested_activity = if snapshot.screen_time > 4.0 {
        "Physical movement"
    } else {
        "Mindful breathing"
    };
    format!(
        "**Real-Time Analysis Complete:**\n\n\
**Current Status (Live Data):**\n\
- Active screen time today: {:.1}h\n\
- Current mood indicator: {:.1}/10\n\
- Weekly trend: {}\n\n\
**Active Risk Factors:**\n{}\n\n\
**Positive Indicators:**\n{}\n\n\
**Immediate Recommendations:**\n\
- Suggested activity: {}\n\
- Evening cutoff: 9:00 PM ({} hours remaining)",
        report.current_screen_time,
        report.today_mood,
        trend_label(report.trend),
        bullets_or(&report.risk_factors, "No immediate risks detected"),
        bullets_or(&report.improvements, "Working on improvements..."),
        suggested_activity,
        21u32.saturating_sub(report.hour),
    )
}

fn render_risk_assessment(snapshot: &WellnessSnapshot, report: &LiveReport) -> String {
    let (high, medium): (Vec<String>, Vec<String>) = report
        .risk_factors
        .iter()
        .cloned()
        .partition(|risk| risk.contains("Excessive") || risk.contains("Late"));

    format!(
        "**Risk Factor Assessment:**\n\n\
**High Priority Alerts:**\n{}\n\n\
**Medium Priority Concerns:**\n{}\n\n\
**Predictive Analysis:**\n\
- Risk of mood decline: {}\n\
- Sleep disruption probability: {}\n\
- Focus degradation risk: {}\n\n\
**Preventive Actions:**\n\
1. Set immediate app timer for remaining high-usage apps\n\
2. Enable blue light filter if not already active\n\
3. Schedule 10-minute outdoor break within next hour\n\
4. Prepare alternative evening activities",
        bullets_or(&high, "No high-priority risks"),
        bullets_or(&medium, "No medium-priority concerns"),
        if snapshot.screen_time > 8.0 { "High (65%)" } else { "Low (15%)" },
        if report.hour > 20 { "High (80%)" } else { "Low (20%)" },
        if snapshot.screen_time > 6.0 { "Medium (45%)" } else { "Low (10%)" },
    )
}

fn render_progress(snapshot: &WellnessSnapshot, report: &LiveReport) -> String {
    let trend_improving = report.trend == MoodTrend::Improving;
    format!(
        "**Progress Monitoring Dashboard:**\n\n\
**Weekly Performance:**\n\
- Screen time reduction: {} vs last week\n\
- Mood stability: {}\n\
- Sleep quality trend: {}\n\
- Focus duration: {}\n\n\
**Goal Achievement:**\n\
- Daily screen time target (6h): {}\n\
- Evening cutoff (9 PM): {}\n\n\
**Adaptive Recommendations:**\n\
Based on your progress, I'm adjusting your plan:\n\
- {}\n\
- Focus area for next week: {}\n\
- New challenge: {}",
        if trend_improving { "+12%" } else { "-8%" },
        if snapshot.mood > 6.0 { "Stable" } else { "Needs attention" },
        if snapshot.sleep > 7.0 { "Improving" } else { "Declining" },
        if snapshot.focus > 6.0 { "Above average" } else { "Below target" },
        if snapshot.screen_time <= 6.0 { "Met" } else { "Exceeded" },
        if report.hour < 21 { "On track" } else { "Past cutoff" },
        if trend_improving {
            "Continue current strategies"
        } else {
            "Implementing stricter limits"
        },
        if snapshot.anxiety > 5.0 {
            "Anxiety management"
        } else {
            "Productivity optimization"
        },
        if snapshot.screen_time < 7.0 {
            "Quality over quantity focus"
        } else {
            "Digital minimalism week"
        },
    )
}

fn render_improvement_plan(snapshot: &WellnessSnapshot, _report: &LiveReport) -> String {
    let weekly_target = (snapshot.screen_time - 1.0).max(4.0);
    format!(
        "**Personalized Improvement Plan:**\n\n\
**Phase 1: Immediate Actions (Next 24 hours)**\n\
- Reduce current session by 30 minutes\n\
- Implement 5-minute break every 25 minutes\n\
- Switch to airplane mode during meals\n\
- Set phone to grayscale after 8 PM\n\n\
**Phase 2: Weekly Optimization (Next 7 days)**\n\
- Daily screen time target: {:.1}h\n\
- Morning routine: 30 min phone-free time\n\
- Replace 1h social media with physical activity\n\
- Evening wind-down: 2h before bed screen-free\n\n\
**Phase 3: Long-term Adaptation (Next 30 days)**\n\
- Develop 3 offline hobbies\n\
- Create social accountability system\n\
- Monthly digital wellness assessment\n\
- Establish sustainable maintenance routine\n\n\
**Success Metrics & Tracking:**\n\
- Mood improvement target: +15% within 2 weeks\n\
- Sleep quality target: +20% within 3 weeks\n\
- Anxiety reduction target: -25% within 4 weeks\n\
- Focus enhancement target: +30% within 1 month",
        weekly_target,
    )
}

fn render_general(snapshot: &WellnessSnapshot, report: &LiveReport) -> String {
    format!(
        "**Wellness Analysis:**\n\n\
I've analyzed your current digital wellness patterns. Here's what I found:\n\n\
**Current Assessment:**\n\
- Screen time impact: {}\n\
- Mental health correlation: {}\n\
- Behavioral patterns: {}\n\n\
**Recommendations:**\n\
- Priority focus: {}\n\
- Intervention level: {}\n\
- Monitoring frequency: {}\n\n\
Would you like me to dive deeper into any specific area or create a detailed action plan?",
        if snapshot.screen_time > 7.0 { "High concern" } else { "Manageable" },
        if snapshot.mood < 6.0 {
            "Negative trend detected"
        } else {
            "Stable patterns"
        },
        if report.risk_factors.len() > 2 {
            "Multiple risk factors"
        } else {
            "Generally healthy"
        },
        if snapshot.anxiety > 5.0 { "Anxiety management" } else { "Optimization" },
        if report.risk_factors.len() > 1 { "Active" } else { "Preventive" },
        if snapshot.screen_time > 8.0 { "Hourly" } else { "Daily" },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::insights::live_report;

    fn snapshot() -> WellnessSnapshot {
        WellnessSnapshot {
            screen_time: 8.6,
            mood: 41.0 / 7.0,
            sleep: 51.1 / 7.0,
            anxiety: 30.0 / 7.0,
            focus: 39.0 / 7.0,
        }
    }

    #[test]
    fn transcript_starts_with_the_greeting() {
        let transcript = Transcript::new();
        let messages = transcript.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, Role::Assistant);
        assert_eq!(messages[0].suggestions.len(), 4);
    }

    #[test]
    fn keyword_matching_is_case_insensitive_and_ordered() {
        let snapshot = snapshot();
        let report = live_report(&snapshot, 14);

        let reply = respond("Show CURRENT patterns", &snapshot, &report);
        assert!(reply.starts_with("**Real-Time Analysis Complete:**"));

        // "now" also appears in "know"; substring matching is intentional.
        let reply = respond("I want to know more", &snapshot, &report);
        assert!(reply.starts_with("**Real-Time Analysis Complete:**"));

        // "current" outranks "risk": first rule in order wins.
        let reply = respond("current risk", &snapshot, &report);
        assert!(reply.starts_with("**Real-Time Analysis Complete:**"));
    }

    #[test]
    fn each_rule_renders_its_own_block() {
        let snapshot = snapshot();
        let report = live_report(&snapshot, 14);

        assert!(respond("any risks?", &snapshot, &report)
            .starts_with("**Risk Factor Assessment:**"));
        assert!(respond("monitor my progress", &snapshot, &report)
            .starts_with("**Progress Monitoring Dashboard:**"));
        assert!(respond("give me a plan", &snapshot, &report)
            .starts_with("**Personalized Improvement Plan:**"));
        assert!(respond("hello there", &snapshot, &report).starts_with("**Wellness Analysis:**"));
    }

    #[test]
    fn improvement_plan_keeps_the_fractional_target() {
        let snapshot = snapshot();
        let report = live_report(&snapshot, 14);
        // 8.6h - 1h floor at 4h gives 7.6h, not a rounded 8h.
        let reply = respond("improve my habits", &snapshot, &report);
        assert!(reply.contains("Daily screen time target: 7.6h"));

        let light = WellnessSnapshot { screen_time: 3.0, ..snapshot };
        let report = live_report(&light, 14);
        let reply = respond("improve my habits", &light, &report);
        assert!(reply.contains("Daily screen time target: 4.0h"));
    }

    #[test]
    fn risk_block_partitions_priorities() {
        let heavy = WellnessSnapshot {
            screen_time: 9.5,
            mood: 4.0,
            sleep: 6.0,
            anxiety: 7.0,
            focus: 4.0,
        };
        let report = live_report(&heavy, 22);
        let reply = respond("alert me", &heavy, &report);
        let high_section = reply
            .split("**Medium Priority Concerns:**")
            .next()
            .unwrap();
        assert!(high_section.contains("Excessive daily usage"));
        assert!(high_section.contains("Late evening usage detected"));
        assert!(!high_section.contains("Elevated anxiety levels"));
    }

    #[test]
    fn ask_appends_user_and_assistant_messages() {
        let snapshot = snapshot();
        let report = live_report(&snapshot, 10);
        let mut transcript = Transcript::new();

        transcript.ask("make me a plan", &snapshot, &report);
        let messages = transcript.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[2].role, Role::Assistant);
        assert!(messages[2].content.contains("Phase 1"));
        // ids are unique and increasing
        assert!(messages[0].id < messages[1].id && messages[1].id < messages[2].id);
    }
}
