//! Plain-text rendering for the terminal

use std::fmt::Write as _;

use subrogation_workflow_core::document::Segment;
use subrogation_workflow_core::{
    AgentStatus, Claim, ClaimSummary, ExceptionCase, ImpactBreakdown, ReviewQueue,
    ScenarioCatalog, WorkflowView,
};

const BAR_WIDTH: usize = 20;

/// `$15,750.00` from integer cents
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let dollars = (abs / 100).to_string();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}${}.{:02}", sign, grouped, abs % 100)
}

fn progress_bar(progress: f64) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

fn status_marker(status: AgentStatus) -> &'static str {
    match status {
        AgentStatus::Pending => " ",
        AgentStatus::Processing => ">",
        AgentStatus::Completed => "x",
        AgentStatus::Error => "!",
    }
}

/// One line for the render timer
pub fn status_line(view: &WorkflowView) -> String {
    let mut line = format!(
        "{} {} {} step {}/{}",
        view.claim_number,
        progress_bar(view.progress),
        view.status,
        view.current_step,
        view.agent_count
    );
    if let Some(agent) = view
        .agents
        .iter()
        .find(|a| a.status == AgentStatus::Processing)
    {
        let _ = write!(line, " | {} {}", agent.name, agent.elapsed_display);
    }
    line
}

/// Full workflow panel
pub fn workflow_view(view: &WorkflowView) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({})  run {}",
        view.claim_number, view.workflow_id, view.run_id
    );
    let _ = writeln!(
        out,
        "Status: {}  Step {}/{}  {} {:.0}%",
        view.status,
        view.current_step,
        view.agent_count,
        progress_bar(view.progress),
        view.progress * 100.0
    );
    for agent in &view.agents {
        let confidence = agent
            .confidence
            .map(|c| format!("{}%", c))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "  [{}] {}. {:<20} {:<11} {:>7}  {:>4}",
            status_marker(agent.status),
            agent.step,
            agent.name,
            agent.status.as_str(),
            agent.elapsed_display,
            confidence
        );
    }
    let average = view
        .average_confidence_pct
        .map(|c| format!("{}%", c))
        .unwrap_or_else(|| "-".to_string());
    let _ = writeln!(
        out,
        "Completed: {}/{}  Average confidence: {}  Total time: {}",
        view.completed_agents, view.agent_count, average, view.total_duration_display
    );
    out
}

/// Scenario catalog listing
pub fn catalog(catalog: &ScenarioCatalog, now: u64) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<14} {:<14} {:<11} STEP", "WORKFLOW", "CLAIM", "STATUS");
    for scenario in catalog.scenarios() {
        let status = scenario
            .instantiate(now)
            .map(|wf| wf.status().as_str())
            .unwrap_or("invalid");
        let _ = writeln!(
            out,
            "{:<14} {:<14} {:<11} {}/{}",
            scenario.workflow_id,
            scenario.claim_number,
            status,
            scenario.current_step,
            scenario.stages.len()
        );
    }
    out
}

/// Claims table
pub fn claims_table(claims: &[&Claim]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<14} {:<20} {:<11} {:>12} {:<12} {:>5}",
        "CLAIM", "MEMBER", "SERVICE", "AMOUNT", "STATUS", "CONF"
    );
    for claim in claims {
        let _ = writeln!(
            out,
            "{:<14} {:<20} {:<11} {:>12} {:<12} {:>4}%",
            claim.claim_number,
            claim.member_name,
            claim.date_of_service.format("%Y-%m-%d"),
            format_cents(claim.total_amount),
            claim.status.label(),
            (claim.confidence * 100.0).round() as u8
        );
    }
    if claims.is_empty() {
        let _ = writeln!(out, "(no claims match)");
    }
    out
}

pub fn claim_summary(summary: &ClaimSummary) -> String {
    format!(
        "Total: {}  Clear: {}  Review: {}  Opportunity: {}  Flagged exposure: {}\n",
        summary.total,
        summary.cleared,
        summary.low_confidence,
        summary.flagged,
        format_cents(summary.flagged_exposure)
    )
}

/// One review case, with reviewer fields when present
pub fn review_case(case: &ExceptionCase) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {} ({}) [{}] AI confidence {}%",
        case.id,
        case.claim_number,
        case.member_name,
        case.status.as_str(),
        case.confidence
    );
    let _ = writeln!(out, "  Flag: {} - {}", case.flag_type.label(), case.flagged_reason);
    let _ = writeln!(out, "  AI decision: {}", case.ai_decision);
    let _ = writeln!(out, "  Evidence: \"{}\" ({})", case.highlighted_text, case.document_source);
    if let Some(decision) = &case.reviewer_decision {
        let _ = writeln!(
            out,
            "  Reviewer: {} on {}: {}",
            case.reviewer.as_deref().unwrap_or("unknown"),
            case.date_reviewed
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
            decision
        );
    }
    if let Some(comments) = &case.reviewer_comments {
        let _ = writeln!(out, "  Comments: {}", comments);
    }
    out
}

/// Pending and reviewed sections plus the accuracy rate
pub fn review_queue(queue: &ReviewQueue) -> String {
    let mut out = String::new();
    let pending = queue.pending();
    let reviewed = queue.reviewed();

    let _ = writeln!(out, "Pending review ({})", pending.len());
    for case in pending {
        out.push_str(&review_case(case));
    }
    let _ = writeln!(out, "Reviewed ({})", reviewed.len());
    for case in reviewed {
        out.push_str(&review_case(case));
    }
    let accuracy = queue
        .accuracy_rate()
        .map(|r| format!("{:.0}%", r))
        .unwrap_or_else(|| "-".to_string());
    let _ = writeln!(out, "AI accuracy: {}", accuracy);
    out
}

/// Impact line items with their share bars
pub fn impact_breakdown(breakdown: &ImpactBreakdown) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total impact: {}", format_cents(breakdown.total()));
    for line in breakdown.lines() {
        let _ = writeln!(
            out,
            "  {:<20} {:>15} {} {:>5.1}%",
            line.item.category,
            format_cents(line.item.amount),
            progress_bar(line.share_pct / 100.0),
            line.share_pct
        );
        let _ = writeln!(out, "    {}", line.item.description);
    }
    out
}

/// Text with marked spans wrapped in `[[ ]]`
pub fn segments(parts: &[Segment<'_>]) -> String {
    parts
        .iter()
        .map(|s| {
            if s.is_marked() {
                format!("[[{}]]", s.text)
            } else {
                s.text.to_string()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(0), "$0.00");
        assert_eq!(format_cents(45_000), "$450.00");
        assert_eq!(format_cents(1_575_000), "$15,750.00");
        assert_eq!(format_cents(123_456_789), "$1,234,567.89");
        assert_eq!(format_cents(-250), "-$2.50");
    }

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(progress_bar(0.0), format!("[{}]", "-".repeat(BAR_WIDTH)));
        assert_eq!(progress_bar(1.0), format!("[{}]", "#".repeat(BAR_WIDTH)));
        assert_eq!(progress_bar(0.4).matches('#').count(), 8);
    }
}
