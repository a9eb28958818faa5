//! Terminal rendering of the current session state.
//!
//! Exercises the display contract: locale-grouped figures, a fixed
//! placeholder for absent values, and history bars scaled by the derived
//! proportions.

use controller::{DashboardController, Notice, Severity};
use metrics::{MetricsSnapshot, Sign, delta, format_amount, format_count, normalize_history};

const BAR_WIDTH: usize = 30;

pub fn print_notices(notices: &[Notice]) {
    for notice in notices {
        let tag = match notice.severity() {
            Severity::Info => "info",
            Severity::Warning => "warn",
            Severity::Error => "error",
        };
        println!("[{tag}] {notice}");
    }
}

pub fn print_states(controller: &DashboardController) {
    let states = controller.catalog().states();
    if states.is_empty() {
        println!("(no states loaded)");
        return;
    }
    for state in states {
        println!("  {:>4}  {} ({})", state.id, state.name_hi, state.name_en);
    }
}

pub fn print_districts(controller: &DashboardController) {
    let districts = controller.catalog().districts();
    if districts.is_empty() {
        println!("(no districts loaded — select a state first)");
        return;
    }
    for d in districts {
        println!("  {:>6}  {} ({})", d.code, d.name_hi, d.name_en);
    }
}

pub fn print_dashboard(controller: &DashboardController) {
    let selection = controller.selection();
    if controller.is_loading() {
        println!("loading data...");
        return;
    }
    let Some(snapshot) = controller.snapshot() else {
        println!(
            "no data yet (state: {}, district: {})",
            selection.state_id.as_deref().unwrap_or("-"),
            selection.district_name.as_deref().unwrap_or("-"),
        );
        return;
    };

    println!();
    println!(
        "== {} ==",
        selection.district_name.as_deref().unwrap_or("?")
    );
    print_month(snapshot);
    println!();
    println!("work (families) in last {} months:", snapshot.history.len());
    print_history(snapshot);
    println!();
}

fn print_month(snapshot: &MetricsSnapshot) {
    let cur = &snapshot.current_month;
    let prev = &snapshot.prev_month;

    println!(
        "  families provided work  {:>12}   {}",
        format_count(Some(cur.families_worked)),
        comparison(cur.families_worked as f64, prev.families_worked as f64, false),
    );
    println!(
        "  average daily wage      {:>12}   {}",
        format!("₹{}", format_amount(Some(cur.avg_wage))),
        comparison(cur.avg_wage, prev.avg_wage, true),
    );
    println!(
        "  total workdays          {:>12}   {}",
        format_count(Some(cur.total_days)),
        comparison(cur.total_days as f64, prev.total_days as f64, false),
    );
}

fn print_history(snapshot: &MetricsSnapshot) {
    for bar in normalize_history(&snapshot.history) {
        let filled = (bar.proportion * BAR_WIDTH as f64).round() as usize;
        println!(
            "  {:<8} {:<width$} {}",
            bar.month,
            "█".repeat(filled.min(BAR_WIDTH)),
            format_count(Some(bar.families)),
            width = BAR_WIDTH,
        );
    }
}

fn comparison(current: f64, previous: f64, amount: bool) -> String {
    let d = delta(current, previous);
    let magnitude = if amount {
        format_amount(Some(d.magnitude))
    } else {
        format_count(Some(d.magnitude as i64))
    };
    match d.sign {
        Sign::Positive => format!("▲ +{magnitude}"),
        Sign::Negative => format!("▼ -{magnitude}"),
        Sign::Zero => "no change".to_string(),
    }
}
