//! Terminal rendering of the engine reports.

use crate::models::report::{ImpactReport, LineupReport, PlayerReport};
use crate::models::{ImpactMetrics, LineupMetrics, ScoredPlayer};
use crate::utils::chart::bar_chart;
use crate::utils::colors::{self, CYAN, YELLOW, color_for_impact, color_for_optional, paint};
use crate::utils::formatting::{fmt_num, fmt_optional, fmt_salary};
use crate::utils::table::{Column, Table};

const CHART_WIDTH: usize = 40;

pub fn players_table(players: &[ScoredPlayer]) -> Table {
    let mut t = Table::new(vec![
        Column::left("PLAYER"),
        Column::right("DK_POINTS"),
        Column::right("Salary"),
        Column::right("VALUE"),
        Column::right("Q1"),
        Column::right("Q2"),
        Column::right("Q3"),
        Column::right("Q4"),
    ]);

    for p in players {
        let q = p.quarters();
        t.add_row(vec![
            p.name().to_string(),
            fmt_num(p.fantasy_points, 2),
            paint(&fmt_salary(p.salary.map(u64::from)), colors::RESET),
            paint(&fmt_optional(p.value, 2), color_for_optional(p.value)),
            fmt_num(q.q1, 0),
            fmt_num(q.q2, 0),
            fmt_num(q.q3, 0),
            fmt_num(q.q4, 0),
        ]);
    }
    t
}

pub fn print_player_report(report: &PlayerReport) {
    println!("📊 DFS Game Flow (Player Impact)\n");
    print!("{}", players_table(&report.players).render());

    println!("\n📈 Quarter-by-Quarter Game Flow\n");
    print!("{}", bar_chart(&report.flow.labelled(), CHART_WIDTH));
}

pub fn leverage_table(players: &[ScoredPlayer]) -> Table {
    let mut t = Table::new(vec![
        Column::left("PLAYER"),
        Column::right("Salary"),
        Column::right("DK_POINTS"),
        Column::right("VALUE"),
    ]);

    for p in players {
        t.add_row(vec![
            p.name().to_string(),
            fmt_salary(p.salary.map(u64::from)),
            fmt_num(p.fantasy_points, 2),
            paint(&fmt_optional(p.value, 2), YELLOW),
        ]);
    }
    t
}

fn lineup_row(m: &LineupMetrics, flagged: bool) -> Vec<String> {
    let id = if flagged {
        paint(&format!("{}*", m.lineup_id), YELLOW)
    } else {
        m.lineup_id.to_string()
    };

    vec![
        id,
        fmt_num(m.total_points, 2),
        fmt_salary(m.total_salary),
        fmt_optional(m.value, 2),
        fmt_num(m.early, 2),
        fmt_num(m.late, 2),
        m.minutes_remaining.to_string(),
        paint(&fmt_optional(m.swap_urgency, 3), color_for_optional(m.swap_urgency)),
        m.unresolved.to_string(),
    ]
}

pub fn lineups_table<'a>(
    lineups: impl IntoIterator<Item = &'a LineupMetrics>,
    report: &LineupReport,
) -> Table {
    let mut t = Table::new(vec![
        Column::left("Lineup #"),
        Column::right("DK Points"),
        Column::right("Salary"),
        Column::right("Value"),
        Column::right("Early DK (Q1+Q2)"),
        Column::right("Late DK (Q3+Q4)"),
        Column::right("Min Left"),
        Column::right("Swap Urgency"),
        Column::right("Unmatched"),
    ]);

    for m in lineups {
        t.add_row(lineup_row(m, report.is_flagged(m.lineup_id)));
    }
    t
}

pub fn print_lineup_report(report: &LineupReport) {
    println!("🧠 Lineup-Level Impact View\n");
    print!("{}", lineups_table(&report.lineups, report).render());

    if let Some(cutoff) = report.cutoff {
        println!(
            "\n{}",
            paint(&format!("75th percentile swap urgency: {}", fmt_num(cutoff, 3)), CYAN)
        );
    }
}

pub fn impact_table(lineups: &[ImpactMetrics], detail: ImpactDetail) -> Table {
    let mut columns = vec![Column::left("Lineup #"), Column::right("DK Points")];
    match detail {
        ImpactDetail::Full => {
            columns.push(Column::right("Salary"));
            columns.push(Column::right("Value"));
            columns.push(Column::right("Early DK (Q1+Q2)"));
            columns.push(Column::right("Late DK (Q3+Q4)"));
        }
        ImpactDetail::Late => columns.push(Column::right("Late DK (Q3+Q4)")),
        ImpactDetail::Early => columns.push(Column::right("Early DK (Q1+Q2)")),
    }
    columns.push(Column::right("Impact Score"));

    let mut t = Table::new(columns);
    for m in lineups {
        let mut row = vec![m.lineup_id.to_string(), fmt_num(m.total_points, 2)];
        match detail {
            ImpactDetail::Full => {
                row.push(fmt_salary(Some(m.total_salary)));
                row.push(fmt_optional(m.value, 2));
                row.push(fmt_num(m.early, 2));
                row.push(fmt_num(m.late, 2));
            }
            ImpactDetail::Late => row.push(fmt_num(m.late, 2)),
            ImpactDetail::Early => row.push(fmt_num(m.early, 2)),
        }
        row.push(paint(&fmt_num(m.impact_score, 3), color_for_impact(m.impact_score)));
        t.add_row(row);
    }
    t
}

/// Which quarter split an impact table shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactDetail {
    Full,
    Late,
    Early,
}

pub fn print_impact_report(report: &ImpactReport) {
    println!("🧠 Lineup-Level Impact View (synthetic lineups)\n");
    print!("{}", impact_table(&report.lineups, ImpactDetail::Full).render());

    println!("\n🔍 Impact Interpretation\n");
    println!("🔥 Late-Surge Lineups (Benefited from Game Flow)\n");
    print!("{}", impact_table(&report.late_surge, ImpactDetail::Late).render());

    println!("\n⚠ Fragile Lineups (Early Points Only)\n");
    print!("{}", impact_table(&report.fragile, ImpactDetail::Early).render());
}
