//! `seo-audit-api audit <url>` — audit one page from the terminal.

use crate::audit::analyzer::PageAnalyzer;
use crate::audit::report::AuditReport;
use crate::cli::output::{self, Styled};
use crate::config::ServiceConfig;
use anyhow::{Context, Result};

/// Run the audit command.
pub async fn run(config: &ServiceConfig, url: &str, json: bool) -> Result<()> {
    let analyzer = PageAnalyzer::new(config)?;
    let report = analyzer
        .analyze(url)
        .await
        .with_context(|| format!("auditing {url}"))?;

    if json {
        output::print_json(&serde_json::to_value(&report)?);
        return Ok(());
    }

    print_report(&Styled::new(), &report);
    Ok(())
}

fn print_report(s: &Styled, report: &AuditReport) {
    output::print_header(s);
    eprintln!("  {} {}", s.bold("URL"), report.url);
    eprintln!(
        "  {} {}/100 {}",
        s.bold("Score"),
        score_colored(s, report.score),
        s.dim(&format!("({} ms)", report.load_time_ms))
    );
    eprintln!();

    output::print_section(s, "Signals");
    let missing = s.red("missing");
    output::print_check(
        presence_sym(s, report.title.is_some()),
        "Title",
        report.title.as_deref().unwrap_or(&missing),
    );
    output::print_check(
        presence_sym(s, report.meta_description.is_some()),
        "Description",
        report.meta_description.as_deref().unwrap_or(&missing),
    );
    output::print_check(
        presence_sym(s, report.headings.h1.len() == 1),
        "Headings",
        &format!(
            "{} h1, {} h2, {} h3",
            report.headings.h1.len(),
            report.headings.h2.len(),
            report.headings.h3.len()
        ),
    );
    output::print_check(
        presence_sym(s, report.images_without_alt == 0),
        "Image alt text",
        &format!("{} missing", report.images_without_alt),
    );
    output::print_check(
        presence_sym(s, report.internal_links >= 3),
        "Links",
        &format!(
            "{} internal, {} external",
            report.internal_links, report.external_links
        ),
    );
    output::print_check(
        presence_sym(s, report.has_ssl),
        "HTTPS",
        if report.has_ssl { "yes" } else { "no" },
    );
    eprintln!();

    output::print_section(s, "Recommendations");
    for (i, rec) in report.recommendations.iter().enumerate() {
        eprintln!("    {}. {rec}", i + 1);
    }
}

fn presence_sym(s: &Styled, ok: bool) -> &str {
    if ok {
        s.ok_sym()
    } else {
        s.warn_sym()
    }
}

fn score_colored(s: &Styled, score: u8) -> String {
    let text = score.to_string();
    match score {
        80..=100 => s.green(&text),
        50..=79 => s.yellow(&text),
        _ => s.red(&text),
    }
}
