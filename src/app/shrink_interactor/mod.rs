// Shrink interactor - Orchestrates the browse, plan, encode, verify use case

use std::io::{BufRead, Write};

use tracing::info;

use crate::browser::FileBrowser;
use crate::cli::terminal::Terminal;
use crate::engine::TwoPassEncoder;
use crate::error::ShrinkResult;
use crate::output::{verify_output, OutputReport};
use crate::planner::{PlanBuilder, PlannedEncode};
use crate::ports::{ExecutePort, ProbePort};
use crate::utils::Utils;

/// How a run ended when nothing failed
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Operator quit the browser or declined the plan
    Cancelled,
    Completed(OutputReport),
}

/// Interactor for the single encode job of one invocation
pub struct ShrinkInteractor<P, E> {
    browser: FileBrowser,
    planner: PlanBuilder<P>,
    encoder: TwoPassEncoder<E>,
}

impl<P: ProbePort, E: ExecutePort> ShrinkInteractor<P, E> {
    /// Create new shrink interactor with injected components
    pub fn new(browser: FileBrowser, planner: PlanBuilder<P>, encoder: TwoPassEncoder<E>) -> Self {
        Self {
            browser,
            planner,
            encoder,
        }
    }

    /// Run the whole job against `term`
    pub fn run<R: BufRead, W: Write>(&mut self, term: &mut Terminal<R, W>) -> ShrinkResult<RunOutcome> {
        let input = match self.browser.browse(term)? {
            Some(input) => input,
            None => {
                term.clear()?;
                writeln!(term.out(), "Cancelled.")?;
                return Ok(RunOutcome::Cancelled);
            }
        };

        let planned = self.planner.build(input, term)?;
        show_plan(term, &planned)?;

        if !term.confirm("Start encoding now? (y/N): ")? {
            info!("Operator declined the plan");
            writeln!(term.out(), "Cancelled.")?;
            term.pause()?;
            return Ok(RunOutcome::Cancelled);
        }

        let plan = &planned.plan;
        let encoded = self
            .encoder
            .encode_with_progress(plan, planned.video_kbps, |pass| {
                writeln!(term.out(), "\nPass {}/2…", pass.number())?;
                term.out().flush()
            })?;

        term.clear()?;
        let report = verify_output(&encoded.output, plan.target_mb())?;
        show_report(term, &report, &Utils::format_elapsed(encoded.elapsed))?;
        term.pause()?;

        info!(output = %report.path.display(), size_mb = report.size_mb, "Run completed");
        Ok(RunOutcome::Completed(report))
    }
}

fn show_plan<R: BufRead, W: Write>(term: &mut Terminal<R, W>, planned: &PlannedEncode) -> ShrinkResult<()> {
    let plan = &planned.plan;
    let scale = match plan.max_height() {
        Some(height) => format!("max height {}", height),
        None => "none".to_string(),
    };

    term.heading("Plan")?;
    let out = term.out();
    writeln!(out, "Input    : {}", plan.input())?;
    writeln!(out, "Output   : {}", plan.output())?;
    writeln!(out, "Duration : {:.2}s", plan.duration_seconds())?;
    writeln!(out, "Target   : {} MB", plan.target_mb())?;
    writeln!(out, "Audio    : {} kbps", plan.audio().kbps())?;
    writeln!(out, "Video    : {} kbps (computed)", planned.video_kbps)?;
    writeln!(out, "Scale    : {}\n", scale)?;
    Ok(())
}

fn show_report<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    report: &OutputReport,
    elapsed: &str,
) -> ShrinkResult<()> {
    term.heading("Done")?;
    let out = term.out();
    writeln!(out, "Output: {}", report.path.display())?;
    writeln!(
        out,
        "Size  : {} ({:.2} MB)",
        Utils::format_file_size(report.size_bytes),
        report.size_mb
    )?;
    writeln!(out, "Time  : {}", elapsed)?;

    if report.over_target {
        writeln!(out, "\nSlightly over target can happen.")?;
        writeln!(out, "Try one of:")?;
        for suggestion in report.suggestions() {
            writeln!(out, "  • {}", suggestion)?;
        }
    }
    Ok(())
}
