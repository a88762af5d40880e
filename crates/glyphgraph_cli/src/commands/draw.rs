//! `glyphgraph draw` and `glyphgraph preview`.

use anyhow::{Context as _, Result};
use chrono::{Local, NaiveDate, NaiveDateTime};
use glyphgraph_core::{
    AnchorPolicy, PatternGrid, compose, ensure_fits, resolve_anchor, schedule, to_dates,
};
use glyphgraph_git::{GitRepo, PaintPlan, Painter, branch_name};
use serde::Serialize;

use super::Context;
use crate::cli::PatternArgs;
use crate::output;
use crate::prompt;

#[derive(Debug, Default)]
pub struct DrawOptions {
    pub branch: Option<String>,
    pub commits_per_day: Option<u32>,
    pub preview_only: bool,
    pub assume_yes: bool,
}

/// Everything computed before any repository side effect.
#[derive(Debug)]
pub struct Drawing {
    pub word: String,
    pub anchor: NaiveDate,
    pub grid: PatternGrid,
    pub dates: Vec<NaiveDate>,
    pub timestamps: Vec<NaiveDateTime>,
    pub unsupported: Vec<char>,
}

#[derive(Serialize)]
struct PreviewData<'a> {
    word: &'a str,
    anchor: NaiveDate,
    height: usize,
    width: usize,
    rows: Vec<String>,
    dates: usize,
    commits: usize,
    first_date: Option<NaiveDate>,
    last_date: Option<NaiveDate>,
}

/// Resolve the anchor, compose the grid and schedule commits. Pure apart from reading `today`.
pub fn prepare(pattern: &PatternArgs, per_day: u32, today: NaiveDate) -> Result<Drawing> {
    let policy = if pattern.snap_to_sunday {
        AnchorPolicy::SnapToSunday
    } else {
        AnchorPolicy::Strict
    };
    let anchor = resolve_anchor(pattern.start_date.as_deref(), today, policy)?;

    let grid = compose(&pattern.word);
    ensure_fits(&grid, anchor)?;
    let dates = to_dates(&grid, anchor);
    let timestamps = schedule(&dates, per_day)?;

    Ok(Drawing {
        word: pattern.word.to_uppercase(),
        anchor,
        unsupported: glyphgraph_core::unsupported_chars(&pattern.word),
        grid,
        dates,
        timestamps,
    })
}

pub async fn handle(ctx: &Context, pattern: PatternArgs, options: DrawOptions) -> Result<()> {
    let per_day = options
        .commits_per_day
        .unwrap_or(ctx.settings.commits_per_day);
    let today = Local::now().date_naive();
    let drawing = prepare(&pattern, per_day, today)?;
    tracing::info!(
        word = %drawing.word,
        anchor = %drawing.anchor,
        width = drawing.grid.width(),
        commits = drawing.timestamps.len(),
        "pattern prepared"
    );

    output::header(&format!("Drawing word: '{}'", drawing.word));
    if !drawing.unsupported.is_empty() {
        let chars: String = drawing.unsupported.iter().collect();
        output::warning(&format!(
            "No glyph for {chars:?}; those characters render as blank columns."
        ));
    }
    show_preview(&drawing);

    if options.preview_only {
        output::dim(&format!(
            "Preview mode: would create {} commits",
            drawing.timestamps.len()
        ));
        return Ok(());
    }

    if drawing.timestamps.is_empty() {
        output::warning("Nothing to do: the pattern has no filled cells.");
        return Ok(());
    }

    let branch = options
        .branch
        .unwrap_or_else(|| branch_name(&ctx.settings.branch_prefix, &pattern.word));

    output::dim(&format!(
        "Will create {} commits on branch '{branch}' starting from {}",
        drawing.timestamps.len(),
        drawing.anchor
    ));
    if !options.assume_yes && !prompt::confirm("Continue?")? {
        output::warning("Cancelled.");
        return Ok(());
    }

    let repo = GitRepo::open(&ctx.repo)
        .await
        .with_context(|| format!("opening repository at {}", ctx.repo.display()))?
        .with_timeout(ctx.settings.git_timeout)
        .with_marker_file(ctx.settings.marker_file.clone());

    let plan = PaintPlan::new(&drawing.word, branch, drawing.timestamps);
    let bar = output::progress(plan.len(), "Committing");
    let report = Painter::new(&repo)
        .paint(&plan, |done, _| bar.set_position(done as u64))
        .await;
    let report = match report {
        Ok(report) => {
            output::progress_done(&bar);
            report
        }
        Err(e) => {
            output::progress_failed(&bar);
            return Err(e).with_context(|| {
                format!("drawing '{}' on branch '{}'", plan.word(), plan.branch())
            });
        }
    };

    output::data("painted", &report);
    output::success(&format!(
        "Created {} commits for '{}' on branch '{}'",
        report.commits,
        plan.word(),
        report.branch
    ));
    output::dim("Push the branch to see the pattern on the contribution graph.");
    Ok(())
}

fn show_preview(drawing: &Drawing) {
    let grid = &drawing.grid;
    if grid.is_empty() {
        output::dim("No pattern to display");
        return;
    }

    let rows = grid.render(output::FILLED, output::BLANK);
    output::data(
        "preview",
        &PreviewData {
            word: &drawing.word,
            anchor: drawing.anchor,
            height: grid.height(),
            width: grid.width(),
            rows: rows.clone(),
            dates: drawing.dates.len(),
            commits: drawing.timestamps.len(),
            first_date: drawing.dates.first().copied(),
            last_date: drawing.dates.last().copied(),
        },
    );

    if !output::is_json() {
        output::grid(&rows);
        output::kv(
            "Pattern size:",
            &format!("{} rows × {} columns", grid.height(), grid.width()),
        );
        output::kv("Start date:", &drawing.anchor.to_string());
        output::kv("Lit days:", &drawing.dates.len().to_string());
        output::kv("Commits:", &drawing.timestamps.len().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(word: &str, start: Option<&str>, snap: bool) -> PatternArgs {
        PatternArgs {
            word: word.to_string(),
            start_date: start.map(str::to_string),
            snap_to_sunday: snap,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn prepares_hi() {
        let d = prepare(&args("hi", Some("2024-01-07"), false), 1, today()).unwrap();
        assert_eq!(d.word, "HI");
        assert_eq!(d.grid.width(), 11);
        assert_eq!(d.dates.len(), 32);
        assert_eq!(d.timestamps.len(), 32);
        assert_eq!(d.dates[0], d.anchor);
    }

    #[test]
    fn multiplier_scales_timestamps() {
        let d = prepare(&args("hi", Some("2024-01-07"), false), 3, today()).unwrap();
        assert_eq!(d.timestamps.len(), 96);
    }

    #[test]
    fn invalid_date_aborts() {
        let err = prepare(&args("hi", Some("01/07/2024"), false), 1, today()).unwrap_err();
        assert!(err.to_string().contains("invalid input"));
    }

    #[test]
    fn weekday_anchor_needs_snap() {
        assert!(prepare(&args("hi", Some("2024-01-10"), false), 1, today()).is_err());
        let d = prepare(&args("hi", Some("2024-01-10"), true), 1, today()).unwrap();
        assert_eq!(d.anchor, NaiveDate::from_ymd_opt(2024, 1, 7).unwrap());
    }

    #[test]
    fn zero_multiplier_is_rejected() {
        assert!(prepare(&args("hi", None, false), 0, today()).is_err());
    }

    #[test]
    fn blank_words_produce_nothing() {
        let d = prepare(&args("", None, false), 1, today()).unwrap();
        assert!(d.grid.is_empty());
        assert!(d.timestamps.is_empty());

        let d = prepare(&args("  ", None, false), 1, today()).unwrap();
        assert_eq!(d.grid.height(), 7);
        assert!(d.timestamps.is_empty());
    }

    #[test]
    fn reports_unsupported_characters() {
        let d = prepare(&args("h1!", None, false), 1, today()).unwrap();
        assert_eq!(d.unsupported, vec!['1', '!']);
    }
}
