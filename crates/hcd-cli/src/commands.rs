use anyhow::{Context, Result, anyhow};
use tracing::{debug, info_span, warn};

use hcd_core::{detail, find_by_name, search, suggest};
use hcd_model::{ALL_LABEL, KeywordCase, Region, SearchState};

use crate::cli::{OutputFormatArg, SearchArgs, ShowArgs, SuggestArgs};
use crate::summary::{print_detail, print_regions, print_results, print_sources};
use hcd_cli::session::{OptionOverrides, Session};

pub fn run_search(session: &Session, args: &SearchArgs) -> Result<()> {
    let _span = info_span!("search").entered();
    let state = search_state(args);
    let outcome = search(&session.dataset, &state, &session.options);
    if outcome.page_index != state.page_index {
        debug!(
            requested = state.page_index,
            shown = outcome.page_index,
            "page clamped"
        );
    }
    match args.format {
        OutputFormatArg::Table => print_results(&outcome),
        OutputFormatArg::Json => {
            let json = serde_json::to_string_pretty(&outcome).context("serialize results")?;
            println!("{json}");
        }
    }
    Ok(())
}

pub fn run_regions(session: &Session) -> Result<()> {
    if session.dataset.is_empty() {
        warn!(data_dir = %session.data_dir.display(), "no records loaded");
    }
    print_regions(&session.dataset);
    Ok(())
}

pub fn run_show(session: &Session, args: &ShowArgs) -> Result<()> {
    let record = find_by_name(session.dataset.records(), &args.name)
        .ok_or_else(|| anyhow!("no institution matching {:?}", args.name))?;
    print_detail(&detail(record, &session.services));
    Ok(())
}

pub fn run_suggest(session: &Session, args: &SuggestArgs) -> Result<()> {
    for name in suggest(session.dataset.records(), &args.keyword, args.limit) {
        println!("{name}");
    }
    Ok(())
}

pub fn run_sources(session: &Session) -> Result<()> {
    if let Some(path) = &session.manifest {
        println!("Manifest: {}", path.display());
    }
    print_sources(&session.reports);
    Ok(())
}

/// Command-line search flags as option overrides.
pub fn search_overrides(args: &SearchArgs) -> OptionOverrides {
    OptionOverrides {
        page_size: args.page_size,
        keyword_case: args.ignore_case.then_some(KeywordCase::Insensitive),
        force_district_match: args.force_district.then_some(true),
    }
}

fn search_state(args: &SearchArgs) -> SearchState {
    let mut state = SearchState::new();
    if let Some(region) = &args.region {
        if region.trim() != ALL_LABEL && region.parse::<Region>().is_err() {
            warn!(region = %region, "region is not one of the known regions");
        }
        state = state.with_region(region.as_str());
    }
    if let Some(district) = &args.district {
        state = state.with_sub_region(district.as_str());
    }
    if let Some(keyword) = &args.keyword {
        state = state.with_keyword(keyword.as_str());
    }
    state.with_category(args.category).with_page(args.page)
}
