//! Pagination CLI commands.

use clap::Args;

use crate::output::{self, OutputFormat};
use stack_core::AppResult;
use stack_core::config::AppConfig;
use stack_core::types::pagination::{
    PageRequest, PageSlot, PageState, page_range_for_count, try_page_range_for_count,
};

/// Arguments for `page-range`
#[derive(Debug, Args)]
pub struct PageRangeArgs {
    /// Current page (1-based)
    #[arg(short, long)]
    pub current: u64,

    /// Total number of pages
    #[arg(short, long)]
    pub total: u64,

    /// Reject an out-of-range current page instead of clamping it
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for `page-state`
#[derive(Debug, Args)]
pub struct PageStateArgs {
    /// Current page (1-based)
    #[arg(short, long)]
    pub current: u64,

    /// Total number of items in the collection
    #[arg(short, long)]
    pub items: u64,

    /// Items per page (defaults to the configured page size)
    #[arg(short, long)]
    pub page_size: Option<u64>,
}

/// Execute `page-range`
pub fn execute_range(args: &PageRangeArgs, format: OutputFormat) -> anyhow::Result<()> {
    let (window, current) = range_window(args)?;

    match format {
        OutputFormat::Text => println!("{}", output::render_window(&window, current)),
        OutputFormat::Json => output::print_item(&window, format),
    }

    Ok(())
}

/// Computes the window and the page it is centred on after clamping.
fn range_window(args: &PageRangeArgs) -> AppResult<(Vec<PageSlot>, u64)> {
    if args.strict {
        let window = try_page_range_for_count(args.current, args.total)?;
        return Ok((window, args.current));
    }
    let current = args.current.clamp(1, args.total.max(1));
    Ok((page_range_for_count(current, args.total), current))
}

/// Execute `page-state`
pub fn execute_state(
    args: &PageStateArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let request = match args.page_size {
        Some(size) => PageRequest::new(args.current, size),
        None => PageRequest::from_config(args.current, &config.pagination),
    };
    let state = PageState::from_request(&request, args.items);

    match format {
        OutputFormat::Text => {
            println!("{}", output::render_window(&state.window, state.current_page));
            output::print_kv("Page", &format!("{} of {}", state.current_page, state.total_pages));
            output::print_kv("Page size", &request.page_size.to_string());
            output::print_kv("Previous", &optional_page(state.previous_page()));
            output::print_kv("Next", &optional_page(state.next_page()));
        }
        OutputFormat::Json => output::print_item(&state, format),
    }

    Ok(())
}

fn optional_page(page: Option<u64>) -> String {
    page.map_or_else(|| "-".to_string(), |p| p.to_string())
}
